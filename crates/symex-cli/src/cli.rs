use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

#[derive(Parser)]
#[command(name = "symex", bin_name = "symex")]
#[command(about = "Forward symbolic execution engine for a small imperative language")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Explore every feasible path up to a step budget
    Explore {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        run: RunArgs,
    },
    /// Search for a path reaching the sentinel target call
    FindTarget {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        run: RunArgs,
    },
    /// List built-in demo functions
    ListDemos,
}

#[derive(Args)]
#[group(id = "source_input", required = true, multiple = false)]
pub struct SourceArgs {
    /// Name of a built-in demo function (see `symex list-demos`)
    #[arg(long)]
    pub demo: Option<String>,

    /// Path to a JSON-encoded function description
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Args)]
pub struct RunArgs {
    /// Maximum number of scheduler rounds
    #[arg(long, default_value_t = 50)]
    pub budget: u32,

    /// Sentinel call name marking the goal location
    #[arg(long, default_value = "target")]
    pub target: String,

    /// Colorize output
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorChoice,

    /// Re-run each reaching witness concretely and report whether it actually hits the target
    #[arg(long)]
    pub verify: bool,
}
