mod explore;
mod find_target;
mod list_demos;

pub use explore::run as run_explore;
pub use find_target::run as run_find_target;
pub use list_demos::run as run_list_demos;

use symex_ast::{Function, RawFunction};
use symex_engine::{verify, ExplorationResult};

use crate::cli::SourceArgs;
use crate::colors::Colors;
use crate::error::CliError;

fn load_function(source: &SourceArgs) -> Result<Function, CliError> {
    match (&source.demo, &source.input) {
        (Some(name), None) => crate::demos::by_name(name).ok_or_else(|| CliError::UnknownDemo(name.clone())),
        (None, Some(path)) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            let raw: RawFunction = serde_json::from_str(&text).map_err(|source| CliError::Json {
                path: path.clone(),
                source,
            })?;
            Ok(Function::try_from(raw)?)
        }
        _ => Err(CliError::NoSource),
    }
}

/// Re-runs each reaching state's witness concretely and reports whether it
/// actually drives execution to the sentinel call.
pub(crate) fn verify_reaching(
    function: &Function,
    result: &ExplorationResult,
    target_name: &str,
    colors: &Colors,
) {
    let bridge = symex_smt::Z3Bridge::new();
    for (i, state) in result.reaching.iter().enumerate() {
        let witness = match state.witness(&bridge) {
            Ok(Some(w)) => w,
            Ok(None) => {
                println!("{}[{i}] no witness (unsatisfiable){}", colors.red, colors.reset);
                continue;
            }
            Err(e) => {
                println!("{}[{i}] solver error: {e}{}", colors.red, colors.reset);
                continue;
            }
        };
        let inputs: Vec<i64> = function
            .params
            .iter()
            .map(|p| *witness.get(p).unwrap_or(&0))
            .collect();
        match verify::run_concrete(function, &inputs, target_name) {
            Ok(run) if run.hit_target => {
                println!("{}[{i}] verified: inputs {:?} hit the target{}", colors.green, inputs, colors.reset);
            }
            Ok(_) => {
                println!("{}[{i}] UNSOUND: inputs {:?} did not hit the target{}", colors.red, inputs, colors.reset);
            }
            Err(e) => {
                println!("{}[{i}] concrete re-execution failed: {e}{}", colors.red, colors.reset);
            }
        }
    }
}
