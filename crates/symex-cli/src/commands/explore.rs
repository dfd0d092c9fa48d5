use symex_engine::{EngineConfig, Scheduler};
use symex_smt::Z3Bridge;

use super::load_function;
use crate::cli::{RunArgs, SourceArgs};
use crate::colors::Colors;
use crate::error::CliError;
use crate::present;

pub fn run(source: SourceArgs, run: RunArgs) -> Result<(), CliError> {
    let function = load_function(&source)?;
    let colors = Colors::new(run.color.should_colorize());
    let bridge = Z3Bridge::new();
    let config = EngineConfig {
        target_name: run.target.clone(),
        ..EngineConfig::default()
    };
    let mut scheduler = Scheduler::new(&function, &bridge, config);
    let result = scheduler.explore(run.budget)?;

    present::print_exploration_summary(&result, &colors);
    present::print_reaching_states(&result, &bridge, &colors);

    if run.verify {
        super::verify_reaching(&function, &result, &run.target, &colors);
    }
    Ok(())
}
