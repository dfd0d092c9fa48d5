//! Presentation layer: formats exploration results for the terminal. Not
//! part of the engine core — consumes its public data only.

use symex_engine::ExplorationResult;
use symex_smt::SmtBridge;

use crate::colors::Colors;

pub fn print_exploration_summary(result: &ExplorationResult, colors: &Colors) {
    println!(
        "{}reaching{}: {}  {}terminated{}: {}  {}unreachable{}: {}",
        colors.green,
        colors.reset,
        result.reaching.len(),
        colors.blue,
        colors.reset,
        result.terminated.len(),
        colors.dim,
        colors.reset,
        result.unreachable.len(),
    );
    if result.budget_exhausted {
        println!("{}budget exhausted before the frontier emptied{}", colors.red, colors.reset);
    }
}

pub fn print_reaching_states(result: &ExplorationResult, bridge: &dyn SmtBridge, colors: &Colors) {
    for (i, state) in result.reaching.iter().enumerate() {
        println!("{}== reaching state [{i}] =={}", colors.blue, colors.reset);
        println!("{}", state.print_state());
        println!("{}witness{}: {}", colors.green, colors.reset, state.print_witness(bridge));
    }
}
