//! Work-list scheduler over symbolic states (§4.5): drives the frontier
//! round by round, classifying each successor into the unreachable,
//! terminated, or reaching pool, or leaving it on the frontier.

use symex_ast::Function;
use symex_smt::{Feasibility, SmtBridge, VersionedEnv};

use crate::config::{EngineConfig, UnknownPolicy};
use crate::error::EngineError;
use crate::state::SymState;
use crate::stepper::step;

/// The four classified pools plus whether the step budget ran out before the
/// frontier emptied.
#[derive(Debug, Default)]
pub struct ExplorationResult {
    pub terminated: Vec<SymState>,
    pub unreachable: Vec<SymState>,
    pub reaching: Vec<SymState>,
    pub budget_exhausted: bool,
}

pub struct Scheduler<'a> {
    bridge: &'a dyn SmtBridge,
    config: EngineConfig,
    frontier: Vec<SymState>,
    unreachable: Vec<SymState>,
    terminated: Vec<SymState>,
    reaching: Vec<SymState>,
}

impl<'a> Scheduler<'a> {
    pub fn new(function: &Function, bridge: &'a dyn SmtBridge, config: EngineConfig) -> Self {
        let mut env = VersionedEnv::new();
        for param in &function.params {
            env.assign(param);
        }
        let initial = SymState::new(function.reversed_body(), env);
        Self {
            bridge,
            config,
            frontier: vec![initial],
            unreachable: Vec::new(),
            terminated: Vec::new(),
            reaching: Vec::new(),
        }
    }

    fn is_feasible(&self, state: &SymState) -> Result<bool, EngineError> {
        match state.feasibility(self.bridge)? {
            Feasibility::Sat => Ok(true),
            Feasibility::Unsat => Ok(false),
            Feasibility::Unknown => Ok(self.config.on_solver_unknown == UnknownPolicy::Keep),
        }
    }

    /// One round: step every in-progress, feasible, non-terminated state and
    /// re-partition the results.
    fn run_round(&mut self) -> Result<(), EngineError> {
        let current = std::mem::take(&mut self.frontier);
        let mut next_frontier = Vec::new();

        for state in current {
            if state.is_terminated() || !self.is_feasible(&state)? {
                continue;
            }
            let outcome = step(state, &self.config)?;
            for successor in outcome.successors {
                if outcome.reached_target {
                    self.reaching.push(successor.clone());
                }
                if !self.is_feasible(&successor)? {
                    self.unreachable.push(successor);
                } else if successor.is_terminated() {
                    self.terminated.push(successor);
                } else {
                    next_frontier.push(successor);
                }
            }
        }

        self.frontier = next_frontier;
        Ok(())
    }

    /// Run up to `budget` rounds or until the frontier empties, whichever
    /// comes first.
    pub fn explore(&mut self, budget: u32) -> Result<ExplorationResult, EngineError> {
        let mut rounds_run = 0;
        while rounds_run < budget && !self.frontier.is_empty() {
            self.run_round()?;
            rounds_run += 1;
        }
        Ok(ExplorationResult {
            terminated: std::mem::take(&mut self.terminated),
            unreachable: std::mem::take(&mut self.unreachable),
            reaching: std::mem::take(&mut self.reaching),
            budget_exhausted: rounds_run == budget && !self.frontier.is_empty(),
        })
    }

    /// Resets the reaching pool on entry so repeated calls each report only
    /// what they themselves found, then runs rounds until either the
    /// reaching pool is non-empty or the budget/frontier is exhausted.
    pub fn find_path_to_target(&mut self, budget: u32) -> Result<ExplorationResult, EngineError> {
        self.reaching.clear();
        let mut rounds_run = 0;
        while rounds_run < budget && !self.frontier.is_empty() && self.reaching.is_empty() {
            self.run_round()?;
            rounds_run += 1;
        }
        Ok(ExplorationResult {
            terminated: std::mem::take(&mut self.terminated),
            unreachable: std::mem::take(&mut self.unreachable),
            reaching: std::mem::take(&mut self.reaching),
            budget_exhausted: rounds_run == budget && self.reaching.is_empty() && !self.frontier.is_empty(),
        })
    }
}
