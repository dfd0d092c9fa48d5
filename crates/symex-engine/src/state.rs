//! A symbolic state: a continuation stack, its accumulated path trace and
//! condition, and the versioned environment that produced them.

use std::collections::HashMap;
use std::rc::Rc;

use symex_ast::AstNode;
use symex_smt::{Feasibility, SmtBridge, SolverError, VersionedEnv};
use z3::ast::Bool;

/// One in-flight (or just-classified) symbolic state. States are produced by
/// the stepper and never mutated in place; a transition always yields a new
/// `SymState`.
#[derive(Debug, Clone)]
pub struct SymState {
    pub stack: Vec<Rc<AstNode>>,
    pub trace: Vec<String>,
    pub condition: Vec<Bool>,
    pub env: VersionedEnv,
}

impl SymState {
    pub fn new(stack: Vec<Rc<AstNode>>, env: VersionedEnv) -> Self {
        Self {
            stack,
            trace: Vec::new(),
            condition: Vec::new(),
            env,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn feasibility(&self, bridge: &dyn SmtBridge) -> Result<Feasibility, SolverError> {
        bridge.check(&self.condition)
    }

    /// An SMT model restricted to names whose displayed form carries no
    /// underscore — i.e. the original formal parameters, which sit at
    /// version 0. `None` when the path condition is unsatisfiable.
    pub fn witness(&self, bridge: &dyn SmtBridge) -> Result<Option<HashMap<String, i64>>, SolverError> {
        let Some(model) = bridge.model(&self.condition)? else {
            return Ok(None);
        };
        Ok(Some(
            model
                .into_iter()
                .filter(|(name, _)| !name.contains('_'))
                .collect(),
        ))
    }

    pub fn push_condition(&mut self, term: Bool) {
        self.condition.push(term);
    }

    pub fn push_trace(&mut self, line: u32, message: impl Into<String>) {
        self.trace.push(format!("line {line}: {}", message.into()));
    }

    pub fn print_stack(&self) -> String {
        if self.stack.is_empty() {
            return "<empty>".to_string();
        }
        self.stack
            .iter()
            .rev()
            .map(|n| format!("{n:?}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn print_steps(&self) -> String {
        self.trace.join("\n")
    }

    pub fn print_state(&self) -> String {
        format!(
            "terminated: {}\nsteps:\n{}\ncondition: {} term(s)",
            self.is_terminated(),
            self.print_steps(),
            self.condition.len()
        )
    }

    pub fn print_witness(&self, bridge: &dyn SmtBridge) -> String {
        match self.witness(bridge) {
            Ok(Some(witness)) => {
                let mut pairs: Vec<_> = witness.into_iter().collect();
                pairs.sort_by(|a, b| a.0.cmp(&b.0));
                pairs
                    .into_iter()
                    .map(|(k, v)| format!("{k} = {v}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            }
            Ok(None) => "<unsatisfiable>".to_string(),
            Err(e) => format!("<solver error: {e}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symex_smt::Z3Bridge;
    use z3::ast::Ast;

    #[test]
    fn fresh_state_is_terminated_when_stack_empty() {
        let state = SymState::new(Vec::new(), VersionedEnv::new());
        assert!(state.is_terminated());
    }

    #[test]
    fn feasibility_of_empty_condition_is_sat() {
        let state = SymState::new(Vec::new(), VersionedEnv::new());
        let bridge = Z3Bridge::new();
        assert_eq!(state.feasibility(&bridge).unwrap(), Feasibility::Sat);
    }

    #[test]
    fn witness_filters_out_versioned_names() {
        let mut env = VersionedEnv::new();
        let a = env.assign("a");
        env.assign("a");
        let mut state = SymState::new(Vec::new(), env);
        state.push_condition(a._eq(&z3::ast::Int::from_i64(3)));
        let bridge = Z3Bridge::new();
        let witness = state.witness(&bridge).unwrap().unwrap();
        assert_eq!(witness.get("a"), Some(&3));
        assert!(!witness.contains_key("a_1"));
    }
}
