//! SSA-style renaming: a name's `k`-th assignment gets a fresh SMT integer
//! variable, so the accumulated path condition never needs rewriting when a
//! variable is reassigned.

use std::collections::HashMap;

use z3::ast::Int;

/// Per-state renaming environment. Counters start at 0 on first assignment;
/// the displayed variable name is the bare `name` at counter 0, else
/// `name_<k>`.
#[derive(Debug, Clone, Default)]
pub struct VersionedEnv {
    counters: HashMap<String, u32>,
    terms: HashMap<String, Vec<Int>>,
}

/// Reading a name that was never assigned.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("read of unassigned variable {0:?}")]
pub struct UndefinedRead(pub String);

impl VersionedEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the SMT variable name for `name` at version `k`.
    fn versioned_name(name: &str, k: u32) -> String {
        if k == 0 {
            name.to_string()
        } else {
            format!("{name}_{k}")
        }
    }

    /// Increments the counter for `name` (initializing it to 0 on first use),
    /// creates the matching fresh SMT integer, and returns it.
    pub fn assign(&mut self, name: &str) -> Int {
        let counter = self.counters.entry(name.to_string()).or_insert_with(|| 0);
        let k = if self.terms.contains_key(name) {
            *counter += 1;
            *counter
        } else {
            *counter
        };
        let term = Int::new_const(Self::versioned_name(name, k));
        self.terms
            .entry(name.to_string())
            .or_insert_with(Vec::new)
            .push(term.clone());
        term
    }

    /// Returns the most recently assigned term for `name`.
    pub fn current(&self, name: &str) -> Result<Int, UndefinedRead> {
        self.terms
            .get(name)
            .and_then(|seq| seq.last())
            .cloned()
            .ok_or_else(|| UndefinedRead(name.to_string()))
    }

    /// `true` once `name` has been assigned at least once.
    pub fn is_assigned(&self, name: &str) -> bool {
        self.terms.contains_key(name)
    }

    /// Names that have been assigned, for presentation/witness filtering.
    pub fn assigned_names(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_assignment_uses_bare_name() {
        let mut env = VersionedEnv::new();
        let t = env.assign("a");
        assert_eq!(t.to_string(), "a");
    }

    #[test]
    fn reassignment_appends_version_suffix() {
        let mut env = VersionedEnv::new();
        env.assign("a");
        let t1 = env.assign("a");
        let t2 = env.assign("a");
        assert_eq!(t1.to_string(), "a_1");
        assert_eq!(t2.to_string(), "a_2");
    }

    #[test]
    fn current_fails_before_first_assignment() {
        let env = VersionedEnv::new();
        assert!(env.current("a").is_err());
    }

    #[test]
    fn clone_does_not_alias() {
        let mut env = VersionedEnv::new();
        env.assign("a");
        let mut cloned = env.clone();
        cloned.assign("a");
        assert_eq!(env.current("a").unwrap().to_string(), "a");
        assert_eq!(cloned.current("a").unwrap().to_string(), "a_1");
    }
}
