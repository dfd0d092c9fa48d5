//! SMT Bridge and versioned environment over the integer theory.
//!
//! A fresh [`z3::Solver`] is created per feasibility query (§5 of the design:
//! no incremental solving, no shared solver state between symbolic states).

use std::collections::HashMap;

use z3::ast::Bool;
use z3::SatResult;

pub mod env;

pub use env::VersionedEnv;

/// Errors the SMT backend can surface. Distinct from an `UNKNOWN` verdict,
/// which is a normal [`Feasibility`] outcome, not an error.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("solver query timed out")]
    Timeout,
    #[error("solver backend error: {0}")]
    Backend(String),
}

/// Result of a feasibility check. `Unknown` is not an error: callers decide
/// how to treat it (see `EngineConfig::on_solver_unknown` in `symex-engine`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feasibility {
    Sat,
    Unsat,
    Unknown,
}

/// Adapter over an SMT backend, parameterized so the engine core never names
/// `z3` directly outside this crate.
pub trait SmtBridge {
    fn check(&self, constraints: &[Bool]) -> Result<Feasibility, SolverError>;
    fn model(&self, constraints: &[Bool]) -> Result<Option<HashMap<String, i64>>, SolverError>;
}

/// Timeout, in milliseconds, applied to each solver instance. `None` disables
/// the timeout (the backend's default, effectively unbounded).
#[derive(Debug, Clone, Copy, Default)]
pub struct Z3Bridge {
    pub timeout_ms: Option<u32>,
}

impl Z3Bridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout_ms(timeout_ms: u32) -> Self {
        Self {
            timeout_ms: Some(timeout_ms),
        }
    }

    fn solver_for(&self, constraints: &[Bool]) -> z3::Solver {
        let solver = z3::Solver::new();
        if let Some(ms) = self.timeout_ms {
            let mut params = z3::Params::new();
            params.set_u32("timeout", ms);
            solver.set_params(&params);
        }
        for c in constraints {
            solver.assert(c);
        }
        solver
    }

    /// `Unknown` with a timed-out reason is only possible when a timeout was
    /// actually configured; in that case it is surfaced as a hard error
    /// rather than left for `EngineConfig::on_solver_unknown` to decide.
    fn classify_unknown(&self, solver: &z3::Solver) -> Result<Feasibility, SolverError> {
        if self.timeout_ms.is_some() && solver.get_reason_unknown().as_deref() == Some("timeout") {
            Err(SolverError::Timeout)
        } else {
            Ok(Feasibility::Unknown)
        }
    }
}

impl SmtBridge for Z3Bridge {
    fn check(&self, constraints: &[Bool]) -> Result<Feasibility, SolverError> {
        let solver = self.solver_for(constraints);
        match solver.check() {
            SatResult::Sat => Ok(Feasibility::Sat),
            SatResult::Unsat => Ok(Feasibility::Unsat),
            SatResult::Unknown => self.classify_unknown(&solver),
        }
    }

    fn model(&self, constraints: &[Bool]) -> Result<Option<HashMap<String, i64>>, SolverError> {
        let solver = self.solver_for(constraints);
        match solver.check() {
            SatResult::Unsat => return Ok(None),
            SatResult::Unknown => {
                return self.classify_unknown(&solver).map(|_| None);
            }
            SatResult::Sat => {}
        }
        let model = solver
            .get_model()
            .ok_or_else(|| SolverError::Backend("solver reported sat but produced no model".into()))?;
        let mut out = HashMap::new();
        for decl in model.iter() {
            let name = decl.name();
            let applied = decl.apply(&[]);
            let value = model
                .eval(&applied, true)
                .and_then(|v| v.as_int())
                .and_then(|v| v.as_i64())
                .ok_or_else(|| SolverError::Backend(format!("model value for {name} is not a coercible integer")))?;
            out.insert(name, value);
        }
        Ok(Some(out))
    }
}
