//! Engine error taxonomy (§7): every variant here is fatal to the whole
//! exploration — there is no local recovery inside a step.

use symex_ast::AstError;
use symex_smt::env::UndefinedRead;
use symex_smt::SolverError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unsupported construct: {0}")]
    UnsupportedConstruct(String),
    #[error(transparent)]
    UndefinedRead(#[from] UndefinedRead),
    #[error(transparent)]
    MalformedInput(#[from] AstError),
    #[error(transparent)]
    Solver(#[from] SolverError),
}
