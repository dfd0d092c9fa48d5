//! Forward symbolic execution engine: steps an AST function through a
//! work-list of symbolic states, classifying each into in-progress,
//! unreachable, terminated, and target-reaching pools.

pub mod config;
pub mod error;
pub mod scheduler;
pub mod state;
pub mod stepper;
pub mod translate;
pub mod verify;

pub use config::{EngineConfig, UnknownPolicy};
pub use error::EngineError;
pub use scheduler::{ExplorationResult, Scheduler};
pub use state::SymState;
