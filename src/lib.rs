pub use crate::errors::HarnessError;
pub use crate::harness::{Orchestrator, Outcome, Selection, Summary};

pub mod cli;
pub mod errors;
pub mod harness;
pub mod registry;
pub mod status;
