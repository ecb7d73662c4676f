//! Call execution module.
//!
//! Contains the call executor and the per-contract validation and
//! execution logic.

mod context;
mod executor;
mod generator;
mod party;

pub use context::ExecutionContext;
pub use executor::{apply_call, CallOutcome};

// Re-export call handlers for testing within the crate.
#[allow(unused_imports)]
pub(crate) use generator::{execute_create_party, execute_deploy_generator};
#[allow(unused_imports)]
pub(crate) use party::{execute_buy_tokens, execute_deploy_party, execute_end_party};
