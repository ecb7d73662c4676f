//! Execution environment for the Generator and Party contracts.
//!
//! This crate implements the contract state machine off-chain. Given a
//! current ledger state, a caller, and a call, it produces the next
//! state or an error. Every contract rule is enforced here, with no
//! networking or persistence; calls against a ledger instance are
//! applied one at a time, each as a single atomic transition.
//!
//! # Key components
//!
//! - [`LedgerState`]: In-memory state container backed by HashMaps
//! - [`LedgerReader`]/[`LedgerWriter`]: Traits abstracting state access
//! - [`apply_call`]: Main entry point for executing calls
//! - [`LedgerError`]: Error type for validation failures
//!
//! # Example
//!
//! ```
//! use party_core::{Call, Pricing, U256};
//! use party_ledger::{apply_call, CallOutcome, ExecutionContext, LedgerState};
//!
//! let mut state = LedgerState::new();
//! let owner = state.create_account_with_balance(U256::zero());
//! let call = Call::DeployParty {
//!     name: "Party".into(),
//!     symbol: "P".into(),
//!     pricing: Pricing::RatePerUnit(10),
//!     owner,
//! };
//! let outcome = apply_call(&mut state, &ExecutionContext::new(0), &owner, &call).unwrap();
//! assert!(matches!(outcome, CallOutcome::PartyDeployed(_)));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod execute;
mod state;

pub use config::LedgerConfig;
pub use error::{LedgerError, LedgerResult};
pub use execute::{apply_call, CallOutcome, ExecutionContext};
pub use state::{LedgerReader, LedgerState, LedgerStore, LedgerWriter};
