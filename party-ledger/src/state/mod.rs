//! State container and storage traits.
//!
//! This module provides:
//! - [`LedgerReader`]: Read access to ledger state
//! - [`LedgerWriter`]: Mutable access to ledger state
//! - [`LedgerStore`]: Combined trait for full access
//! - [`LedgerState`]: In-memory HashMap-backed implementation

mod ledger_state;
mod store;

pub use ledger_state::LedgerState;
pub use store::{LedgerReader, LedgerStore, LedgerWriter};
