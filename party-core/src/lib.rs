//! # Party Core
//!
//! Core types for the party ledger:
//! - 20-byte account and contract addresses with deterministic derivation
//! - 256-bit arithmetic with 128.128 fixed-point token amounts
//! - The pricing model (rate-per-unit or unit-cost conversion)
//! - Generator and Party records
//! - The event vocabulary emitted by contract operations
//! - The call vocabulary dispatched by the ledger executor
//! - Deterministic binary serialization

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod call;
pub mod error;
pub mod serialization;
pub mod types;
pub mod u256;

// Re-export commonly used types at crate root
pub use call::Call;
pub use error::{AddressError, CoreError, SerializationError};
pub use types::{Account, Address, Generator, Party, PartyEvent, Pricing, TokenAmount};
pub use u256::U256;
