//! Error types for the party-core crate.

use std::fmt;

/// Top-level error type for party-core operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Address parsing or derivation failed.
    Address(AddressError),
    /// Serialization or deserialization failed.
    Serialization(SerializationError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Address(e) => write!(f, "address error: {}", e),
            CoreError::Serialization(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<AddressError> for CoreError {
    fn from(e: AddressError) -> Self {
        CoreError::Address(e)
    }
}

impl From<SerializationError> for CoreError {
    fn from(e: SerializationError) -> Self {
        CoreError::Serialization(e)
    }
}

/// Errors related to address parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddressError {
    /// Hex string does not decode to exactly 20 bytes.
    InvalidLength {
        /// Decoded byte length.
        len: usize,
    },
    /// Input contains characters that are not hex digits.
    InvalidHex,
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidLength { len } => {
                write!(f, "address must be 20 bytes, got {}", len)
            }
            AddressError::InvalidHex => write!(f, "address contains invalid hex"),
        }
    }
}

impl std::error::Error for AddressError {}

/// Errors related to serialization and deserialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to encode data to bytes.
    EncodeFailed(String),
    /// Failed to decode data from bytes.
    DecodeFailed(String),
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationError::EncodeFailed(msg) => write!(f, "encode failed: {}", msg),
            SerializationError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
        }
    }
}

impl std::error::Error for SerializationError {}
