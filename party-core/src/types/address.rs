//! Account and contract addresses.
//!
//! An address is 20 bytes. Account addresses are minted from OS
//! randomness; contract addresses are derived deterministically from
//! the deployer's address and a per-deployer nonce, so redeploying the
//! same sequence of contracts yields the same addresses.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::AddressError;

/// A 20-byte account or contract address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// Create an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// Get the raw bytes of the address.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Mint a fresh address from OS randomness.
    pub fn random() -> Self {
        let mut bytes = [0u8; 20];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Address(bytes)
    }

    /// Derive a contract address from the deployer and its nonce.
    ///
    /// The address is the first 20 bytes of
    /// SHA-256(deployer_bytes || nonce_le).
    pub fn contract_address(deployer: &Address, nonce: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(deployer.as_bytes());
        hasher.update(nonce.to_le_bytes());
        let hash: [u8; 32] = hasher.finalize().into();

        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash[..20]);
        Address(bytes)
    }

    /// Parse an address from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|_| AddressError::InvalidHex)?;
        if bytes.len() != 20 {
            return Err(AddressError::InvalidLength { len: bytes.len() });
        }
        let mut array = [0u8; 20];
        array.copy_from_slice(&bytes);
        Ok(Address(array))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_hex(s)
    }
}
