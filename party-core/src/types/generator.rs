//! Generator contract records.

use serde::{Deserialize, Serialize};

use crate::types::Address;

/// A deployed party factory.
///
/// A generator is create-once and immutable apart from its deployment
/// counter; each `CreateParty` call produces a new, independent party
/// whose address is derived from the generator's address and the
/// counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generator {
    /// The generator's contract address.
    pub address: Address,

    /// Human-readable name, set at construction.
    pub name: String,

    /// The account that deployed the generator.
    pub owner: Address,

    /// Number of parties created through this generator.
    pub parties_created: u64,
}

impl Generator {
    /// Create a new generator record.
    pub fn new(address: Address, name: String, owner: Address) -> Self {
        Self {
            address,
            name,
            owner,
            parties_created: 0,
        }
    }
}
