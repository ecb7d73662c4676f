//! Party contract records.

use serde::{Deserialize, Serialize};

use crate::types::{Address, Pricing};

/// A deployed token-sale party.
///
/// All fields except `active` are immutable after construction.
/// `active` starts true and is set false exactly once when the owner
/// ends the sale; the transition is terminal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// The party's contract address.
    pub address: Address,

    /// Human-readable name.
    pub name: String,

    /// Short symbol identifier.
    pub symbol: String,

    /// How contributed currency converts to tokens.
    pub pricing: Pricing,

    /// Beneficiary of the sale proceeds and sole authority to end it.
    pub owner: Address,

    /// The deploying account: the generator's contract address when
    /// created through a factory, otherwise the direct deployer.
    pub generator: Address,

    /// Whether the sale is open. Terminal once false.
    pub active: bool,
}

impl Party {
    /// Create a new party record. The sale starts active.
    pub fn new(
        address: Address,
        name: String,
        symbol: String,
        pricing: Pricing,
        owner: Address,
        generator: Address,
    ) -> Self {
        Self {
            address,
            name,
            symbol,
            pricing,
            owner,
            generator,
            active: true,
        }
    }
}
