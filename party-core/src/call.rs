//! Calls dispatched by the ledger executor.

use serde::{Deserialize, Serialize};

use crate::types::{Address, Pricing};
use crate::u256::U256;

/// A contract call or deployment.
///
/// Every call is attributed to a caller address by the executor and is
/// applied as a single atomic state transition: it either fully
/// commits (state changes plus event emission) or fully reverts with
/// no observable effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Call {
    /// Deploy a new generator owned by the caller.
    DeployGenerator {
        /// Name of the generator.
        name: String,
    },

    /// Create a new party through an existing generator. The caller
    /// becomes the party's owner; the generator becomes its
    /// `generator` reference.
    CreateParty {
        /// Address of the generator to create through.
        generator: Address,
        /// Name of the new party.
        name: String,
        /// Symbol of the new party.
        symbol: String,
        /// Pricing for the new party's sale.
        pricing: Pricing,
    },

    /// Deploy a party directly, without a generator. The caller
    /// becomes the party's `generator` reference.
    DeployParty {
        /// Name of the party.
        name: String,
        /// Symbol of the party.
        symbol: String,
        /// Pricing for the sale.
        pricing: Pricing,
        /// Beneficiary and sole closing authority.
        owner: Address,
    },

    /// Buy tokens from an active party, sending `value` native
    /// currency. A zero value is valid and credits zero tokens.
    BuyTokens {
        /// The party to buy from.
        party: Address,
        /// Native currency sent with the call.
        value: U256,
    },

    /// Close the sale. Owner only; pays the party's entire held
    /// balance out to the owner.
    EndParty {
        /// The party to close.
        party: Address,
    },
}
