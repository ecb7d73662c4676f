//! Events appended to contract logs.

use serde::{Deserialize, Serialize};

use crate::types::{Address, TokenAmount};

/// An event emitted by a contract operation.
///
/// Events are appended to a per-contract log in call order and are
/// never removed or rewritten. Observers query them by contract and by
/// event name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyEvent {
    /// A generator created a new party.
    PartyStarted {
        /// Name of the created party.
        name: String,
        /// Symbol of the created party.
        symbol: String,
    },

    /// An account bought tokens from an active party.
    TokensPurchased {
        /// The purchasing account.
        buyer: Address,
        /// Tokens credited, possibly fractional.
        amount: TokenAmount,
    },

    /// The owner closed the sale.
    PartyFinished,
}

impl PartyEvent {
    /// The event-kind name, used for log queries.
    pub fn name(&self) -> &'static str {
        match self {
            PartyEvent::PartyStarted { .. } => "PartyStarted",
            PartyEvent::TokensPurchased { .. } => "TokensPurchased",
            PartyEvent::PartyFinished => "PartyFinished",
        }
    }
}
