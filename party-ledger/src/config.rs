//! Ledger configuration.

use serde::{Deserialize, Serialize};

use party_core::U256;

/// Configuration for a ledger instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Native currency balance credited to accounts minted with
    /// `create_account`. The off-chain analogue of funding test
    /// accounts from a coinbase.
    pub initial_account_balance: U256,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            initial_account_balance: U256::zero(),
        }
    }
}
