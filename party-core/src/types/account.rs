//! Ledger accounts.

use serde::{Deserialize, Serialize};

use crate::types::Address;
use crate::u256::U256;

/// An account holding native currency.
///
/// Both external actors and deployed contracts are accounts; a party
/// contract's held sale proceeds live in its account balance until the
/// owner closes the sale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The account's address.
    pub address: Address,

    /// Native currency held by the account.
    pub balance: U256,

    /// Number of contracts this account has deployed. Used to derive
    /// contract addresses deterministically.
    pub nonce: u64,
}

impl Account {
    /// Create an account with the given starting balance.
    pub fn new(address: Address, balance: U256) -> Self {
        Self {
            address,
            balance,
            nonce: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let address = Address::from_bytes([1u8; 20]);
        let account = Account::new(address, U256::from(500u64));

        assert_eq!(account.address, address);
        assert_eq!(account.balance, U256::from(500u64));
        assert_eq!(account.nonce, 0);
    }

    #[test]
    fn test_serialization() {
        let account = Account::new(Address::from_bytes([2u8; 20]), U256::from(42u64));
        let bytes = crate::serialization::serialize(&account).unwrap();
        let recovered: Account = crate::serialization::deserialize(&bytes).unwrap();
        assert_eq!(account, recovered);
    }
}
