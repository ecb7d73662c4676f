//! Error types for ledger operations.

use party_core::{Address, U256};

/// All validation and execution errors for contract calls.
///
/// A returned error means the call reverted: no state was changed and
/// no event was appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// No account exists at the address.
    AccountNotFound {
        /// The missing account.
        address: Address,
    },
    /// No generator is deployed at the address.
    GeneratorNotFound {
        /// The missing generator.
        address: Address,
    },
    /// No party is deployed at the address.
    PartyNotFound {
        /// The missing party.
        address: Address,
    },
    /// The party's sale has been closed. Purchases and repeated close
    /// attempts both fail with this error.
    PartyInactive {
        /// The closed party.
        party: Address,
    },
    /// Only the party's owner may end the sale.
    NotOwner {
        /// The party whose sale was targeted.
        party: Address,
        /// The stored owner.
        owner: Address,
        /// The account that made the call.
        caller: Address,
    },
    /// The caller's native balance does not cover the sent value.
    InsufficientFunds {
        /// The paying account.
        account: Address,
        /// Balance available.
        available: U256,
        /// Value the call tried to send.
        requested: U256,
    },
    /// The pricing parameter must be positive.
    ZeroPricingParameter,
    /// Contract names and symbols must be non-empty.
    EmptyName,
    /// A derived contract address is already occupied.
    AddressCollision {
        /// The occupied address.
        address: Address,
    },
    /// Arithmetic overflow in token or currency calculation.
    ArithmeticOverflow,
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::AccountNotFound { address } => {
                write!(f, "account not found: {}", address)
            }
            LedgerError::GeneratorNotFound { address } => {
                write!(f, "generator not found: {}", address)
            }
            LedgerError::PartyNotFound { address } => {
                write!(f, "party not found: {}", address)
            }
            LedgerError::PartyInactive { party } => {
                write!(f, "party {} is no longer active", party)
            }
            LedgerError::NotOwner {
                party,
                owner,
                caller,
            } => {
                write!(
                    f,
                    "not the owner of party {}: expected {}, got {}",
                    party, owner, caller
                )
            }
            LedgerError::InsufficientFunds {
                account,
                available,
                requested,
            } => {
                write!(
                    f,
                    "insufficient funds in {}: available {}, requested {}",
                    account, available, requested
                )
            }
            LedgerError::ZeroPricingParameter => {
                write!(f, "pricing parameter must be positive")
            }
            LedgerError::EmptyName => write!(f, "name must be non-empty"),
            LedgerError::AddressCollision { address } => {
                write!(f, "address already occupied: {}", address)
            }
            LedgerError::ArithmeticOverflow => write!(f, "arithmetic overflow"),
        }
    }
}

impl std::error::Error for LedgerError {}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::PartyInactive {
            party: Address::from_bytes([0u8; 20]),
        };
        assert!(err.to_string().contains("no longer active"));

        let err = LedgerError::NotOwner {
            party: Address::from_bytes([1u8; 20]),
            owner: Address::from_bytes([2u8; 20]),
            caller: Address::from_bytes([3u8; 20]),
        };
        assert!(err.to_string().contains("not the owner"));
    }

    #[test]
    fn test_error_clone() {
        let err = LedgerError::ZeroPricingParameter;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
