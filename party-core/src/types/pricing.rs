//! Token pricing model.
//!
//! A party's pricing parameter either multiplies or divides the
//! contributed amount. The direction is an explicit choice fixed at
//! party construction rather than an implicit convention.

use serde::{Deserialize, Serialize};

use crate::types::TokenAmount;
use crate::u256::{U256, FIXED_POINT_FRACTIONAL_BITS};

/// How contributed native currency converts into tokens.
///
/// Immutable once a party is constructed. The parameter must be
/// positive in either mode; zero is rejected at deploy time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pricing {
    /// Tokens credited = amount sent × rate.
    RatePerUnit(u64),
    /// Tokens credited = amount sent ÷ cost. The quotient is kept
    /// exact in fixed point, so uneven amounts credit fractional
    /// tokens instead of truncating.
    UnitCost(u64),
}

impl Pricing {
    /// The raw pricing parameter.
    #[inline]
    pub fn parameter(&self) -> u64 {
        match self {
            Pricing::RatePerUnit(rate) => *rate,
            Pricing::UnitCost(cost) => *cost,
        }
    }

    /// True if the pricing parameter is positive.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.parameter() > 0
    }

    /// Compute the tokens credited for a contributed amount.
    ///
    /// Returns None on arithmetic overflow (the result must fit in the
    /// 128 integer bits of the fixed-point format) or if the pricing
    /// parameter is zero.
    pub fn tokens_for(&self, value: U256) -> Option<TokenAmount> {
        match self {
            Pricing::RatePerUnit(rate) => {
                if *rate == 0 {
                    return None;
                }
                let product = value.checked_mul(U256::from(*rate))?;
                if product.bits() > 128 {
                    return None;
                }
                Some(TokenAmount::from_fixed(
                    product << FIXED_POINT_FRACTIONAL_BITS,
                ))
            }
            Pricing::UnitCost(cost) => {
                if *cost == 0 {
                    return None;
                }
                if value.bits() > 128 {
                    return None;
                }
                let shifted = value << FIXED_POINT_FRACTIONAL_BITS;
                Some(TokenAmount::from_fixed(shifted / U256::from(*cost)))
            }
        }
    }
}
