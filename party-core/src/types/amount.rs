//! Token amounts in 128.128 fixed-point format.

use serde::{Deserialize, Serialize};

use crate::u256::{U256, FIXED_POINT_FRACTIONAL_BITS};

/// A token quantity held in fixed-point format.
///
/// The integer part occupies the high 128 bits and the fractional part
/// the low 128 bits. Purchases that do not convert evenly (e.g. 105
/// currency at unit cost 10) are recorded as the exact quotient, so no
/// credit is ever silently truncated.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// The zero amount.
    #[inline]
    pub fn zero() -> Self {
        TokenAmount(U256::zero())
    }

    /// Create an amount from a raw fixed-point value.
    #[inline]
    pub fn from_fixed(fixed: U256) -> Self {
        TokenAmount(fixed)
    }

    /// Create a whole-token amount.
    #[inline]
    pub fn whole(tokens: u64) -> Self {
        TokenAmount(U256::to_fixed(tokens))
    }

    /// Create an amount equal to `numerator / denominator` tokens.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    pub fn from_ratio(numerator: u64, denominator: u64) -> Self {
        assert_ne!(denominator, 0, "denominator must be nonzero");
        let shifted = U256::from(numerator) << FIXED_POINT_FRACTIONAL_BITS;
        TokenAmount(shifted / U256::from(denominator))
    }

    /// The raw fixed-point value.
    #[inline]
    pub fn fixed(&self) -> U256 {
        self.0
    }

    /// The whole-token part, truncating any fraction.
    #[inline]
    pub fn whole_part(&self) -> u128 {
        self.0.from_fixed_truncate()
    }

    /// True if the amount has no fractional part.
    #[inline]
    pub fn is_integral(&self) -> bool {
        self.0.fixed_fraction().is_zero()
    }

    /// True if the amount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns None on overflow.
    pub fn checked_add(&self, other: &TokenAmount) -> Option<TokenAmount> {
        self.0.checked_add(other.0).map(TokenAmount)
    }
}

impl Default for TokenAmount {
    fn default() -> Self {
        TokenAmount::zero()
    }
}

impl std::fmt::Debug for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integral() {
            write!(f, "TokenAmount({})", self.whole_part())
        } else {
            write!(
                f,
                "TokenAmount({} + {:x}/2^128)",
                self.whole_part(),
                self.0.fixed_fraction()
            )
        }
    }
}
