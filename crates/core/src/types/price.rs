//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`] from user input.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("price must be a number")]
    NotANumber,
    /// The amount is zero or negative.
    #[error("price must be greater than 0")]
    NotPositive,
}

/// A monetary amount in the store currency.
///
/// The exact decimal amount is stored unrounded; rounding to two decimal
/// places happens only at the display boundary, in [`Price::display`].
/// Arithmetic (`+`, `* quantity`, `sum`) is exact, so line totals never
/// accumulate float error.
///
/// ## Examples
///
/// ```
/// use vitrine_core::Price;
///
/// let unit = Price::from_cents(999);
/// assert_eq!(unit.display(), "9.99");
/// assert_eq!((unit * 2).display(), "19.98");
///
/// // User input is validated on parse
/// assert!(Price::parse("19.99").is_ok());
/// assert!(Price::parse("0").is_err());
/// assert!(Price::parse("abc").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from an exact decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the exact decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Parse a `Price` from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a decimal number, or if the
    /// amount is not greater than zero. Remotely sourced prices skip this
    /// check and deserialize directly.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount: Decimal = s.trim().parse().map_err(|_| PriceError::NotANumber)?;

        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive);
        }

        Ok(Self(amount))
    }

    /// Format for display with exactly two decimal places (e.g. "24.98").
    ///
    /// Midpoints round away from zero.
    #[must_use]
    pub fn display(&self) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
