use core::str::FromStr;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, ValueObject};

/// Non-negative price in the smallest currency unit (cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

/// Largest cent amount an `f64` represents exactly (2^53).
const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_992.0;

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Parses decimal text such as `"15"`, `"15.5"` or `"15.50"`.
///
/// Fractions finer than a cent are rounded to the nearest cent. Amounts above
/// 2^53 cents are rejected rather than losing precision.
impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::invalid_numeric("price", s);
        let value: f64 = s.trim().parse().map_err(|_| invalid())?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid());
        }
        let cents = (value * 100.0).round();
        if cents > MAX_EXACT_CENTS {
            return Err(invalid());
        }
        Ok(Self(cents as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_text_into_cents() {
        assert_eq!("10".parse::<Price>().unwrap(), Price::from_cents(1000));
        assert_eq!("15.5".parse::<Price>().unwrap(), Price::from_cents(1550));
        assert_eq!(" 0.99 ".parse::<Price>().unwrap(), Price::from_cents(99));
        assert_eq!("2.006".parse::<Price>().unwrap().cents(), 201);
    }

    #[test]
    fn rejects_negative_and_non_numeric_text() {
        for input in ["-1", "abc", "", "NaN", "inf", "1e300", "90071992547409.93"] {
            match input.parse::<Price>().unwrap_err() {
                DomainError::InvalidNumericField { field, .. } => assert_eq!(field, "price"),
                other => panic!("Expected InvalidNumericField for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn accepts_the_largest_exact_amount() {
        let price: Price = "90071992547409.92".parse().unwrap();
        assert_eq!(price.cents(), 9_007_199_254_740_992);
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(Price::from_cents(2500).to_string(), "25.00");
        assert_eq!(Price::from_cents(7).to_string(), "0.07");
    }
}
