use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ValueObject};

/// Stock quantity with its allowed bounds.
///
/// Construction does not validate; call [`StockLevels::validate`] before
/// committing a record to the store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockLevels {
    pub stock: i64,
    pub min: i64,
    pub max: i64,
}

impl StockLevels {
    pub const fn new(stock: i64, min: i64, max: i64) -> Self {
        Self { stock, min, max }
    }

    /// Check `0 < min < max`, then `min <= stock <= max`.
    pub fn validate(&self) -> DomainResult<()> {
        if self.min <= 0 || self.min >= self.max {
            return Err(DomainError::InvalidMin {
                min: self.min,
                max: self.max,
            });
        }
        if self.stock < self.min || self.stock > self.max {
            return Err(DomainError::InvalidInventory {
                stock: self.stock,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl ValueObject for StockLevels {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_stock_on_either_bound() {
        assert!(StockLevels::new(1, 1, 20).is_valid());
        assert!(StockLevels::new(20, 1, 20).is_valid());
    }

    #[test]
    fn min_is_checked_before_inventory() {
        let err = StockLevels::new(100, 0, 10).validate().unwrap_err();
        assert_eq!(err, DomainError::InvalidMin { min: 0, max: 10 });

        let err = StockLevels::new(5, 10, 10).validate().unwrap_err();
        assert_eq!(err, DomainError::InvalidMin { min: 10, max: 10 });
    }

    #[test]
    fn stock_outside_bounds_is_invalid_inventory() {
        let err = StockLevels::new(0, 1, 10).validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidInventory { stock: 0, .. }));

        let err = StockLevels::new(11, 1, 10).validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidInventory { stock: 11, .. }));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: validation accepts exactly `0 < min < max` with `min <= stock <= max`.
            #[test]
            fn validate_matches_the_bounds_rule(
                stock in -50i64..150,
                min in -10i64..100,
                max in -10i64..120
            ) {
                let expected = min > 0 && min < max && stock >= min && stock <= max;
                prop_assert_eq!(StockLevels::new(stock, min, max).is_valid(), expected);
            }
        }
    }
}
