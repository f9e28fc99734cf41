//! Strongly-typed identifiers used across the domain.
//!
//! Ids are small positive integers handed out by the inventory store's
//! counters. They are never reused within a store's lifetime.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a part.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(u32);

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

macro_rules! impl_counter_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw id. Prefer the store's allocator outside of tests.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> u32 {
                self.0
            }

            /// The id following this one.
            ///
            /// # Panics
            ///
            /// Panics once the `u32` id space is exhausted, in every build profile.
            pub const fn successor(self) -> Self {
                match self.0.checked_add(1) {
                    Some(next) => Self(next),
                    None => panic!(concat!($name, " space exhausted")),
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$t> for u32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| DomainError::invalid_numeric($name, s))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_counter_newtype!(PartId, "part id");
impl_counter_newtype!(ProductId, "product id");
