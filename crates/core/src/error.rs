//! Domain error model.

use thiserror::Error;

use crate::id::{PartId, ProductId};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is terminal to the user action that raised it. Field
/// validation variants are produced at the presentation boundary; the store
/// itself only reports `ProductHasAssociatedParts` and `NotFound`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required text field was blank. Carries the field label.
    #[error("{0} cannot be empty")]
    EmptyName(&'static str),

    /// `min` was not strictly between zero and `max`.
    #[error("min must be greater than 0 and less than max (min: {min}, max: {max})")]
    InvalidMin { min: i64, max: i64 },

    /// `stock` fell outside `min..=max`.
    #[error("inventory must be between min and max (stock: {stock}, min: {min}, max: {max})")]
    InvalidInventory { stock: i64, min: i64, max: i64 },

    /// A numeric field failed to parse.
    #[error("invalid value for {field}: {value:?}")]
    InvalidNumericField { field: &'static str, value: String },

    /// The part is already associated with the product being edited.
    #[error("part {0} is already associated with this product")]
    DuplicatePartAssociation(PartId),

    /// A product still references parts and cannot be deleted.
    #[error("product {0} has associated parts and cannot be deleted")]
    ProductHasAssociatedParts(ProductId),

    /// An action needing a selected row ran with nothing selected.
    #[error("no item selected")]
    NoSelection,

    /// A requested record was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn empty_name(field: &'static str) -> Self {
        Self::EmptyName(field)
    }

    pub fn invalid_numeric(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumericField {
            field,
            value: value.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Whether the error is informational (the action is a no-op) rather than a failure.
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::DuplicatePartAssociation(_))
    }
}
