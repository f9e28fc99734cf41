//! Inventory domain module.
//!
//! Parts, products and the in-memory store that owns them, plus the form
//! validation screens run before committing changes. Pure domain logic (no
//! IO, no UI).

pub mod draft;
pub mod form;
pub mod levels;
pub mod part;
pub mod price;
pub mod product;
pub mod sample;
pub mod store;

pub use draft::AssociationDraft;
pub use form::{PartForm, ProductForm, RecordFields, SourceInput, ValidPart};
pub use levels::StockLevels;
pub use part::{Part, PartSource};
pub use price::Price;
pub use product::Product;
pub use sample::seed_sample_data;
pub use store::{InventorySnapshot, InventoryStore};
