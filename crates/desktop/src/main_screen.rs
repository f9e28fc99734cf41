//! Main screen actions: listing, search and deletion.

use stockroom_core::{DomainError, DomainResult, PartId, ProductId};
use stockroom_inventory::{InventoryStore, Part, Product};

/// Turn an optional table selection into a value, or `NoSelection`.
pub fn require_selection<T>(selection: Option<T>) -> DomainResult<T> {
    selection.ok_or(DomainError::NoSelection)
}

pub struct MainScreen<'a> {
    store: &'a mut InventoryStore,
}

impl<'a> MainScreen<'a> {
    pub fn new(store: &'a mut InventoryStore) -> Self {
        Self { store }
    }

    pub fn parts(&self) -> &[Part] {
        self.store.parts()
    }

    pub fn products(&self) -> &[Product] {
        self.store.products()
    }

    /// Filter the parts table. No matches yields an empty list; the caller decides how to say so.
    pub fn search_parts(&self, query: &str) -> Vec<&Part> {
        self.store.search_parts(query)
    }

    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        self.store.search_products(query)
    }

    /// Delete the selected part, unlinking it from any product that used it.
    pub fn delete_part(&mut self, selected: Option<PartId>) -> DomainResult<()> {
        let id = require_selection(selected)?;
        if !self.store.delete_part(id) {
            return Err(DomainError::not_found());
        }
        Ok(())
    }

    /// Delete the selected product; refused while it still has associated parts.
    pub fn delete_product(&mut self, selected: Option<ProductId>) -> DomainResult<Product> {
        let id = require_selection(selected)?;
        self.store.delete_product(id)
    }
}
