//! Add/modify product screen.
//!
//! The editor keeps its own working copy of associated parts; the store only
//! sees them when the product is saved.

use stockroom_core::{DomainError, DomainResult, PartId, ProductId};
use stockroom_inventory::{AssociationDraft, InventoryStore, Part, ProductForm};

use crate::main_screen::require_selection;

/// Edit session for a new or existing product.
#[derive(Debug, Clone, Default)]
pub struct ProductEditor {
    editing: Option<ProductId>,
    draft: AssociationDraft,
}

impl ProductEditor {
    /// Session for a product that does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session for the selected product, starting from its saved associations.
    pub fn open(store: &InventoryStore, selected: Option<ProductId>) -> DomainResult<Self> {
        let id = require_selection(selected)?;
        let product = store.find_product_by_id(id).ok_or_else(DomainError::not_found)?;
        Ok(Self {
            editing: Some(id),
            draft: AssociationDraft::from_product(product),
        })
    }

    pub fn editing(&self) -> Option<ProductId> {
        self.editing
    }

    /// Form contents for the product being edited (`None` for a new product).
    pub fn prefill(&self, store: &InventoryStore) -> Option<ProductForm> {
        self.editing
            .and_then(|id| store.find_product_by_id(id))
            .map(ProductForm::from_product)
    }

    /// Parts currently associated in this session, resolved against the store.
    pub fn associated_parts<'s>(&self, store: &'s InventoryStore) -> Vec<&'s Part> {
        self.draft
            .part_ids()
            .iter()
            .filter_map(|id| store.find_part_by_id(*id))
            .collect()
    }

    /// Parts matching `query`, for picking what to associate.
    pub fn search_parts<'s>(&self, store: &'s InventoryStore, query: &str) -> Vec<&'s Part> {
        store.search_parts(query)
    }

    /// Associate the selected part. A part already in the list is a
    /// `DuplicatePartAssociation` notice and changes nothing.
    pub fn add_part(&mut self, store: &InventoryStore, selected: Option<PartId>) -> DomainResult<()> {
        let id = require_selection(selected)?;
        if store.find_part_by_id(id).is_none() {
            return Err(DomainError::not_found());
        }
        self.draft.add(id)
    }

    pub fn remove_part(&mut self, selected: Option<PartId>) -> DomainResult<()> {
        let id = require_selection(selected)?;
        if !self.draft.remove(id) {
            return Err(DomainError::not_found());
        }
        Ok(())
    }

    /// Validate the form and commit the product with this session's associations.
    ///
    /// Existing products keep their id and position; their association list
    /// is overwritten in one step. Parts deleted from the store since they were
    /// added to the session are dropped first.
    pub fn save(&mut self, store: &mut InventoryStore, form: &ProductForm) -> DomainResult<ProductId> {
        let fields = form.validate()?;
        self.draft.retain(|id| store.find_part_by_id(id).is_some());

        match self.editing {
            Some(id) => {
                let mut product = store
                    .find_product_by_id(id)
                    .cloned()
                    .ok_or_else(DomainError::not_found)?;
                fields.apply_to(&mut product);
                self.draft.clone().commit(&mut product);
                store.replace_product(id, product);
                Ok(id)
            }
            None => {
                let id = store.next_product_id();
                let mut product = fields.into_product(id);
                self.draft.clone().commit(&mut product);
                store.add_product(product);
                self.editing = Some(id);
                Ok(id)
            }
        }
    }

    /// Delete the product being edited.
    ///
    /// Refused while this session still lists associated parts; the store
    /// refuses as well while the saved product has any.
    pub fn delete(&self, store: &mut InventoryStore) -> DomainResult<()> {
        let id = require_selection(self.editing)?;
        if !self.draft.is_empty() {
            return Err(DomainError::ProductHasAssociatedParts(id));
        }
        store.delete_product(id).map(|_| ())
    }
}
