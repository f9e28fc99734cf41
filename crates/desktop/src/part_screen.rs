//! Add/modify part screens.

use stockroom_core::{DomainError, DomainResult, PartId};
use stockroom_inventory::{InventoryStore, PartForm};

use crate::main_screen::require_selection;

pub struct PartScreen<'a> {
    store: &'a mut InventoryStore,
}

impl<'a> PartScreen<'a> {
    pub fn new(store: &'a mut InventoryStore) -> Self {
        Self { store }
    }

    /// Validate the form and add a new part. An id is only allocated once the form is valid.
    pub fn add(&mut self, form: &PartForm) -> DomainResult<PartId> {
        let valid = form.validate()?;
        let id = self.store.next_part_id();
        self.store.add_part(valid.into_part(id));
        Ok(id)
    }

    /// Form contents for the selected part.
    pub fn prefill(&self, selected: Option<PartId>) -> DomainResult<PartForm> {
        let id = require_selection(selected)?;
        let part = self.store.find_part_by_id(id).ok_or_else(DomainError::not_found)?;
        Ok(PartForm::from_part(part))
    }

    /// Save the modify form over the selected part.
    ///
    /// The part keeps its id and table position. Choosing the other source on
    /// the form swaps in a part of that kind rather than mutating the variant.
    pub fn modify(&mut self, selected: Option<PartId>, form: &PartForm) -> DomainResult<()> {
        let id = require_selection(selected)?;
        if self.store.find_part_by_id(id).is_none() {
            return Err(DomainError::not_found());
        }
        let valid = form.validate()?;
        self.store.replace_part(id, valid.into_part(id));
        Ok(())
    }
}
