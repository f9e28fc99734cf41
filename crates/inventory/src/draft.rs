use stockroom_core::{DomainError, DomainResult, PartId};

use crate::product::Product;

/// Working copy of a product's associated parts during an add/modify session.
///
/// Changes stay local until [`commit`](Self::commit) replaces the product's
/// list in one step; abandoning the draft leaves the product untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationDraft {
    part_ids: Vec<PartId>,
}

impl AssociationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a product's current associations.
    pub fn from_product(product: &Product) -> Self {
        Self {
            part_ids: product.associated_part_ids().to_vec(),
        }
    }

    pub fn part_ids(&self) -> &[PartId] {
        &self.part_ids
    }

    pub fn is_empty(&self) -> bool {
        self.part_ids.is_empty()
    }

    pub fn contains(&self, part_id: PartId) -> bool {
        self.part_ids.contains(&part_id)
    }

    /// Associate a part. Already-present parts are rejected and the draft is unchanged.
    pub fn add(&mut self, part_id: PartId) -> DomainResult<()> {
        if self.contains(part_id) {
            return Err(DomainError::DuplicatePartAssociation(part_id));
        }
        self.part_ids.push(part_id);
        Ok(())
    }

    pub fn remove(&mut self, part_id: PartId) -> bool {
        match self.part_ids.iter().position(|id| *id == part_id) {
            Some(index) => {
                self.part_ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Keep only the parts for which `keep` returns true, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(PartId) -> bool) {
        self.part_ids.retain(|id| keep(*id));
    }

    /// Overwrite the product's associations with this draft.
    pub fn commit(self, product: &mut Product) {
        product.set_associated_parts(self.part_ids);
    }
}
