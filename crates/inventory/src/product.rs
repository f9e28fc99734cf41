use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, PartId, ProductId};

use crate::levels::StockLevels;
use crate::price::Price;

/// A sellable item built from zero or more parts.
///
/// Associated parts are held by id only; the store owns part lifecycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    #[serde(flatten)]
    levels: StockLevels,
    associated_parts: Vec<PartId>,
}

impl Product {
    /// New product with no associated parts.
    pub fn new(id: ProductId, name: impl Into<String>, price: Price, levels: StockLevels) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            associated_parts: Vec::new(),
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn levels(&self) -> StockLevels {
        self.levels
    }

    pub fn stock(&self) -> i64 {
        self.levels.stock
    }

    pub fn min(&self) -> i64 {
        self.levels.min
    }

    pub fn max(&self) -> i64 {
        self.levels.max
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: Price) {
        self.price = price;
    }

    pub fn set_levels(&mut self, levels: StockLevels) {
        self.levels = levels;
    }

    pub fn set_stock(&mut self, stock: i64) {
        self.levels.stock = stock;
    }

    pub fn set_min(&mut self, min: i64) {
        self.levels.min = min;
    }

    pub fn set_max(&mut self, max: i64) {
        self.levels.max = max;
    }

    /// Ids of the associated parts, in the order they were added.
    pub fn associated_part_ids(&self) -> &[PartId] {
        &self.associated_parts
    }

    pub fn has_associated_parts(&self) -> bool {
        !self.associated_parts.is_empty()
    }

    pub fn is_associated(&self, part_id: PartId) -> bool {
        self.associated_parts.contains(&part_id)
    }

    /// Append an association. Duplicate checks belong to the edit session.
    pub fn add_associated_part(&mut self, part_id: PartId) {
        self.associated_parts.push(part_id);
    }

    /// Remove the first association with `part_id`; returns whether one was removed.
    pub fn delete_associated_part(&mut self, part_id: PartId) -> bool {
        match self.associated_parts.iter().position(|id| *id == part_id) {
            Some(index) => {
                self.associated_parts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace every association at once (save-from-edit).
    pub fn set_associated_parts(&mut self, part_ids: Vec<PartId>) {
        self.associated_parts = part_ids;
    }

    pub fn clear_associated_parts(&mut self) {
        self.associated_parts.clear();
    }

    /// Drop every association with `part_id`; returns whether any were dropped.
    pub(crate) fn unlink_part(&mut self, part_id: PartId) -> bool {
        let before = self.associated_parts.len();
        self.associated_parts.retain(|id| *id != part_id);
        self.associated_parts.len() != before
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product ID: {}\nProduct Name: {}\nInventory Level: {}\nPrice: {}\nAssociated Parts: {}",
            self.id,
            self.name,
            self.levels.stock,
            self.price,
            self.associated_parts.len()
        )
    }
}
