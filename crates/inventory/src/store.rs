//! In-memory inventory store: the single source of truth for parts and products.

use serde::Serialize;
use tracing::{debug, info, warn};

use stockroom_core::{DomainError, DomainResult, Entity, PartId, ProductId};

use crate::part::Part;
use crate::product::Product;

/// Parts and products for the lifetime of the application, plus id counters.
///
/// Owned by the composition root and lent to whichever screen needs it.
/// Presentation code re-reads [`parts`](Self::parts) and
/// [`products`](Self::products) after every mutation.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    parts: Vec<Part>,
    products: Vec<Product>,
    next_part_id: PartId,
    next_product_id: ProductId,
}

/// Read-only view of the store, for display and serialization.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InventorySnapshot<'a> {
    pub parts: &'a [Part],
    pub products: &'a [Product],
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            products: Vec::new(),
            next_part_id: PartId::new(1),
            next_product_id: ProductId::new(1),
        }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn snapshot(&self) -> InventorySnapshot<'_> {
        InventorySnapshot {
            parts: &self.parts,
            products: &self.products,
        }
    }

    /// Allocate a part id. Ids start at 1 and are never handed out twice.
    pub fn next_part_id(&mut self) -> PartId {
        let id = self.next_part_id;
        self.next_part_id = id.successor();
        id
    }

    /// Allocate a product id. Ids start at 1 and are never handed out twice.
    pub fn next_product_id(&mut self) -> ProductId {
        let id = self.next_product_id;
        self.next_product_id = id.successor();
        id
    }

    /// Append a part. Its id must come from [`next_part_id`](Self::next_part_id);
    /// colliding ids are not detected.
    pub fn add_part(&mut self, part: Part) {
        debug!(part_id = %part.id(), name = part.name(), "part added");
        self.parts.push(part);
    }

    /// Append a product. Its id must come from
    /// [`next_product_id`](Self::next_product_id); colliding ids are not detected.
    pub fn add_product(&mut self, product: Product) {
        debug!(product_id = %product.id(), name = product.name(), "product added");
        self.products.push(product);
    }

    pub fn find_part_by_id(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id() == id)
    }

    /// Exact, case-sensitive name match.
    pub fn find_parts_by_name(&self, name: &str) -> Vec<&Part> {
        self.parts.iter().filter(|p| p.name() == name).collect()
    }

    pub fn find_product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Exact, case-sensitive name match.
    pub fn find_products_by_name(&self, name: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.name() == name).collect()
    }

    /// Parts whose id contains `query`, or whose name contains it ignoring case.
    ///
    /// An empty query matches every part.
    pub fn search_parts(&self, query: &str) -> Vec<&Part> {
        search(&self.parts, query)
    }

    /// Products matched the same way as [`search_parts`](Self::search_parts).
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        search(&self.products, query)
    }

    /// Resolve a product's associations to the parts currently in the store.
    ///
    /// Ids that no longer resolve are skipped.
    pub fn associated_parts(&self, product: &Product) -> Vec<&Part> {
        product
            .associated_part_ids()
            .iter()
            .filter_map(|id| self.find_part_by_id(*id))
            .collect()
    }

    /// Names of a product's resolvable associated parts, in association order.
    pub fn associated_part_names(&self, product: &Product) -> Vec<&str> {
        self.associated_parts(product)
            .into_iter()
            .map(|part| part.name())
            .collect()
    }

    /// Remove a part; returns whether it was present.
    ///
    /// The part is also unlinked from every product that referenced it, so no
    /// product is left holding a dangling association.
    pub fn delete_part(&mut self, id: PartId) -> bool {
        let Some(index) = self.parts.iter().position(|p| p.id() == id) else {
            return false;
        };
        self.parts.remove(index);

        let unlinked = self
            .products
            .iter_mut()
            .map(|product| product.unlink_part(id))
            .filter(|changed| *changed)
            .count();
        info!(part_id = %id, unlinked_products = unlinked, "part deleted");
        true
    }

    /// Remove a product that has no associated parts.
    ///
    /// Fails with [`DomainError::ProductHasAssociatedParts`] (leaving the store
    /// untouched) while any association remains, and with
    /// [`DomainError::NotFound`] when no product has this id.
    pub fn delete_product(&mut self, id: ProductId) -> DomainResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(DomainError::not_found)?;

        if self.products[index].has_associated_parts() {
            warn!(product_id = %id, "product deletion blocked by associated parts");
            return Err(DomainError::ProductHasAssociatedParts(id));
        }

        let removed = self.products.remove(index);
        info!(product_id = %id, "product deleted");
        Ok(removed)
    }

    /// Put `replacement` where the part with id `existing` sits.
    ///
    /// Other parts keep their positions. Does nothing (returning `false`) when
    /// `existing` is not in the store.
    pub fn replace_part(&mut self, existing: PartId, replacement: Part) -> bool {
        match self.parts.iter_mut().find(|p| p.id() == existing) {
            Some(slot) => {
                debug!(part_id = %existing, "part replaced");
                *slot = replacement;
                true
            }
            None => {
                warn!(part_id = %existing, "replace skipped: part not in store");
                false
            }
        }
    }

    /// Put `replacement` where the product with id `existing` sits.
    ///
    /// Same positional contract as [`replace_part`](Self::replace_part).
    pub fn replace_product(&mut self, existing: ProductId, replacement: Product) -> bool {
        match self.products.iter_mut().find(|p| p.id() == existing) {
            Some(slot) => {
                debug!(product_id = %existing, "product replaced");
                *slot = replacement;
                true
            }
            None => {
                warn!(product_id = %existing, "replace skipped: product not in store");
                false
            }
        }
    }
}

fn search<'a, E: Entity>(items: &'a [E], query: &str) -> Vec<&'a E> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.id().to_string().contains(query) || item.name().to_lowercase().contains(&needle)
        })
        .collect()
}
