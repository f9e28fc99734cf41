//! Preconfigured demo records.

use crate::levels::StockLevels;
use crate::part::{Part, PartSource};
use crate::price::Price;
use crate::product::Product;
use crate::store::InventoryStore;

/// Load the demo parts and products. Ids come from the store's counters so
/// they never collide with records added later.
pub fn seed_sample_data(store: &mut InventoryStore) {
    let shield = store.next_part_id();
    store.add_part(Part::new(
        shield,
        "Shield",
        Price::from_cents(1000),
        StockLevels::new(5, 1, 20),
        PartSource::in_house(123),
    ));

    let shield_plasma = store.next_part_id();
    store.add_part(Part::new(
        shield_plasma,
        "Shield Plasma",
        Price::from_cents(1500),
        StockLevels::new(8, 5, 50),
        PartSource::outsourced("ABC Ltd."),
    ));

    let ray_gun = store.next_part_id();
    store.add_part(Part::new(
        ray_gun,
        "Ray Gun",
        Price::from_cents(800),
        StockLevels::new(12, 5, 30),
        PartSource::in_house(456),
    ));

    let mut death_star = Product::new(
        store.next_product_id(),
        "DeathStar",
        Price::from_cents(2500),
        StockLevels::new(15, 5, 50),
    );
    death_star.add_associated_part(shield);
    death_star.add_associated_part(shield_plasma);

    let mut razor_crest = Product::new(
        store.next_product_id(),
        "RazorCrest",
        Price::from_cents(3000),
        StockLevels::new(20, 10, 100),
    );
    razor_crest.add_associated_part(shield_plasma);
    razor_crest.add_associated_part(ray_gun);

    store.add_product(death_star);
    store.add_product(razor_crest);

    tracing::info!(
        parts = store.parts().len(),
        products = store.products().len(),
        "sample data loaded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{PartId, ProductId};

    #[test]
    fn sample_records_are_valid_and_linked() {
        let mut store = InventoryStore::new();
        seed_sample_data(&mut store);

        assert_eq!(store.parts().len(), 3);
        assert_eq!(store.products().len(), 2);
        assert!(store.parts().iter().all(|p| p.levels().is_valid()));
        assert!(store.products().iter().all(|p| p.levels().is_valid()));

        let razor_crest = store.find_product_by_id(ProductId::new(2)).unwrap();
        assert_eq!(
            razor_crest.associated_part_ids(),
            &[PartId::new(2), PartId::new(3)]
        );
    }

    #[test]
    fn counters_continue_after_seeding() {
        let mut store = InventoryStore::new();
        seed_sample_data(&mut store);
        assert_eq!(store.next_part_id(), PartId::new(4));
        assert_eq!(store.next_product_id(), ProductId::new(3));
    }
}
