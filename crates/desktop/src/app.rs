//! Composition root: owns the store for the lifetime of the process.

use stockroom_inventory::{InventoryStore, seed_sample_data};

use crate::config::AppConfig;
use crate::main_screen::MainScreen;
use crate::part_screen::PartScreen;

/// Application state shared by every screen.
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
    store: InventoryStore,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let mut store = InventoryStore::new();
        if config.seed_sample_data {
            seed_sample_data(&mut store);
        }
        tracing::info!(
            seeded = config.seed_sample_data,
            parts = store.parts().len(),
            products = store.products().len(),
            "inventory initialized"
        );
        Self { config, store }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut InventoryStore {
        &mut self.store
    }

    pub fn main_screen(&mut self) -> MainScreen<'_> {
        MainScreen::new(&mut self.store)
    }

    pub fn part_screen(&mut self) -> PartScreen<'_> {
        PartScreen::new(&mut self.store)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
