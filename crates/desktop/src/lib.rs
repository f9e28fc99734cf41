//! `stockroom-desktop`
//!
//! **Responsibility:** the application shell around the inventory store.
//!
//! This crate provides:
//! - Configuration and the composition root that owns the store
//! - Screen actions (main, part, product) that validate input and report
//!   errors before anything reaches the store
//!
//! Widgets, windows and dialogs are left to whichever UI toolkit drives it.

pub mod app;
pub mod config;
pub mod main_screen;
pub mod part_screen;
pub mod product_screen;

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use main_screen::MainScreen;
pub use part_screen::PartScreen;
pub use product_screen::ProductEditor;
