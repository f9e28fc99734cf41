//! Desktop application entry point.

use anyhow::Context;

use stockroom_desktop::{App, AppConfig};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;
    stockroom_observability::init(config.log_format);

    let app = App::new(config);
    tracing::debug!(config = ?app.config(), "configuration loaded");

    let snapshot = serde_json::to_string_pretty(&app.store().snapshot())
        .context("failed to render inventory snapshot")?;
    println!("{snapshot}");

    Ok(())
}
