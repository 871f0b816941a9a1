//! Fox viewer
//!
//! Usage: `fox_viewer [config.json]`. Without an argument the stock
//! configuration is used; assets are looked up under `static/`.

use vixen::app::{App, ViewerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Reading configuration from {path}");
            ViewerConfig::from_json_file(&path)?
        }
        None => ViewerConfig::default(),
    };

    App::new(config).run()?;
    Ok(())
}
