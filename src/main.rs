use clap::Parser;

use parts_catalog::config::Cli;
use parts_catalog::server::{serve, AppState};
use parts_catalog::CatalogEngine;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let addr = cli.bind;
    let config = cli.into_config();

    if config.source.url.is_none() {
        log::warn!(
            "No source URL configured; {} must already exist",
            config.source.xml_path().display()
        );
    }

    let state = match AppState::new(CatalogEngine::new(config)) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to load templates: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(addr, state).await {
        log::error!("[{}] {}", e.phase(), e);
        std::process::exit(1);
    }
}
