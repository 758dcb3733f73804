mod cli;
mod script;
mod sessions;

use std::cell::RefCell;
use std::rc::Rc;

use chatbar_common::ChatbarError;
use chatbar_config::toml_loader::default_config_path;
use chatbar_config::ConfigStore;
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::sessions::SessionList;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so its level can seed the filter
    let opened = match &args.config {
        Some(path) => ConfigStore::open(path),
        None => default_config_path().and_then(|path| ConfigStore::open(&path)),
    };

    // Initialize logging
    let config_level = opened
        .as_ref()
        .ok()
        .map(|store| store.read().logging.level.as_directive().to_string());
    let log_directive = args
        .log_level
        .clone()
        .or(config_level)
        .unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();

    info!("Chatbar v{} starting", env!("CARGO_PKG_VERSION"));

    let store = match opened {
        Ok(store) => store,
        Err(e) => {
            warn!("Failed to load config, using defaults: {e}");
            ConfigStore::default()
        }
    };

    if let Err(e) = run(&args, store) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &cli::Args, store: ConfigStore) -> chatbar_common::Result<()> {
    let events = script::load_script(&args.script)?;
    let sessions = Rc::new(RefCell::new(SessionList::with_count(args.sessions)));

    let summary = script::replay(&events, store.clone(), sessions, args.viewport_width);
    let json =
        serde_json::to_string_pretty(&summary).map_err(|e| ChatbarError::Other(e.to_string()))?;
    println!("{json}");

    if args.save {
        store.save()?;
    }
    Ok(())
}
