//! # CLI Layer
//!
//! The only place that knows about process arguments, stdin/stdout and the
//! global tracing subscriber.
//!
//! ## Structure
//!
//! - `run()`: loads configuration, installs logging, opens the store and runs
//!   the session (called by `main.rs`)
//! - `setup`: clap argument definitions

mod setup;

use clap::Parser;
use setup::Cli;
use std::io::{self, IsTerminal};
use stockroom::config::{default_config_dir, StockConfig};
use stockroom::error::Result;
use stockroom::logging;
use stockroom::model::InventoryItem;
use stockroom::session::{self, SessionOptions};
use stockroom::store::memory::InMemoryStore;
use stockroom::store::{Connection, StorageBackend};
use tracing::{debug, warn};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    let config = StockConfig::load(&config_dir)?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    logging::init(level);
    debug!(dir = %config_dir.display(), "config loaded");

    let mut store = if config.seed_defaults && !cli.no_seed {
        InMemoryStore::with_default_stock()
    } else {
        InMemoryStore::new()
    };

    let mut conn = Connection::open(&mut store)?;
    if !cli.no_seed {
        if let Some(fixture) = &config.fixture {
            add_fixture(&mut *conn, fixture);
        }
    }

    let stdout = io::stdout();
    let options = SessionOptions {
        color: config.color && stdout.is_terminal(),
    };
    session::run(&mut *conn, io::stdin().lock(), stdout.lock(), options)
}

fn add_fixture<B: StorageBackend>(store: &mut B, fixture: &InventoryItem) {
    match store.add_item(&fixture.name, i64::from(fixture.quantity)) {
        Ok(id) => debug!(id, item = %fixture.name, "fixture added"),
        Err(e) => warn!(error = %e, "fixture skipped"),
    }
}
