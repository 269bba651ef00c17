pub mod config;
pub mod event;
pub mod venue;

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Args;
use roteiro_core::calendar::parse_reference_instant;
use roteiro_core::{Catalog, Config};

/// Options shared by the status commands.
#[derive(Args)]
pub struct EvalOptions {
    /// Catalog JSON file (defaults to `catalog.path` from config)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Evaluate at this local instant instead of now (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub at: Option<String>,
    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

impl EvalOptions {
    pub fn json(&self, config: &Config) -> bool {
        self.json || config.display.json
    }
}

pub fn load_catalog(
    path: Option<PathBuf>,
    config: &Config,
) -> Result<Catalog, Box<dyn std::error::Error>> {
    let path = path.unwrap_or_else(|| PathBuf::from(&config.catalog.path));
    Ok(Catalog::load(&path)?)
}

/// `--at` wins over `clock.fixed_now`, which wins over the system clock.
pub fn resolve_now(
    at: Option<&str>,
    config: &Config,
) -> Result<NaiveDateTime, Box<dyn std::error::Error>> {
    let now = match at {
        Some(at) => parse_reference_instant(at).map_err(|e| format!("invalid --at '{at}': {e}"))?,
        None => config.clock()?.now(),
    };
    tracing::debug!(%now, "reference instant");
    Ok(now)
}
