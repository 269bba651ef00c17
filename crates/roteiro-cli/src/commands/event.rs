use clap::Subcommand;
use roteiro_core::format::event_badge;
use roteiro_core::{Config, EventRecord};
use serde_json::json;

use super::{load_catalog, resolve_now, EvalOptions};

#[derive(Subcommand)]
pub enum EventAction {
    /// Show start-time labels ("Agora", "Hoje", "Amanhã", date)
    Status {
        /// Event id (all events when omitted)
        id: Option<String>,
        #[command(flatten)]
        opts: EvalOptions,
    },
}

pub fn run(action: EventAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        EventAction::Status { id, opts } => {
            let catalog = load_catalog(opts.catalog.clone(), &config)?;
            let now = resolve_now(opts.at.as_deref(), &config)?;
            let json = opts.json(&config);

            let events: Vec<&EventRecord> = match &id {
                Some(id) => vec![catalog.event(id)?],
                None => catalog.events.iter().collect(),
            };

            let mut rows = Vec::new();
            let mut failures = 0usize;
            for event in events {
                let label = match event.label(now) {
                    Ok(label) => label,
                    Err(e) if id.is_none() => {
                        eprintln!("error: {}: {e}", event.id);
                        failures += 1;
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                };

                if json {
                    rows.push(json!({
                        "id": event.id,
                        "title": event.title,
                        "venue_id": event.venue_id,
                        "label": label,
                    }));
                } else {
                    println!("{}: {}", event.title, event_badge(&label));
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            }

            if failures > 0 {
                return Err(format!("{failures} event(s) have invalid start times").into());
            }
        }
    }
    Ok(())
}
