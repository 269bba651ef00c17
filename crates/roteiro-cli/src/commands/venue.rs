use std::path::PathBuf;

use clap::Subcommand;
use roteiro_core::format::{day_hours_label, venue_status_line};
use roteiro_core::{Config, DayOfWeek, OperatingHoursEvaluator, Venue};
use serde_json::json;

use super::{load_catalog, resolve_now, EvalOptions};

#[derive(Subcommand)]
pub enum VenueAction {
    /// Show whether venues are open
    Status {
        /// Venue id (all venues when omitted)
        id: Option<String>,
        #[command(flatten)]
        opts: EvalOptions,
    },
    /// Show a venue's weekly opening hours
    Hours {
        /// Venue id
        id: String,
        /// Catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn run(action: VenueAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        VenueAction::Status { id, opts } => {
            let catalog = load_catalog(opts.catalog.clone(), &config)?;
            let now = resolve_now(opts.at.as_deref(), &config)?;
            let json = opts.json(&config);

            let venues: Vec<&Venue> = match &id {
                Some(id) => vec![catalog.venue(id)?],
                None => catalog.venues.iter().collect(),
            };

            let mut rows = Vec::new();
            let mut failures = 0usize;
            for venue in venues {
                match status_row(venue, now, json) {
                    Ok(row) => rows.push(row),
                    Err(e) if id.is_none() => {
                        eprintln!("error: {}: {e}", venue.id);
                        failures += 1;
                    }
                    Err(e) => return Err(e),
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in &rows {
                    if let Some(line) = row.as_str() {
                        println!("{line}");
                    }
                }
            }

            if failures > 0 {
                return Err(format!("{failures} venue(s) have malformed opening hours").into());
            }
        }
        VenueAction::Hours { id, catalog } => {
            let catalog = load_catalog(catalog, &config)?;
            let venue = catalog.venue(&id)?;
            let schedule = venue.schedule()?;
            println!("{}", venue.name);
            for day in DayOfWeek::ALL {
                println!("  {:<14} {}", day.pt_br(), day_hours_label(&schedule, day));
            }
        }
    }
    Ok(())
}

fn status_row(
    venue: &Venue,
    now: chrono::NaiveDateTime,
    json: bool,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let schedule = venue.schedule()?;
    let eval = OperatingHoursEvaluator::new();
    let status = eval.evaluate(&schedule, now);
    let next_opening = eval.next_opening(&schedule, now);

    if json {
        Ok(json!({
            "id": venue.id,
            "name": venue.name,
            "open": status.open,
            "active_interval": status.active_interval,
            "closes_at": status.closes_at(now),
            "next_opening": next_opening,
        }))
    } else {
        Ok(serde_json::Value::String(format!(
            "{}: {}",
            venue.name,
            venue_status_line(&status, now, next_opening)
        )))
    }
}
