use crate::config::Config;
use crate::constants::MARKETPLACE_TZ;
use crate::errors::{AppError, AppResult};
use crate::fetcher::{fetch_day, iterate_days};
use crate::models::{RunMeta, TenderCollection};
use crate::normalizer::normalize_tender;
use crate::publisher::write_outputs;
use crate::utils::format_duration;
use chrono::{SecondsFormat, Utc};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parses command-line arguments and executes the sync workflow.
///
/// This function handles two subcommands:
/// - `sync`: Run from environment configuration, with optional window flags
/// - `toml`: Run using a TOML configuration file
///
/// Both subcommands execute the same workflow: resolve the date window,
/// fetch the daily listing for every day in it, normalize and deduplicate
/// the records, and publish the output artifacts.
///
/// # Returns
///
/// Returns `Ok(())` if all operations complete successfully. Returns an
/// error if:
/// - The ticket is missing or a window date is malformed
/// - A daily request fails
/// - Writing an output artifact fails
pub async fn cli() -> AppResult<()> {
    let cmd = Command::new("chilecompra-sync")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("sync")
                .about("Fetch, normalize, and publish tenders for a date window")
                .after_help("Reads CHILECOMPRA_TICKET from the environment.\nDefaults to yesterday through today when no window is given.\nExample:\n  chilecompra-sync sync -s 2024-01-03 -e 2024-01-05")
                .arg(
                    Arg::new("start")
                        .short('s')
                        .long("start")
                        .help("Window start (YYYY-MM-DD or ISO-8601 date-time)")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("end")
                        .short('e')
                        .long("end")
                        .help("Window end (YYYY-MM-DD or ISO-8601 date-time)")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("toml")
                .about("Run using a TOML configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML config file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        );

    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("sync", sub)) => {
            let start = sub.get_one::<String>("start").cloned();
            let end = sub.get_one::<String>("end").cloned();

            let config = Config::from_env(start, end)?;
            run_sync(&config).await?;
        }
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .expect("config is required");

            let config = Config::from_file(config_path)?;
            run_sync(&config).await?;
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

async fn run_sync(config: &Config) -> AppResult<()> {
    let started = Instant::now();
    let days = iterate_days(config.start_date, config.end_date);

    info!(
        start = %config.start_date.date_naive(),
        end = %config.end_date.date_naive(),
        days = days.len(),
        "Starting tender sync"
    );

    let client = reqwest::Client::new();
    let mut collection = TenderCollection::new();

    // One request at a time, in day order; later days overwrite earlier
    // records sharing a tender id. All days are fetched before anything is
    // written, so a failed day leaves no partial output behind.
    for day in days {
        let listing = fetch_day(&client, &config.api_url, &config.ticket, day).await?;
        for raw in &listing.listado {
            match normalize_tender(raw) {
                Ok(tender) => collection.insert(tender),
                // Records missing required fields are dropped, run continues
                Err(_) => continue,
            }
        }
        info!(day = %day, listed = listing.listado.len(), "Fetched daily listing");
    }

    let tenders = collection.into_sorted();
    let meta = RunMeta {
        timestamp: Utc::now()
            .with_timezone(&MARKETPLACE_TZ)
            .to_rfc3339_opts(SecondsFormat::AutoSi, false),
        total: tenders.len(),
    };

    write_outputs(&tenders, &meta, &config.data_path, &config.meta_path).await?;

    println!(
        "Generated {} tenders in {}",
        meta.total,
        config.data_path.display()
    );
    info!(
        total = meta.total,
        elapsed = %format_duration(started.elapsed()),
        "Sync completed"
    );

    Ok(())
}
