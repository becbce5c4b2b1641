//! Infer Updater Binary
//!
//! Scheduled entry point that runs one status-inference batch over the
//! whole register. Reads configuration from an optional TOML file
//! (`-f <path>`) merged with `PEDIGREE_*` environment variables.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{error, info};

use pedigree_core::config::RegisterConfig;
use pedigree_core::database::DatabaseConnection;
use pedigree_core::inference::{BatchOptions, InferenceBatch};
use pedigree_core::logging::init_structured_logging;

fn parse_args() -> Result<Option<PathBuf>, String> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None => Ok(None),
        Some("-f") => match args.next() {
            Some(path) => Ok(Some(PathBuf::from(path))),
            None => Err("-f requires a path".to_string()),
        },
        Some("-h") | Some("--help") => Err(String::new()),
        Some(other) => Err(format!("unrecognized argument '{other}'")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_structured_logging("info,pedigree_core=debug");

    let config_path = match parse_args() {
        Ok(path) => path,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("{message}");
            }
            eprintln!("== Pedigree Register (Infer Updater) ==");
            eprintln!("usage: infer-update [-f <config.toml>]");
            std::process::exit(if message.is_empty() { 0 } else { 2 });
        }
    };

    let config = RegisterConfig::load(config_path.as_deref())
        .context("error reading configuration")?;

    let db = DatabaseConnection::connect(&config.database_url)
        .await
        .context("error establishing database connection")?;

    let options = BatchOptions {
        channel: config.channel,
        pass_order: config.pass_order,
    };
    info!(channel = %options.channel, "starting inference batch");

    match InferenceBatch::new(db.pool().clone(), options).run().await {
        Ok(summary) => {
            info!(
                roots = summary.roots,
                carrier_promotions = summary.carrier_promotions,
                clear_promotions = summary.clear_promotions,
                duration_ms = (summary.finished_at - summary.started_at).num_milliseconds(),
                "inference batch complete"
            );
            db.close().await;
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "inference batch failed, rolled back");
            db.close().await;
            Err(err.into())
        }
    }
}
