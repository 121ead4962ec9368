//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `dogrecord_core` end to end against a real database.
//! - Keep output line-oriented JSON for quick local sanity checks.

use anyhow::Context;
use clap::Parser;
use dogrecord_core::db::{close_db, open_db_with_config};
use dogrecord_core::{
    core_version, default_log_level, init_logging, DbConfig, DbLocation, DogRecord,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dogrecord")]
#[command(version)]
#[command(about = "Find-or-create dogs in a SQLite table and print every row as JSON")]
struct Cli {
    /// Dogs to find or create, as `name:breed` (defaults to `Fido:Beagle`)
    #[arg(value_parser = parse_pair)]
    pairs: Vec<(String, String)>,

    /// Database file; overrides DOGRECORD_DB_PATH (in-memory when neither is set)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "DOGRECORD_LOG_DIR")]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "DOGRECORD_LOG_LEVEL")]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }
    log::info!("event=cli_start module=cli status=ok version={}", core_version());

    let mut config = DbConfig::from_env()?;
    if let Some(path) = cli.database {
        config.location = DbLocation::File(path);
    }

    let mut pairs = cli.pairs;
    if pairs.is_empty() {
        pairs.push(("Fido".to_string(), "Beagle".to_string()));
    }

    let mut conn = open_db_with_config(&config).context("failed to open database")?;
    DogRecord::create_table(&conn)?;
    for (name, breed) in &pairs {
        DogRecord::find_or_create_by(&mut conn, name, breed)
            .with_context(|| format!("failed to find or create `{name}:{breed}`"))?;
    }
    for dog in DogRecord::get_all(&conn)? {
        println!("{}", serde_json::to_string(&dog)?);
    }
    close_db(conn)?;
    Ok(())
}

fn parse_pair(arg: &str) -> Result<(String, String), String> {
    match arg.split_once(':') {
        Some((name, breed)) => Ok((name.to_string(), breed.to_string())),
        None => Err(format!("expected `name:breed`, got `{arg}`")),
    }
}
