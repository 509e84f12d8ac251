//! strokectl - command-line editor for the stroke action database
//!
//! Loads the actions file from the config directory, applies one
//! subcommand and saves the result.

use actiondb::{
    ActionDb, FileSnapshotStore, LogNotifier, Persister, SaveOutcome, SaveTimer, Stroke,
    SystemEffects,
};
use anyhow::{Result, bail};
use clap::Parser;
use config::Settings;
use log::{debug, error};

mod cli;
mod commands;

use cli::Cli;

const CONFIG_DIR_REMEDY: &str =
    "You can change the configuration directory using the -c or --config-dir option.";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config_dir.clone())?;

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli::log_filter(cli.verbosity(settings.verbosity))),
    )
    .format_timestamp_millis()
    .init();

    // Bootstrap config directory
    if let Err(e) = settings.ensure_dir() {
        error!("Failed to initialize config directory: {:#}", e);
    }

    let mut persister = Persister::new(
        FileSnapshotStore::new(settings.actions_path()),
        LogNotifier,
        SaveTimer::from_millis(settings.save_delay_ms),
    )
    .with_remedy(CONFIG_DIR_REMEDY);
    let mut db: ActionDb<Stroke> = persister.load();

    let mut stdout = std::io::stdout().lock();
    commands::run(
        &cli.command,
        &mut db,
        &settings.actions_path(),
        &mut SystemEffects,
        &mut stdout,
    )?;

    match persister.flush(&mut db) {
        Some(SaveOutcome::Failed) => bail!(
            "Couldn't save actions to {}",
            settings.actions_path().display()
        ),
        Some(SaveOutcome::Saved { entries }) => debug!("Wrote {} entries", entries),
        None => {}
    }
    Ok(())
}
