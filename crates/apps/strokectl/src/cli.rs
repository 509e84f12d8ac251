//! CLI schema for the strokectl binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and edit the stroke action database.
#[derive(Debug, Parser)]
#[command(name = "strokectl", version)]
pub struct Cli {
    /// Use a different configuration directory
    #[arg(short = 'c', long = "config-dir", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Increase diagnostic output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all entries
    List,
    /// Show one entry in detail
    Show { id: u32 },
    /// Add a named shell command with no stroke bound yet
    Add { name: String, cmd: String },
    /// Remove an entry
    Remove { id: u32 },
    /// Rename an entry
    Rename { id: u32, name: String },
    /// Replace an entry's action with a shell command
    SetCommand { id: u32, cmd: String },
    /// Run an entry's action as if its stroke had been recognized
    Run { id: u32 },
    /// Print database statistics
    Stats,
}

impl Cli {
    /// Verbosity from the command line, falling back to the settings file
    pub fn verbosity(&self, configured: u8) -> u8 {
        if self.verbose > 0 {
            self.verbose
        } else {
            configured
        }
    }
}

/// Default log filter for a verbosity level
pub fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["strokectl", "add", "Terminal", "xterm"]).unwrap();
        match cli.command {
            Command::Add { name, cmd } => {
                assert_eq!(name, "Terminal");
                assert_eq!(cmd, "xterm");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["strokectl", "list", "-c", "/tmp/strokes", "-vv"]).unwrap();
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/strokes")));
        assert_eq!(cli.verbosity(0), 2);
    }

    #[test]
    fn test_verbosity_falls_back_to_settings() {
        let cli = Cli::try_parse_from(["strokectl", "stats"]).unwrap();
        assert_eq!(cli.verbosity(1), 1);
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(0), "warn");
        assert_eq!(log_filter(1), "info");
        assert_eq!(log_filter(5), "debug");
    }

    #[test]
    fn test_set_command_name() {
        let cli = Cli::try_parse_from(["strokectl", "set-command", "3", "firefox"]).unwrap();
        assert!(matches!(cli.command, Command::SetCommand { id: 3, .. }));
    }
}
