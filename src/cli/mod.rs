//! CLI 模块

pub mod init;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(version)]
#[command(about = "In-memory to-do list for the terminal")]
pub struct Cli {
    /// Color theme (Dark, Light, Dracula, Nord); overrides the config file
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Start with an empty list instead of the example tasks
    #[arg(long, global = true)]
    pub empty: bool,

    /// Path to the config file (defaults to ~/.tasklist/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive task list (default)
    Tui,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_defaults_to_tui() {
        let cli = Cli::try_parse_from(["tasklist"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.empty);
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["tasklist", "tui", "--empty", "--theme", "Nord"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Tui));
        assert!(cli.empty);
        assert_eq!(cli.theme.as_deref(), Some("Nord"));
    }

    #[test]
    fn test_init_force() {
        let cli =
            Cli::try_parse_from(["tasklist", "--config", "/tmp/t.toml", "init", "--force"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Init { force: true }));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/t.toml")));
    }
}
