//! Command-line interface for rewind_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind Tic-Tac-Toe - tic-tac-toe with a move history you can jump through
#[derive(Parser, Debug)]
#[command(name = "rewind_tui")]
#[command(about = "Tic-tac-toe with a branching move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// List moves latest first
        #[arg(long)]
        descending: bool,
    },

    /// Play the given cells (0-8) and print the resulting game
    Replay {
        /// Cells to play, in order
        #[arg(value_parser = clap::value_parser!(u8).range(0..=8))]
        cells: Vec<u8>,

        /// Print the session view as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["rewind_tui", "replay", "0", "4", "8", "--json"])
            .expect("valid args");
        match cli.command {
            Command::Replay { cells, json } => {
                assert_eq!(cells, vec![0, 4, 8]);
                assert!(json);
            }
            Command::Play { .. } => panic!("expected replay"),
        }
    }

    #[test]
    fn test_replay_rejects_cell_out_of_range() {
        assert!(Cli::try_parse_from(["rewind_tui", "replay", "9"]).is_err());
    }

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from(["rewind_tui", "play", "--descending"])
            .expect("valid args");
        assert!(matches!(
            cli.command,
            Command::Play { config: None, descending: true }
        ));
    }
}
