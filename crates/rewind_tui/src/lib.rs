//! Terminal front end for Rewind Tic-Tac-Toe.
//!
//! Renders a [`rewind_tictactoe::GameSession`] with ratatui and forwards key
//! presses to it. The session is re-read after every key.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod replay;
pub mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
