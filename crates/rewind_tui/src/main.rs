//! Rewind Tic-Tac-Toe - terminal front end.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tui::{
    App, Cli, Command, TuiConfig,
    replay::{render_json, render_text, replay},
    ui,
};
use rewind_tictactoe::MoveOrder;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, descending } => run_play(config, descending),
        Command::Replay { cells, json } => run_replay(cells, json),
    }
}

/// Run the interactive terminal game
fn run_play(config_path: Option<PathBuf>, descending: bool) -> Result<()> {
    let mut config = match config_path {
        Some(path) => TuiConfig::from_file(path)?,
        None => TuiConfig::default(),
    };
    if descending {
        config = config.with_move_order(MoveOrder::Descending);
    }

    // Log to file to avoid interfering with the alternate screen
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting Rewind Tic-Tac-Toe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(&config));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            info!(moves = app.session().history().len() - 1, "Session ended");
            return Ok(());
        }
    }
}

/// Replay cells and print the result
fn run_replay(cells: Vec<u8>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cells: Vec<usize> = cells.into_iter().map(usize::from).collect();
    let view = replay(&cells).view();

    let output = if json {
        render_json(&view)?
    } else {
        render_text(&view)
    };
    println!("{}", output);
    Ok(())
}
