//! Terminal UI for playing a game.

mod app;
mod input;
mod ui;

use crate::config::Settings;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use app::App;

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*settings.show_dialog());
    let res = run_app(&mut terminal, &mut app, *settings.show_hints());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(status = %app.game().status(), "Terminal UI closed");
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    show_hints: bool,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app, show_hints))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle(input::action_for(key, app.dialog().is_some()));
        }
    }
    Ok(())
}
