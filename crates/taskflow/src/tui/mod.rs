//! Interactive terminal UI for the task list.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::subscriber::NoSubscriber;

use taskflow_app::Session;

use crate::config::keybindings::KeyBindingsConfig;

mod app;
mod input;
mod keymap;
mod theme;
mod ui;
mod visibility;

pub use self::theme::Theme;

use self::app::App;
use self::keymap::KeyMap;

const TICK_RATE_MS: u64 = 200;

/// Launch the interactive TUI.
pub fn run(session: Session, theme: Theme, keybindings: &KeyBindingsConfig) -> Result<()> {
    let keymap = KeyMap::from_config(keybindings)?;

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    // Tracing output would corrupt the alternate screen.
    let result = tracing::subscriber::with_default(NoSubscriber::default(), || {
        run_event_loop(&mut terminal, session, theme, keymap)
    });

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: Session,
    theme: Theme,
    keymap: KeyMap,
) -> Result<()> {
    let mut app = App::new(session, theme, keymap);
    let tick_rate = Duration::from_millis(TICK_RATE_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout).context("failed to poll terminal events")? {
            if let CrosstermEvent::Key(key) = event::read().context("failed to read terminal event")?
                && key.kind == KeyEventKind::Press
            {
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }
}
