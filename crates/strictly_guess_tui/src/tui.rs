//! Terminal setup and the event loop.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::app::App;
use crate::ui;

/// Runs the game in the terminal until the player quits.
///
/// The terminal is restored on every exit path once raw mode is on.
#[instrument(skip(app))]
pub fn run_tui(mut app: App) -> Result<()> {
    info!("Starting Strictly Guess TUI");

    enable_raw_mode()?;
    let res = run_on_alternate_screen(&mut app);
    let restored = teardown(vec![
        Box::new(disable_raw_mode) as TeardownStep,
        Box::new(|| execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)) as TeardownStep,
    ]);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    if let Err(err) = &restored {
        error!(error = %err, "Failed to restore terminal");
    }
    info!(attempts = app.game().guesses().len(), "TUI closed");
    res.and(restored.map_err(Into::into))
}

fn run_on_alternate_screen(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    run_app(&mut terminal, app)
}

/// A terminal restore step.
type TeardownStep = Box<dyn FnOnce() -> io::Result<()>>;

/// Runs every step, even after a failure, and returns the first error.
fn teardown(steps: Vec<TeardownStep>) -> io::Result<()> {
    steps
        .into_iter()
        .map(|step| step())
        .fold(Ok(()), |first, result| first.and(result))
}

/// Redraws when the app changes and feeds key presses to it.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut drawn: Option<u64> = None;

    while !app.should_quit() {
        if drawn != Some(app.revision()) {
            terminal.draw(|f| ui::draw(f, &*app))?;
            drawn = Some(app.revision());
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Resize(..) => drawn = None,
                _ => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_teardown_runs_all_steps_after_failure() {
        let ran = Rc::new(Cell::new(0));
        let (first, second) = (Rc::clone(&ran), Rc::clone(&ran));

        let result = teardown(vec![
            Box::new(move || {
                first.set(first.get() + 1);
                Err(io::Error::other("raw mode"))
            }) as TeardownStep,
            Box::new(move || {
                second.set(second.get() + 1);
                Err(io::Error::other("alternate screen"))
            }) as TeardownStep,
        ]);

        assert_eq!(ran.get(), 2);
        assert_eq!(result.map_err(|e| e.to_string()), Err("raw mode".to_string()));
    }

    #[test]
    fn test_teardown_ok_when_every_step_succeeds() {
        let ok = || -> io::Result<()> { Ok(()) };
        assert!(teardown(vec![Box::new(ok) as TeardownStep, Box::new(ok) as TeardownStep]).is_ok());
    }
}
