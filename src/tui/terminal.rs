use std::io;

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Owns the terminal while the TUI runs and puts it back afterwards
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    restored: bool,
}

impl TerminalManager {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal, restored: false })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<io::Stdout>> {
        &mut self.terminal
    }

    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        let terminal = &mut self.terminal;
        run_once(&mut self.restored, || {
            disable_raw_mode().context("Failed to disable raw mode")?;
            execute!(terminal.backend_mut(), LeaveAlternateScreen)
                .context("Failed to leave alternate screen")?;
            Ok(())
        })?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

/// Run `step` unless `done` is set; `done` is only set when `step` succeeds
fn run_once(done: &mut bool, step: impl FnOnce() -> Result<()>) -> Result<()> {
    if *done {
        return Ok(());
    }
    step()?;
    *done = true;
    Ok(())
}

// Panics and early returns still leave the shell usable
impl Drop for TerminalManager {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
