// TUI module for interactive search interface
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::engine::EngineHandle;

/// Run the interactive TUI against the engine behind `handle`
pub fn run_interactive(handle: EngineHandle) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(handle);

    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
