//! Raw-mode terminal setup for the quiz UI.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type QuizTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode on the alternate screen. The terminal is restored on panic.
pub fn init() -> io::Result<QuizTerminal> {
    install_panic_hook();
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    log::debug!("Terminal initialized");
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    log::debug!("Terminal restored");
    Ok(())
}

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        if let Some(message) = restore_failure(restore()) {
            log::error!("{}", message);
            eprintln!("{}", message);
        }
        original_hook(panic_info);
    }));
}

fn restore_failure(result: io::Result<()>) -> Option<String> {
    result
        .err()
        .map(|err| format!("failed to restore terminal after panic: {}", err))
}
