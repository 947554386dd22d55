use std::io::{self, stdout};

use ratatui::crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};

/// Keeps the terminal in raw mode on the alternate screen while alive.
///
/// Dropping it, also while unwinding from a panic, puts the terminal back.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { restored: false };
        stdout().execute(EnterAlternateScreen)?;
        Ok(guard)
    }

    /// Puts the terminal back, reporting the first step that failed.
    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored {
            let _ = restore_terminal();
        }
    }
}

type Step<'a> = &'a dyn Fn() -> io::Result<()>;

fn restore_terminal() -> io::Result<()> {
    let leave_alternate_screen = || stdout().execute(LeaveAlternateScreen).map(|_| ());
    let steps: [Step; 2] = [&disable_raw_mode, &leave_alternate_screen];
    run_all(&steps)
}

// Runs every step even after one of them fails, and returns the first error.
fn run_all(steps: &[Step]) -> io::Result<()> {
    let mut result = Ok(());
    for step in steps {
        let outcome = step();
        if result.is_ok() {
            result = outcome;
        }
    }
    result
}
