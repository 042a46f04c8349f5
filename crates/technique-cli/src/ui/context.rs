//! Terminal capabilities that decide how prompts and messages are decorated.

use std::io::IsTerminal;

/// What the attached terminal supports.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Badges and banners instead of `key=value` lines
    pub pretty: bool,
    /// Whether ANSI styling is emitted
    pub color: bool,
    /// Whether unicode symbols are used in badges and rules
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
}

impl UiContext {
    /// Probe stdout and the environment, then apply `--no-color` and `--ascii`.
    pub fn from_env(no_color_flag: bool, ascii_flag: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let dumb = std::env::var("TERM").is_ok_and(|term| term == "dumb");
        let pretty = is_tty && !dumb;

        Self {
            is_tty,
            pretty,
            color: pretty && !no_color_flag && std::env::var_os("NO_COLOR").is_none(),
            unicode: !ascii_flag,
            width: terminal_width().unwrap_or(80),
        }
    }

    /// Plain, colorless context.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            is_tty: false,
            pretty: false,
            color: false,
            unicode: false,
            width: 80,
        }
    }

    /// Whether dialoguer widgets can drive the prompts.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

/// Columns from `COLUMNS`, else from the terminal driver.
fn terminal_width() -> Option<usize> {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|&cols| cols > 0);
    if from_env.is_some() {
        return from_env;
    }

    #[cfg(unix)]
    {
        let mut size = libc::winsize {
            ws_row: 0,
            ws_col: 0,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };
        // SAFETY: TIOCGWINSZ only writes into the winsize we own
        let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };
        if rc == 0 && size.ws_col > 0 {
            return Some(size.ws_col as usize);
        }
    }

    None
}
