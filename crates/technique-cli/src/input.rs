//! Line-oriented terminal input.
//!
//! This module provides:
//! - The `Prompter` seam used by every interactive step
//! - `LineConsole`, a line reader over any `BufRead`/`Write` pair
//! - `TtyConsole`, which adds dialoguer widgets on a real terminal
//! - The multi-line collectors (`read_text_block`, `read_list`)

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::errors::CliError;

/// Marker printed before each list item.
pub const LIST_ITEM_PREFIX: &str = "- ";

/// Number of consecutive empty lines that ends multi-line collection.
pub const BLANK_LINES_TO_FINISH: usize = 2;

/// Source of interactive answers and sink for prompts.
pub trait Prompter {
    /// Print `prompt` (without a newline) and read one line.
    ///
    /// The line terminator is stripped. Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;

    /// Print a full line of text.
    fn say(&mut self, text: &str) -> anyhow::Result<()>;

    /// Ask a yes/no question. Only "y" or "yes" count as yes.
    fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        let answer = self.read_line(&format!("{} (y/n): ", question))?;
        Ok(is_affirmative(answer.as_deref().unwrap_or("")))
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Line-based prompter over arbitrary reader/writer pairs.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Everything written so far.
    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl LineConsole<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        if !prompt.is_empty() {
            write!(self.writer, "{}", prompt)?;
        }
        self.writer.flush()?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
        if read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn say(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }
}

/// Prompter for an interactive terminal.
///
/// Lines are read from stdin; yes/no questions use a dialoguer widget.
pub struct TtyConsole {
    lines: LineConsole<StdinLock<'static>, Stdout>,
}

impl Default for TtyConsole {
    fn default() -> Self {
        Self {
            lines: LineConsole::stdio(),
        }
    }
}

impl Prompter for TtyConsole {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.lines.read_line(prompt)
    }

    fn say(&mut self, text: &str) -> anyhow::Result<()> {
        self.lines.say(text)
    }

    fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(false)
            .interact_opt();
        confirm_answer(answer)
    }
}

/// Map a confirm widget result; Esc reads as "no", an interrupt cancels.
fn confirm_answer(answer: Result<Option<bool>, dialoguer::Error>) -> anyhow::Result<bool> {
    match answer {
        Ok(choice) => Ok(choice.unwrap_or(false)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
            Err(CliError::Cancelled.into())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to read answer: {}", e)),
    }
}

/// Read lines until `BLANK_LINES_TO_FINISH` consecutive empty lines or end of input.
///
/// Empty lines are never part of the result.
fn collect_lines<P: Prompter + ?Sized>(
    prompter: &mut P,
    prefix: &str,
) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut consecutive_blank = 0;

    while let Some(line) = prompter.read_line(prefix)? {
        if line.is_empty() {
            consecutive_blank += 1;
            if consecutive_blank == BLANK_LINES_TO_FINISH {
                break;
            }
        } else {
            consecutive_blank = 0;
            lines.push(line);
        }
    }

    Ok(lines)
}

/// Collect a free-form text block, joined with newlines.
pub fn read_text_block<P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
) -> anyhow::Result<String> {
    prompter.say(prompt)?;
    prompter.say("(Type your text. Press Enter twice consecutively to finish.)")?;
    Ok(collect_lines(prompter, "")?.join("\n"))
}

/// Collect one item per line.
pub fn read_list<P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
) -> anyhow::Result<Vec<String>> {
    prompter.say(prompt)?;
    prompter.say("(Type each item on a new line. Press Enter twice consecutively to finish.)")?;
    collect_lines(prompter, LIST_ITEM_PREFIX)
}

/// Read a single trimmed answer. End of input reads as empty.
pub fn ask<P: Prompter + ?Sized>(prompter: &mut P, prompt: &str) -> anyhow::Result<String> {
    Ok(prompter
        .read_line(prompt)?
        .map(|line| line.trim().to_string())
        .unwrap_or_default())
}
