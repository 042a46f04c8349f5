//! Technique CLI - interactive data entry for technique records
//!
//! Prompts for each field of a technique record, shows the result for
//! review and re-editing, and writes it to `<technique_id>.json`.

mod assemble;
mod cli;
mod config;
mod constants;
mod edit;
mod errors;
mod input;
mod review;
mod ui;

use clap::Parser;
use technique_core::store::write_record;

use crate::assemble::{assemble, Defaults};
use crate::cli::Cli;
use crate::config::{resolve_settings, Settings};
use crate::constants::exit_codes;
use crate::errors::CliError;
use crate::input::{LineConsole, Prompter, TtyConsole};
use crate::review::review;
use crate::ui::{badge, header, print_error, Badge, UiContext};

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::from_env(cli.no_color, cli.ascii);

    if let Err(e) = init_tracing(cli.quiet, cli.verbose) {
        print_error(&ui, &e.to_string(), None);
        std::process::exit(exit_codes::FAILURE);
    }

    if let Err(e) = run(&cli, &ui) {
        let (code, hint) = match e.downcast_ref::<CliError>() {
            Some(cli_err) => (cli_err.exit_code(), cli_err.hint()),
            None => (exit_codes::FAILURE, None),
        };
        print_error(&ui, &format!("{:#}", e), hint);
        std::process::exit(code);
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TECHNIQUE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Exit with the cancelled status on Ctrl-C, reporting it like any other error.
/// Records are only ever persisted from a complete temp file, so an interrupt
/// never leaves a partial record behind.
fn install_interrupt_handler(ui: &UiContext) -> anyhow::Result<()> {
    let ui = ui.clone();
    ctrlc::set_handler(move || {
        eprintln!();
        print_error(&ui, &CliError::Cancelled.to_string(), None);
        std::process::exit(exit_codes::CANCELLED);
    })
    .map_err(|e| anyhow::anyhow!("Failed to install Ctrl-C handler: {}", e))
}

fn run(cli: &Cli, ui: &UiContext) -> anyhow::Result<()> {
    let settings = resolve_settings(cli)?;
    install_interrupt_handler(ui)?;

    let mut prompter: Box<dyn Prompter> = if ui.is_interactive() {
        Box::new(TtyConsole::default())
    } else {
        Box::new(LineConsole::stdio())
    };

    session(prompter.as_mut(), &settings, ui, cli.quiet)
}

/// Assemble, review, validate, and write one record.
fn session(
    prompter: &mut dyn Prompter,
    settings: &Settings,
    ui: &UiContext,
    quiet: bool,
) -> anyhow::Result<()> {
    prompter.say(&header(ui, "JSON Data Entry"))?;
    prompter.say("")?;

    let defaults = Defaults::new(
        settings.author.clone(),
        chrono::Local::now().date_naive(),
    );
    let mut record = assemble(&mut *prompter, &defaults)?;
    review(&mut *prompter, &mut record, ui)?;

    record.validate().map_err(|e| {
        CliError::invalid_input_with_hint(
            format!("{}; nothing was written", e),
            "Run again and enter a technique_id such as T1003.",
        )
    })?;

    let path = write_record(&settings.output_dir, &record)?;
    tracing::info!(path = %path.display(), "record saved");

    if !quiet {
        let message = format!("JSON data saved to {}", path.display());
        if ui.pretty {
            prompter.say(&badge(ui, Badge::Ok, &message))?;
        } else {
            prompter.say("")?;
            prompter.say(&message)?;
        }
    }
    Ok(())
}
