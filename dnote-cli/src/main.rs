mod cli;
mod cli_modes;
mod logging;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use dnote_core::{Config, DailyNotes, TomlSettingsStore};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dnote: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let store = TomlSettingsStore::discover();
    let mut config = Config::load_from(&store)?;
    if let Some(date) = cli.date {
        config.reference_date = date;
    }

    let renderer = Renderer::new(Some(RenderOptions {
        use_color: cli.color.use_color(),
    }));

    if cli.path {
        renderer.print_info(&format!("{}", config.vault_dir.display()));
        return Ok(());
    }

    match &cli.command {
        None | Some(Command::Today) => {
            let daily_notes = DailyNotes::with_config(config)?;
            cli_modes::today_mode(&cli, &renderer, &daily_notes)
        }
        Some(Command::Paths) => {
            cli_modes::paths_mode(&renderer, &DailyNotes::unopened(config));
            Ok(())
        }
        Some(Command::Settings { action }) => {
            let mut daily_notes = DailyNotes::unopened(config);
            cli_modes::settings_mode(action.as_ref(), &renderer, &mut daily_notes, &store)
        }
    }
}
