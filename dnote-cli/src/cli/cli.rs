use crate::render::ColorMode;
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};

/// dnote — creates today's daily note from a template
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Prints the vault directory
    #[arg(long, short, exclusive = true)]
    pub path: bool,
    /// Create the note for this day instead of today (e.g. `dnote --date 2024-03-15`).
    #[arg(long, env = "DNOTE_DATE")]
    pub date: Option<NaiveDate>,
    /// Opens the daily note in your $EDITOR once it exists.
    #[arg(long, short)]
    pub edit: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Shows diagnostic output on stderr (`-v` debug, `-vv` trace).
    /// `DNOTE_LOG` takes precedence when set.
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Creates the daily note if it does not exist yet (the default).
    Today,
    /// Prints the template and daily note paths without touching the vault.
    Paths,
    /// Shows the settings, or changes one of them.
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Changes one setting and saves it (e.g. `dnote settings set year-folder off`).
    Set {
        /// Setting key, as listed by `dnote settings`.
        key: String,
        /// New value. Toggles take on/off.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_today() {
        let cli = Cli::try_parse_from(["dnote"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.edit);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_date_and_verbosity() {
        let cli = Cli::try_parse_from(["dnote", "--date", "2024-03-15", "-vv", "today"]).unwrap();
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Command::Today)));
    }

    #[test]
    fn settings_set_accepts_empty_values() {
        let cli = Cli::try_parse_from(["dnote", "settings", "set", "file-name-suffix", ""]).unwrap();
        match cli.command {
            Some(Command::Settings {
                action: Some(SettingsAction::Set { key, value }),
            }) => {
                assert_eq!(key, "file-name-suffix");
                assert_eq!(value, "");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(Cli::try_parse_from(["dnote", "--date", "15/03/2024"]).is_err());
    }
}
