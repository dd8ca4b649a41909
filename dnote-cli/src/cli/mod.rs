mod cli;

pub use cli::{Cli, Command, SettingsAction};
