mod editor_utils;
mod paths_mode;
mod settings_mode;
mod today_mode;

pub use paths_mode::paths_mode;
pub use settings_mode::settings_mode;
pub use today_mode::today_mode;
