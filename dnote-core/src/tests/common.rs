use crate::Config;
use crate::settings::Settings;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(vault_dir: PathBuf, reference_date: Option<NaiveDate>) -> Config {
    Config {
        vault_dir,
        editor: None,
        reference_date: reference_date.unwrap_or(Local::now().date_naive()),
        settings: Settings {
            template_file_path: "Templates/Daily".to_string(),
            new_file_path: "Daily".to_string(),
            ..Default::default()
        },
        load_error: None,
    }
}

/// 09:30 UTC on the given day.
pub fn fixed_moment(year: i32, month: u32, day: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .expect("valid offset")
        .with_ymd_and_hms(year, month, day, 9, 30, 0)
        .single()
        .expect("valid moment")
}
