//! Moment-style date formatting (English locale).
//!
//! Patterns use the token vocabulary of moment.js: `YYYY-MM-DD`, `dddd, MMMM Do`,
//! `[Week] W`, `LL` and so on. Formatting never fails: anything that is not a
//! recognised token is copied to the output as literal text.
//!
//! ```
//! # use chrono::{FixedOffset, TimeZone};
//! # use dnote_core::date_format::format_date;
//! let moment = FixedOffset::east_opt(0)
//!     .unwrap()
//!     .with_ymd_and_hms(2024, 3, 15, 9, 5, 0)
//!     .unwrap();
//!
//! assert_eq!(format_date("MM-DD-YYYY", &moment), "03-15-2024");
//! assert_eq!(format_date("dddd, MMMM Do", &moment), "Friday, March 15th");
//! ```

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike, Weekday};
use std::str::FromStr;
use strum_macros::{AsRefStr, EnumString};

/// Pattern used when the configured one is empty.
pub const DEFAULT_DATE_FORMAT: &str = "MM-DD-YYYY";

pub(crate) const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const WEEKDAYS_MIN: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Localised shortcuts and their `en` expansions, longest first.
const LONG_DATE_FORMATS: [(&str, &str); 10] = [
    ("LTS", "h:mm:ss A"),
    ("LT", "h:mm A"),
    ("LLLL", "dddd, MMMM D, YYYY h:mm A"),
    ("LLL", "MMMM D, YYYY h:mm A"),
    ("LL", "MMMM D, YYYY"),
    ("L", "MM/DD/YYYY"),
    ("llll", "ddd, MMM D, YYYY h:mm A"),
    ("lll", "MMM D, YYYY h:mm A"),
    ("ll", "MMM D, YYYY"),
    ("l", "M/D/YYYY"),
];

/// Candidate token texts in matching order. The first candidate that prefixes the
/// remaining pattern wins, so longer spellings of a token come before shorter ones.
const TOKEN_CANDIDATES: &[&str] = &[
    "Hmmss", "Hmm", "hmmss", "hmm", "Mo", "MMMM", "MMM", "MM", "M", "Do", "DDDo", "DDDD",
    "DDD", "DD", "D", "dddd", "ddd", "dd", "do", "d", "wo", "ww", "w", "Wo", "WW", "W", "Qo",
    "Q", "NNNNN", "NNNN", "NNN", "NN", "N", "YYYYYY", "YYYYY", "YYYY", "YY", "yyyy", "yyy",
    "yy", "yo", "y", "ggggg", "gggg", "gg", "GGGGG", "GGGG", "GG", "e", "E", "a", "A", "hh",
    "h", "HH", "H", "kk", "k", "mm", "m", "ss", "s", "SSSSSSSSS", "SSSSSSSS", "SSSSSSS",
    "SSSSSS", "SSSSS", "SSSS", "SSS", "SS", "S", "x", "X", "zz", "z", "ZZ", "Z",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
pub enum Token {
    #[strum(serialize = "Y")]
    Year,
    #[strum(serialize = "YY")]
    YearTwoDigit,
    #[strum(serialize = "YYYY")]
    YearFourDigit,
    #[strum(serialize = "YYYYY")]
    YearFiveDigit,
    #[strum(serialize = "YYYYYY")]
    YearSigned,
    #[strum(serialize = "y")]
    EraYear,
    #[strum(serialize = "yo")]
    EraYearOrdinal,
    #[strum(serialize = "yy")]
    EraYearTwoDigit,
    #[strum(serialize = "yyy")]
    EraYearThreeDigit,
    #[strum(serialize = "yyyy")]
    EraYearFourDigit,
    #[strum(serialize = "N", serialize = "NN", serialize = "NNN", serialize = "NNNNN")]
    EraAbbr,
    #[strum(serialize = "NNNN")]
    EraName,
    #[strum(serialize = "Q")]
    Quarter,
    #[strum(serialize = "Qo")]
    QuarterOrdinal,
    #[strum(serialize = "M")]
    Month,
    #[strum(serialize = "Mo")]
    MonthOrdinal,
    #[strum(serialize = "MM")]
    MonthPadded,
    #[strum(serialize = "MMM")]
    MonthShort,
    #[strum(serialize = "MMMM")]
    MonthLong,
    #[strum(serialize = "D")]
    DayOfMonth,
    #[strum(serialize = "Do")]
    DayOfMonthOrdinal,
    #[strum(serialize = "DD")]
    DayOfMonthPadded,
    #[strum(serialize = "DDD")]
    DayOfYear,
    #[strum(serialize = "DDDo")]
    DayOfYearOrdinal,
    #[strum(serialize = "DDDD")]
    DayOfYearPadded,
    #[strum(serialize = "d")]
    Weekday,
    #[strum(serialize = "do")]
    WeekdayOrdinal,
    #[strum(serialize = "dd")]
    WeekdayMin,
    #[strum(serialize = "ddd")]
    WeekdayShort,
    #[strum(serialize = "dddd")]
    WeekdayLong,
    #[strum(serialize = "e")]
    LocaleWeekday,
    #[strum(serialize = "E")]
    IsoWeekday,
    #[strum(serialize = "w")]
    LocaleWeek,
    #[strum(serialize = "wo")]
    LocaleWeekOrdinal,
    #[strum(serialize = "ww")]
    LocaleWeekPadded,
    #[strum(serialize = "W")]
    IsoWeek,
    #[strum(serialize = "Wo")]
    IsoWeekOrdinal,
    #[strum(serialize = "WW")]
    IsoWeekPadded,
    #[strum(serialize = "gg")]
    LocaleWeekYearTwoDigit,
    #[strum(serialize = "gggg")]
    LocaleWeekYear,
    #[strum(serialize = "ggggg")]
    LocaleWeekYearFiveDigit,
    #[strum(serialize = "GG")]
    IsoWeekYearTwoDigit,
    #[strum(serialize = "GGGG")]
    IsoWeekYear,
    #[strum(serialize = "GGGGG")]
    IsoWeekYearFiveDigit,
    #[strum(serialize = "H")]
    Hour,
    #[strum(serialize = "HH")]
    HourPadded,
    #[strum(serialize = "h")]
    Hour12,
    #[strum(serialize = "hh")]
    Hour12Padded,
    #[strum(serialize = "k")]
    Hour24,
    #[strum(serialize = "kk")]
    Hour24Padded,
    #[strum(serialize = "Hmm")]
    HourMinute,
    #[strum(serialize = "Hmmss")]
    HourMinuteSecond,
    #[strum(serialize = "hmm")]
    Hour12Minute,
    #[strum(serialize = "hmmss")]
    Hour12MinuteSecond,
    #[strum(serialize = "m")]
    Minute,
    #[strum(serialize = "mm")]
    MinutePadded,
    #[strum(serialize = "s")]
    Second,
    #[strum(serialize = "ss")]
    SecondPadded,
    #[strum(serialize = "a")]
    MeridiemLower,
    #[strum(serialize = "A")]
    MeridiemUpper,
    #[strum(serialize = "Z")]
    Offset,
    #[strum(serialize = "ZZ")]
    OffsetCompact,
    #[strum(serialize = "z", serialize = "zz")]
    ZoneName,
    #[strum(serialize = "X")]
    UnixSeconds,
    #[strum(serialize = "x")]
    UnixMillis,
}

/// One piece of a tokenised pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatItem {
    Token(Token),
    /// Fractional seconds, `S` repeated n times.
    Fraction(usize),
    Literal(String),
}

/// Formats `moment` with a moment-style `pattern`.
pub fn format_date(pattern: &str, moment: &DateTime<FixedOffset>) -> String {
    let pattern = if pattern.is_empty() {
        DEFAULT_DATE_FORMAT
    } else {
        pattern
    };

    tokenize(&expand_long_formats(pattern))
        .iter()
        .map(|item| match item {
            FormatItem::Token(token) => render_token(*token, moment),
            FormatItem::Fraction(digits) => render_fraction(*digits, moment),
            FormatItem::Literal(text) => text.clone(),
        })
        .collect()
}

/// Replaces `L`, `LL`, `LT`... with their English definitions, leaving bracketed
/// and backslash-escaped text alone.
pub fn expand_long_formats(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '[' {
            if let Some(end) = literal_block_end(&chars, i) {
                out.extend(&chars[i..=end]);
                i = end + 1;
                continue;
            }
        }
        if chars[i] == '\\' {
            out.push('\\');
            i += 1;
            if let Some(shortcut) = match_long_format(&chars[i..]) {
                out.push_str(shortcut.0);
                i += shortcut.0.len();
            }
            continue;
        }
        match match_long_format(&chars[i..]) {
            Some((shortcut, expansion)) => {
                out.push_str(expansion);
                i += shortcut.len();
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}

fn match_long_format(rest: &[char]) -> Option<(&'static str, &'static str)> {
    LONG_DATE_FORMATS
        .iter()
        .find(|(shortcut, _)| starts_with(rest, shortcut))
        .copied()
}

/// Splits a pattern into tokens and literal runs.
pub fn tokenize(pattern: &str) -> Vec<FormatItem> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut items = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '[' {
            if let Some(end) = literal_block_end(&chars, i) {
                push_literal(&mut items, chars[i + 1..end].iter().collect());
                i = end + 1;
                continue;
            }
        }

        if chars[i] == '\\' {
            // The escaped token is emitted verbatim; a trailing backslash disappears.
            i += 1;
            if i < chars.len() {
                let len = token_len(&chars[i..]);
                let text: String = chars[i..i + len].iter().collect();
                push_literal(&mut items, text.replace('\\', ""));
                i += len;
            }
            continue;
        }

        let len = token_len(&chars[i..]);
        let text: String = chars[i..i + len].iter().collect();
        i += len;

        if text.chars().all(|c| c == 'S') {
            items.push(FormatItem::Fraction(text.len()));
        } else if let Ok(token) = Token::from_str(&text) {
            items.push(FormatItem::Token(token));
        } else {
            push_literal(&mut items, text);
        }
    }
    items
}

fn push_literal(items: &mut Vec<FormatItem>, text: String) {
    if text.is_empty() {
        return;
    }
    if let Some(FormatItem::Literal(previous)) = items.last_mut() {
        previous.push_str(&text);
    } else {
        items.push(FormatItem::Literal(text));
    }
}

/// Index of the `]` closing the literal block opened at `start`: the last `]`
/// before the next `[`, if any.
fn literal_block_end(chars: &[char], start: usize) -> Option<usize> {
    let limit = chars[start + 1..]
        .iter()
        .position(|c| *c == '[')
        .map_or(chars.len(), |p| start + 1 + p);
    chars[start + 1..limit]
        .iter()
        .rposition(|c| *c == ']')
        .map(|p| start + 1 + p)
}

fn token_len(rest: &[char]) -> usize {
    TOKEN_CANDIDATES
        .iter()
        .find(|candidate| starts_with(rest, candidate))
        .map_or(1, |candidate| candidate.len())
}

fn starts_with(rest: &[char], candidate: &str) -> bool {
    let mut rest = rest.iter();
    candidate.chars().all(|c| rest.next() == Some(&c))
}

fn render_token(token: Token, moment: &DateTime<FixedOffset>) -> String {
    let date = moment.date_naive();
    let year = i64::from(moment.year());
    let weekday = moment.weekday().num_days_from_sunday() as usize;
    let hour = moment.hour();
    let hour12 = if hour % 12 == 0 { 12 } else { hour % 12 };

    match token {
        Token::Year => {
            if year <= 9999 {
                zero_fill(year, 4, false)
            } else {
                format!("+{year}")
            }
        }
        Token::YearTwoDigit => zero_fill(year.rem_euclid(100), 2, false),
        Token::YearFourDigit => zero_fill(year, 4, false),
        Token::YearFiveDigit => zero_fill(year, 5, false),
        Token::YearSigned => zero_fill(year, 6, true),
        Token::EraYear => era_year(year).to_string(),
        Token::EraYearOrdinal => ordinal(era_year(year)),
        Token::EraYearTwoDigit => zero_fill(era_year(year), 2, false),
        Token::EraYearThreeDigit => zero_fill(era_year(year), 3, false),
        Token::EraYearFourDigit => zero_fill(era_year(year), 4, false),
        Token::EraAbbr => String::from(if year > 0 { "AD" } else { "BC" }),
        Token::EraName => String::from(if year > 0 { "Anno Domini" } else { "Before Christ" }),
        Token::Quarter => quarter(moment.month()).to_string(),
        Token::QuarterOrdinal => ordinal(i64::from(quarter(moment.month()))),
        Token::Month => moment.month().to_string(),
        Token::MonthOrdinal => ordinal(i64::from(moment.month())),
        Token::MonthPadded => zero_fill(i64::from(moment.month()), 2, false),
        Token::MonthShort => MONTHS[moment.month0() as usize][..3].to_string(),
        Token::MonthLong => MONTHS[moment.month0() as usize].to_string(),
        Token::DayOfMonth => moment.day().to_string(),
        Token::DayOfMonthOrdinal => ordinal(i64::from(moment.day())),
        Token::DayOfMonthPadded => zero_fill(i64::from(moment.day()), 2, false),
        Token::DayOfYear => moment.ordinal().to_string(),
        Token::DayOfYearOrdinal => ordinal(i64::from(moment.ordinal())),
        Token::DayOfYearPadded => zero_fill(i64::from(moment.ordinal()), 3, false),
        Token::Weekday | Token::LocaleWeekday => weekday.to_string(),
        Token::WeekdayOrdinal => ordinal(weekday as i64),
        Token::WeekdayMin => WEEKDAYS_MIN[weekday].to_string(),
        Token::WeekdayShort => WEEKDAYS[weekday][..3].to_string(),
        Token::WeekdayLong => WEEKDAYS[weekday].to_string(),
        Token::IsoWeekday => moment.weekday().number_from_monday().to_string(),
        Token::LocaleWeek => locale_week(date).0.to_string(),
        Token::LocaleWeekOrdinal => ordinal(i64::from(locale_week(date).0)),
        Token::LocaleWeekPadded => zero_fill(i64::from(locale_week(date).0), 2, false),
        Token::IsoWeek => date.iso_week().week().to_string(),
        Token::IsoWeekOrdinal => ordinal(i64::from(date.iso_week().week())),
        Token::IsoWeekPadded => zero_fill(i64::from(date.iso_week().week()), 2, false),
        Token::LocaleWeekYearTwoDigit => {
            zero_fill(i64::from(locale_week(date).1).rem_euclid(100), 2, false)
        }
        Token::LocaleWeekYear => zero_fill(i64::from(locale_week(date).1), 4, false),
        Token::LocaleWeekYearFiveDigit => zero_fill(i64::from(locale_week(date).1), 5, false),
        Token::IsoWeekYearTwoDigit => {
            zero_fill(i64::from(date.iso_week().year()).rem_euclid(100), 2, false)
        }
        Token::IsoWeekYear => zero_fill(i64::from(date.iso_week().year()), 4, false),
        Token::IsoWeekYearFiveDigit => zero_fill(i64::from(date.iso_week().year()), 5, false),
        Token::Hour => hour.to_string(),
        Token::HourPadded => zero_fill(i64::from(hour), 2, false),
        Token::Hour12 => hour12.to_string(),
        Token::Hour12Padded => zero_fill(i64::from(hour12), 2, false),
        Token::Hour24 => (if hour == 0 { 24 } else { hour }).to_string(),
        Token::Hour24Padded => zero_fill(i64::from(if hour == 0 { 24 } else { hour }), 2, false),
        Token::HourMinute => format!("{hour}{:02}", moment.minute()),
        Token::HourMinuteSecond => format!("{hour}{:02}{:02}", moment.minute(), moment.second()),
        Token::Hour12Minute => format!("{hour12}{:02}", moment.minute()),
        Token::Hour12MinuteSecond => {
            format!("{hour12}{:02}{:02}", moment.minute(), moment.second())
        }
        Token::Minute => moment.minute().to_string(),
        Token::MinutePadded => zero_fill(i64::from(moment.minute()), 2, false),
        Token::Second => moment.second().to_string(),
        Token::SecondPadded => zero_fill(i64::from(moment.second()), 2, false),
        Token::MeridiemLower => String::from(if hour < 12 { "am" } else { "pm" }),
        Token::MeridiemUpper => String::from(if hour < 12 { "AM" } else { "PM" }),
        Token::Offset => offset(moment, ":"),
        Token::OffsetCompact => offset(moment, ""),
        // No time zone database, so there is no abbreviation to print.
        Token::ZoneName => String::new(),
        Token::UnixSeconds => moment.timestamp().to_string(),
        Token::UnixMillis => moment.timestamp_millis().to_string(),
    }
}

fn render_fraction(digits: usize, moment: &DateTime<FixedOffset>) -> String {
    // Millisecond precision; leap seconds report 1000+ ms.
    let millis = format!("{:03}", moment.timestamp_subsec_millis() % 1000);
    format!("{millis:0<9}")[..digits.min(9)].to_string()
}

fn zero_fill(number: i64, width: usize, force_sign: bool) -> String {
    let sign = match (number >= 0, force_sign) {
        (true, true) => "+",
        (true, false) => "",
        (false, _) => "-",
    };
    format!("{sign}{:0width$}", number.unsigned_abs())
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st...
fn ordinal(number: i64) -> String {
    let suffix = if (number % 100) / 10 == 1 {
        "th"
    } else {
        match number % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{number}{suffix}")
}

fn quarter(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

fn era_year(year: i64) -> i64 {
    if year > 0 { year } else { 1 - year }
}

fn offset(moment: &DateTime<FixedOffset>, separator: &str) -> String {
    let seconds = moment.offset().local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("{sign}{:02}{separator}{:02}", minutes / 60, minutes % 60)
}

/// Week number and week-year with weeks starting on Sunday and week 1 being the
/// week that contains January 1st.
pub fn locale_week(date: NaiveDate) -> (u32, i32) {
    let saturday = date.week(Weekday::Sun).last_day();
    ((saturday.ordinal() - 1) / 7 + 1, saturday.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn moment(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, s)
            .unwrap()
    }

    #[test]
    fn formats_default_pattern() {
        let m = moment(2024, 3, 15, 10, 0, 0);
        assert_eq!(format_date("MM-DD-YYYY", &m), "03-15-2024");
        assert_eq!(format_date("YYYY-MM-DD", &m), "2024-03-15");
    }

    #[test]
    fn empty_pattern_uses_default() {
        let m = moment(2024, 3, 15, 10, 0, 0);
        assert_eq!(format_date("", &m), "03-15-2024");
    }

    #[test]
    fn names_and_ordinals() {
        let m = moment(2024, 3, 1, 10, 0, 0); // Friday
        assert_eq!(format_date("dddd, MMMM Do YYYY", &m), "Friday, March 1st 2024");
        assert_eq!(format_date("ddd MMM D", &m), "Fri Mar 1");
        assert_eq!(format_date("dd", &m), "Fr");

        let m = moment(2024, 3, 12, 10, 0, 0);
        assert_eq!(format_date("Do", &m), "12th");
        let m = moment(2024, 3, 22, 10, 0, 0);
        assert_eq!(format_date("Do", &m), "22nd");
        let m = moment(2024, 3, 23, 10, 0, 0);
        assert_eq!(format_date("Do", &m), "23rd");
    }

    #[test]
    fn brackets_and_escapes_are_literal() {
        let m = moment(2024, 3, 15, 10, 0, 0);
        assert_eq!(format_date("[Today is] dddd", &m), "Today is Friday");
        assert_eq!(format_date("\\YYYY YYYY", &m), "YYYY 2024");
        assert_eq!(format_date("[Week] W", &m), "Week 11");
    }

    #[test]
    fn unmatched_bracket_passes_through() {
        let m = moment(2024, 3, 15, 10, 0, 0);
        assert_eq!(format_date("[YYYY", &m), "[2024");
    }

    #[test]
    fn unknown_letters_pass_through() {
        let m = moment(2024, 3, 15, 10, 0, 0);
        assert_eq!(format_date("YYYY_bcfi_MM", &m), "2024_bcfi_03");
        assert_eq!(format_date("[daily] bcfi", &m), "daily bcfi");
    }

    #[test]
    fn time_tokens() {
        let m = moment(2024, 3, 15, 0, 7, 9);
        assert_eq!(format_date("HH:mm:ss", &m), "00:07:09");
        assert_eq!(format_date("h:mm a", &m), "12:07 am");
        assert_eq!(format_date("k", &m), "24");
        assert_eq!(format_date("Hmm", &m), "007");

        let m = moment(2024, 3, 15, 15, 30, 0);
        assert_eq!(format_date("h A", &m), "3 PM");
        assert_eq!(format_date("hmmss", &m), "33000");
    }

    #[test]
    fn long_date_formats_expand() {
        let m = moment(2024, 3, 15, 15, 30, 0);
        assert_eq!(format_date("LL", &m), "March 15, 2024");
        assert_eq!(format_date("L", &m), "03/15/2024");
        assert_eq!(format_date("l", &m), "3/15/2024");
        assert_eq!(format_date("LT", &m), "3:30 PM");
        assert_eq!(format_date("[LL] LL", &m), "LL March 15, 2024");
    }

    #[test]
    fn week_numbers_around_new_year() {
        // Monday 1 Jan 2024: ISO week 1, locale week 1.
        let m = moment(2024, 1, 1, 10, 0, 0);
        assert_eq!(format_date("W w gggg GGGG", &m), "1 1 2024 2024");

        // Sunday 31 Dec 2023 already belongs to locale week 1 of 2024,
        // but to ISO week 52 of 2023.
        let m = moment(2023, 12, 31, 10, 0, 0);
        assert_eq!(format_date("w gggg", &m), "1 2024");
        assert_eq!(format_date("W GGGG", &m), "52 2023");

        // Friday 1 Jan 2021 is ISO week 53 of 2020.
        let m = moment(2021, 1, 1, 10, 0, 0);
        assert_eq!(format_date("WW GG", &m), "53 20");
    }

    #[test]
    fn quarters_days_of_year_and_weekdays() {
        let m = moment(2024, 12, 31, 10, 0, 0); // Tuesday
        assert_eq!(format_date("Q Qo", &m), "4 4th");
        assert_eq!(format_date("DDD DDDD", &m), "366 366");
        assert_eq!(format_date("d E", &m), "2 2");

        let m = moment(2024, 1, 7, 10, 0, 0); // Sunday
        assert_eq!(format_date("d E DDDD", &m), "0 7 007");
    }

    #[test]
    fn offsets_and_timestamps() {
        let m = FixedOffset::east_opt(5 * 3600 + 30 * 60)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 15, 10, 0, 0)
            .unwrap();
        assert_eq!(format_date("Z", &m), "+05:30");
        assert_eq!(format_date("ZZ", &m), "+0530");
        assert_eq!(format_date("z", &m), "");

        let m = moment(1970, 1, 2, 0, 0, 0);
        assert_eq!(format_date("X", &m), "86400");
        assert_eq!(format_date("x", &m), "86400000");
    }

    #[test]
    fn fractional_seconds() {
        let m = moment(2024, 3, 15, 10, 0, 0) + chrono::Duration::milliseconds(123);
        assert_eq!(format_date("S SS SSS SSSS", &m), "1 12 123 1230");
    }

    #[test]
    fn fractional_seconds_stop_at_milliseconds() {
        let m = moment(2024, 3, 15, 10, 0, 0) + chrono::Duration::nanoseconds(123_456_789);
        assert_eq!(format_date("SSSS", &m), "1230");
        assert_eq!(format_date("SSSSSSSSS", &m), "123000000");
    }

    #[test]
    fn tokenize_merges_literal_runs() {
        let items = tokenize("YYYY[ at ]--MM");
        assert_eq!(
            items,
            vec![
                FormatItem::Token(Token::YearFourDigit),
                FormatItem::Literal(" at --".to_string()),
                FormatItem::Token(Token::MonthPadded),
            ]
        );
    }

    #[test]
    fn greedy_tokens_split_like_moment() {
        assert_eq!(
            tokenize("MMMMM"),
            vec![
                FormatItem::Token(Token::MonthLong),
                FormatItem::Token(Token::Month),
            ]
        );
        assert_eq!(
            tokenize("ggg"),
            vec![
                FormatItem::Token(Token::LocaleWeekYearTwoDigit),
                FormatItem::Literal("g".to_string()),
            ]
        );
    }
}
