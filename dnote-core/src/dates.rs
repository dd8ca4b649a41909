use crate::date_format::{MONTHS, format_date};
use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, TimeZone};

/// Calendar strings derived from one moment, used to build the daily note path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateProps {
    /// Four digit year, e.g. `2024`.
    pub year: String,
    /// Full English month name, e.g. `March`.
    pub month: String,
    /// 1-based month number without leading zero, e.g. `3`.
    pub month_index: String,
    /// The moment rendered with the configured date format.
    pub date: String,
}

impl DateProps {
    /// Resolves the props for the current local time.
    pub fn now(date_format: &str) -> Self {
        Self::at(&Local::now().fixed_offset(), date_format)
    }

    /// Resolves the props for a fixed moment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chrono::{FixedOffset, TimeZone};
    /// # use dnote_core::dates::DateProps;
    /// let moment = FixedOffset::east_opt(0)
    ///     .unwrap()
    ///     .with_ymd_and_hms(2024, 3, 15, 8, 0, 0)
    ///     .unwrap();
    /// let props = DateProps::at(&moment, "MM-DD-YYYY");
    ///
    /// assert_eq!(props.year, "2024");
    /// assert_eq!(props.month, "March");
    /// assert_eq!(props.month_index, "3");
    /// assert_eq!(props.date, "03-15-2024");
    /// ```
    pub fn at(moment: &DateTime<FixedOffset>, date_format: &str) -> Self {
        Self {
            year: moment.year().to_string(),
            month: MONTHS[moment.month0() as usize].to_string(),
            month_index: moment.month().to_string(),
            date: format_date(date_format, moment),
        }
    }
}

/// The moment used for `reference_date`: now when it is today, otherwise the
/// current local time of day on that date.
pub fn reference_moment(reference_date: NaiveDate) -> DateTime<FixedOffset> {
    let now = Local::now();
    if now.date_naive() == reference_date {
        return now.fixed_offset();
    }
    let naive = reference_date.and_time(now.time());
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|moment| moment.fixed_offset())
        .unwrap_or_else(|| naive.and_utc().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixed_moment;

    #[test]
    fn month_index_has_no_leading_zero() {
        let props = DateProps::at(&fixed_moment(2024, 9, 1), "YYYY-MM-DD");
        assert_eq!(props.month_index, "9");
        assert_eq!(props.month, "September");
        assert_eq!(props.date, "2024-09-01");
    }

    #[test]
    fn december_maps_to_last_month_name() {
        let props = DateProps::at(&fixed_moment(2023, 12, 31), "DD");
        assert_eq!(props.year, "2023");
        assert_eq!(props.month, "December");
        assert_eq!(props.month_index, "12");
        assert_eq!(props.date, "31");
    }

    #[test]
    fn empty_format_renders_default_pattern() {
        let props = DateProps::at(&fixed_moment(2024, 3, 15), "");
        assert_eq!(props.date, "03-15-2024");
    }

    #[test]
    fn reference_moment_keeps_the_requested_date() {
        let date = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        assert_eq!(reference_moment(date).date_naive(), date);
    }
}
