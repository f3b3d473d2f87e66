use chrono::{Datelike, NaiveDate, Utc};

/// Human-readable length of a role, counted in whole calendar months.
/// An open-ended role runs until today.
pub fn format_duration(start: NaiveDate, end: Option<NaiveDate>) -> String {
    format_duration_until(start, end, Utc::now().date_naive())
}

pub fn format_duration_until(start: NaiveDate, end: Option<NaiveDate>, today: NaiveDate) -> String {
    let end = end.unwrap_or(today);
    let total_months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);

    if total_months < 12 {
        return plural(total_months, "month");
    }

    let years = total_months / 12;
    let months = total_months % 12;
    if months == 0 {
        plural(years, "year")
    } else {
        format!("{}, {}", plural(years, "year"), plural(months, "month"))
    }
}

/// "November 2021", or "Present" for an open end date.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%B %Y").to_string(),
        None => "Present".to_string(),
    }
}

fn plural(count: i32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    #[test]
    fn test_duration_under_a_year() {
        assert_eq!(format_duration_until(d(2020, 1), Some(d(2020, 2)), d(2024, 1)), "1 month");
        assert_eq!(format_duration_until(d(2020, 1), Some(d(2020, 8)), d(2024, 1)), "7 months");
        assert_eq!(format_duration_until(d(2020, 1), Some(d(2020, 1)), d(2024, 1)), "0 months");
    }

    #[test]
    fn test_duration_whole_years() {
        assert_eq!(format_duration_until(d(2014, 9), Some(d(2015, 9)), d(2024, 1)), "1 year");
        assert_eq!(format_duration_until(d(2014, 9), Some(d(2018, 9)), d(2024, 1)), "4 years");
    }

    #[test]
    fn test_duration_years_and_months() {
        assert_eq!(
            format_duration_until(d(2019, 3), Some(d(2021, 11)), d(2024, 1)),
            "2 years, 8 months"
        );
        assert_eq!(
            format_duration_until(d(2020, 1), Some(d(2021, 2)), d(2024, 1)),
            "1 year, 1 month"
        );
    }

    #[test]
    fn test_open_ended_duration_runs_until_today() {
        assert_eq!(format_duration_until(d(2021, 11), None, d(2024, 11)), "3 years");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some(d(2021, 11))), "November 2021");
        assert_eq!(format_date(None), "Present");
    }
}
