//! Values computed on the client from loaded records.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

const MONTHS_SHORT: [&str; 12] = [
    "ian.", "feb.", "mar.", "apr.", "mai", "iun.", "iul.", "aug.", "sept.", "oct.", "nov.", "dec.",
];

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole years between `birth` and `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Age column text: `"N ani"`, or `"-"` when the date is missing or unparsable.
pub fn age_label(birth: Option<&str>, today: NaiveDate) -> String {
    birth
        .and_then(parse_date)
        .map(|b| format!("{} ani", age_on(b, today)))
        .unwrap_or_else(|| "-".to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_part(raw), "%Y-%m-%d").ok()
}

pub fn attendance_percentage(present: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((present as f64 / total as f64) * 100.0).round() as u32
}

/// Up to two upper-cased initials from a full name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

const AVATAR_CLASSES: [&str; 5] = [
    "avatar avatar-blue",
    "avatar avatar-green",
    "avatar avatar-purple",
    "avatar avatar-orange",
    "avatar avatar-pink",
];

pub fn avatar_class(id: i64) -> &'static str {
    AVATAR_CLASSES[id.rem_euclid(AVATAR_CLASSES.len() as i64) as usize]
}

/// `YYYY-MM-DD` prefix of an ISO date or datetime.
pub fn date_part(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

/// `HH:MM` of an ISO datetime, empty when there is no time component.
pub fn time_part(raw: &str) -> String {
    raw.split('T')
        .nth(1)
        .map(|t| t.chars().take(5).collect())
        .unwrap_or_default()
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// `20 ian. 2026, 14:00`; the raw text is returned when it does not parse.
pub fn format_session_datetime(raw: &str) -> String {
    match parse_datetime(raw) {
        Some(dt) => format!(
            "{} {} {}, {}",
            dt.day(),
            MONTHS_SHORT[dt.month0() as usize],
            dt.year(),
            dt.format("%H:%M")
        ),
        None => raw.to_string(),
    }
}

/// `DD.MM.YYYY` for table date columns.
pub fn format_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Hours between two ISO datetimes, 0 when either does not parse.
pub fn duration_hours(start: &str, end: &str) -> f64 {
    match (parse_datetime(start), parse_datetime(end)) {
        (Some(s), Some(e)) if e > s => (e - s).num_minutes() as f64 / 60.0,
        _ => 0.0,
    }
}

/// Join a form date and time into the backend's datetime format.
pub fn compose_datetime(date: &str, time: &str) -> Option<String> {
    let d = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let t = NaiveTime::parse_from_str(time.trim(), "%H:%M").ok()?;
    Some(d.and_time(t).format("%Y-%m-%dT%H:%M:00").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_age_before_and_on_birthday() {
        let birth = d(2015, 6, 15);
        assert_eq!(age_on(birth, d(2024, 6, 14)), 8);
        assert_eq!(age_on(birth, d(2024, 6, 15)), 9);
    }

    #[test]
    fn test_age_label() {
        let now = d(2024, 6, 15);
        assert_eq!(age_label(Some("2015-06-15"), now), "9 ani");
        assert_eq!(age_label(Some("2015-06-15T00:00:00"), now), "9 ani");
        assert_eq!(age_label(None, now), "-");
        assert_eq!(age_label(Some("not a date"), now), "-");
    }

    #[test]
    fn test_attendance_percentage() {
        assert_eq!(attendance_percentage(0, 0), 0);
        assert_eq!(attendance_percentage(3, 4), 75);
        assert_eq!(attendance_percentage(2, 3), 67);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("ana maria pop"), "AM");
        assert_eq!(initials("Ștefan"), "Ș");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_avatar_class_cycles() {
        assert_eq!(avatar_class(0), avatar_class(5));
        assert_ne!(avatar_class(1), avatar_class(2));
    }

    #[test]
    fn test_session_formatting() {
        assert_eq!(format_session_datetime("2026-01-20T14:00:00"), "20 ian. 2026, 14:00");
        assert_eq!(format_session_datetime("garbage"), "garbage");
        assert_eq!(time_part("2026-01-20T09:30:00"), "09:30");
        assert_eq!(date_part("2026-01-20T09:30:00"), "2026-01-20");
        assert_eq!(format_date("2026-01-20"), "20.01.2026");
    }

    #[test]
    fn test_compose_and_duration() {
        let start = compose_datetime("2026-01-20", "14:00").unwrap();
        let end = compose_datetime("2026-01-20", "15:30").unwrap();
        assert_eq!(start, "2026-01-20T14:00:00");
        assert_eq!(duration_hours(&start, &end), 1.5);
        assert!(compose_datetime("", "14:00").is_none());
    }
}
