//! Opening-hours formatting for the weekday-text form field.
//!
//! The widget supplies entries like `"Monday: 7:00 AM – 5:00 PM"` with
//! assorted unicode spaces and dashes. Output abbreviates the weekday and
//! converts times to 24-hour `"HH:MM – HH:MM"`. Parsing is all-or-nothing:
//! one malformed entry makes the whole week fall back to `"N/A"`.

use chrono::NaiveTime;
use regex::Regex;

const DAY_ABBREVIATIONS: [(&str, &str); 7] = [
    ("Monday", "Mon"),
    ("Tuesday", "Tue"),
    ("Wednesday", "Wed"),
    ("Thursday", "Thu"),
    ("Friday", "Fri"),
    ("Saturday", "Sat"),
    ("Sunday", "Sun"),
];

/// Formats widget weekday-text entries into `(day, hours)` pairs.
///
/// Recognizes `"Closed"` and `"Open 24 hours"` (case-insensitive) verbatim
/// and passes entries containing `"hours might differ"` through as supplied.
/// Parenthesized annotations in a time range are dropped. If any entry fails
/// to parse, all seven days come back as `"N/A"`.
#[must_use]
pub fn format_opening_hours(weekday_text: &[String]) -> Vec<(String, String)> {
    match try_format(weekday_text) {
        Some(formatted) => formatted,
        None => DAY_ABBREVIATIONS
            .iter()
            .map(|(_, abbrev)| ((*abbrev).to_owned(), "N/A".to_owned()))
            .collect(),
    }
}

fn try_format(weekday_text: &[String]) -> Option<Vec<(String, String)>> {
    let annotation = Regex::new(r"\s*\(.*?\)").expect("valid annotation regex");
    let mut formatted = Vec::with_capacity(weekday_text.len());

    for entry in weekday_text {
        let entry = normalize_whitespace(entry);
        let (weekday, time_range) = entry.split_once(':')?;
        let abbrev = abbreviate_day(weekday.trim())?;
        let time_range = time_range.trim();

        let lower = time_range.to_lowercase();
        if lower == "closed" {
            formatted.push((abbrev.to_owned(), "Closed".to_owned()));
            continue;
        }
        if lower == "open 24 hours" {
            formatted.push((abbrev.to_owned(), "Open 24 hours".to_owned()));
            continue;
        }
        if lower.contains("hours might differ") {
            formatted.push((abbrev.to_owned(), time_range.to_owned()));
            continue;
        }

        let time_range = annotation.replace_all(time_range, "");
        let (start, end) = time_range.split_once('-')?;
        let start = parse_time(start.trim())?;
        let end = parse_time(end.trim())?;
        formatted.push((
            abbrev.to_owned(),
            format!("{} – {}", start.format("%H:%M"), end.format("%H:%M")),
        ));
    }

    Some(formatted)
}

/// Collapses the unicode spaces and dashes the widget emits into plain
/// ASCII so the range split and time parse see a uniform shape.
fn normalize_whitespace(entry: &str) -> String {
    entry
        .replace('\u{a0}', " ")
        .replace('\u{202f}', " ")
        .replace('\u{2009}', " ")
        .replace('\u{2013}', "-")
}

fn abbreviate_day(weekday: &str) -> Option<&'static str> {
    DAY_ABBREVIATIONS
        .iter()
        .find(|(full, _)| *full == weekday)
        .map(|(_, abbrev)| *abbrev)
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}
