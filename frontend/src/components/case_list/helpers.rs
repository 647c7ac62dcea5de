//! Pure decisions behind the case table: which of the four states to show,
//! and how dates and amounts are printed.

use chrono::{DateTime, NaiveDateTime};
use common::model::case::Case;

/// What the list area shows. Loading wins over an error, an error over an
/// empty list, and an empty list over the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListDisplay<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Table(&'a [Case]),
}

pub fn display_state<'a>(loading: bool, error: Option<&'a str>, cases: &'a [Case]) -> ListDisplay<'a> {
    if loading {
        ListDisplay::Loading
    } else if let Some(error) = error.filter(|e| !e.is_empty()) {
        ListDisplay::Error(error)
    } else if cases.is_empty() {
        ListDisplay::Empty
    } else {
        ListDisplay::Table(cases)
    }
}

const DATE_FORMAT: &str = "%d %b %Y, %H:%M";

/// Formats a server timestamp as `18 Oct 2026, 14:05`.
///
/// Timestamps without an offset are printed as given; timestamps with one are
/// printed in that offset. Anything unparseable is returned verbatim.
pub fn format_created_at(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(trimmed) {
        return at.format(DATE_FORMAT).to_string();
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(trimmed, pattern).ok())
        .map(|at| at.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(id: i64) -> Case {
        Case {
            id,
            title: "t".into(),
            description: "d".into(),
            country: "US".into(),
            amount: 1.0,
            reporter_name: "r".into(),
            created_at: String::new(),
        }
    }

    #[test]
    fn loading_takes_precedence_over_everything() {
        let cases = vec![case(1)];
        assert_eq!(display_state(true, Some("boom"), &cases), ListDisplay::Loading);
        assert_eq!(display_state(true, None, &[]), ListDisplay::Loading);
    }

    #[test]
    fn error_beats_empty_list() {
        assert_eq!(
            display_state(false, Some("Failed to load cases."), &[]),
            ListDisplay::Error("Failed to load cases.")
        );
    }

    #[test]
    fn blank_error_is_no_error() {
        assert_eq!(display_state(false, Some(""), &[]), ListDisplay::Empty);
    }

    #[test]
    fn no_cases_means_empty_state() {
        assert_eq!(display_state(false, None, &[]), ListDisplay::Empty);
    }

    #[test]
    fn cases_render_as_table() {
        let cases = vec![case(1), case(2)];
        assert!(matches!(display_state(false, None, &cases), ListDisplay::Table(rows) if rows.len() == 2));
    }

    #[test]
    fn naive_timestamps_are_formatted_as_given() {
        assert_eq!(format_created_at("2026-10-18T14:05:33"), "18 Oct 2026, 14:05");
        assert_eq!(format_created_at("2026-10-18T14:05:33.123456"), "18 Oct 2026, 14:05");
        assert_eq!(format_created_at("2026-01-02T03:04"), "02 Jan 2026, 03:04");
    }

    #[test]
    fn offset_timestamps_keep_their_offset() {
        assert_eq!(format_created_at("2026-10-18T23:30:00Z"), "18 Oct 2026, 23:30");
        assert_eq!(format_created_at("2026-10-18T08:00:00+05:30"), "18 Oct 2026, 08:00");
    }

    #[test]
    fn unparseable_dates_are_shown_verbatim() {
        assert_eq!(format_created_at("yesterday"), "yesterday");
        assert_eq!(format_created_at(""), "");
    }

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(format_amount(100.5), "100.50");
        assert_eq!(format_amount(0.01), "0.01");
        assert_eq!(format_amount(3.0), "3.00");
    }
}
