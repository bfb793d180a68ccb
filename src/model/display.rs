use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const NO_TEAM: &str = "No Team";

/// Label shown for an optional team reference.
pub fn team_label(team: Option<&str>) -> &str {
    match team {
        Some(team) if !team.is_empty() => team,
        _ => NO_TEAM,
    }
}

/// Renders a timestamp or calendar date as `M/D/YYYY`.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.f]` timestamps and
/// plain `YYYY-MM-DD` dates. Anything else is returned unchanged.
pub fn format_date(value: &str) -> String {
    let value = value.trim();
    let date = DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|t| t.date()))
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_label_defaults() {
        assert_eq!(team_label(None), "No Team");
        assert_eq!(team_label(Some("")), "No Team");
        assert_eq!(team_label(Some("Team Marvel")), "Team Marvel");
    }

    #[test]
    fn formats_timestamps_and_dates() {
        assert_eq!(format_date("2024-03-05T10:15:00Z"), "3/5/2024");
        assert_eq!(format_date("2024-11-20T08:00:00.123456+02:00"), "11/20/2024");
        assert_eq!(format_date("2024-11-20T08:00:00.123456"), "11/20/2024");
        assert_eq!(format_date("2024-01-09"), "1/9/2024");
    }

    #[test]
    fn leaves_unknown_formats_alone() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }
}
