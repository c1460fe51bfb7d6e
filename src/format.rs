//! Display formatting shared by the CLI and the TUI

use chrono::{DateTime, Local, Utc};

use crate::site::{Downtime, Site};

/// "Up" / "Down"
pub fn status_label(site: &Site) -> &'static str {
    if site.is_up { "Up" } else { "Down" }
}

/// Uptime with two decimals, e.g. "99.90%"
pub fn format_uptime(pct: f64) -> String {
    format!("{:.2}%", pct)
}

pub fn format_response_time(ms: u64) -> String {
    format!("{}ms", ms)
}

/// "2023-06-18 (15 min)" or "No recent downtime"
pub fn format_last_downtime(downtime: Option<&Downtime>) -> String {
    match downtime {
        Some(d) => format!(
            "{} ({} min)",
            d.at.with_timezone(&Local).format("%Y-%m-%d"),
            d.duration_mins
        ),
        None => "No recent downtime".to_string(),
    }
}

/// Local wall-clock time as "hh:mm AM"
pub fn format_clock(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%I:%M %p").to_string()
}

/// "tracking since 1 day" / "tracking since 3 days"
pub fn format_tracking(days: i64) -> String {
    if days == 1 {
        "tracking since 1 day".to_string()
    } else {
        format!("tracking since {} days", days)
    }
}

/// Format seconds as a compact countdown (e.g., "45s", "4m 30s", "2h 5m")
pub fn format_countdown(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        let (m, s) = (secs / 60, secs % 60);
        if s == 0 { format!("{}m", m) } else { format!("{}m {}s", m, s) }
    } else {
        let (h, m) = (secs / 3600, (secs % 3600) / 60);
        if m == 0 { format!("{}h", h) } else { format!("{}h {}m", h, m) }
    }
}

/// Format seconds as human-readable interval (e.g., "5m", "2h", "1d")
pub fn format_interval(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(99.9), "99.90%");
        assert_eq!(format_uptime(100.0), "100.00%");
        assert_eq!(format_uptime(95.457), "95.46%");
    }

    #[test]
    fn test_format_response_time() {
        assert_eq!(format_response_time(250), "250ms");
        assert_eq!(format_response_time(0), "0ms");
    }

    #[test]
    fn test_format_last_downtime() {
        assert_eq!(format_last_downtime(None), "No recent downtime");
        let d = Downtime {
            at: Utc.with_ymd_and_hms(2023, 6, 18, 12, 0, 0).unwrap(),
            duration_mins: 15,
        };
        let text = format_last_downtime(Some(&d));
        assert!(text.ends_with("(15 min)"), "{}", text);
        assert!(text.starts_with("2023-06-1"), "{}", text);
    }

    #[test]
    fn test_status_label() {
        let mut site = Site::new("https://a.com", Utc::now());
        assert_eq!(status_label(&site), "Up");
        site.is_up = false;
        assert_eq!(status_label(&site), "Down");
    }

    #[test]
    fn test_format_clock_shape() {
        let text = format_clock(Utc::now());
        assert_eq!(text.len(), 8);
        assert!(text.ends_with("AM") || text.ends_with("PM"));
    }

    #[test]
    fn test_format_tracking() {
        assert_eq!(format_tracking(1), "tracking since 1 day");
        assert_eq!(format_tracking(42), "tracking since 42 days");
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(0), "0s");
        assert_eq!(format_countdown(45), "45s");
        assert_eq!(format_countdown(300), "5m");
        assert_eq!(format_countdown(270), "4m 30s");
        assert_eq!(format_countdown(7500), "2h 5m");
        assert_eq!(format_countdown(3600), "1h");
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(30), "30s");
        assert_eq!(format_interval(300), "5m");
        assert_eq!(format_interval(7200), "2h");
        assert_eq!(format_interval(172800), "2d");
    }
}
