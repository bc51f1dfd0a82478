use std::time::Duration;

use chrono::{DateTime, Local};

/// "0 Bytes", "1.95 MB", "50 GB". Binary steps, decimals trimmed.
pub(crate) fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let exp = (bytes.ilog2() / 10).min(UNITS.len() as u32 - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);
    format!("{} {}", trim_decimals(value), UNITS[exp as usize])
}

fn trim_decimals(value: f64) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Notification-feed style age: "Just now", "5m ago", "3h ago", "2d ago".
pub(crate) fn relative(elapsed: Duration) -> String {
    let minutes = elapsed.as_secs() / 60;
    let hours = elapsed.as_secs() / 3600;
    let days = elapsed.as_secs() / 86_400;

    if minutes < 1 {
        "Just now".to_owned()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{days}d ago")
    }
}

/// Local wall-clock time out of an ISO-8601 stamp; the raw string if
/// it doesn't parse.
pub(crate) fn clock_time(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(ts) => ts.with_timezone(&Local).format("%H:%M:%S").to_string(),
        Err(_) => iso.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_formatting_matches_catalog_rows() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(512), "512 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(2_048_000), "1.95 MB");
        assert_eq!(format_bytes(15_728_640), "15 MB");
        assert_eq!(format_bytes(104_857_600), "100 MB");
        assert_eq!(format_bytes(53_687_091_200), "50 GB");
        assert_eq!(format_bytes(1_649_267_441_664), "1.5 TB");
    }

    #[test]
    fn relative_age_thresholds() {
        assert_eq!(relative(Duration::from_secs(0)), "Just now");
        assert_eq!(relative(Duration::from_secs(59)), "Just now");
        assert_eq!(relative(Duration::from_secs(60)), "1m ago");
        assert_eq!(relative(Duration::from_secs(59 * 60)), "59m ago");
        assert_eq!(relative(Duration::from_secs(3600)), "1h ago");
        assert_eq!(relative(Duration::from_secs(23 * 3600)), "23h ago");
        assert_eq!(relative(Duration::from_secs(86_400)), "1d ago");
        assert_eq!(relative(Duration::from_secs(3 * 86_400)), "3d ago");
    }

    #[test]
    fn clock_time_falls_back_to_raw_string() {
        assert_eq!(clock_time("not a timestamp"), "not a timestamp");
        // A valid stamp renders as HH:MM:SS in local time.
        let rendered = clock_time("2024-01-15T14:32:15Z");
        assert_eq!(rendered.len(), 8);
        assert_eq!(rendered.as_bytes()[2], b':');
        assert_eq!(rendered.as_bytes()[5], b':');
    }
}
