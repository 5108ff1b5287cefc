use chrono::{DateTime, Local, NaiveDateTime};

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

// 1024-based, two decimals, TB is the largest unit we bother with
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return String::from("0 B");
    }

    let mut unit = 0;
    let mut scale: u64 = 1;
    while unit + 1 < BYTE_UNITS.len() && bytes >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }

    format!("{:.2} {}", bytes as f64 / scale as f64, BYTE_UNITS[unit])
}

// 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

// the server stamps uploads with a naive isoformat() string in its own local
// time, but we also accept full rfc3339 in case that changes
pub fn local_time(timestamp: &str) -> String {
    let timestamp = timestamp.trim();
    if timestamp.is_empty() {
        return String::from("-");
    }

    let convert = || {
        if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
            return anyhow::Ok(dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string());
        }

        let dt = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")?;
        Ok(dt.format("%Y-%m-%d %H:%M:%S").to_string())
    };

    match convert() {
        Ok(v) => v,
        Err(_) => timestamp.to_owned(),
    }
}

pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bytes_known_values() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1), "1.00 B");
        assert_eq!(format_bytes(1023), "1023.00 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1048576), "1.00 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5.00 GB");
    }

    #[test]
    fn format_bytes_caps_at_terabytes() {
        let pb = 1024u64.pow(5);

        assert_eq!(format_bytes(pb), "1024.00 TB");
    }

    #[test]
    fn group_thousands_inserts_commas() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(245760), "245,760");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn local_time_handles_naive_server_timestamps() {
        assert_eq!(local_time("2024-05-01T10:15:30.123456"), "2024-05-01 10:15:30");
        assert_eq!(local_time("2024-05-01T10:15:30"), "2024-05-01 10:15:30");
    }

    #[test]
    fn local_time_converts_rfc3339() {
        let shown = local_time("2024-05-01T10:15:30Z");

        // the exact value depends on the local timezone of the machine
        assert_eq!(shown.len(), "2024-05-01 10:15:30".len());
        assert!(shown.starts_with("2024-0"));
    }

    #[test]
    fn local_time_placeholders() {
        assert_eq!(local_time(""), "-");
        assert_eq!(local_time("yesterday"), "yesterday");
    }

    #[test]
    fn truncate_is_char_aware() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("short", 50), "short");
    }
}
