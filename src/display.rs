//! Formatting of domain values for table cells and labels.

use itertools::Itertools;

use crate::sort::parse_timestamp;
use crate::types::User;

const BYTE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Human-readable size with 1024-based units, e.g. `"512 B"`, `"1.5 KB"`.
pub fn format_byte_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", BYTE_UNITS[unit])
}

/// Render an API timestamp as `YYYY/MM/DD HH:MM` (UTC).
pub fn format_date(s: &str) -> Option<String> {
    parse_timestamp(s).map(|dt| dt.format("%Y/%m/%d %H:%M").to_string())
}

/// Comma-separated role labels, or `-` for a user without roles.
pub fn role_labels(user: &User) -> String {
    if user.roles.is_empty() {
        return "-".to_string();
    }
    user.roles.iter().map(|r| r.label()).join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use yare::parameterized;

    #[parameterized(
        zero = { 0, "0 B" },
        bytes = { 512, "512 B" },
        just_below_kb = { 1023, "1023 B" },
        one_kb = { 1024, "1.0 KB" },
        kb_and_half = { 1536, "1.5 KB" },
        mb = { 5 * 1024 * 1024, "5.0 MB" },
        gb = { 3 * 1024 * 1024 * 1024 / 2, "1.5 GB" },
        tb_caps = { 2048 * 1024 * 1024 * 1024 * 1024, "2048.0 TB" },
    )]
    fn test_format_byte_size(bytes: u64, expected: &str) {
        assert_eq!(format_byte_size(bytes), expected);
    }

    #[parameterized(
        rfc3339 = { "2024-03-01T14:05:09Z", Some("2024/03/01 14:05") },
        offset = { "2024-03-01T14:05:09+02:00", Some("2024/03/01 12:05") },
        date_only = { "2024-03-01", Some("2024/03/01 00:00") },
        garbage = { "soon", None },
    )]
    fn test_format_date(input: &str, expected: Option<&str>) {
        assert_eq!(format_date(input).as_deref(), expected);
    }

    #[test]
    fn test_role_labels() {
        let user = User::new(1, "u", "u@example.com", vec![Role::Admin, Role::User]);
        assert_eq!(role_labels(&user), "Admin, User");
        let nobody = User::new(2, "n", "n@example.com", vec![]);
        assert_eq!(role_labels(&nobody), "-");
    }
}
