/// Utilities for date display formatting (pt-BR conventions).

/// Format an ISO date string to DD/MM/YYYY.
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format an optional validity end date; an absent end is open-ended.
pub fn format_valid_to(valid_to: Option<&str>) -> String {
    match valid_to {
        Some(d) => format_date(d),
        None => "Indefinido".to_string(),
    }
}

/// Today's date as "YYYY-MM-DD", for date input defaults.
pub fn today_iso() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Date `days` back from today as "YYYY-MM-DD".
pub fn days_ago_iso(days: i64) -> String {
    (chrono::Utc::now().date_naive() - chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format_passes_through() {
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_valid_to() {
        assert_eq!(format_valid_to(Some("2024-03-15")), "15/03/2024");
        assert_eq!(format_valid_to(None), "Indefinido");
    }
}
