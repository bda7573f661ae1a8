/// Utilities for date formatting

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" -> "15.03.2024"; anything else is returned as is
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Today in the browser's local time zone
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
