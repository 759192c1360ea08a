// Formateo pt-BR de fechas

use chrono::{NaiveDate, NaiveDateTime};

/// dd/mm/aaaa
pub fn format_date(date: &NaiveDateTime) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// "2024-05-10" → "10/05/2024"; cualquier otro formato se deja tal cual
pub fn format_iso_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// "14:30:00" → "14:30"
pub fn format_time(raw: &str) -> &str {
    match raw.match_indices(':').nth(1) {
        Some((idx, _)) => &raw[..idx],
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap().and_hms_opt(9, 5, 0).unwrap();
        assert_eq!(format_date(&date), "07/03/2024");
    }

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date("2024-05-10"), "10/05/2024");
        assert_eq!(format_iso_date("amanhã"), "amanhã");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("14:30:00"), "14:30");
        assert_eq!(format_time("14:30"), "14:30");
    }
}
