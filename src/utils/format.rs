use chrono::{DateTime, NaiveDate};

/// Formatear una fecha del backend (calendario "YYYY-MM-DD" o timestamp
/// RFC 3339) como "dd/MM/yyyy". Si no se puede parsear, se muestra tal cual.
pub fn format_date_br(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_calendar_date() {
        assert_eq!(format_date_br("2025-03-07"), "07/03/2025");
    }

    #[test]
    fn formats_rfc3339_timestamp() {
        assert_eq!(format_date_br("2025-03-07T14:30:00-03:00"), "07/03/2025");
    }

    #[test]
    fn passes_through_garbage() {
        assert_eq!(format_date_br("n/a"), "n/a");
    }
}
