// ============================================================================
// TIMESTAMPS - `createdAt` / `updatedAt` tal como llegan del backend
// ============================================================================
// Se aceptan fechas con zona (`...Z`, `...-03:00`) y sin zona. Un valor que no
// se entiende queda en `None`: nunca hace fallar la lista entera.
// ============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Hora de pared tal como la envió el servidor (la zona se descarta)
pub fn parse(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Para `#[serde(default, deserialize_with = "timestamp::lenient")]`
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = value.as_ref().and_then(Value::as_str).and_then(parse);
    if parsed.is_none() && value.as_ref().is_some_and(|v| !v.is_null()) {
        log::warn!("⚠️ [MODELS] Fecha no reconocida, se ignora: {:?}", value);
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_parse_accepts_offset_and_naive() {
        assert_eq!(parse("2024-05-01T10:00:00Z"), Some(at(2024, 5, 1, 10, 0)));
        assert_eq!(parse("2024-05-01T10:00:00-03:00"), Some(at(2024, 5, 1, 10, 0)));
        assert_eq!(parse("2024-05-01T10:00:00"), Some(at(2024, 5, 1, 10, 0)));
        assert!(parse("2024-05-01T10:00:00.123456").is_some());
        assert_eq!(parse("2024-05-01"), Some(at(2024, 5, 1, 0, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse("ontem"), None);
        assert_eq!(parse(""), None);
    }
}
