//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

/// Request to price a workshop selection
#[derive(Debug, Deserialize)]
pub struct WorkshopQuoteRequest {
    #[serde(default)]
    pub workshop_type: String,
}

/// Request to price a booking form snapshot
#[derive(Debug, Deserialize)]
pub struct BookingQuoteRequest {
    #[serde(default)]
    pub service: String,
    /// Raw text of the hours input, parsed with the same fallback rules as the form
    #[serde(default, deserialize_with = "hours_text")]
    pub hours: String,
    #[serde(default)]
    pub framing: bool,
}

/// Accept hours as either a JSON string or a JSON number
fn hours_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_request_accepts_numeric_hours() {
        let req: BookingQuoteRequest =
            serde_json::from_str(r#"{"service":"photography","hours":3,"framing":true}"#).unwrap();
        assert_eq!(req.hours, "3");
        assert!(req.framing);
    }

    #[test]
    fn test_booking_request_defaults() {
        let req: BookingQuoteRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.service, "");
        assert_eq!(req.hours, "");
        assert!(!req.framing);
    }
}
