//! Selection models for the pricing forms.
//!
//! Selections are read fresh from form controls on every pricer run and never
//! stored. Parsing is total: unknown values map to the fallback variant.

use serde::{Deserialize, Serialize};

/// Workshop type from the workshop signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkshopType {
    /// "3day" and anything unrecognized
    #[default]
    #[serde(rename = "3day")]
    ThreeDay,
    Advanced,
    Editing,
}

impl WorkshopType {
    /// Map a raw select value; unrecognized values fall through to the 3-day default
    pub fn from_selection(value: &str) -> Self {
        match value {
            "advanced" => WorkshopType::Advanced,
            "editing" => WorkshopType::Editing,
            _ => WorkshopType::ThreeDay,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkshopType::ThreeDay => "3day",
            WorkshopType::Advanced => "advanced",
            WorkshopType::Editing => "editing",
        }
    }
}

/// Service type from the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Photography,
    Videography,
    /// Any other select value (placeholder option, tampered markup)
    Other,
}

impl ServiceType {
    pub fn from_selection(value: &str) -> Self {
        match value {
            "photography" => ServiceType::Photography,
            "videography" => ServiceType::Videography,
            _ => ServiceType::Other,
        }
    }
}

/// A booking form snapshot: service, effective hours and framing flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingSelection {
    pub service: ServiceType,
    /// Always >= 1
    pub hours: u64,
    pub framing: bool,
}

impl BookingSelection {
    /// Build a selection from raw control values.
    ///
    /// `hours_text` is the raw text of the hours input; see
    /// [`parse_hours`](super::calculators::parse_hours) for the fallback rules.
    pub fn from_form(service: &str, hours_text: &str, framing: bool) -> Self {
        Self {
            service: ServiceType::from_selection(service),
            hours: super::calculators::parse_hours(hours_text),
            framing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workshop_type_from_selection() {
        assert_eq!(WorkshopType::from_selection("advanced"), WorkshopType::Advanced);
        assert_eq!(WorkshopType::from_selection("editing"), WorkshopType::Editing);
        assert_eq!(WorkshopType::from_selection("3day"), WorkshopType::ThreeDay);
        assert_eq!(WorkshopType::from_selection(""), WorkshopType::ThreeDay);
        assert_eq!(WorkshopType::from_selection("Advanced"), WorkshopType::ThreeDay); // case-sensitive
    }

    #[test]
    fn test_service_type_from_selection() {
        assert_eq!(ServiceType::from_selection("photography"), ServiceType::Photography);
        assert_eq!(ServiceType::from_selection("videography"), ServiceType::Videography);
        assert_eq!(ServiceType::from_selection("drone"), ServiceType::Other);
        assert_eq!(ServiceType::from_selection(""), ServiceType::Other);
    }

    #[test]
    fn test_workshop_type_serde_uses_form_values() {
        let json = serde_json::to_string(&WorkshopType::ThreeDay).unwrap();
        assert_eq!(json, "\"3day\"");
        let parsed: WorkshopType = serde_json::from_str("\"editing\"").unwrap();
        assert_eq!(parsed, WorkshopType::Editing);
    }

    #[test]
    fn test_booking_selection_from_form() {
        let selection = BookingSelection::from_form("videography", "abc", true);
        assert_eq!(selection.service, ServiceType::Videography);
        assert_eq!(selection.hours, 1);
        assert!(selection.framing);
    }
}
