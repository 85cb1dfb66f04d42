//! Booking submission handlers.
//!
//! The booking form posts the hidden total along with the client's details;
//! the price is forwarded as submitted.

use axum::{
    extract::{FromRequest, Request, State},
    http::{header, StatusCode},
    Form, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::AppState;

const DEFAULT_TEST_SUBJECT: &str = "Test email from Creative Clicks";
const DEFAULT_TEST_TEXT: &str = "This is a test email to verify Resend API key.";

/// Booking form payload (JSON or urlencoded). Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default, deserialize_with = "loose_text")]
    pub client_name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub client_email: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub event_type: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub event_date: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub hours: Option<String>,
    /// `true`, `"on"`, `"yes"`... anything but an empty/false-like value
    #[serde(default, deserialize_with = "loose_text")]
    pub framing: Option<String>,
    /// Contents of the hidden total field, e.g. `$60.00`
    #[serde(default, deserialize_with = "loose_text")]
    pub price: Option<String>,
}

/// Accept strings, numbers and booleans alike
fn loose_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Notification mail for one booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingEmail {
    pub subject: String,
    pub text: String,
}

impl BookingRequest {
    pub fn framing_requested(&self) -> bool {
        match self.framing.as_deref().map(|s| s.trim().to_ascii_lowercase()) {
            None => false,
            Some(flag) => !matches!(flag.as_str(), "" | "false" | "0" | "no" | "off"),
        }
    }

    /// Submitted price with a single leading `$`
    pub fn price_text(&self) -> String {
        match self.price.as_deref().map(str::trim) {
            None | Some("") => String::new(),
            Some(price) if price.starts_with('$') => price.to_string(),
            Some(price) => format!("${}", price),
        }
    }

    pub fn email(&self, reference: Uuid, received_at: DateTime<Utc>) -> BookingEmail {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        let service = field(&self.service);

        let subject = format!(
            "New Booking: {} for {} ({})",
            title_case(&service),
            field(&self.event_type),
            field(&self.event_date)
        );

        let text = format!(
            "Name: {}\nEmail: {}\nEvent: {}\nDate: {}\nService: {}\nHours: {}\nFraming: {}\nPrice: {}\nReference: {}\nReceived: {}",
            field(&self.client_name),
            field(&self.client_email),
            field(&self.event_type),
            field(&self.event_date),
            service,
            field(&self.hours),
            if self.framing_requested() { "Yes" } else { "No" },
            self.price_text(),
            reference,
            received_at.format("%Y-%m-%d %H:%M:%S UTC"),
        );

        BookingEmail { subject, text }
    }
}

/// Capitalize the first letter of every word, lowercase the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

async fn extract_booking(state: &AppState, request: Request) -> Result<BookingRequest> {
    let is_form = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

    if is_form {
        let Form(booking) = Form::<BookingRequest>::from_request(request, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(booking)
    } else {
        let Json(booking) = Json::<BookingRequest>::from_request(request, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(booking)
    }
}

/// `POST /book`: mail the booking to the studio
pub async fn book(State(state): State<AppState>, request: Request) -> Result<Json<Value>> {
    let booking = extract_booking(&state, request).await?;
    let reference = Uuid::new_v4();

    tracing::info!(
        %reference,
        service = ?booking.service,
        hours = ?booking.hours,
        framing = booking.framing_requested(),
        price = ?booking.price,
        "Received booking request"
    );

    let Some(mailer) = state.mailer.as_ref() else {
        tracing::error!("Missing RESEND_API_KEY or RECIPIENT_EMAIL");
        return Err(AppError::MailNotConfigured);
    };

    let email = booking.email(reference, Utc::now());
    let response = mailer.send(&email.subject, &email.text).await.map_err(|e| {
        tracing::error!(%reference, "Request to Resend failed: {}", e);
        AppError::from(e)
    })?;

    if !response.accepted() {
        return Err(AppError::MailRejected {
            status: response.status,
            body: response.short_body(),
        });
    }

    tracing::info!(%reference, "Booking email sent");
    Ok(Json(json!({
        "success": true,
        "message": "Booking sent! We will contact you soon.",
        "reference": reference,
    })))
}

/// `POST /test-book`: echo the payload without sending mail
pub async fn test_book(Json(data): Json<Value>) -> Json<Value> {
    tracing::info!("Received test booking: {}", data);
    Json(json!({
        "success": true,
        "message": "Test booking received!",
        "data": data,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct TestEmailRequest {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// `POST /test-email`: send a small mail to verify the Resend credentials
pub async fn test_email(
    State(state): State<AppState>,
    payload: Option<Json<TestEmailRequest>>,
) -> Result<(StatusCode, Json<Value>)> {
    let Some(mailer) = state.mailer.as_ref() else {
        return Err(AppError::MailNotConfigured);
    };

    let request = payload.map(|Json(r)| r).unwrap_or_default();
    let subject = request.subject.as_deref().unwrap_or(DEFAULT_TEST_SUBJECT);
    let text = request.text.as_deref().unwrap_or(DEFAULT_TEST_TEXT);

    let response = mailer.send(subject, text).await?;
    let status = if response.accepted() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    Ok((
        status,
        Json(json!({ "status": response.status, "text": response.body })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_booking() -> BookingRequest {
        serde_json::from_value(json!({
            "clientName": "Ada",
            "clientEmail": "ada@example.com",
            "eventType": "Wedding",
            "eventDate": "2026-06-01",
            "service": "photography",
            "hours": 2,
            "framing": false,
            "price": "$60.00"
        }))
        .unwrap()
    }

    #[test]
    fn test_loose_fields_accept_numbers_and_bools() {
        let booking = sample_booking();
        assert_eq!(booking.hours.as_deref(), Some("2"));
        assert_eq!(booking.framing.as_deref(), Some("false"));
        assert!(!booking.framing_requested());
    }

    #[test]
    fn test_framing_truthiness() {
        let with = |flag: Option<&str>| BookingRequest {
            framing: flag.map(str::to_string),
            ..BookingRequest::default()
        };
        assert!(with(Some("true")).framing_requested());
        assert!(with(Some("on")).framing_requested());
        assert!(with(Some("yes")).framing_requested());
        assert!(!with(Some("false")).framing_requested());
        assert!(!with(Some("")).framing_requested());
        assert!(!with(None).framing_requested());
    }

    #[test]
    fn test_price_text_keeps_single_dollar() {
        let with = |price: &str| BookingRequest {
            price: Some(price.to_string()),
            ..BookingRequest::default()
        };
        assert_eq!(with("$60.00").price_text(), "$60.00");
        assert_eq!(with("45.00").price_text(), "$45.00");
        assert_eq!(BookingRequest::default().price_text(), "");
    }

    #[test]
    fn test_email_contents() {
        let reference = Uuid::nil();
        let received_at = Utc.with_ymd_and_hms(2026, 5, 1, 12, 30, 0).unwrap();
        let email = sample_booking().email(reference, received_at);

        assert_eq!(email.subject, "New Booking: Photography for Wedding (2026-06-01)");
        assert_eq!(
            email.text,
            "Name: Ada\nEmail: ada@example.com\nEvent: Wedding\nDate: 2026-06-01\n\
             Service: photography\nHours: 2\nFraming: No\nPrice: $60.00\n\
             Reference: 00000000-0000-0000-0000-000000000000\nReceived: 2026-05-01 12:30:00 UTC"
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("photography"), "Photography");
        assert_eq!(title_case("aerial videography"), "Aerial Videography");
        assert_eq!(title_case("VIDEO-graphy"), "Video-Graphy");
        assert_eq!(title_case(""), "");
    }
}
