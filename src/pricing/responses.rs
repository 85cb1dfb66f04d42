//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{BookingQuote, WorkshopQuote};
use super::models::{ServiceType, WorkshopType};

/// Response for a workshop quote
#[derive(Debug, Serialize)]
pub struct WorkshopQuoteResponse {
    pub workshop_type: WorkshopType,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub display: String,
}

impl From<WorkshopQuote> for WorkshopQuoteResponse {
    fn from(quote: WorkshopQuote) -> Self {
        Self {
            workshop_type: quote.workshop_type,
            price: quote.price,
            display: quote.display,
        }
    }
}

/// Response for a booking quote
#[derive(Debug, Serialize)]
pub struct BookingQuoteResponse {
    pub service: ServiceType,
    pub hours: u64,
    pub framing: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub hourly_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub display: String,
    pub submission: String,
}

impl From<BookingQuote> for BookingQuoteResponse {
    fn from(quote: BookingQuote) -> Self {
        Self {
            service: quote.selection.service,
            hours: quote.selection.hours,
            framing: quote.selection.framing,
            hourly_rate: quote.hourly_rate,
            total: quote.total,
            display: quote.display,
            submission: quote.submission,
        }
    }
}
