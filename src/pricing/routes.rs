//! JSON quote endpoints.
//!
//! Server-side mirror of the browser pricers: same calculators, same strings.

use axum::{routing::post, Json, Router};

use super::calculators::{quote_booking, quote_workshop};
use super::requests::{BookingQuoteRequest, WorkshopQuoteRequest};
use super::responses::{BookingQuoteResponse, WorkshopQuoteResponse};

/// Pricing routes, mounted under `/api/pricing`
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/workshop", post(workshop_quote))
        .route("/booking", post(booking_quote))
}

async fn workshop_quote(Json(req): Json<WorkshopQuoteRequest>) -> Json<WorkshopQuoteResponse> {
    let quote = quote_workshop(&req.workshop_type);
    tracing::debug!(workshop_type = %req.workshop_type, price = %quote.price, "Workshop quote");
    Json(quote.into())
}

async fn booking_quote(Json(req): Json<BookingQuoteRequest>) -> Json<BookingQuoteResponse> {
    let quote = quote_booking(&req.service, &req.hours, req.framing);
    tracing::debug!(
        service = %req.service,
        hours = quote.selection.hours,
        framing = req.framing,
        total = %quote.total,
        "Booking quote"
    );
    Json(quote.into())
}
