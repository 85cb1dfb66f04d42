//! Pricing engine for the workshop and booking forms.
//!
//! `calculators` and `models` are shared by the browser pricers and the
//! server; the request/response DTOs and routes only exist on the server.

pub mod calculators;
pub mod models;
#[cfg(not(target_arch = "wasm32"))]
pub mod requests;
#[cfg(not(target_arch = "wasm32"))]
pub mod responses;
#[cfg(not(target_arch = "wasm32"))]
pub mod routes;

// Re-export commonly used items
pub use calculators::{
    format_money, parse_hours, quote_booking, quote_workshop, round_money, BookingQuote,
    WorkshopQuote,
};
pub use models::{BookingSelection, ServiceType, WorkshopType};
#[cfg(not(target_arch = "wasm32"))]
pub use routes::router;
