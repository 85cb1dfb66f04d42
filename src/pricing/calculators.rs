//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no DOM or network access.
//! Both the browser pricers and the JSON quote endpoints go through here, so the
//! strings shown to the user and the strings submitted with the booking form
//! always come from the same code.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{BookingSelection, ServiceType, WorkshopType};

/// 3-day workshop, also the price for any unrecognized selection
pub const WORKSHOP_BASE_PRICE: Decimal = dec!(15);
pub const WORKSHOP_ADVANCED_PRICE: Decimal = dec!(25);
pub const WORKSHOP_EDITING_PRICE: Decimal = dec!(20);

pub const PHOTOGRAPHY_HOURLY_RATE: Decimal = dec!(30);
/// The site advertises videography at $40-$45/hour; quotes use the lower end.
pub const VIDEOGRAPHY_HOURLY_RATE: Decimal = dec!(40);
pub const FRAMING_SURCHARGE: Decimal = dec!(5);

/// Hours used when the hours input is empty, unparseable or not positive
pub const DEFAULT_HOURS: u64 = 1;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use creative_clicks_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Format an amount as `$<n.nn>` (always two decimals).
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = round_money(amount, 2);
    rounded.rescale(2);
    format!("${}", rounded)
}

/// Flat price for a workshop type
pub fn workshop_price(workshop_type: WorkshopType) -> Decimal {
    match workshop_type {
        WorkshopType::Advanced => WORKSHOP_ADVANCED_PRICE,
        WorkshopType::Editing => WORKSHOP_EDITING_PRICE,
        WorkshopType::ThreeDay => WORKSHOP_BASE_PRICE,
    }
}

/// Hourly rate for a service; unknown services are free
pub fn hourly_rate(service: ServiceType) -> Decimal {
    match service {
        ServiceType::Photography => PHOTOGRAPHY_HOURLY_RATE,
        ServiceType::Videography => VIDEOGRAPHY_HOURLY_RATE,
        ServiceType::Other => Decimal::ZERO,
    }
}

/// Parse the raw hours input.
///
/// Takes the leading integer of the text (leading whitespace and one sign are
/// allowed, anything after the digits is ignored), so `"3.7"` is 3 and
/// `"12 hrs"` is 12. Empty, non-numeric, zero and negative input all resolve
/// to [`DEFAULT_HOURS`]. There is no upper bound; values past `u64::MAX`
/// saturate.
pub fn parse_hours(raw: &str) -> u64 {
    let text = raw.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 || negative {
        return DEFAULT_HOURS;
    }

    let hours = unsigned[..digits_len]
        .bytes()
        .fold(0u64, |acc, b| acc.saturating_mul(10).saturating_add(u64::from(b - b'0')));

    if hours == 0 {
        DEFAULT_HOURS
    } else {
        hours
    }
}

/// Booking total: `rate * hours`, plus the framing surcharge when requested.
pub fn booking_total(selection: &BookingSelection) -> Decimal {
    let mut total = hourly_rate(selection.service) * Decimal::from(selection.hours);
    if selection.framing {
        total += FRAMING_SURCHARGE;
    }
    total
}

/// Computed workshop price and the text rendered for it
#[derive(Debug, Clone, PartialEq)]
pub struct WorkshopQuote {
    pub workshop_type: WorkshopType,
    pub price: Decimal,
    /// `Price: $<n>`, integer price without decimals
    pub display: String,
}

/// Price a raw workshop selection
pub fn quote_workshop(selection: &str) -> WorkshopQuote {
    let workshop_type = WorkshopType::from_selection(selection);
    let price = workshop_price(workshop_type);

    WorkshopQuote {
        workshop_type,
        price,
        display: format!("Price: ${}", price.trunc()),
    }
}

/// Computed booking total with both output strings
#[derive(Debug, Clone, PartialEq)]
pub struct BookingQuote {
    pub selection: BookingSelection,
    pub hourly_rate: Decimal,
    pub total: Decimal,
    /// `Total: $<n.nn>`, shown to the user
    pub display: String,
    /// `$<n.nn>`, written to the hidden submission field
    pub submission: String,
}

impl BookingQuote {
    /// Build a quote from a selection.
    ///
    /// The total is computed once and both strings are derived from the same
    /// formatted value.
    pub fn from_selection(selection: BookingSelection) -> Self {
        let total = booking_total(&selection);
        let price_string = format_money(total);

        Self {
            selection,
            hourly_rate: hourly_rate(selection.service),
            total,
            display: format!("Total: {}", price_string),
            submission: price_string,
        }
    }
}

/// Price raw booking form values
pub fn quote_booking(service: &str, hours_text: &str, framing: bool) -> BookingQuote {
    BookingQuote::from_selection(BookingSelection::from_form(service, hours_text, framing))
}
