//! Workshop and booking pricers bound to form elements.

use crate::pricing::{quote_booking, quote_workshop, BookingQuote, WorkshopQuote};

use super::{ElementIds, FormDocument, PricerHandle};

/// A pricer bound to concrete element ids
pub trait Pricer {
    type Quote;

    /// Read the controls, compute the price and write the outputs
    fn update<D: FormDocument + ?Sized>(&self, doc: &D) -> Self::Quote;
}

/// Workshop type select -> `Price: $<n>` display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkshopPricer {
    selector: String,
    display: String,
}

impl WorkshopPricer {
    /// Bind when the workshop type selector is on the page
    pub fn bind<D: FormDocument + ?Sized>(doc: &D, ids: &ElementIds) -> PricerHandle<Self> {
        if !doc.has_element(&ids.workshop_type) {
            return PricerHandle::Absent;
        }
        PricerHandle::Bound(Self {
            selector: ids.workshop_type.clone(),
            display: ids.workshop_price.clone(),
        })
    }

    pub fn selector_id(&self) -> &str {
        &self.selector
    }
}

impl Pricer for WorkshopPricer {
    type Quote = WorkshopQuote;

    fn update<D: FormDocument + ?Sized>(&self, doc: &D) -> WorkshopQuote {
        let selection = doc.read_value(&self.selector).unwrap_or_default();
        let quote = quote_workshop(&selection);
        tracing::debug!(selection = %selection, price = %quote.price, "Workshop price updated");

        doc.write_text(&self.display, &quote.display);
        quote
    }
}

/// Service select + hours input + framing checkbox -> total display and hidden field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingPricer {
    service: String,
    hours: String,
    framing: String,
    display: String,
    submission: String,
}

impl BookingPricer {
    /// Bind when all three booking controls are on the page
    pub fn bind<D: FormDocument + ?Sized>(doc: &D, ids: &ElementIds) -> PricerHandle<Self> {
        let controls = [&ids.service, &ids.hours, &ids.framing];
        if !controls.iter().all(|id| doc.has_element(id.as_str())) {
            return PricerHandle::Absent;
        }
        PricerHandle::Bound(Self {
            service: ids.service.clone(),
            hours: ids.hours.clone(),
            framing: ids.framing.clone(),
            display: ids.booking_price.clone(),
            submission: ids.total_price_input.clone(),
        })
    }

    /// Control ids this pricer listens on: service, hours, framing
    pub fn control_ids(&self) -> [&str; 3] {
        [self.service.as_str(), self.hours.as_str(), self.framing.as_str()]
    }
}

impl Pricer for BookingPricer {
    type Quote = BookingQuote;

    fn update<D: FormDocument + ?Sized>(&self, doc: &D) -> BookingQuote {
        let service = doc.read_value(&self.service).unwrap_or_default();
        let hours = doc.read_value(&self.hours).unwrap_or_default();
        let framing = doc.read_checked(&self.framing).unwrap_or(false);

        let quote = quote_booking(&service, &hours, framing);
        tracing::debug!(
            service = %service,
            hours = quote.selection.hours,
            framing,
            total = %quote.total,
            "Booking price updated"
        );

        // Both writes come from the same quote
        doc.write_text(&self.display, &quote.display);
        doc.write_value(&self.submission, &quote.submission);
        quote
    }
}
