//! Page wiring: binds both pricers and routes DOM events to them.

use crate::pricing::{BookingQuote, WorkshopQuote};

use super::pricers::{BookingPricer, WorkshopPricer};
use super::{ElementIds, FormDocument, FormEvent, PricerHandle};

/// Which pricer a subscription re-runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricerKind {
    Workshop,
    Booking,
}

/// One event listener to install on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub element_id: String,
    pub event: FormEvent,
    pub target: PricerKind,
}

/// Output of a single pricer run
#[derive(Debug, Clone, PartialEq)]
pub enum Recomputed {
    Workshop(WorkshopQuote),
    Booking(BookingQuote),
}

/// Quotes produced by the page-load pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageQuotes {
    pub workshop: Option<WorkshopQuote>,
    pub booking: Option<BookingQuote>,
}

/// A document with both pricers bound and their subscriptions registered
#[derive(Debug)]
pub struct FormPage<D> {
    doc: D,
    workshop: PricerHandle<WorkshopPricer>,
    booking: PricerHandle<BookingPricer>,
    subscriptions: Vec<Subscription>,
}

impl<D: FormDocument> FormPage<D> {
    /// Bind whichever pricers the page supports and register their events.
    ///
    /// Nothing is registered for a pricer whose controls are missing.
    pub fn setup(doc: D, ids: &ElementIds) -> Self {
        let workshop = WorkshopPricer::bind(&doc, ids);
        let booking = BookingPricer::bind(&doc, ids);

        let mut subscriptions = Vec::new();
        if let Some(pricer) = workshop.pricer() {
            subscriptions.push(Subscription {
                element_id: pricer.selector_id().to_string(),
                event: FormEvent::Change,
                target: PricerKind::Workshop,
            });
        }
        if let Some(pricer) = booking.pricer() {
            let [service, hours, framing] = pricer.control_ids();
            for (element_id, event) in [
                (service, FormEvent::Change),
                (hours, FormEvent::Input),
                (framing, FormEvent::Change),
            ] {
                subscriptions.push(Subscription {
                    element_id: element_id.to_string(),
                    event,
                    target: PricerKind::Booking,
                });
            }
        }

        tracing::debug!(
            workshop = workshop.is_bound(),
            booking = booking.is_bound(),
            listeners = subscriptions.len(),
            "Form page bound"
        );

        Self {
            doc,
            workshop,
            booking,
            subscriptions,
        }
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// Page-load pass: price both forms from their current state
    pub fn initialize(&self) -> PageQuotes {
        let booking = self.booking.update(&self.doc);
        let workshop = self.workshop.update(&self.doc);
        PageQuotes { workshop, booking }
    }

    /// Re-run one pricer; a no-op when that pricer is not bound
    pub fn run(&self, kind: PricerKind) -> Option<Recomputed> {
        match kind {
            PricerKind::Workshop => self.workshop.update(&self.doc).map(Recomputed::Workshop),
            PricerKind::Booking => self.booking.update(&self.doc).map(Recomputed::Booking),
        }
    }

    /// Handle a DOM event; returns the new quote if a subscription matched
    pub fn dispatch(&self, element_id: &str, event: FormEvent) -> Option<Recomputed> {
        let target = self
            .subscriptions
            .iter()
            .find(|s| s.element_id == element_id && s.event == event)?
            .target;
        self.run(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::MemoryDocument;

    fn full_page() -> MemoryDocument {
        MemoryDocument::new()
            .with_select("workshopType", "3day")
            .with_output("workshopPrice")
            .with_select("service", "photography")
            .with_input("hours", "1")
            .with_checkbox("framing", false)
            .with_output("bookingPrice")
            .with_input("totalPriceInput", "")
    }

    fn workshop_only_page() -> MemoryDocument {
        MemoryDocument::new()
            .with_select("workshopType", "advanced")
            .with_output("workshopPrice")
    }

    #[test]
    fn test_setup_registers_all_listeners() {
        let page = FormPage::setup(full_page(), &ElementIds::default());
        let subs: Vec<(&str, FormEvent, PricerKind)> = page
            .subscriptions()
            .iter()
            .map(|s| (s.element_id.as_str(), s.event, s.target))
            .collect();

        assert_eq!(
            subs,
            vec![
                ("workshopType", FormEvent::Change, PricerKind::Workshop),
                ("service", FormEvent::Change, PricerKind::Booking),
                ("hours", FormEvent::Input, PricerKind::Booking),
                ("framing", FormEvent::Change, PricerKind::Booking),
            ]
        );
    }

    #[test]
    fn test_initialize_prices_both_forms() {
        let page = FormPage::setup(full_page(), &ElementIds::default());
        let quotes = page.initialize();

        assert_eq!(quotes.workshop.unwrap().display, "Price: $15");
        assert_eq!(quotes.booking.unwrap().submission, "$30.00");
        assert_eq!(page.document().text("workshopPrice").as_deref(), Some("Price: $15"));
        assert_eq!(page.document().text("bookingPrice").as_deref(), Some("Total: $30.00"));
    }

    #[test]
    fn test_initialize_respects_prepopulated_selection() {
        let doc = full_page();
        doc.set_value("workshopType", "editing");
        doc.set_value("service", "videography");
        doc.set_value("hours", "3");

        let page = FormPage::setup(&doc, &ElementIds::default());
        page.initialize();

        assert_eq!(doc.text("workshopPrice").as_deref(), Some("Price: $20"));
        assert_eq!(doc.value("totalPriceInput").as_deref(), Some("$120.00"));
    }

    #[test]
    fn test_hours_keystrokes_recompute() {
        let doc = full_page();
        let page = FormPage::setup(&doc, &ElementIds::default());
        page.initialize();

        for (typed, expected) in [("2", "$60.00"), ("", "$30.00"), ("1", "$30.00"), ("12", "$360.00")] {
            doc.set_value("hours", typed);
            let result = page.dispatch("hours", FormEvent::Input);
            assert!(matches!(result, Some(Recomputed::Booking(_))));
            assert_eq!(doc.value("totalPriceInput").as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_framing_change_adds_surcharge() {
        let doc = full_page();
        let page = FormPage::setup(&doc, &ElementIds::default());

        doc.set_value("service", "videography");
        doc.set_checked("framing", true);
        page.dispatch("framing", FormEvent::Change);

        assert_eq!(doc.text("bookingPrice").as_deref(), Some("Total: $45.00"));
        assert_eq!(doc.value("totalPriceInput").as_deref(), Some("$45.00"));
    }

    #[test]
    fn test_unsubscribed_event_does_nothing() {
        let doc = full_page();
        let page = FormPage::setup(&doc, &ElementIds::default());

        // hours only listens for input, the selector only for change
        assert!(page.dispatch("hours", FormEvent::Change).is_none());
        assert!(page.dispatch("workshopType", FormEvent::Input).is_none());
        assert!(page.dispatch("bookingPrice", FormEvent::Change).is_none());
        assert_eq!(doc.write_count(), 0);
    }

    #[test]
    fn test_pricers_do_not_touch_each_others_outputs() {
        let doc = full_page();
        let page = FormPage::setup(&doc, &ElementIds::default());

        doc.set_value("workshopType", "advanced");
        page.dispatch("workshopType", FormEvent::Change);

        assert_eq!(doc.text("workshopPrice").as_deref(), Some("Price: $25"));
        assert_eq!(doc.text("bookingPrice").as_deref(), Some(""));
        assert_eq!(doc.value("totalPriceInput").as_deref(), Some(""));
    }

    #[test]
    fn test_workshop_only_page_skips_booking() {
        let doc = workshop_only_page();
        let page = FormPage::setup(&doc, &ElementIds::default());

        assert_eq!(page.subscriptions().len(), 1);
        let quotes = page.initialize();
        assert!(quotes.booking.is_none());
        assert_eq!(doc.write_count(), 1);

        assert!(page.run(PricerKind::Booking).is_none());
        assert!(page.dispatch("service", FormEvent::Change).is_none());
        assert_eq!(doc.write_count(), 1);
    }

    #[test]
    fn test_booking_only_page_skips_workshop() {
        let doc = MemoryDocument::new()
            .with_select("service", "photography")
            .with_input("hours", "2")
            .with_checkbox("framing", false)
            .with_output("bookingPrice")
            .with_input("totalPriceInput", "");
        let page = FormPage::setup(&doc, &ElementIds::default());

        let quotes = page.initialize();
        assert!(quotes.workshop.is_none());
        assert_eq!(doc.text("bookingPrice").as_deref(), Some("Total: $60.00"));
    }

    #[test]
    fn test_empty_page_is_inert() {
        let doc = MemoryDocument::new();
        let page = FormPage::setup(&doc, &ElementIds::default());
        assert!(page.subscriptions().is_empty());
        assert_eq!(page.initialize(), PageQuotes::default());
    }
}
