//! Form bindings for the workshop and booking pricers.
//!
//! The page is reached only through [`FormDocument`], so the same pricers run
//! against the real DOM in the browser and against [`MemoryDocument`] on the
//! server and in tests.

pub mod memory;
pub mod page;
pub mod pricers;

pub use memory::MemoryDocument;
pub use page::{FormPage, PageQuotes, PricerKind, Recomputed, Subscription};
pub use pricers::{BookingPricer, Pricer, WorkshopPricer};

/// Element access used by the pricers.
///
/// All methods take `&self`: the document is shared, single-threaded state and
/// every event handler borrows it for the length of one pricer run.
pub trait FormDocument {
    fn has_element(&self, id: &str) -> bool;

    /// Current value of a select or input control
    fn read_value(&self, id: &str) -> Option<String>;

    /// Checked state of a checkbox
    fn read_checked(&self, id: &str) -> Option<bool>;

    /// Replace an element's text content. Absent elements are ignored.
    fn write_text(&self, id: &str, text: &str);

    /// Set a form field's value. Absent elements are ignored.
    fn write_value(&self, id: &str, value: &str);
}

impl<D: FormDocument + ?Sized> FormDocument for &D {
    fn has_element(&self, id: &str) -> bool {
        (**self).has_element(id)
    }

    fn read_value(&self, id: &str) -> Option<String> {
        (**self).read_value(id)
    }

    fn read_checked(&self, id: &str) -> Option<bool> {
        (**self).read_checked(id)
    }

    fn write_text(&self, id: &str, text: &str) {
        (**self).write_text(id, text)
    }

    fn write_value(&self, id: &str, value: &str) {
        (**self).write_value(id, value)
    }
}

/// Element ids for every role the pricers read or write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub workshop_type: String,
    pub workshop_price: String,
    pub service: String,
    pub hours: String,
    pub framing: String,
    pub booking_price: String,
    /// Hidden field submitted with the booking form
    pub total_price_input: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            workshop_type: "workshopType".to_string(),
            workshop_price: "workshopPrice".to_string(),
            service: "service".to_string(),
            hours: "hours".to_string(),
            framing: "framing".to_string(),
            booking_price: "bookingPrice".to_string(),
            total_price_input: "totalPriceInput".to_string(),
        }
    }
}

/// DOM events that trigger a pricer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormEvent {
    /// Committed change (selects, checkboxes)
    Change,
    /// Every edit of a text input, including each keystroke
    Input,
}

impl FormEvent {
    /// DOM event type name
    pub fn as_str(&self) -> &'static str {
        match self {
            FormEvent::Change => "change",
            FormEvent::Input => "input",
        }
    }
}

/// Result of binding a pricer to a page.
///
/// `Absent` means the page lacks one of the pricer's controls; updating it
/// does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricerHandle<P> {
    Bound(P),
    Absent,
}

impl<P: Pricer> PricerHandle<P> {
    pub fn is_bound(&self) -> bool {
        matches!(self, PricerHandle::Bound(_))
    }

    pub fn pricer(&self) -> Option<&P> {
        match self {
            PricerHandle::Bound(pricer) => Some(pricer),
            PricerHandle::Absent => None,
        }
    }

    /// Re-run the pricer against the current document state
    pub fn update<D: FormDocument + ?Sized>(&self, doc: &D) -> Option<P::Quote> {
        self.pricer().map(|pricer| pricer.update(doc))
    }
}
