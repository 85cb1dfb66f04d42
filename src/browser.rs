//! Browser entry point (wasm32 only).
//!
//! Binds the pricers to the real DOM and installs one listener per
//! subscription. Built with `wasm-pack build --target web`; the pages load the
//! module from `/pkg`.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlSelectElement};

use crate::form::{ElementIds, FormDocument, FormPage};

/// `FormDocument` over the live page
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }
}

impl FormDocument for BrowserDocument {
    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn read_value(&self, id: &str) -> Option<String> {
        let element = self.element(id)?;
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            return Some(select.value());
        }
        element.dyn_ref::<HtmlInputElement>().map(|input| input.value())
    }

    fn read_checked(&self, id: &str) -> Option<bool> {
        self.element(id)?
            .dyn_ref::<HtmlInputElement>()
            .map(|input| input.checked())
    }

    fn write_text(&self, id: &str, text: &str) {
        if let Some(element) = self.element(id) {
            element.set_text_content(Some(text));
        }
    }

    fn write_value(&self, id: &str, value: &str) {
        if let Some(input) = self
            .element(id)
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_value(value);
        }
    }
}

/// Bind the forms on `document`, install listeners and run the page-load pass
pub fn attach(document: Document, ids: &ElementIds) -> Result<Rc<FormPage<BrowserDocument>>, JsValue> {
    let page = Rc::new(FormPage::setup(BrowserDocument::new(document), ids));

    for subscription in page.subscriptions() {
        let Some(element) = page.document().element(&subscription.element_id) else {
            continue;
        };

        let handler_page = Rc::clone(&page);
        let element_id = subscription.element_id.clone();
        let event = subscription.event;
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            handler_page.dispatch(&element_id, event);
        }) as Box<dyn FnMut(_)>);

        element.add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())?;
        // Listeners live as long as the page
        closure.forget();
    }

    page.initialize();
    Ok(page)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    attach(document, &ElementIds::default())?;
    Ok(())
}
