//! Page handlers for the workshop and booking forms

use askama::Template;
use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::cache::AppCache;
use crate::error::Result;
use crate::form::{ElementIds, FormPage, MemoryDocument};
use crate::AppState;

/// Selection each form starts with
const DEFAULT_WORKSHOP: &str = "3day";
const DEFAULT_SERVICE: &str = "photography";
const DEFAULT_HOURS: &str = "1";

const WORKSHOP_OPTIONS: [(&str, &str); 3] = [
    ("3day", "3-Day Photography Workshop ($15)"),
    ("advanced", "Advanced Techniques ($25)"),
    ("editing", "Photo Editing Masterclass ($20)"),
];

const SERVICE_OPTIONS: [(&str, &str); 2] = [
    ("photography", "Photography ($30/hour)"),
    ("videography", "Videography ($40-$45/hour)"),
];

/// Pages served by the site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Both forms
    Home,
    Workshops,
    Booking,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [PageKind::Home, PageKind::Workshops, PageKind::Booking];

    pub fn slug(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Workshops => "workshops",
            PageKind::Booking => "booking",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            PageKind::Home => "Creative Clicks",
            PageKind::Workshops => "Workshops | Creative Clicks",
            PageKind::Booking => "Book a Shoot | Creative Clicks",
        }
    }

    fn has_workshop_form(&self) -> bool {
        matches!(self, PageKind::Home | PageKind::Workshops)
    }

    fn has_booking_form(&self) -> bool {
        matches!(self, PageKind::Home | PageKind::Booking)
    }
}

struct SelectOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

fn select_options(options: &[(&'static str, &'static str)], selected: &str) -> Vec<SelectOption> {
    options
        .iter()
        .map(|&(value, label)| SelectOption {
            value,
            label,
            selected: value == selected,
        })
        .collect()
}

/// Site page template
#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate {
    title: &'static str,
    ids: ElementIds,
    has_workshop_form: bool,
    has_booking_form: bool,
    workshop_options: Vec<SelectOption>,
    service_options: Vec<SelectOption>,
    hours: &'static str,
    workshop_price_text: String,
    booking_price_text: String,
    total_price_value: String,
}

/// Render a page with its initial prices filled in.
///
/// Runs the same page-load pass the browser runs, against an in-memory copy of
/// the page's form controls, so the markup is correct before the wasm module
/// takes over.
pub fn render_page(kind: PageKind) -> Result<String> {
    let ids = ElementIds::default();

    let mut doc = MemoryDocument::new();
    if kind.has_workshop_form() {
        doc = doc
            .with_select(&ids.workshop_type, DEFAULT_WORKSHOP)
            .with_output(&ids.workshop_price);
    }
    if kind.has_booking_form() {
        doc = doc
            .with_select(&ids.service, DEFAULT_SERVICE)
            .with_input(&ids.hours, DEFAULT_HOURS)
            .with_checkbox(&ids.framing, false)
            .with_output(&ids.booking_price)
            .with_input(&ids.total_price_input, "");
    }

    let page = FormPage::setup(doc, &ids);
    page.initialize();
    let doc = page.document();

    let template = PageTemplate {
        title: kind.title(),
        has_workshop_form: kind.has_workshop_form(),
        has_booking_form: kind.has_booking_form(),
        workshop_options: select_options(&WORKSHOP_OPTIONS, DEFAULT_WORKSHOP),
        service_options: select_options(&SERVICE_OPTIONS, DEFAULT_SERVICE),
        hours: DEFAULT_HOURS,
        workshop_price_text: doc.text(&ids.workshop_price).unwrap_or_default(),
        booking_price_text: doc.text(&ids.booking_price).unwrap_or_default(),
        total_price_value: doc.value(&ids.total_price_input).unwrap_or_default(),
        ids,
    };

    Ok(template.render()?)
}

/// Homepage handler
pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    serve_page(&state, PageKind::Home).await
}

/// Workshop signup page
pub async fn workshops(State(state): State<AppState>) -> Result<Html<String>> {
    serve_page(&state, PageKind::Workshops).await
}

/// Booking page
pub async fn booking(State(state): State<AppState>) -> Result<Html<String>> {
    serve_page(&state, PageKind::Booking).await
}

async fn serve_page(state: &AppState, kind: PageKind) -> Result<Html<String>> {
    let slug = kind.slug();

    // Try cache first
    if let Some(cached) = state.cache.pages.get(slug).await {
        tracing::debug!("Cache HIT for page: {}", slug);
        return Ok(Html((*cached).clone()));
    }

    tracing::debug!("Cache MISS for page: {}", slug);
    let html = render_page(kind)?;
    state
        .cache
        .pages
        .insert(slug.to_string(), Arc::new(html.clone()))
        .await;

    Ok(Html(html))
}

/// Render every page into the cache
pub async fn warm_pages(cache: &AppCache) {
    tracing::info!("Starting cache warm-up...");

    for kind in PageKind::ALL {
        match render_page(kind) {
            Ok(html) => {
                cache
                    .pages
                    .insert(kind.slug().to_string(), Arc::new(html))
                    .await;
            }
            Err(e) => tracing::warn!("Failed to warm {} page: {}", kind.slug(), e),
        }
    }

    tracing::info!("Cache warm-up complete. Stats: {:?}", cache.stats());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_renders_both_forms_with_initial_prices() {
        let html = render_page(PageKind::Home).unwrap();
        assert!(html.contains(r#"id="workshopType""#));
        assert!(html.contains(r#"id="service""#));
        assert!(html.contains("Price: $15"));
        assert!(html.contains("Total: $30.00"));
        assert!(html.contains(r#"id="totalPriceInput" name="price" value="$30.00""#));
    }

    #[test]
    fn test_workshops_page_has_no_booking_form() {
        let html = render_page(PageKind::Workshops).unwrap();
        assert!(html.contains("Price: $15"));
        assert!(!html.contains(r#"id="totalPriceInput""#));
        assert!(!html.contains("Total: $"));
    }

    #[test]
    fn test_booking_page_has_no_workshop_form() {
        let html = render_page(PageKind::Booking).unwrap();
        assert!(html.contains("Total: $30.00"));
        assert!(!html.contains(r#"id="workshopType""#));
    }

    #[test]
    fn test_default_options_are_selected() {
        let html = render_page(PageKind::Home).unwrap();
        assert!(html.contains(r#"<option value="3day" selected>"#));
        assert!(html.contains(r#"<option value="photography" selected>"#));
        assert!(html.contains(r#"<option value="videography">"#));
    }

    #[tokio::test]
    async fn test_warm_pages_fills_cache() {
        let cache = AppCache::new();
        warm_pages(&cache).await;
        for kind in PageKind::ALL {
            assert!(cache.pages.get(kind.slug()).await.is_some());
        }
    }
}
