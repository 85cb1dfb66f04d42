//! Creative Clicks website: price estimator, page server and booking mail.
//!
//! `pricing` and `form` compile for every target. In the browser (`wasm32`)
//! the `browser` module binds them to the live DOM; everywhere else the crate
//! is the axum server that renders the pages and forwards bookings.

pub mod form;
pub mod pricing;

#[cfg(target_arch = "wasm32")]
pub mod browser;

#[cfg(not(target_arch = "wasm32"))]
pub mod cache;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod mailer;
#[cfg(not(target_arch = "wasm32"))]
pub mod routes;

#[cfg(not(target_arch = "wasm32"))]
pub use server::AppState;

#[cfg(not(target_arch = "wasm32"))]
mod server {
    use std::sync::Arc;

    use crate::cache::AppCache;
    use crate::config::Config;
    use crate::mailer::ResendMailer;

    /// Shared state for all handlers
    #[derive(Clone)]
    pub struct AppState {
        pub config: Arc<Config>,
        pub cache: AppCache,
        /// `None` when Resend is not configured
        pub mailer: Option<ResendMailer>,
    }
}
