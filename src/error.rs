//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::mailer::MailError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Server is not configured to send email. Missing RESEND_API_KEY or RECIPIENT_EMAIL.")]
    MailNotConfigured,

    #[error("Error sending email (status {status}): {body}")]
    MailRejected { status: u16, body: String },

    #[error("Network error sending email: {0}")]
    Mail(#[from] MailError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MailRejected { .. } | AppError::Mail(_) => StatusCode::BAD_GATEWAY,
            AppError::Template(_) | AppError::MailNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                "Template error"
            }
            // API failures answer in the booking endpoints' JSON shape
            AppError::BadRequest(_)
            | AppError::MailNotConfigured
            | AppError::MailRejected { .. }
            | AppError::Mail(_) => {
                tracing::warn!(status = status.as_u16(), "{}", self);
                let body = json!({ "success": false, "message": self.to_string() });
                return (status, Json(body)).into_response();
            }
        };

        // Return simple HTML error page
        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head><title>{} - Creative Clicks</title></head>
<body style="font-family: sans-serif; text-align: center; padding: 50px;">
    <h1>{}</h1>
    <p>{}</p>
    <a href="/">Return to homepage</a>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
            message
        );

        (status, axum::response::Html(html)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
