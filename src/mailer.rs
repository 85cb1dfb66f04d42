//! Booking notification mail through the Resend HTTP API.

use std::time::Duration;

use serde::Serialize;

use crate::config::Config;

const SEND_TIMEOUT: Duration = Duration::from_secs(15);

/// Longest Resend error body echoed back to the client
pub const MAX_ERROR_BODY: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// What Resend answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailResponse {
    pub status: u16,
    pub body: String,
}

impl MailResponse {
    /// Resend accepts with 200 or 202
    pub fn accepted(&self) -> bool {
        matches!(self.status, 200 | 202)
    }

    /// Response body cut to [`MAX_ERROR_BODY`] characters
    pub fn short_body(&self) -> String {
        self.body.chars().take(MAX_ERROR_BODY).collect()
    }
}

#[derive(Debug, Serialize)]
struct SendEmailPayload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

/// Resend client bound to one sender and one recipient
#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
    to: String,
}

impl ResendMailer {
    pub fn new(
        api_url: &str,
        api_key: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, MailError> {
        let client = reqwest::Client::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/emails", api_url.trim_end_matches('/')),
            api_key: api_key.into(),
            from: from.into(),
            to: to.into(),
        })
    }

    /// `None` when the API key or recipient is missing
    pub fn from_config(config: &Config) -> Result<Option<Self>, MailError> {
        match (&config.resend_api_key, &config.recipient_email) {
            (Some(key), Some(to)) => {
                Self::new(&config.resend_api_url, key, &config.mail_from, to).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Send a plain-text email. Non-2xx answers are returned, not raised.
    pub async fn send(&self, subject: &str, text: &str) -> Result<MailResponse, MailError> {
        let payload = SendEmailPayload {
            from: &self.from,
            to: [self.to.as_str()],
            subject,
            text,
        };
        tracing::info!(subject = %subject, to = %self.to, "Sending email via Resend");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::info!(status, body = %body, "Resend responded");

        Ok(MailResponse { status, body })
    }
}
