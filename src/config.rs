//! Application configuration from environment variables.

use std::path::PathBuf;

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_MAIL_FROM: &str = "Creative Clicks <no-reply@onresend.com>";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct Config {
    /// Resend API key; booking mail is disabled without it
    pub resend_api_key: Option<String>,
    /// Where booking notifications are sent
    pub recipient_email: Option<String>,
    pub resend_api_url: String,
    pub mail_from: String,
    pub bind_addr: String,
    /// Images, stylesheets and the wasm-pack output (`pkg/`)
    pub static_dir: PathBuf,
}

impl Config {
    /// Read the process environment. `.env` is loaded by the binary before
    /// logging starts, so `RUST_LOG` may come from it too.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            resend_api_key: get("RESEND_API_KEY"),
            recipient_email: get("RECIPIENT_EMAIL"),
            resend_api_url: get("RESEND_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
            mail_from: get("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        }
    }

    /// Both the API key and the recipient are set
    pub fn mail_configured(&self) -> bool {
        self.resend_api_key.is_some() && self.recipient_email.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.resend_api_url, DEFAULT_RESEND_API_URL);
        assert_eq!(config.mail_from, DEFAULT_MAIL_FROM);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(!config.mail_configured());
    }

    #[test]
    fn test_mail_configured_needs_both_values() {
        assert!(!config_from(&[("RESEND_API_KEY", "re_123")]).mail_configured());
        assert!(!config_from(&[("RESEND_API_KEY", "re_123"), ("RECIPIENT_EMAIL", "  ")]).mail_configured());
        assert!(config_from(&[("RESEND_API_KEY", "re_123"), ("RECIPIENT_EMAIL", "owner@example.com")])
            .mail_configured());
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let config = config_from(&[("RESEND_API_URL", "http://localhost:9999/")]);
        assert_eq!(config.resend_api_url, "http://localhost:9999");
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        std::env::set_var("BIND_ADDR", "127.0.0.1:5055");
        let config = Config::from_env();
        std::env::remove_var("BIND_ADDR");
        assert_eq!(config.bind_addr, "127.0.0.1:5055");
    }
}
