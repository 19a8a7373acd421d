//! Environment-sourced configuration for the mail transport and the
//! listing page.
//!
//! Mail settings are required only on the notification path: the one-shot
//! `send` command validates them before doing any work, while the server
//! loads them lazily on each send attempt so a missing credential fails
//! that operation alone.

use url::Url;

use crate::errors::ConfigError;

/// The listing page scraped by default.
pub const DEFAULT_NEWS_URL: &str = "https://www.adrenaline.com.br/games/";

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;

/// Settings for the outbound SMTP session.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Sender address, also used as the authentication username.
    pub from: String,
    /// Sender credential (password or app token).
    pub password: String,
    /// Recipient address.
    pub to: String,
    /// SMTP submission host.
    pub smtp_host: String,
    /// SMTP submission port (STARTTLS).
    pub smtp_port: u16,
}

impl MailConfig {
    /// Load mail settings from the environment.
    ///
    /// `EMAIL_FROM`, `EMAIL_PASSWORD`, and `EMAIL_TO` are required; the
    /// error names the first one that is missing. `SMTP_HOST` and
    /// `SMTP_PORT` fall back to the Gmail submission endpoint.
    pub fn from_env() -> Result<Self, ConfigError> {
        let from = require("EMAIL_FROM")?;
        let password = require("EMAIL_PASSWORD")?;
        let to = require("EMAIL_TO")?;

        let smtp_host =
            std::env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string());
        let smtp_port = match std::env::var("SMTP_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "SMTP_PORT",
                reason: format!("not a port number: {raw}"),
            })?,
            Err(_) => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            from,
            password,
            to,
            smtp_host,
            smtp_port,
        })
    }
}

/// Validate the configured listing URL, returning it unchanged.
pub fn validate_news_url(raw: &str) -> Result<String, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::Invalid {
        name: "NEWS_URL",
        reason: e.to_string(),
    })?;
    Ok(raw.to_string())
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_news_url_accepts_default() {
        assert_eq!(
            validate_news_url(DEFAULT_NEWS_URL).unwrap(),
            DEFAULT_NEWS_URL
        );
    }

    #[test]
    fn test_validate_news_url_rejects_garbage() {
        let err = validate_news_url("not a url").unwrap_err();
        assert!(err.to_string().contains("NEWS_URL"));
    }

    #[test]
    fn test_missing_var_names_the_variable() {
        let err = ConfigError::MissingVar("EMAIL_FROM");
        assert_eq!(
            err.to_string(),
            "missing environment variable: EMAIL_FROM"
        );
    }
}
