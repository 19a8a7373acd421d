//! SMTP delivery for the rendered digest.
//!
//! One connection per send: connect to the submission endpoint, upgrade
//! with STARTTLS, authenticate with the sender credentials, submit the
//! message, close. There is no retry; a failed send surfaces as a
//! [`SendError`] and leaves nothing half-done on the caller's side.

use std::time::Duration;

use chrono::Local;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, instrument};

use crate::config::MailConfig;
use crate::digest;
use crate::errors::{ConfigError, SendError};
use crate::models::Article;

const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends rendered digests through an authenticated STARTTLS session.
pub struct Mailer {
    config: MailConfig,
}

impl Mailer {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    /// Build a mailer from the environment.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingVar`] naming the first required variable that
    /// is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(MailConfig::from_env()?))
    }

    /// Render and deliver a digest for `articles`.
    ///
    /// An empty list is delivered as a header-only table; skipping the
    /// send for an empty digest is the caller's call, not this method's.
    #[instrument(level = "info", skip_all, fields(count = articles.len()))]
    pub async fn send_digest(&self, articles: &[Article]) -> Result<(), SendError> {
        let now = Local::now();
        let message = Message::builder()
            .from(self.config.from.parse::<Mailbox>()?)
            .to(self.config.to.parse::<Mailbox>()?)
            .subject(digest::subject(now))
            .header(ContentType::TEXT_HTML)
            .body(digest::render(articles, now))?;

        let transport =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port)
                .credentials(Credentials::new(
                    self.config.from.clone(),
                    self.config.password.clone(),
                ))
                .timeout(Some(SMTP_TIMEOUT))
                .build();

        transport.send(message).await?;
        info!(to = %self.config.to, "Digest email sent");
        Ok(())
    }
}
