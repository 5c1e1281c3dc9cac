//! Outbound email transports for notification documents.

use async_trait::async_trait;
use charter_booking::{EmailMessage, NotificationSender};
use lettre::message::header::ContentType;
use lettre::message::MultiPart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::app_config::EmailConfig;

/// Sends notification documents through an SMTP relay.
///
/// A fresh transport is built per send to avoid holding pooled connections
/// between infrequent notifications; `lettre`'s transport is synchronous, so
/// the actual network call runs on the blocking pool.
#[derive(Clone)]
pub struct SmtpMailer {
    host: String,
    port: u16,
    credentials: Credentials,
    sender_email: String,
    sender_name: String,
}

impl SmtpMailer {
    pub fn new(
        host: String,
        port: u16,
        username: String,
        password: String,
        sender_email: String,
        sender_name: String,
    ) -> Self {
        Self {
            host,
            port,
            credentials: Credentials::new(username, password),
            sender_email,
            sender_name,
        }
    }

    /// Builds a mailer from configuration, or `None` when the SMTP settings
    /// are incomplete and the console mailer should be used instead.
    pub fn from_config(config: &EmailConfig) -> Option<Self> {
        let (host, username, password) = config.smtp_settings()?;
        Some(Self::new(
            host,
            config.smtp_port,
            username,
            password,
            config.sender_email.clone(),
            config.sender_name.clone(),
        ))
    }

    fn sender_header(&self) -> String {
        format!("{} <{}>", self.sender_name, self.sender_email)
    }

    fn build_transport(&self) -> Result<SmtpTransport, lettre::transport::smtp::Error> {
        Ok(SmtpTransport::relay(&self.host)?
            .port(self.port)
            .credentials(self.credentials.clone())
            .build())
    }
}

#[async_trait]
impl NotificationSender for SmtpMailer {
    async fn send(
        &self,
        message: &EmailMessage,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut builder = Message::builder()
            .from(self.sender_header().parse()?)
            .subject(&message.subject);
        for recipient in &message.to {
            builder = builder.to(recipient.parse()?);
        }

        let email = match &message.text_body {
            Some(text) => builder.multipart(MultiPart::alternative_plain_html(
                text.clone(),
                message.html_body.clone(),
            ))?,
            None => builder
                .header(ContentType::TEXT_HTML)
                .body(message.html_body.clone())?,
        };

        let transport = self.build_transport()?;
        tokio::task::spawn_blocking(move || transport.send(&email)).await??;
        Ok(())
    }
}

/// Logs notification documents instead of delivering them. Selected when no
/// SMTP relay is configured, so local runs work without mail infrastructure.
#[derive(Debug, Clone, Default)]
pub struct ConsoleMailer;

impl ConsoleMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSender for ConsoleMailer {
    async fn send(
        &self,
        message: &EmailMessage,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!(
            to = message.to.join(", "),
            subject = %message.subject,
            "email not sent: SMTP is not configured"
        );
        tracing::debug!(body = %message.html_body, "email body");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_config() -> EmailConfig {
        EmailConfig {
            smtp_host: Some("smtp.example.com".to_string()),
            smtp_port: 2525,
            smtp_username: Some("mailer".to_string()),
            smtp_password: Some("secret".to_string()),
            sender_email: "bookings@example.com".to_string(),
            sender_name: "Charter Desk".to_string(),
            admin_email: "ops@example.com".to_string(),
        }
    }

    #[test]
    fn complete_settings_select_the_smtp_mailer() {
        let mailer = SmtpMailer::from_config(&email_config()).unwrap();
        assert_eq!(mailer.host, "smtp.example.com");
        assert_eq!(mailer.port, 2525);
        assert_eq!(
            mailer.sender_header(),
            "Charter Desk <bookings@example.com>"
        );
    }

    #[test]
    fn partial_settings_select_nothing() {
        let mut config = email_config();
        config.smtp_host = None;
        assert!(SmtpMailer::from_config(&config).is_none());
    }

    #[tokio::test]
    async fn console_mailer_always_accepts() {
        let message = EmailMessage {
            to: vec!["ops@example.com".to_string()],
            subject: "New Private Car Booking Request - Jane Doe".to_string(),
            html_body: "<p>details</p>".to_string(),
            text_body: None,
        };
        ConsoleMailer::new().send(&message).await.unwrap();
    }
}
