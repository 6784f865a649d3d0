//! SMTP delivery for summary emails.

use lettre::message::{Mailbox, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::errors::{EmailError, Error, Result};

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// From address; defaults to the username when unset.
    pub from: Option<String>,
}

pub struct EmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl EmailSender {
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let from_addr = config.from.as_deref().unwrap_or(&config.username);
        let from: Mailbox = from_addr
            .parse()
            .map_err(|e| Error::Email(EmailError::InvalidMessage(format!("from address: {}", e))))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| Error::Email(EmailError::Transport(e.to_string())))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(EmailSender { transport, from })
    }

    pub async fn send_html(&self, to: &str, subject: &str, html: String) -> Result<()> {
        let to: Mailbox = to
            .parse()
            .map_err(|e| Error::Email(EmailError::InvalidMessage(format!("to address: {}", e))))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .singlepart(SinglePart::html(html))
            .map_err(|e| Error::Email(EmailError::InvalidMessage(e.to_string())))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| Error::Email(EmailError::Transport(e.to_string())))?;

        Ok(())
    }
}
