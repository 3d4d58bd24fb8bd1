//! Mail-submission seam and the SMTPS implementation behind it.

use async_trait::async_trait;
use lettre::address::{AddressError, Envelope};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use thiserror::Error;

/// Errors surfaced by mail submission.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address: {0}")]
    Address(#[from] AddressError),
    #[error("invalid envelope: {0}")]
    Envelope(#[from] lettre::error::Error),
    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Capability to submit one fully formed message. The pipeline owns the
/// message bytes; the transport owns the session, endpoint, credentials,
/// and envelope.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: &[u8]) -> Result<(), MailError>;
}

/// Connection settings for [`SmtpsMailer`].
#[derive(Debug, Clone)]
pub struct SmtpsMailerConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
    pub to_address: String,
}

/// Implicit-TLS SMTP submission with credential authentication. The
/// connection is established lazily at send time.
pub struct SmtpsMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    envelope: Envelope,
}

impl SmtpsMailer {
    pub fn new(config: SmtpsMailerConfig) -> Result<Self, MailError> {
        let from: Address = config.from_address.parse()?;
        let to: Address = config.to_address.parse()?;
        let envelope = Envelope::new(Some(from), vec![to])?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(config.username, config.password))
            .build();
        Ok(Self {
            transport,
            envelope,
        })
    }
}

#[async_trait]
impl MailTransport for SmtpsMailer {
    async fn send(&self, message: &[u8]) -> Result<(), MailError> {
        self.transport.send_raw(&self.envelope, message).await?;
        Ok(())
    }
}
