//! Email notification service using lettre

use lettre::{
    Message, SmtpTransport, Transport as _,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Log the message instead of delivering it.
    #[default]
    Log,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub transport: Transport,
    #[serde(default)]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            transport: Transport::default(),
            smtp_host: String::new(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
        }
    }
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "noreply@folio.localhost".to_owned()
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: Option<SmtpTransport>,
    from: String,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = match config.transport {
            Transport::Log => {
                tracing::info!("Email transport is log only, messages will not be delivered");

                None
            }
            Transport::Smtp
                if config.smtp_username.is_empty() || config.smtp_password.is_empty() =>
            {
                tracing::info!(
                    smtp_host = %config.smtp_host,
                    smtp_port = config.smtp_port,
                    "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
                );

                Some(
                    SmtpTransport::builder_dangerous(&config.smtp_host)
                        .port(config.smtp_port)
                        .build(),
                )
            }
            Transport::Smtp => {
                tracing::info!(
                    smtp_host = %config.smtp_host,
                    smtp_port = config.smtp_port,
                    from = %config.from_address,
                    "Email service initialized with authentication and TLS"
                );

                let creds =
                    Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

                Some(
                    SmtpTransport::relay(&config.smtp_host)?
                        .port(config.smtp_port)
                        .credentials(creds)
                        .build(),
                )
            }
        };

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
        })
    }

    /// Service that only logs what it would send.
    pub fn log_only(from: impl Into<String>) -> Self {
        Self {
            mailer: None,
            from: from.into(),
        }
    }

    pub fn delivers(&self) -> bool {
        self.mailer.is_some()
    }

    pub async fn send(
        &self,
        to: impl Into<String>,
        reply_to: Option<&str>,
        subject: impl Into<String>,
        html: impl Into<String>,
        plain: impl Into<String>,
    ) -> anyhow::Result<()> {
        let to = to.into();
        let subject = subject.into();
        let html = html.into();

        let Some(mailer) = self.mailer.clone() else {
            tracing::info!(
                to = %to,
                from = %self.from,
                reply_to = reply_to.unwrap_or_default(),
                subject = %subject,
                html = %html,
                "Email would be sent"
            );

            return Ok(());
        };

        tracing::info!(to = %to, subject = %subject, "Sending email");

        let message = self.message(&to, reply_to, subject, html, plain.into())?;

        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }

    /// Build the message. Sender and recipient come from configuration; a
    /// reply-to that is not a valid address is dropped, never an error.
    fn message(
        &self,
        to: &str,
        reply_to: Option<&str>,
        subject: String,
        html: String,
        plain: String,
    ) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(self.from.parse()?)
            .to(to.parse()?)
            .subject(subject);

        if let Some(reply_to) = reply_to {
            match reply_to.parse::<Mailbox>() {
                Ok(mailbox) => builder = builder.reply_to(mailbox),
                Err(e) => {
                    tracing::warn!(reply_to, error = %e, "Invalid reply-to address, sending without it")
                }
            }
        }

        Ok(builder.multipart(MultiPart::alternative_plain_html(plain, html))?)
    }
}
