//! Native client for the contact endpoint.
//!
//! Mirrors the browser form: one request per submit, no retry, and the
//! form is cleared only when the server reports success.

use folio_contact::{ContactForm, Envelope, Submission};
use thiserror::Error;

pub const SENT_ALERT: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILED_ALERT: &str = "Failed to send message. Please try again.";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Form(#[from] folio_shared::Error),

    #[error("Failed to build HTTP client: {0}")]
    Setup(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

impl SubmitOutcome {
    pub fn alert(&self) -> &'static str {
        match self {
            SubmitOutcome::Sent => SENT_ALERT,
            SubmitOutcome::Failed => FAILED_ALERT,
        }
    }
}

#[derive(Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit the form.
    ///
    /// An incomplete form is rejected before any request is made. Transport
    /// errors and unreadable responses count as a failed submission.
    pub async fn submit(&self, form: &mut ContactForm) -> Result<SubmitOutcome, ClientError> {
        form.check()?;

        let outcome = match self.post(&form.submission()).await {
            Ok(envelope) if envelope.success => {
                form.reset();
                SubmitOutcome::Sent
            }
            Ok(envelope) => {
                tracing::warn!(message = %envelope.message, "Contact submission rejected");
                SubmitOutcome::Failed
            }
            Err(err) => {
                tracing::error!("Form submission error: {err}");
                SubmitOutcome::Failed
            }
        };

        Ok(outcome)
    }

    async fn post(&self, submission: &Submission) -> reqwest::Result<Envelope> {
        self.http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?
            .json::<Envelope>()
            .await
    }
}
