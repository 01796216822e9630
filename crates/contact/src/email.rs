use askama::Template;

use crate::Submission;

#[derive(Template)]
#[template(path = "contact-notification.html")]
struct NotificationHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message_lines: Vec<&'a str>,
    site_owner: &'a str,
}

#[derive(Template)]
#[template(path = "contact-notification.txt")]
struct NotificationTextTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    site_owner: &'a str,
}

/// Email built from a contact submission, addressed to the site owner.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailPayload {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html: String,
    pub plain: String,
}

impl EmailPayload {
    pub fn from_submission(
        submission: &Submission,
        to: impl Into<String>,
        site_owner: &str,
    ) -> folio_shared::Result<Self> {
        let html = NotificationHtmlTemplate {
            name: &submission.name,
            email: &submission.email,
            subject: &submission.subject,
            message_lines: submission.message.split('\n').collect(),
            site_owner,
        }
        .render()
        .map_err(|e| folio_shared::Error::Unknown(e.into()))?;

        let plain = NotificationTextTemplate {
            name: &submission.name,
            email: &submission.email,
            subject: &submission.subject,
            message: &submission.message,
            site_owner,
        }
        .render()
        .map_err(|e| folio_shared::Error::Unknown(e.into()))?;

        Ok(Self {
            to: to.into(),
            from: submission.email.to_owned(),
            subject: format!("Portfolio Contact: {}", submission.subject),
            html,
            plain,
        })
    }
}
