use anyhow::Result;
use folio_contact::{ContactForm, Field};

use crate::client::{ContactClient, SubmitOutcome};

pub struct SendInput {
    pub url: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Submit the contact form once and print the resulting alert.
pub async fn send(input: SendInput) -> Result<()> {
    let client = ContactClient::new(&input.url)?;

    let mut form = ContactForm::new()
        .with(Field::Name, input.name)
        .with(Field::Email, input.email)
        .with(Field::Subject, input.subject)
        .with(Field::Message, input.message);

    let outcome = client.submit(&mut form).await?;

    println!("{}", outcome.alert());

    match outcome {
        SubmitOutcome::Sent => Ok(()),
        SubmitOutcome::Failed => anyhow::bail!("contact submission failed"),
    }
}
