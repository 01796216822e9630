use folio_contact::EmailPayload;

use crate::EmailService;

/// Hand a contact notification to the email service.
#[tracing::instrument(skip_all, fields(subject = %payload.subject))]
pub async fn notify_owner(
    service: &EmailService,
    payload: &EmailPayload,
) -> folio_shared::Result<()> {
    service
        .send(
            &payload.to,
            Some(&payload.from),
            &payload.subject,
            &payload.html,
            &payload.plain,
        )
        .await?;

    Ok(())
}
