use axum::{Json, extract::State, extract::rejection::JsonRejection};
use folio_contact::{EmailPayload, Envelope, Submission};

use crate::{error::ContactError, routes::AppState};

/// POST /api/contact
///
/// Builds the notification for the site owner, hands it to the email
/// service, waits the configured delay and answers with the fixed success
/// envelope. Any body that is not a JSON object with the four string fields
/// gets the failure envelope with a 500 status, without waiting.
pub async fn action(
    State(app_state): State<AppState>,
    input: Result<Json<Submission>, JsonRejection>,
) -> Result<Json<Envelope>, ContactError> {
    let Json(submission) = input?;

    let payload = EmailPayload::from_submission(
        &submission,
        &app_state.config.contact.to_address,
        &app_state.config.site.owner_name,
    )
    .map_err(ContactError::Payload)?;

    folio_notification::contact::notify_owner(&app_state.email, &payload)
        .await
        .map_err(ContactError::Delivery)?;

    tokio::time::sleep(app_state.config.contact.delay()).await;

    Ok(Json(Envelope::sent()))
}
