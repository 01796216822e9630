use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_contact::Envelope;
use thiserror::Error;

/// Everything that can go wrong while answering a contact submission.
///
/// All variants collapse into the same failure envelope.
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Malformed request body: {0}")]
    Malformed(#[from] JsonRejection),

    #[error("Failed to build email payload: {0}")]
    Payload(folio_shared::Error),

    #[error("Failed to deliver email: {0}")]
    Delivery(folio_shared::Error),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        tracing::error!("Contact form error: {self}");

        (StatusCode::INTERNAL_SERVER_ERROR, Json(Envelope::failed())).into_response()
    }
}
