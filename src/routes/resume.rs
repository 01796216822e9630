use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::routes::AppState;

/// GET /resume.txt - plain-text résumé as a download
pub async fn download(State(app_state): State<AppState>) -> impl IntoResponse {
    let Some(resume) = app_state.config.resume.as_ref() else {
        return (StatusCode::NOT_FOUND, "No resume configured").into_response();
    };

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", resume.file_name()),
            ),
        ],
        resume.render(),
    )
        .into_response()
}
