use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use folio_notification::EmailService;

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod index;
mod resume;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub email: EmailService,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        axum::http::StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate {
            owner_name: &template.site.owner_name,
        }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/resume.txt", get(resume::download))
        .route("/api/contact", post(contact::action))
        .fallback(fallback)
        .with_state(app_state)
}
