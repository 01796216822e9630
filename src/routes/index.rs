use axum::{extract::State, response::IntoResponse};

use crate::{routes::AppState, template::Template};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub owner_name: &'a str,
    pub title: &'a str,
    pub has_resume: bool,
}

pub async fn page(template: Template, State(app_state): State<AppState>) -> impl IntoResponse {
    template.render(IndexTemplate {
        owner_name: &template.site.owner_name,
        title: &template.site.title,
        has_resume: app_state.config.resume.is_some(),
    })
}
