use axum::{Router, body::Body, response::Response};
use folio::{
    AppState, Config,
    config::{ContactConfig, ObservabilityConfig, ServerConfig, SiteConfig},
};
use folio_notification::{EmailConfig, EmailService, Transport};
use http_body_util::BodyExt;

pub fn test_config(delay_ms: u64) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        site: SiteConfig {
            owner_name: "Sam Rivers".to_owned(),
            title: "Systems Engineer".to_owned(),
        },
        contact: ContactConfig {
            to_address: "sam@folio.localhost".to_owned(),
            delay_ms,
        },
        email: EmailConfig::default(),
        observability: ObservabilityConfig::default(),
        resume: None,
    }
}

pub fn test_app_with(config: Config) -> anyhow::Result<Router> {
    let email = EmailService::new(&config.email)?;

    Ok(folio::cli::server::app(AppState { config, email }))
}

pub fn test_app(delay_ms: u64) -> anyhow::Result<Router> {
    test_app_with(test_config(delay_ms))
}

/// App whose email delivery always fails (SMTP on a port nobody listens on)
#[allow(dead_code)]
pub fn failing_delivery_app() -> anyhow::Result<Router> {
    let mut config = test_config(0);
    config.email = EmailConfig {
        transport: Transport::Smtp,
        smtp_host: "127.0.0.1".to_owned(),
        smtp_port: 9,
        ..Default::default()
    };

    test_app_with(config)
}

#[allow(dead_code)]
pub async fn body_string(response: Response) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

#[allow(dead_code)]
pub async fn body_json(response: Response) -> anyhow::Result<serde_json::Value> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(serde_json::from_slice(&bytes)?)
}

#[allow(dead_code)]
pub fn json_request(body: impl Into<Body>) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(body.into())
        .expect("valid request")
}
