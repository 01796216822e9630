//! Contact endpoint tests: fixed envelopes, malformed bodies and the delay

mod helpers;

use axum::{body::Body, http::Request, http::StatusCode};
use helpers::{body_json, failing_delivery_app, json_request, test_app};
use serde_json::json;
use tower::ServiceExt;

fn sent() -> serde_json::Value {
    json!({"success": true, "message": "Message sent successfully!"})
}

fn failed() -> serde_json::Value {
    json!({"success": false, "message": "Failed to send message"})
}

#[tokio::test]
async fn test_well_formed_submission_is_sent() -> anyhow::Result<()> {
    let body = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "subject": "Engines",
        "message": "Hello,\nI enjoyed your projects."
    });

    let response = test_app(0)?
        .oneshot(json_request(body.to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await?, sent());

    Ok(())
}

#[tokio::test]
async fn test_field_content_does_not_influence_response() -> anyhow::Result<()> {
    let long_message = "x".repeat(50_000);
    let bodies = vec![
        json!({"name": "", "email": "", "subject": "", "message": ""}),
        json!({"name": "<script>", "email": "not-an-email", "subject": "💬", "message": "a\nb"}),
        json!({"name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": long_message}),
        json!({"name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": "Hi", "extra": 42}),
    ];

    for body in bodies {
        let response = test_app(0)?
            .oneshot(json_request(body.to_string()))
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await?, sent());
    }

    Ok(())
}

#[tokio::test]
async fn test_non_json_body_fails() -> anyhow::Result<()> {
    let response = test_app(0)?
        .oneshot(json_request("name=Ada&email=ada@example.com"))
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await?, failed());

    Ok(())
}

#[tokio::test]
async fn test_missing_or_mistyped_fields_fail() -> anyhow::Result<()> {
    let bodies = vec![
        json!({"name": "Ada", "email": "ada@example.com", "subject": "Hi"}),
        json!({"name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": 7}),
        json!(["Ada", "ada@example.com", "Hi", "Hello"]),
        json!(null),
    ];

    for body in bodies {
        let response = test_app(0)?
            .oneshot(json_request(body.to_string()))
            .await?;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await?, failed());
    }

    Ok(())
}

#[tokio::test]
async fn test_wrong_content_type_fails() -> anyhow::Result<()> {
    let body = json!({"name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": "Hello"});
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "text/plain")
        .body(Body::from(body.to_string()))?;

    let response = test_app(0)?.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await?, failed());

    Ok(())
}

#[tokio::test]
async fn test_delivery_failure_fails() -> anyhow::Result<()> {
    let body = json!({"name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": "Hello"});

    let response = failing_delivery_app()?
        .oneshot(json_request(body.to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await?, failed());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_success_waits_for_delay() -> anyhow::Result<()> {
    let body = json!({"name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": "Hello"});
    let started = tokio::time::Instant::now();

    let response = test_app(1000)?
        .oneshot(json_request(body.to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(started.elapsed() >= std::time::Duration::from_secs(1));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_submissions_share_the_delay() -> anyhow::Result<()> {
    let body = json!({"name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": "Hello"});
    let app = test_app(1000)?;
    let started = tokio::time::Instant::now();

    let (first, second) = tokio::join!(
        app.clone().oneshot(json_request(body.to_string())),
        app.oneshot(json_request(body.to_string())),
    );

    assert_eq!(first?.status(), StatusCode::OK);
    assert_eq!(second?.status(), StatusCode::OK);
    assert!(started.elapsed() >= std::time::Duration::from_secs(1));
    assert!(started.elapsed() < std::time::Duration::from_secs(2));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_failure_does_not_wait() -> anyhow::Result<()> {
    let started = tokio::time::Instant::now();

    let response = test_app(1000)?.oneshot(json_request("{not json")).await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(started.elapsed() < std::time::Duration::from_secs(1));

    Ok(())
}

#[tokio::test]
async fn test_get_is_not_allowed() -> anyhow::Result<()> {
    let request = Request::builder()
        .uri("/api/contact")
        .body(Body::empty())?;

    let response = test_app(0)?.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
