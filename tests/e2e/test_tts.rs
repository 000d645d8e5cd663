use crate::e2e::helpers;

use helpers::{TestContext, FAKE_AUDIO};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use regex::Regex;
use serde_json::json;
use speechpad_backend::domain::tts::{SynthesisRequest, FAILED_MESSAGE, REJECTED_MESSAGE};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_synthesize_text_to_speech(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({
                "text": "Hola mundo",
                "language": "es",
                "accent": "com",
                "slow": false
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg")
        .assert_header_exists("x-elapsed-seconds")
        .assert_header("x-character-count", "10")
        .assert_header("x-audio-bytes", &FAKE_AUDIO.len().to_string());

    assert_eq!(response.body_bytes, FAKE_AUDIO.to_vec());

    let disposition = response.header("content-disposition").unwrap();
    let pattern = Regex::new(r#"^attachment; filename="Hola mundo_\d{8}_\d{6}\.mp3""#).unwrap();
    assert!(pattern.is_match(disposition), "disposition {}", disposition);

    let elapsed = response.header("x-elapsed-seconds").unwrap();
    assert!(Regex::new(r"^\d+\.\d{2}$").unwrap().is_match(elapsed));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_pass_trimmed_text_and_voice_options_to_provider(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({
                "text": "   Good morning\n",
                "language": "en",
                "accent": "co.uk",
                "slow": true
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        ctx.tts.last_request(),
        Some(SynthesisRequest {
            text: "Good morning".to_string(),
            language: "en".to_string(),
            accent: "co.uk".to_string(),
            slow: true,
        })
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_apply_default_voice_options(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": "Texto" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let request = ctx.tts.last_request().unwrap();
    assert_eq!(request.language, "es");
    assert_eq!(request.accent, "com");
    assert!(!request.slow);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_sanitized_filename(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({ "text": "Texto", "filename": "  notas: capítulo 1/2?  " }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let disposition = response.header("content-disposition").unwrap();
    let pattern =
        Regex::new(r"filename\*=UTF-8''notas_%20cap%C3%ADtulo%201_2__\d{8}_\d{6}\.mp3$").unwrap();
    assert!(pattern.is_match(disposition), "disposition {}", disposition);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_blank_text_without_calling_provider(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": "   \n\t " }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_error_message(REJECTED_MESSAGE);
    assert_eq!(ctx.tts.calls(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_missing_text_without_session(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({}))
        .await
        .unwrap();

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(ctx.tts.calls(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_provider_failure_with_detail(ctx: &TestContext) {
    ctx.tts
        .fail_with("Failed to connect. Probable cause: connection refused");

    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": "Hola mundo" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message(FAILED_MESSAGE);

    let detail = response
        .body
        .as_ref()
        .and_then(|b| b.get("detail"))
        .and_then(|d| d.as_str())
        .unwrap();
    assert!(detail.contains("connection refused"));
    assert_eq!(ctx.tts.calls(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_text_over_limit(ctx: &TestContext) {
    let text = "a".repeat(8001);

    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": text }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE)
        .assert_error_message("8000 characters or less");
    assert_eq!(ctx.tts.calls(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_text_at_limit(ctx: &TestContext) {
    let text = "ñ".repeat(8000);

    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": text }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_voice_options(ctx: &TestContext) {
    let response = ctx.client.get("/api/tts/options").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["default_language"], "es");
    assert_eq!(body["default_accent"], "com");
    assert_eq!(body["default_slow"], false);
    assert_eq!(body["max_chars"], 8000);

    let languages: Vec<&str> = body["languages"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|l| l["code"].as_str())
        .collect();
    assert_eq!(languages, vec!["es", "en", "pt", "fr", "it", "de", "ja", "ko"]);

    let accents = body["accents"].as_array().unwrap();
    assert!(accents.iter().any(|a| a["code"] == "co.uk"));
    assert!(accents.iter().all(|a| a["label"].is_string()));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_refuse_accent_outside_catalog(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({ "text": "Hola", "accent": "com@127.0.0.1:6379" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Unsupported accent");
    assert_eq!(ctx.tts.calls(), 0);
    assert_eq!(ctx.tts.last_request(), None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_refuse_language_outside_catalog(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({ "text": "Hola", "language": "xx" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Unsupported language");
    assert_eq!(ctx.tts.calls(), 0);
}
