mod common;

use axum::http::StatusCode;
use common::{forbid_upstream_calls, test_config, test_server, ARK_KEY};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn returns_provider_payload_verbatim() {
    let upstream = MockServer::start().await;
    let provider_body = json!({ "data": [{ "url": "https://x/y.png" }] });

    Mock::given(method("POST"))
        .and(path("/images/generations"))
        .and(header("authorization", format!("Bearer {ARK_KEY}").as_str()))
        .and(body_partial_json(json!({
            "model": "image-model",
            "prompt": "a cat on the moon",
            "size": "4K",
            "sequential_image_generation": "disabled",
            "response_format": "url",
            "stream": false,
            "watermark": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_body.clone()))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = test_server(&test_config(&upstream));
    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "a cat on the moon", "size": "4K" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": true, "data": provider_body })
    );
}

#[tokio::test]
async fn size_defaults_when_absent() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/images/generations"))
        .and(body_partial_json(json!({ "size": "2K" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = test_server(&test_config(&upstream));
    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "sunset" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn missing_or_empty_prompt_is_rejected_without_upstream_call() {
    let upstream = MockServer::start().await;
    forbid_upstream_calls(&upstream).await;
    let server = test_server(&test_config(&upstream));

    for body in [json!({}), json!({ "prompt": "" }), json!({ "prompt": "   ", "size": "1K" })] {
        let response = server.post("/api/generate").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>(), json!({ "error": "请输入提示词" }));
    }
}

#[tokio::test]
async fn malformed_body_uses_error_envelope() {
    let upstream = MockServer::start().await;
    forbid_upstream_calls(&upstream).await;
    let server = test_server(&test_config(&upstream));

    let response = server.post("/api/generate").text("not json").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn missing_credential_is_configuration_error() {
    let upstream = MockServer::start().await;
    forbid_upstream_calls(&upstream).await;
    let mut config = test_config(&upstream);
    config.ark_api_key = None;
    let server = test_server(&config);

    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "a cat" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>(), json!({ "error": "API Key 未配置" }));
}

#[tokio::test]
async fn upstream_failure_forwards_status_but_not_body() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/images/generations"))
        .respond_with(ResponseTemplate::new(429).set_body_string("internal quota table 7"))
        .mount(&upstream)
        .await;

    let server = test_server(&test_config(&upstream));
    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "a cat" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "API 调用失败: Too Many Requests" })
    );
    assert!(!response.text().contains("quota table"));
}

#[tokio::test]
async fn non_json_success_is_bad_gateway() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/images/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&upstream)
        .await;

    let server = test_server(&test_config(&upstream));
    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "a cat" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>(), json!({ "error": "上游响应格式错误" }));
}

#[tokio::test]
async fn index_page_is_served() {
    let upstream = MockServer::start().await;
    let server = test_server(&test_config(&upstream));

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("/api/remove-bg"));
}

#[tokio::test]
async fn prompt_is_forwarded_untrimmed() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/images/generations"))
        .and(body_partial_json(json!({ "prompt": "  a cat  " })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = test_server(&test_config(&upstream));
    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "  a cat  " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn explicit_empty_size_is_forwarded() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/images/generations"))
        .and(body_partial_json(json!({ "size": "" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = test_server(&test_config(&upstream));
    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "a cat", "size": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn non_standard_status_falls_back_to_code() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/images/generations"))
        .respond_with(ResponseTemplate::new(599))
        .mount(&upstream)
        .await;

    let server = test_server(&test_config(&upstream));
    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": "a cat" }))
        .await;

    assert_eq!(response.status_code().as_u16(), 599);
    assert_eq!(response.json::<Value>(), json!({ "error": "API 调用失败: 599" }));
}

#[tokio::test]
async fn json_body_over_limit_is_payload_too_large() {
    let upstream = MockServer::start().await;
    forbid_upstream_calls(&upstream).await;
    let config = test_config(&upstream);
    let server = test_server(&config);

    let prompt = "x".repeat(config.max_upload_bytes * 2);
    let response = server
        .post("/api/generate")
        .json(&json!({ "prompt": prompt }))
        .await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.json::<Value>(), json!({ "error": "请求体过大" }));
}
