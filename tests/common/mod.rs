#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use image_toolbox::{build_router, Config};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ARK_KEY: &str = "ark-test-key";
pub const REMOVE_BG_KEY: &str = "remove-bg-test-key";
pub const REMOVE_BG_PATH: &str = "/v1.0/removebg";

pub fn test_config(upstream: &MockServer) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        ark_api_key: Some(ARK_KEY.to_string()),
        ark_base_url: upstream.uri(),
        image_model: "image-model".to_string(),
        vision_model: "vision-model".to_string(),
        default_size: "2K".to_string(),
        remove_bg_api_key: Some(REMOVE_BG_KEY.to_string()),
        remove_bg_url: format!("{}{}", upstream.uri(), REMOVE_BG_PATH),
        upstream_timeout_secs: 5,
        max_upload_bytes: 1024 * 1024,
    }
}

pub fn test_server(config: &Config) -> TestServer {
    let router = build_router(config).expect("Failed to build router");
    TestServer::new(router).expect("Failed to create test server")
}

/// Fails the test on drop if anything reaches the upstream.
pub async fn forbid_upstream_calls(upstream: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(upstream)
        .await;
}

pub fn image_form(bytes: &[u8], mime: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "image_file",
        Part::bytes(bytes.to_vec()).file_name("cat.png").mime_type(mime),
    )
}
