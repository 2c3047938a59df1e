//! Volcengine Ark: text-to-image generation and vision chat completions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::upstream_failure;
use crate::error::Error;

pub const RECOGNIZE_INSTRUCTION: &str = "识别图片";
const FAILURE_PREFIX: &str = "API 调用失败";

#[derive(Clone)]
pub struct ArkClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    image_model: String,
    vision_model: String,
}

#[derive(Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    sequential_image_generation: &'static str,
    response_format: &'static str,
    size: &'a str,
    stream: bool,
    watermark: bool,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatTurn<'a>>,
}

#[derive(Serialize)]
struct ChatTurn<'a> {
    role: &'static str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageRef<'a> },
}

#[derive(Serialize)]
struct ImageRef<'a> {
    url: &'a str,
}

/// The slice of a chat completion we read.
#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatCompletion {
    /// Content of the first choice, `None` if absent or empty.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
            .filter(|c| !c.is_empty())
    }
}

/// A completion both typed and as the provider sent it.
pub struct Recognition {
    pub completion: ChatCompletion,
    pub raw: Value,
}

impl ArkClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
        image_model: impl Into<String>,
        vision_model: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            image_model: image_model.into(),
            vision_model: vision_model.into(),
        }
    }

    fn api_key(&self) -> Result<&str, Error> {
        self.api_key.as_deref().ok_or(Error::Configuration)
    }

    /// Returns the provider's JSON untouched.
    pub async fn generate_image(&self, prompt: &str, size: &str) -> Result<Value, Error> {
        let api_key = self.api_key()?;
        let payload = GenerationRequest {
            model: &self.image_model,
            prompt,
            sequential_image_generation: "disabled",
            response_format: "url",
            size,
            stream: false,
            watermark: true,
        };

        tracing::info!(model = %self.image_model, size, "requesting image generation");
        let response = self
            .http
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_failure("ark", response, FAILURE_PREFIX).await);
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| Error::MalformedUpstream(e.to_string()))
    }

    pub async fn recognize(&self, data_url: &str) -> Result<Recognition, Error> {
        let api_key = self.api_key()?;
        let payload = ChatRequest {
            model: &self.vision_model,
            messages: vec![ChatTurn {
                role: "user",
                content: vec![
                    ContentPart::Text {
                        text: RECOGNIZE_INSTRUCTION,
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageRef { url: data_url },
                    },
                ],
            }],
        };

        tracing::info!(model = %self.vision_model, "requesting image recognition");
        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_failure("ark", response, FAILURE_PREFIX).await);
        }

        let body = response.bytes().await?;
        let raw: Value =
            serde_json::from_slice(&body).map_err(|e| Error::MalformedUpstream(e.to_string()))?;
        let completion = ChatCompletion::deserialize(&raw)
            .map_err(|e| Error::MalformedUpstream(e.to_string()))?;

        Ok(Recognition { completion, raw })
    }
}
