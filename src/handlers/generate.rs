use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use super::AppState;
use crate::error::{rejection, Error};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub data: Value,
}

pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, Error> {
    let Json(request) = body.map_err(|e| rejection(e.status(), e.body_text(), "请求体过大"))?;

    // Whitespace-only prompts are rejected, but the prompt is forwarded untrimmed.
    let prompt = request
        .prompt
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| Error::Validation("请输入提示词".to_string()))?;
    let size = request.size.as_deref().unwrap_or(state.default_size.as_str());

    let data = state.ark.generate_image(prompt, size).await?;

    Ok(Json(GenerateResponse {
        success: true,
        data,
    }))
}
