use axum::extract::{multipart::MultipartRejection, Multipart, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::AppState;
use crate::error::Error;
use crate::upload::read_image_file;

pub const RECOGNITION_FALLBACK: &str = "识别失败";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeResponse {
    pub success: bool,
    pub result: String,
    pub full_response: Value,
}

pub async fn recognize_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<RecognizeResponse>, Error> {
    let image = read_image_file(multipart)
        .await?
        .ok_or_else(|| Error::Validation("请上传图片".to_string()))?;

    let recognition = state.ark.recognize(&image.to_data_url()).await?;

    let result = match recognition.completion.first_content() {
        Some(content) => content.to_string(),
        None => {
            tracing::warn!("completion carried no message content");
            RECOGNITION_FALLBACK.to_string()
        }
    };

    Ok(Json(RecognizeResponse {
        success: true,
        result,
        full_response: recognition.raw,
    }))
}
