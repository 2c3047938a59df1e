use axum::extract::{multipart::MultipartRejection, Multipart, State};
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::Arc;

use super::AppState;
use crate::error::Error;
use crate::upload::read_image_file;

pub async fn remove_background(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, Error> {
    let image = read_image_file(multipart)
        .await?
        .ok_or_else(|| Error::Validation("请上传图片文件".to_string()))?;

    let png = state.remove_bg.remove_background(image).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"no-bg.png\""),
        ],
        png,
    ))
}
