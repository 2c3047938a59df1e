//! Pulls the `image_file` field out of an inbound multipart body.

use axum::extract::{multipart::MultipartRejection, Multipart};
use base64::{engine::general_purpose, Engine as _};
use image::ImageFormat;

use crate::error::{rejection, Error};

const TOO_LARGE: &str = "图片过大";

pub const IMAGE_FIELD: &str = "image_file";

#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
    /// Media subtype, e.g. `png` in `image/png`
    pub subtype: String,
}

impl UploadedImage {
    pub fn mime_type(&self) -> String {
        format!("image/{}", self.subtype)
    }

    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type(),
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

/// Returns `Ok(None)` when the form carries no (non-empty) `image_file`.
pub async fn read_image_file(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Option<UploadedImage>, Error> {
    let mut multipart = multipart.map_err(|e| {
        rejection(e.status(), format!("无效的表单数据: {}", e.body_text()), TOO_LARGE)
    })?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| rejection(e.status(), format!("无效的表单数据: {}", e.body_text()), TOO_LARGE))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let declared = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| rejection(e.status(), format!("无效的表单数据: {}", e.body_text()), TOO_LARGE))?;

        if bytes.is_empty() {
            return Ok(None);
        }

        let subtype = media_subtype(declared.as_deref(), &bytes)
            .ok_or_else(|| Error::Validation("不支持的图片格式".to_string()))?;

        return Ok(Some(UploadedImage {
            bytes: bytes.to_vec(),
            file_name,
            subtype,
        }));
    }

    Ok(None)
}

/// Subtype from a declared `image/*` content type, else sniffed from the bytes.
fn media_subtype(declared: Option<&str>, bytes: &[u8]) -> Option<String> {
    if let Some(subtype) = declared
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .and_then(|ct| ct.strip_prefix("image/"))
        .filter(|s| !s.is_empty())
    {
        return Some(subtype.to_ascii_lowercase());
    }

    let subtype = match image::guess_format(bytes).ok()? {
        ImageFormat::Png => "png",
        ImageFormat::Jpeg => "jpeg",
        ImageFormat::WebP => "webp",
        ImageFormat::Gif => "gif",
        ImageFormat::Bmp => "bmp",
        ImageFormat::Tiff => "tiff",
        ImageFormat::Ico => "x-icon",
        ImageFormat::Avif => "avif",
        _ => return None,
    };
    Some(subtype.to_string())
}
