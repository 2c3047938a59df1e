use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use super::upstream_failure;
use crate::error::Error;
use crate::upload::{UploadedImage, IMAGE_FIELD};

const FAILURE_PREFIX: &str = "去背景失败";

#[derive(Clone)]
pub struct RemoveBgClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl RemoveBgClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            url: url.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Forwards the upload and returns the provider's PNG bytes verbatim.
    pub async fn remove_background(&self, image: UploadedImage) -> Result<Vec<u8>, Error> {
        let api_key = self.api_key.as_deref().ok_or(Error::Configuration)?;

        let mime = image.mime_type();
        let file_name = image
            .file_name
            .clone()
            .unwrap_or_else(|| format!("image.{}", image.subtype));
        let part = Part::bytes(image.bytes)
            .file_name(file_name)
            .mime_str(&mime)
            .map_err(|_| Error::Validation("不支持的图片格式".to_string()))?;
        let form = Form::new().part(IMAGE_FIELD, part).text("size", "auto");

        tracing::info!(%mime, "requesting background removal");
        let response = self
            .http
            .post(&self.url)
            .header("X-Api-Key", api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let err = upstream_failure("remove.bg", response, FAILURE_PREFIX).await;
            return Err(match status {
                StatusCode::FORBIDDEN => Error::Auth,
                StatusCode::PAYMENT_REQUIRED => Error::Quota,
                _ => err,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
