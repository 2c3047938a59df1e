use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Required input missing or unreadable
    #[error("{0}")]
    Validation(String),

    /// Request body over the configured limit
    #[error("{0}")]
    PayloadTooLarge(&'static str),

    /// A provider credential is not configured
    #[error("API Key 未配置")]
    Configuration,

    /// Provider rejected our credential
    #[error("API Key 无效或已过期")]
    Auth,

    /// Provider quota exhausted
    #[error("API 配额已用完，请稍后再试")]
    Quota,

    /// Any other non-success provider response; the status is forwarded
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Provider answered with success but the body does not parse
    #[error("上游响应格式错误: {0}")]
    MalformedUpstream(String),

    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Auth => StatusCode::FORBIDDEN,
            Error::Quota => StatusCode::PAYMENT_REQUIRED,
            Error::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Error::MalformedUpstream(_) => StatusCode::BAD_GATEWAY,
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand back to the browser
    pub fn user_message(&self) -> String {
        match self {
            Error::MalformedUpstream(_) => "上游响应格式错误".to_string(),
            Error::Unknown(_) => "服务器处理失败，请稍后再试".to_string(),
            other => other.to_string(),
        }
    }
}

/// Maps an extractor rejection: over-limit bodies keep their 413, the rest are 400.
pub(crate) fn rejection(status: StatusCode, body_text: String, too_large: &'static str) -> Error {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        Error::PayloadTooLarge(too_large)
    } else {
        Error::Validation(body_text)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Unknown(anyhow::Error::new(err).context("upstream request failed"))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::Unknown(_) | Error::Configuration => {
                tracing::error!("Internal error: {:#}", self);
            }
            Error::Upstream { .. } | Error::MalformedUpstream(_) | Error::Auth | Error::Quota => {
                tracing::warn!("Upstream error ({}): {}", self.status_code(), self);
            }
            Error::Validation(_) | Error::PayloadTooLarge(_) => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}
