pub mod generate;
pub mod index;
pub mod recognize;
pub mod remove_bg;

use crate::config::Config;
use crate::providers::{ArkClient, RemoveBgClient};

/// Per-process handler state; holds no mutable data.
pub struct AppState {
    pub ark: ArkClient,
    pub remove_bg: RemoveBgClient,
    pub default_size: String,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout())
            .build()?;

        Ok(Self {
            ark: ArkClient::new(
                http.clone(),
                config.ark_base_url.clone(),
                config.ark_api_key.clone(),
                config.image_model.clone(),
                config.vision_model.clone(),
            ),
            remove_bg: RemoveBgClient::new(
                http,
                config.remove_bg_url.clone(),
                config.remove_bg_api_key.clone(),
            ),
            default_size: config.default_size.clone(),
        })
    }
}
