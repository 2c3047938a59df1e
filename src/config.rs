use clap::Parser;
use std::time::Duration;

/// Runtime configuration, read from the command line and the environment.
///
/// Credentials stay optional: a missing key only fails the proxy that needs
/// it, at request time.
#[derive(Parser, Debug, Clone)]
#[command(name = "image-toolbox", version, about)]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Volcengine Ark API key, used for generation and recognition
    #[arg(long, env = "ARK_API_KEY", hide_env_values = true)]
    pub ark_api_key: Option<String>,

    #[arg(
        long,
        env = "ARK_BASE_URL",
        default_value = "https://ark.cn-beijing.volces.com/api/v3"
    )]
    pub ark_base_url: String,

    /// Endpoint id of the text-to-image model
    #[arg(long, env = "ARK_IMAGE_MODEL", default_value = "ep-20251017225426-ptjqf")]
    pub image_model: String,

    /// Endpoint id of the vision-language model
    #[arg(long, env = "ARK_VISION_MODEL", default_value = "ep-20251016234744-hj8vh")]
    pub vision_model: String,

    /// Size token sent when the caller does not pick one
    #[arg(long, env = "ARK_DEFAULT_SIZE", default_value = "2K")]
    pub default_size: String,

    /// remove.bg API key
    #[arg(long, env = "REMOVE_BG_API_KEY", hide_env_values = true)]
    pub remove_bg_api_key: Option<String>,

    #[arg(
        long,
        env = "REMOVE_BG_URL",
        default_value = "https://api.remove.bg/v1.0/removebg"
    )]
    pub remove_bg_url: String,

    /// Timeout applied to every upstream call, in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 120)]
    pub upstream_timeout_secs: u64,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
