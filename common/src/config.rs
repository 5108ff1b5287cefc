use api::{DEFAULT_API_BASE_URL, HttpImageApi};
use tracing::{Level, debug, instrument};

pub const DEFAULT_UPLOAD_TIMEOUT_MS: u32 = 60_000;

// frontend configuration
//
// a wasm bundle has no process environment, so both values are baked in at
// build time from API_BASE_URL and API_UPLOAD_TIMEOUT_MS
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub upload_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            upload_timeout_ms: DEFAULT_UPLOAD_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    #[instrument(level=Level::DEBUG)]
    pub fn from_build_env() -> Self {
        let config = Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("API_UPLOAD_TIMEOUT_MS"),
        );

        debug!({ api_base_url = %config.api_base_url, upload_timeout_ms = config.upload_timeout_ms }, "resolved config");
        config
    }

    // empty or unparsable values fall back to the defaults rather than
    // producing a broken client
    pub fn from_values(base_url: Option<&str>, upload_timeout_ms: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_owned();

        let upload_timeout_ms = upload_timeout_ms
            .and_then(|ms| ms.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_UPLOAD_TIMEOUT_MS);

        AppConfig {
            api_base_url,
            upload_timeout_ms,
        }
    }

    pub fn image_api(&self) -> HttpImageApi {
        HttpImageApi::new(self.api_base_url.clone(), self.upload_timeout_ms)
    }

    pub fn image_link(&self, image_id: &str) -> String {
        api::image_link(&self.api_base_url, image_id)
    }
}
