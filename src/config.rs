use crate::Error;
use std::time::Duration;
use url::Url;

// Set at build time, e.g. RADSERVICE_BASE_URL=https://example.org/vienna-bike-stations/
const DEFAULT_BASE_URL: &str = match option_env!("RADSERVICE_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:5173/vienna-bike-stations/",
};

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Where the feed and the icon assets are served from.
    pub base_url: String,

    /// None means the request may wait indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl GatewayConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    // NOTE: Url::join drops the last path segment unless the base ends in a slash.
    pub(crate) fn parsed_base_url(&self) -> Result<Url, Error> {
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        match Url::parse(&base) {
            Ok(url) => Ok(url),
            Err(err) => Err(Error::InvalidUrl {
                url: self.base_url.clone(),
                reason: err.to_string(),
            }),
        }
    }
}
