mod config;
pub use config::GatewayConfig;
mod error;
pub use error::Error;
mod filter;
pub use filter::Filter;
mod get_stations;
mod map;
pub use map::MapSettings;
mod marker;
pub use marker::{markers_to_geojson, Marker, MarkerIcon, Popup};
pub mod navigation;
mod parse_stations;
pub use parse_stations::parse_stations;
mod point;
mod station;
pub use station::{Station, MIN_COLUMNS};
mod station_kind;
pub use station_kind::StationKind;
mod view;
pub use view::StationView;
use url::Url;

const FEED_FILE: &str = "RADSERVICEOGD.csv";

#[derive(Debug, Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: Url,
}

impl Gateway {
    pub fn new(config: GatewayConfig) -> Result<Gateway, Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Accept",
            reqwest::header::HeaderValue::from_static("text/csv, text/plain"),
        );

        let base_url = config.parsed_base_url()?;

        let mut builder = reqwest::ClientBuilder::new().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = match builder.build() {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::Unspecified(format!(
                    "Could not create reqwest client ({}).",
                    err
                )))
            }
        };

        Ok(Gateway { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn resolve(&self, path: &str) -> Result<Url, Error> {
        match self.base_url.join(path) {
            Ok(url) => Ok(url),
            Err(err) => Err(Error::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: err.to_string(),
            }),
        }
    }

    async fn get_string(&self, url: &Url) -> Result<String, Error> {
        tracing::debug!(%url, "GET");

        let res = match self.client.get(url.clone()).send().await {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::NetworkError(format!(
                    "Could not send request ({}).",
                    err
                )))
            }
        };

        let status = res.status();
        if !status.is_success() {
            let text = res
                .text()
                .await
                .unwrap_or_else(|_| String::from("Could not retrieve body text."));
            return Err(Error::ApiError(status.as_u16(), text));
        }

        match res.text().await {
            Ok(text) => Ok(text),
            Err(err) => Err(Error::DecodeError(format!(
                "Could not read response body as text ({}).",
                err
            ))),
        }
    }
}
