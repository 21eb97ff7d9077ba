use std::{future::Future, time::Duration};

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::api::{ApiError, Endpoint, ManualAck, Mode, Reading, ReadingKind, WaterStatus};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,

    /// Applies to each request as a whole. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            request_timeout: None,
        }
    }
}

/// Read side of the sensor service, as polled by the dashboard.
pub trait SensorApi {
    fn get_reading(
        &self,
        kind: ReadingKind,
    ) -> impl Future<Output = Result<Reading, ApiError>> + Send;

    fn get_water_status(&self) -> impl Future<Output = Result<WaterStatus, ApiError>> + Send;

    fn get_mode(&self) -> impl Future<Output = Result<Mode, ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        if config.base_url.cannot_be_a_base() {
            return Err(ApiError::BaseUrl {
                url: config.base_url.to_string(),
            });
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::Build)?;

        Ok(Self {
            base_url: config.base_url,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get_moisture(&self) -> Result<Reading, ApiError> {
        self.call(Endpoint::Sensor(ReadingKind::Moisture)).await
    }

    pub async fn get_humidity(&self) -> Result<Reading, ApiError> {
        self.call(Endpoint::Sensor(ReadingKind::Humidity)).await
    }

    pub async fn get_temperature(&self) -> Result<Reading, ApiError> {
        self.call(Endpoint::Sensor(ReadingKind::Temperature)).await
    }

    pub async fn get_light_resistance(&self) -> Result<Reading, ApiError> {
        self.call(Endpoint::Sensor(ReadingKind::LightResistance)).await
    }

    pub async fn get_water_status(&self) -> Result<WaterStatus, ApiError> {
        self.call(Endpoint::WaterStatus).await
    }

    pub async fn get_mode(&self) -> Result<Mode, ApiError> {
        self.call(Endpoint::Mode).await
    }

    /// `mode` is sent as-is; the service decides whether it is valid.
    pub async fn set_mode(&self, mode: &str) -> Result<Mode, ApiError> {
        self.call(Endpoint::SetMode(mode)).await
    }

    pub async fn set_manual_state(&self, state: &str) -> Result<ManualAck, ApiError> {
        self.call(Endpoint::SetManualState(state)).await
    }

    async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError> {
        let url = endpoint.url(&self.base_url)?;

        debug!(%endpoint, %url, "sending request");

        let response = self
            .http
            .request(endpoint.method(), url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        decode_body(&endpoint, &body)
    }
}

impl SensorApi for Client {
    async fn get_reading(&self, kind: ReadingKind) -> Result<Reading, ApiError> {
        self.call(Endpoint::Sensor(kind)).await
    }

    async fn get_water_status(&self) -> Result<WaterStatus, ApiError> {
        Client::get_water_status(self).await
    }

    async fn get_mode(&self) -> Result<Mode, ApiError> {
        Client::get_mode(self).await
    }
}

/// The service answers invalid switch requests with `200 {"error": ...}`.
fn decode_body<T: DeserializeOwned>(endpoint: &Endpoint<'_>, body: &[u8]) -> Result<T, ApiError> {
    let parse_error = |source| ApiError::Parse {
        endpoint: endpoint.to_string(),
        source,
    };

    let value: Value = serde_json::from_slice(body).map_err(parse_error)?;

    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Err(ApiError::Rejected {
            endpoint: endpoint.to_string(),
            message: message.to_owned(),
        });
    }

    serde_json::from_value(value).map_err(parse_error)
}
