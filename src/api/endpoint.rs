use std::fmt;

use reqwest::{Method, Url};

use crate::api::{ApiError, ReadingKind};

/// One remote operation: an HTTP method plus its path below the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Sensor(ReadingKind),
    WaterStatus,
    Mode,
    SetMode(&'a str),
    SetManualState(&'a str),
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Sensor(_) | Endpoint::WaterStatus | Endpoint::Mode => Method::GET,
            Endpoint::SetMode(_) | Endpoint::SetManualState(_) => Method::POST,
        }
    }

    pub fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::Sensor(kind) => vec!["sensor", kind.as_str()],
            Endpoint::WaterStatus => vec!["sensor", "water"],
            Endpoint::Mode => vec!["switch", "mode"],
            Endpoint::SetMode(mode) => vec!["switch", "mode", mode],
            Endpoint::SetManualState(state) => vec!["switch", "manual", state],
        }
    }

    /// Unencoded path, for logs and error messages.
    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }

    /// Appends the endpoint to `base`, percent-encoding each segment.
    pub fn url(&self, base: &Url) -> Result<Url, ApiError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::BaseUrl {
                url: base.to_string(),
            })?
            .pop_if_empty()
            .extend(self.segments());

        Ok(url)
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://127.0.0.1:8000").unwrap()
    }

    #[test]
    fn sensor_paths() {
        let paths: Vec<String> = ReadingKind::ALL
            .iter()
            .map(|kind| Endpoint::Sensor(*kind).url(&base()).unwrap().to_string())
            .collect();

        assert_eq!(
            paths,
            [
                "http://127.0.0.1:8000/sensor/moisture",
                "http://127.0.0.1:8000/sensor/humidity",
                "http://127.0.0.1:8000/sensor/temperature",
                "http://127.0.0.1:8000/sensor/ldr",
            ]
        );
    }

    #[test]
    fn switch_paths_use_post_for_updates() {
        assert_eq!(Endpoint::Mode.method(), Method::GET);
        assert_eq!(Endpoint::SetMode("manual").method(), Method::POST);
        assert_eq!(
            Endpoint::SetManualState("on").url(&base()).unwrap().as_str(),
            "http://127.0.0.1:8000/switch/manual/on"
        );
    }

    #[test]
    fn base_path_is_kept() {
        let base = Url::parse("http://farm.local/api/").unwrap();
        assert_eq!(
            Endpoint::WaterStatus.url(&base).unwrap().as_str(),
            "http://farm.local/api/sensor/water"
        );
    }

    #[test]
    fn segment_is_encoded_not_validated() {
        assert_eq!(
            Endpoint::SetMode("half/auto").url(&base()).unwrap().as_str(),
            "http://127.0.0.1:8000/switch/mode/half%2Fauto"
        );
    }

    #[test]
    fn display_shows_method_and_path() {
        assert_eq!(Endpoint::SetMode("auto").to_string(), "POST /switch/mode/auto");
    }

    #[test]
    fn opaque_base_is_rejected() {
        let base = Url::parse("mailto:farm@example.com").unwrap();
        assert!(matches!(
            Endpoint::Mode.url(&base),
            Err(ApiError::BaseUrl { .. })
        ));
    }
}
