use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Mode {
    pub mode: String,

    /// Only reported alongside a manual mode; `GET /switch/mode` omits it.
    #[serde(default, rename = "state")]
    pub manual_state: Option<String>,
}

/// Acknowledgement for a manual actuator switch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManualAck {
    #[serde(default)]
    pub message: Option<String>,

    pub state: String,
}
