use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingKind {
    Moisture,
    Humidity,
    Temperature,
    LightResistance,
}

impl ReadingKind {
    /// Cycle order used by the dashboard.
    pub const ALL: [ReadingKind; 4] = [
        ReadingKind::Moisture,
        ReadingKind::Humidity,
        ReadingKind::Temperature,
        ReadingKind::LightResistance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingKind::Moisture => "moisture",
            ReadingKind::Humidity => "humidity",
            ReadingKind::Temperature => "temperature",
            ReadingKind::LightResistance => "ldr",
        }
    }
}

/// A single sensor value, passed through exactly as the service reports it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Reading {
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WaterStatus {
    #[serde(rename = "status")]
    pub needs_water: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_ignores_extra_fields() {
        let reading: Reading = serde_json::from_str(r#"{"value": 21.5, "unit": "C"}"#).unwrap();
        assert_eq!(reading.value, 21.5);
    }

    #[test]
    fn water_status_reads_status_flag() {
        let status: WaterStatus = serde_json::from_str(r#"{"status": true}"#).unwrap();
        assert!(status.needs_water);
    }

    #[test]
    fn reading_requires_value() {
        assert!(serde_json::from_str::<Reading>(r#"{"status": true}"#).is_err());
    }
}
