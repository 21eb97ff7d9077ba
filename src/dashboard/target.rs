use std::str::FromStr;

use anyhow::{Error, bail};

/// Named text field the dashboard writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayTarget {
    Moisture,
    Humidity,
    Temperature,
    LightResistance,
    WaterStatus,
    ModeStatus,
}

impl DisplayTarget {
    pub const ALL: [DisplayTarget; 6] = [
        DisplayTarget::Moisture,
        DisplayTarget::Humidity,
        DisplayTarget::Temperature,
        DisplayTarget::LightResistance,
        DisplayTarget::WaterStatus,
        DisplayTarget::ModeStatus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayTarget::Moisture => "moistureValue",
            DisplayTarget::Humidity => "humidityValue",
            DisplayTarget::Temperature => "temperatureValue",
            DisplayTarget::LightResistance => "ldrValue",
            DisplayTarget::WaterStatus => "waterStatus",
            DisplayTarget::ModeStatus => "modeStatus",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayTarget::Moisture => "Soil moisture",
            DisplayTarget::Humidity => "Humidity",
            DisplayTarget::Temperature => "Temperature",
            DisplayTarget::LightResistance => "Light (LDR)",
            DisplayTarget::WaterStatus => "Water",
            DisplayTarget::ModeStatus => "Mode",
        }
    }
}

impl FromStr for DisplayTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moistureValue" => Ok(DisplayTarget::Moisture),
            "humidityValue" => Ok(DisplayTarget::Humidity),
            "temperatureValue" => Ok(DisplayTarget::Temperature),
            "ldrValue" => Ok(DisplayTarget::LightResistance),
            "waterStatus" => Ok(DisplayTarget::WaterStatus),
            "modeStatus" => Ok(DisplayTarget::ModeStatus),
            _ => bail!("unknown display target: {}", s),
        }
    }
}
