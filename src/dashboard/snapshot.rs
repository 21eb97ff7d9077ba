use chrono::DateTime;
use chrono_tz::Tz;

use crate::api::{Mode, Reading, ReadingKind, WaterStatus};
use crate::dashboard::DisplayTarget;

pub const WATER_NEEDED_LABEL: &str = "Water Needed";
pub const WATER_OK_LABEL: &str = "OK";

/// Everything fetched during one successful refresh cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReadings {
    pub moisture: Reading,
    pub humidity: Reading,
    pub temperature: Reading,
    pub light_resistance: Reading,
    pub water: WaterStatus,
    pub mode: Mode,
}

/// Text currently shown in each display target.
///
/// Empty until the first successful cycle, then replaced wholesale on every
/// later one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplaySnapshot {
    pub moisture: String,

    pub humidity: String,

    pub temperature: String,

    pub light_resistance: String,

    pub water_status: String,

    pub mode_status: String,

    pub refreshed_at: Option<DateTime<Tz>>,
}

impl DisplaySnapshot {
    pub fn render(readings: &CycleReadings, refreshed_at: DateTime<Tz>) -> Self {
        Self {
            moisture: format_reading(ReadingKind::Moisture, readings.moisture),
            humidity: format_reading(ReadingKind::Humidity, readings.humidity),
            temperature: format_reading(ReadingKind::Temperature, readings.temperature),
            light_resistance: format_reading(
                ReadingKind::LightResistance,
                readings.light_resistance,
            ),
            water_status: water_label(readings.water).to_owned(),
            mode_status: readings.mode.mode.clone(),
            refreshed_at: Some(refreshed_at),
        }
    }

    pub fn text(&self, target: DisplayTarget) -> &str {
        match target {
            DisplayTarget::Moisture => &self.moisture,
            DisplayTarget::Humidity => &self.humidity,
            DisplayTarget::Temperature => &self.temperature,
            DisplayTarget::LightResistance => &self.light_resistance,
            DisplayTarget::WaterStatus => &self.water_status,
            DisplayTarget::ModeStatus => &self.mode_status,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (DisplayTarget, &str)> {
        DisplayTarget::ALL
            .into_iter()
            .map(move |target| (target, self.text(target)))
    }
}

pub fn unit(kind: ReadingKind) -> &'static str {
    match kind {
        ReadingKind::Moisture => "%",
        ReadingKind::Humidity => "%",
        ReadingKind::Temperature => "°C",
        ReadingKind::LightResistance => "ohm",
    }
}

/// Whole numbers print without a fractional part: `42.0` becomes `"42 %"`.
pub fn format_reading(kind: ReadingKind, reading: Reading) -> String {
    format!("{} {}", reading.value, unit(kind))
}

pub fn water_label(status: WaterStatus) -> &'static str {
    if status.needs_water {
        WATER_NEEDED_LABEL
    } else {
        WATER_OK_LABEL
    }
}
