use std::{future::Future, pin::pin, time::Duration};

use chrono::Utc;
use chrono_tz::Tz;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info, warn};

use crate::api::{ApiError, ReadingKind, SensorApi};
use crate::dashboard::{CycleReadings, DisplaySink, DisplaySnapshot};

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Polls the sensor service on a fixed period and renders each complete set
/// of readings.
///
/// A cycle fetches every resource in order and renders only if all of them
/// succeeded. Cycles run one at a time; ticks that come due while a cycle is
/// still in flight are skipped.
#[derive(Debug)]
pub struct RefreshLoop<A, S> {
    api: A,
    sink: S,
    period: Duration,
    timezone: Tz,
    snapshot: DisplaySnapshot,
    cycles: u64,
}

impl<A: SensorApi, S: DisplaySink> RefreshLoop<A, S> {
    pub fn new(api: A, sink: S, timezone: Tz) -> Self {
        Self {
            api,
            sink,
            period: DEFAULT_REFRESH_INTERVAL,
            timezone,
            snapshot: DisplaySnapshot::default(),
            cycles: 0,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn snapshot(&self) -> &DisplaySnapshot {
        &self.snapshot
    }

    /// Runs until `shutdown` completes. A cycle in flight at that point is
    /// dropped before it renders anything.
    pub async fn run_until<F: Future<Output = ()>>(&mut self, shutdown: F) {
        let mut shutdown = pin!(shutdown);

        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(period_secs = self.period.as_secs_f64(), "refresh loop started");

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = ticker.tick() => {}
            }

            tokio::select! {
                _ = &mut shutdown => break,
                result = self.refresh_once() => {
                    if let Err(err) = result {
                        let err = anyhow::Error::new(err);
                        error!(cycle = self.cycles, "failed to fetch sensor data: {err:#}");
                    }
                }
            }
        }

        info!(cycles = self.cycles, "refresh loop stopped");
    }

    pub async fn run(&mut self) {
        self.run_until(std::future::pending()).await
    }

    /// One cycle: fetch everything, then render. On error nothing is
    /// rendered and the previous snapshot stays in place.
    pub async fn refresh_once(&mut self) -> Result<(), ApiError> {
        self.cycles += 1;

        let readings = fetch_all(&self.api).await?;
        self.render(&readings);

        debug!(cycle = self.cycles, "dashboard refreshed");

        Ok(())
    }

    fn render(&mut self, readings: &CycleReadings) {
        let refreshed_at = Utc::now().with_timezone(&self.timezone);
        self.snapshot = DisplaySnapshot::render(readings, refreshed_at);

        if let Err(err) = self.sink.show(&self.snapshot) {
            warn!(cycle = self.cycles, "failed to write dashboard: {err}");
        }
    }
}

/// Requests are issued one after another; the first failure ends the cycle.
pub async fn fetch_all<A: SensorApi>(api: &A) -> Result<CycleReadings, ApiError> {
    let moisture = api.get_reading(ReadingKind::Moisture).await?;
    let humidity = api.get_reading(ReadingKind::Humidity).await?;
    let temperature = api.get_reading(ReadingKind::Temperature).await?;
    let light_resistance = api.get_reading(ReadingKind::LightResistance).await?;
    let water = api.get_water_status().await?;
    let mode = api.get_mode().await?;

    Ok(CycleReadings {
        moisture,
        humidity,
        temperature,
        light_resistance,
        water,
        mode,
    })
}
