use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::scenario::ScenarioError;

/// RGBA colour as consumed by CZML `rgba` properties
pub type Rgba = [u8; 4];

/// A single satellite to render
#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteRecord {
    pub name: String,
    pub tle_line1: String,
    pub tle_line2: String,
    pub color: Rgba,
    pub icon_size: f64,
}

impl SatelliteRecord {
    pub fn new(name: &str, tle_line1: &str, tle_line2: &str, color: Rgba, icon_size: f64) -> Self {
        Self {
            name: name.to_string(),
            tle_line1: tle_line1.to_string(),
            tle_line2: tle_line2.to_string(),
            color,
            icon_size,
        }
    }
}

/// Sampling window. `end < start` is allowed and simply yields no samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    step: Duration,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, step: Duration) -> Result<Self, ScenarioError> {
        if step <= Duration::zero() || step.subsec_nanos() != 0 {
            let secs = step.num_milliseconds() as f64 / 1000.0;
            return Err(ScenarioError::InvalidStep(secs));
        }
        Ok(Self { start, end, step })
    }

    pub fn step_seconds(&self) -> i64 {
        self.step.num_seconds()
    }

    /// Number of instants `start + k*step` that do not pass `end`
    pub fn sample_count(&self) -> usize {
        if self.end < self.start {
            return 0;
        }
        let span_ms = (self.end - self.start).num_milliseconds();
        (span_ms / self.step.num_milliseconds()) as usize + 1
    }

    /// Sampling instants in chronological order, both ends inclusive.
    /// Stops early if the next instant is past the last representable date.
    pub fn instants(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        std::iter::successors(Some(self.start), move |t| t.checked_add_signed(self.step))
            .take_while(move |t| *t <= self.end)
    }

    /// CZML interval string, `<start>/<end>` in UTC
    pub fn interval(&self) -> String {
        format!("{}/{}", format_instant(&self.start), format_instant(&self.end))
    }
}

/// ISO-8601 with a trailing `Z`; fractional seconds only when present
pub fn format_instant(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
