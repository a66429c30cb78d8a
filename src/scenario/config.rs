use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::scenario::builtin::{DEFAULT_DURATION, DEFAULT_NAME, DEFAULT_OUTPUT, DEFAULT_STEP};
use crate::scenario::parsing::parse_tle_lines;
use crate::scenario::{Rgba, SatelliteRecord, ScenarioError, TimeWindow};

/// Everything one run needs: what to propagate, over which window, and where to write it
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub window: TimeWindow,
    pub satellites: Vec<SatelliteRecord>,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFile {
    name: Option<String>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    duration: Option<String>,
    step: Option<String>,
    output: Option<PathBuf>,
    satellites: Vec<SatelliteEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct SatelliteEntry {
    name: Option<String>,
    tle: String,
    #[serde(default = "default_color")]
    color: Rgba,
    #[serde(default = "default_size")]
    size: f64,
}

fn default_color() -> Rgba {
    [255, 255, 255, 255]
}

fn default_size() -> f64 {
    6.0
}

impl Scenario {
    /// Load a YAML scenario. `now` is used when the file has no `start`.
    pub fn from_file(path: &Path, now: DateTime<Utc>) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content, now)
    }

    pub fn from_yaml(yaml: &str, now: DateTime<Utc>) -> Result<Self, ScenarioError> {
        let file: ScenarioFile = serde_yaml::from_str(yaml)?;

        if file.satellites.is_empty() {
            return Err(ScenarioError::NoSatellites);
        }

        let start = file.start.unwrap_or(now);
        let end = match (file.end, file.duration.as_deref()) {
            (Some(_), Some(_)) => return Err(ScenarioError::ConflictingEnd),
            (Some(end), None) => end,
            (None, Some(d)) => offset(start, parse_duration(d)?, d)?,
            (None, None) => offset(start, DEFAULT_DURATION, "default duration")?,
        };
        let step = match file.step.as_deref() {
            Some(s) => parse_duration(s)?,
            None => DEFAULT_STEP,
        };
        let window = TimeWindow::new(start, end, step)?;

        let satellites = file
            .satellites
            .into_iter()
            .enumerate()
            .map(|(i, entry)| entry.into_record(i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Scenario {
            name: file.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            window,
            satellites,
            output: file.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        })
    }
}

impl SatelliteEntry {
    fn into_record(self, index: usize) -> Result<SatelliteRecord, ScenarioError> {
        let (tle_name, line1, line2) = parse_tle_lines(&self.tle, index)?;
        let name = self
            .name
            .or(tle_name)
            .ok_or(ScenarioError::MissingName(index))?;

        Ok(SatelliteRecord {
            name,
            tle_line1: line1,
            tle_line2: line2,
            color: self.color,
            icon_size: self.size,
        })
    }
}

/// `start + duration`, or an error when that lands outside the representable dates
pub(crate) fn offset(
    start: DateTime<Utc>,
    duration: Duration,
    text: &str,
) -> Result<DateTime<Utc>, ScenarioError> {
    start
        .checked_add_signed(duration)
        .ok_or_else(|| ScenarioError::InvalidDuration {
            value: text.to_string(),
            message: format!("ends past the last representable date after {}", start),
        })
}

fn parse_duration(s: &str) -> Result<Duration, ScenarioError> {
    let err = |message: String| ScenarioError::InvalidDuration {
        value: s.to_string(),
        message,
    };
    humantime::parse_duration(s.trim())
        .map_err(|e| err(e.to_string()))
        .and_then(|d| Duration::from_std(d).map_err(|e| err(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    const ISS: &str = r#"
    - tle: |
        ISS (ZARYA)
        1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992
        2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008
      color: [255, 0, 0, 255]
      size: 8
"#;

    #[test]
    fn defaults_fill_in_missing_fields() {
        let yaml = format!("satellites:{ISS}");
        let scenario = Scenario::from_yaml(&yaml, now()).unwrap();

        assert_eq!(scenario.name, DEFAULT_NAME);
        assert_eq!(scenario.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(scenario.window.start, now());
        assert_eq!(scenario.window.end, now() + Duration::hours(12));
        assert_eq!(scenario.window.step_seconds(), 120);

        let sat = &scenario.satellites[0];
        assert_eq!(sat.name, "ISS (ZARYA)");
        assert_eq!(sat.color, [255, 0, 0, 255]);
        assert_eq!(sat.icon_size, 8.0);
        assert!(sat.tle_line1.starts_with("1 25544U"));
    }

    #[test]
    fn explicit_window_and_name_override() {
        let yaml = r#"
name: Test Orbits
start: 2025-01-01T00:00:00Z
end: 2025-01-01T00:04:00Z
step: 1m
output: out/test.czml
satellites:
  - name: Station
    tle: |
      1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992
      2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008
"#;
        let scenario = Scenario::from_yaml(yaml, now() + Duration::days(3)).unwrap();
        assert_eq!(scenario.name, "Test Orbits");
        assert_eq!(scenario.window.sample_count(), 5);
        assert_eq!(scenario.output, PathBuf::from("out/test.czml"));
        assert_eq!(scenario.satellites[0].name, "Station");
        assert_eq!(scenario.satellites[0].color, [255, 255, 255, 255]);
    }

    #[test]
    fn duration_sets_end() {
        let yaml = format!("duration: 30m\nstep: 30s\nsatellites:{ISS}");
        let scenario = Scenario::from_yaml(&yaml, now()).unwrap();
        assert_eq!(scenario.window.end, now() + Duration::minutes(30));
        assert_eq!(scenario.window.sample_count(), 61);
    }

    #[test]
    fn end_and_duration_conflict() {
        let yaml = format!("end: 2025-01-02T00:00:00Z\nduration: 1h\nsatellites:{ISS}");
        assert!(matches!(
            Scenario::from_yaml(&yaml, now()),
            Err(ScenarioError::ConflictingEnd)
        ));
    }

    #[test]
    fn bad_duration_is_reported() {
        let yaml = format!("step: soon\nsatellites:{ISS}");
        assert!(matches!(
            Scenario::from_yaml(&yaml, now()),
            Err(ScenarioError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn out_of_range_duration_is_an_error() {
        let yaml = format!("duration: 300000years\nsatellites:{ISS}");
        match Scenario::from_yaml(&yaml, now()) {
            Err(ScenarioError::InvalidDuration { value, .. }) => assert_eq!(value, "300000years"),
            other => panic!("expected InvalidDuration, got {:?}", other),
        }
    }

    #[test]
    fn default_duration_past_max_date_is_an_error() {
        let yaml = format!("satellites:{ISS}");
        let late = DateTime::<Utc>::MAX_UTC - Duration::hours(1);
        assert!(matches!(
            Scenario::from_yaml(&yaml, late),
            Err(ScenarioError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn nameless_two_line_block_is_rejected() {
        let yaml = r#"
satellites:
  - tle: |
      1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992
      2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008
"#;
        assert!(matches!(
            Scenario::from_yaml(yaml, now()),
            Err(ScenarioError::MissingName(0))
        ));
    }

    #[test]
    fn empty_satellite_list_is_rejected() {
        assert!(matches!(
            Scenario::from_yaml("satellites: []", now()),
            Err(ScenarioError::NoSatellites)
        ));
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.yaml");
        std::fs::write(&path, format!("satellites:{ISS}")).unwrap();
        let scenario = Scenario::from_file(&path, now()).unwrap();
        assert_eq!(scenario.satellites.len(), 1);

        let missing = Scenario::from_file(&dir.path().join("nope.yaml"), now());
        assert!(matches!(missing, Err(ScenarioError::Io(_))));
    }

    #[test]
    fn bundled_station_scenario() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/stations.yaml");
        let scenario = Scenario::from_file(&path, now() - Duration::days(30)).unwrap();

        assert_eq!(scenario.name, "Space Stations");
        assert_eq!(scenario.window.start, now());
        assert_eq!(scenario.window.sample_count(), 24 * 60 + 1);
        let names: Vec<_> = scenario.satellites.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["ISS (ZARYA)", "天和 (TIANHE)"]);
    }
}
