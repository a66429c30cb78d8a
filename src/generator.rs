use chrono::{DateTime, Utc};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::czml::{assemble, write_document, CzmlDocument, WriteError};
use crate::orbit::{sample_track, PropagationError, Propagator, Sgp4Propagator, Subpoint};
use crate::scenario::{format_instant, SatelliteRecord, Scenario, ScenarioError};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("scenario error: {0}")]
    Scenario(#[from] ScenarioError),
    #[error("propagation error: {0}")]
    Propagation(#[from] PropagationError),
    #[error("write error: {0}")]
    Write(#[from] WriteError),
}

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct Summary {
    pub path: PathBuf,
    pub satellites: usize,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub samples_per_satellite: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CZML written to {}", self.path.display())?;
        writeln!(f, "  satellites: {}", self.satellites)?;
        writeln!(
            f,
            "  time range: {} to {}",
            self.start.format("%Y-%m-%d %H:%M:%S"),
            self.end.format("%Y-%m-%d %H:%M:%S")
        )?;
        write!(f, "  samples per satellite: {}", self.samples_per_satellite)
    }
}

/// Result of checking a single satellite without writing anything
#[derive(Debug, Clone)]
pub struct CheckedSatellite {
    pub name: String,
    pub norad_id: u64,
    pub epoch: DateTime<Utc>,
    pub first: Subpoint,
}

/// Propagate every satellite of the scenario and assemble the document.
/// `load` builds the propagator for each record.
pub fn generate_with<P, F>(scenario: &Scenario, mut load: F) -> Result<CzmlDocument, GenerateError>
where
    P: Propagator,
    F: FnMut(&SatelliteRecord) -> Result<P, PropagationError>,
{
    let window = &scenario.window;
    if window.sample_count() == 0 {
        log::warn!(
            "Window {} is empty, satellites will have no positions",
            window.interval()
        );
    }

    let mut tracks = Vec::with_capacity(scenario.satellites.len());
    for record in &scenario.satellites {
        let propagator = load(record)?;
        tracks.push(sample_track(&propagator, window)?);
    }

    let document = assemble(
        &scenario.name,
        window,
        scenario
            .satellites
            .iter()
            .zip(tracks.iter().map(Vec::as_slice)),
    );

    let ids: Vec<&str> = document.packets.iter().map(|p| p.id()).collect();
    log::debug!("Assembled packets: {}", ids.join(", "));
    for packet in document.satellites() {
        log::debug!("{}: {} samples", packet.id, packet.sample_count());
    }
    if let Some(header) = document.header() {
        log::debug!(
            "Clock {} at x{} ({})",
            header.clock.range,
            header.clock.multiplier,
            header.clock.step
        );
    }

    Ok(document)
}

pub fn generate(scenario: &Scenario) -> Result<CzmlDocument, GenerateError> {
    generate_with(scenario, Sgp4Propagator::from_record)
}

/// Generate and write the scenario. Relative output paths are resolved against `root`.
pub fn run(scenario: &Scenario, root: &Path) -> Result<Summary, GenerateError> {
    log::info!(
        "Propagating {} satellites over {} every {}s",
        scenario.satellites.len(),
        scenario.window.interval(),
        scenario.window.step_seconds()
    );

    let document = generate(scenario)?;

    // the file is only touched once every track has been computed
    let path = root.join(&scenario.output);
    write_document(&document, &path)?;
    log::info!("Wrote {}", path.display());

    Ok(Summary {
        path,
        satellites: scenario.satellites.len(),
        start: scenario.window.start,
        end: scenario.window.end,
        samples_per_satellite: scenario.window.sample_count(),
    })
}

/// Parse every element set and evaluate it at the window start
pub fn check(scenario: &Scenario) -> Result<Vec<CheckedSatellite>, GenerateError> {
    scenario
        .satellites
        .iter()
        .map(|record| -> Result<CheckedSatellite, GenerateError> {
            let propagator = Sgp4Propagator::from_record(record)?;
            let first = propagator.subpoint(scenario.window.start)?;
            log::debug!(
                "{} ok at {}",
                record.name,
                format_instant(&scenario.window.start)
            );
            Ok(CheckedSatellite {
                name: record.name.clone(),
                norad_id: propagator.norad_id(),
                epoch: propagator.epoch(),
                first,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::LinearStub;
    use crate::scenario::TimeWindow;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn short_builtin(span: Duration, step: i64) -> Scenario {
        let mut scenario = Scenario::builtin(start()).unwrap();
        scenario.window = TimeWindow::new(start(), start() + span, Duration::seconds(step)).unwrap();
        scenario
    }

    #[test]
    fn stubbed_pipeline() {
        let scenario = short_builtin(Duration::minutes(4), 60);
        let document =
            generate_with(&scenario, |_| Ok(LinearStub { origin: start() })).unwrap();

        assert_eq!(document.packets.len(), scenario.satellites.len() + 1);
        assert_eq!(document.packets[0].id(), "document");
        for (packet, record) in document.satellites().zip(&scenario.satellites) {
            assert_eq!(packet.id, record.name);
            assert_eq!(packet.sample_count(), 5);
        }
    }

    #[test]
    fn loader_failure_stops_the_run() {
        let scenario = short_builtin(Duration::minutes(4), 60);
        let result = generate_with(&scenario, |r| -> Result<LinearStub, _> {
            Err(PropagationError::Propagation(format!("no model for {}", r.name)))
        });
        let err = result.unwrap_err();
        assert!(matches!(err, GenerateError::Propagation(_)));
        assert_eq!(
            err.to_string(),
            "propagation error: propagator failed: no model for ISS (ZARYA)"
        );
    }

    #[test]
    fn builtin_satellites_propagate() {
        let scenario = short_builtin(Duration::minutes(4), 60);
        let document = generate(&scenario).unwrap();

        assert_eq!(document.packets.len(), 5);
        for packet in document.satellites() {
            let flat = &packet.position.cartographic_degrees;
            assert_eq!(flat.len(), 20);
            for q in flat.chunks(4) {
                assert!((-90.0..=90.0).contains(&q[2]));
                assert!((-180.0..=180.0).contains(&q[1]));
                assert!(q[3] > 100_000.0, "{} altitude {}", packet.id, q[3]);
            }
        }
    }

    #[test]
    fn check_reports_every_satellite() {
        let scenario = short_builtin(Duration::minutes(4), 60);
        let checked = check(&scenario).unwrap();
        let ids: Vec<_> = checked.iter().map(|c| c.norad_id).collect();
        assert_eq!(ids, [25544, 43001, 28474, 48274]);
    }

    #[test]
    fn run_writes_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let scenario = short_builtin(Duration::seconds(30), 60);

        let summary = run(&scenario, dir.path()).unwrap();
        assert_eq!(summary.path, dir.path().join("static/cesium/08/wx2.czml"));
        assert_eq!(summary.samples_per_satellite, 1);
        assert_eq!(summary.satellites, 4);

        let text = std::fs::read_to_string(&summary.path).unwrap();
        let parsed: CzmlDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.packets.len(), 5);
        assert!(parsed.satellites().all(|s| s.sample_count() == 1));
        assert!(summary.to_string().contains("samples per satellite: 1"));
    }

    #[test]
    fn bad_element_set_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut scenario = short_builtin(Duration::minutes(4), 60);
        scenario.satellites[2].tle_line2 = "2 28474  this is not an element set".to_string();

        let err = run(&scenario, dir.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Propagation(PropagationError::InvalidTle { .. })));
        assert!(!dir.path().join(&scenario.output).exists());
    }
}
