use chrono::{DateTime, Duration, Utc};
use std::path::PathBuf;

use crate::scenario::config::offset;
use crate::scenario::{SatelliteRecord, Scenario, ScenarioError, TimeWindow};

pub const DEFAULT_NAME: &str = "Satellite Orbits";
pub const DEFAULT_OUTPUT: &str = "static/cesium/08/wx2.czml";
pub const DEFAULT_DURATION: Duration = Duration::hours(12);
pub const DEFAULT_STEP: Duration = Duration::seconds(120);

// (name, line 1, line 2, rgba, icon size)
const SATELLITES: [(&str, &str, &str, [u8; 4], f64); 4] = [
    (
        "ISS (ZARYA)",
        "1 25544U 98067A   25001.50000000  .00016717  00000-0  10270-3 0  9000",
        "2 25544  51.6400 208.9163 0006317  55.0672  73.1695 15.54225995320451",
        [255, 0, 0, 255],
        8.0,
    ),
    (
        "BEIDOU-3 M1",
        "1 43001U 17069A   25001.50000000  .00000045  00000-0  00000+0 0  9992",
        "2 43001  55.1397 132.7644 0008537 284.5698 165.5905  1.86232511 42569",
        [0, 255, 0, 255],
        6.0,
    ),
    (
        "GPS BIIR-2",
        "1 28474U 04045A   25001.50000000 -.00000033  00000-0  00000+0 0  9997",
        "2 28474  55.3937 261.7145 0128853  37.9216 322.9305  2.00568794146927",
        [0, 0, 255, 255],
        6.0,
    ),
    (
        "TIANHE",
        "1 48274U 21035A   25001.50000000  .00004167  00000-0  65152-4 0  9990",
        "2 48274  41.4697 359.7982 0002417 325.8967 179.3156 15.60458852234785",
        [255, 255, 0, 255],
        8.0,
    ),
];

impl Scenario {
    /// The stock four-satellite demo: twelve hours from `start` at a two minute step
    pub fn builtin(start: DateTime<Utc>) -> Result<Self, ScenarioError> {
        let satellites = SATELLITES
            .iter()
            .map(|(name, l1, l2, color, size)| SatelliteRecord::new(name, l1, l2, *color, *size))
            .collect();

        Ok(Scenario {
            name: DEFAULT_NAME.to_string(),
            window: TimeWindow::new(start, offset(start, DEFAULT_DURATION, "12h")?, DEFAULT_STEP)?,
            satellites,
            output: PathBuf::from(DEFAULT_OUTPUT),
        })
    }
}
