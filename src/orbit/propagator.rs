use chrono::{DateTime, Utc};
use sgp4::{Constants, Elements};

use crate::orbit::geodetic::{ecef_to_geodetic, teme_to_ecef_position};
use crate::orbit::PropagationError;
use crate::scenario::SatelliteRecord;

/// Geodetic point directly beneath a satellite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subpoint {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

/// Anything that can tell where a satellite is at a given instant
pub trait Propagator {
    fn subpoint(&self, at: DateTime<Utc>) -> Result<Subpoint, PropagationError>;
}

/// SGP4/SDP4 propagation of a single element set
pub struct Sgp4Propagator {
    elements: Elements,
    constants: Constants,
}

impl Sgp4Propagator {
    pub fn from_record(record: &SatelliteRecord) -> Result<Self, PropagationError> {
        let elements = Elements::from_tle(
            Some(record.name.clone()),
            record.tle_line1.as_bytes(),
            record.tle_line2.as_bytes(),
        )
        .map_err(|source| PropagationError::InvalidTle {
            name: record.name.clone(),
            source,
        })?;

        let constants =
            Constants::from_elements(&elements).map_err(|source| PropagationError::Elements {
                name: record.name.clone(),
                source,
            })?;

        Ok(Self { elements, constants })
    }

    pub fn norad_id(&self) -> u64 {
        self.elements.norad_id
    }

    pub fn epoch(&self) -> DateTime<Utc> {
        self.elements.datetime.and_utc()
    }
}

impl Propagator for Sgp4Propagator {
    fn subpoint(&self, at: DateTime<Utc>) -> Result<Subpoint, PropagationError> {
        let minutes = self
            .elements
            .datetime_to_minutes_since_epoch(&at.naive_utc())
            .map_err(|e| PropagationError::Propagation(e.to_string()))?;

        let prediction = self.constants.propagate(minutes)?;

        let sidereal =
            sgp4::iau_epoch_to_sidereal_time(sgp4::julian_years_since_j2000(&at.naive_utc()));

        let ecef_km = teme_to_ecef_position(prediction.position, sidereal);
        let ecef_m = [ecef_km[0] * 1000.0, ecef_km[1] * 1000.0, ecef_km[2] * 1000.0];

        Ok(ecef_to_geodetic(ecef_m))
    }
}
