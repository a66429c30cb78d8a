use crate::orbit::{PropagationError, Propagator};
use crate::scenario::TimeWindow;

/// Position of a satellite relative to the window start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    pub offset_seconds: f64,
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub altitude_m: f64,
}

impl PositionSample {
    /// CZML `cartographicDegrees` quadruple
    pub fn as_cartographic(&self) -> [f64; 4] {
        [
            self.offset_seconds,
            self.longitude_deg,
            self.latitude_deg,
            self.altitude_m,
        ]
    }
}

/// Evaluate the subpoint at every instant of the window, in order.
/// The first propagation failure aborts the whole track.
pub fn sample_track<P: Propagator + ?Sized>(
    propagator: &P,
    window: &TimeWindow,
) -> Result<Vec<PositionSample>, PropagationError> {
    let mut points = Vec::with_capacity(window.sample_count());

    for at in window.instants() {
        let subpoint = propagator.subpoint(at)?;
        let offset = at - window.start;
        points.push(PositionSample {
            offset_seconds: offset.num_milliseconds() as f64 / 1000.0,
            longitude_deg: subpoint.longitude_deg,
            latitude_deg: subpoint.latitude_deg,
            altitude_m: subpoint.altitude_m,
        });
    }

    Ok(points)
}
