use crate::czml::packet::*;
use crate::orbit::PositionSample;
use crate::scenario::{format_instant, SatelliteRecord, TimeWindow};

const CLOCK_MULTIPLIER: u32 = 60;
const ICON_SCALE: f64 = 1.5;
const LABEL_FONT: &str = "11pt sans-serif";
const LABEL_OFFSET: [i32; 2] = [12, 0];
const LABEL_OUTLINE: [u8; 4] = [0, 0, 0, 255];
const LABEL_OUTLINE_WIDTH: u32 = 2;
const INTERPOLATION_DEGREE: u32 = 5;
const PATH_WIDTH: u32 = 1;
const PATH_RESOLUTION: u32 = 120;
// one hour behind the satellite, nothing ahead, whatever the sampling step
const PATH_LEAD_TIME: u32 = 0;
const PATH_TRAIL_TIME: u32 = 3600;

pub fn document_packet(name: &str, window: &TimeWindow) -> DocumentPacket {
    DocumentPacket {
        id: DOCUMENT_ID.to_string(),
        name: name.to_string(),
        version: CZML_VERSION.to_string(),
        clock: Clock {
            interval: window.interval(),
            current_time: format_instant(&window.start),
            multiplier: CLOCK_MULTIPLIER,
            range: ClockRange::LoopStop,
            step: ClockStep::SystemClockMultiplier,
        },
    }
}

pub fn satellite_packet(
    record: &SatelliteRecord,
    window: &TimeWindow,
    samples: &[PositionSample],
) -> SatellitePacket {
    let color = Color::from(record.color);
    let cartographic_degrees = samples.iter().flat_map(|s| s.as_cartographic()).collect();

    SatellitePacket {
        id: record.name.clone(),
        name: record.name.clone(),
        availability: window.interval(),
        billboard: Billboard {
            image: SATELLITE_ICON.to_string(),
            scale: ICON_SCALE,
            horizontal_origin: HorizontalOrigin::Center,
            vertical_origin: VerticalOrigin::Center,
            color,
        },
        label: Label {
            text: record.name.clone(),
            font: LABEL_FONT.to_string(),
            horizontal_origin: HorizontalOrigin::Left,
            vertical_origin: VerticalOrigin::Center,
            pixel_offset: PixelOffset {
                cartesian2: LABEL_OFFSET,
            },
            fill_color: color,
            outline_color: Color::from(LABEL_OUTLINE),
            outline_width: LABEL_OUTLINE_WIDTH,
            style: LabelStyle::FillAndOutline,
        },
        position: Position {
            interpolation_algorithm: InterpolationAlgorithm::Lagrange,
            interpolation_degree: INTERPOLATION_DEGREE,
            reference_frame: ReferenceFrame::Fixed,
            epoch: format_instant(&window.start),
            cartographic_degrees,
        },
        path: Path {
            show: true,
            width: PATH_WIDTH,
            material: Material {
                solid_color: SolidColor { color },
            },
            resolution: PATH_RESOLUTION,
            lead_time: PATH_LEAD_TIME,
            trail_time: PATH_TRAIL_TIME,
        },
    }
}

/// Header packet plus one packet per satellite, in input order
pub fn assemble<'a, I>(name: &str, window: &TimeWindow, tracks: I) -> CzmlDocument
where
    I: IntoIterator<Item = (&'a SatelliteRecord, &'a [PositionSample])>,
{
    let mut packets = vec![Packet::Document(document_packet(name, window))];
    packets.extend(
        tracks
            .into_iter()
            .map(|(record, samples)| Packet::Satellite(satellite_packet(record, window, samples))),
    );
    CzmlDocument { packets }
}
