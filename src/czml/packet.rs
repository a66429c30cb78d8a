use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::scenario::Rgba;

pub const CZML_VERSION: &str = "1.0";
pub const DOCUMENT_ID: &str = "document";

/// 16x16 satellite glyph, tinted per satellite through the billboard colour
pub const SATELLITE_ICON: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAYAAAAf8/9hAAAABmJLR0QA/wD/AP+gvaeTAAAACXBIWXMAAAsTAAALEwEAmpwYAAAAB3RJTUUH3QYDCCcnJcfmVQAAAbpJREFUOMuVkk1PE2EQhp/Z7X5AqbRYaBsNakxqPXDw4MGDiT+AG/wF/AceTOTgxYNXL148eLVRPBgTY+KBxIMHCWgUbSmF0pZ2t7vTgwYw8aM1meQ9zDzzvJN3BoBpmub/ykv+OiDLsizLouu6aa01InLpe57nATiOcz+bzT4AEBFxHGfRdd0PAOr1+hwA0zRNAESkVqvNlUqlVwAsy7KMMYYsy7q0Wi1DCCEppQCglLo0TfOTiEgqlUqIiBhjjBBCpFKphGEYr5VS1wFEJBaLvQdQqVRe1uv1PIC6UuojgHw+fzdq23YqEomcHOlHplarLdm2/VJEVgCUSqU5ETFN05xNp9N3ACCdTmdDoZABIJfL3QJQKHQ7Hd1udy2ZTD4HsFqtPltfX1/sdDoHAGzbNkSk0m63PxeLxXkApmmat6LRaFZEarXaXLlcXqzX6wfdbvcEwPHx8QaA1dXVZ5FI5FQ2m50EUCQSSY7H49+NMYZSKhkOhxe6qvVyubxYLBbnAUSj0Y/lcvk5gJOTkwMA1Wo1v7y8fB+A4zj3iqXbtr1kWdY7pdS1TqfzuVQqzXe73UMAh4eH34vF4jcAy8vL9wD8AiKRSCEUCr0EcBZA4QAAAABJRU5ErkJggg==";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ClockRange {
    Unbounded,
    Clamped,
    LoopStop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ClockStep {
    TickDependent,
    SystemClockMultiplier,
    SystemClock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalOrigin {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalOrigin {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LabelStyle {
    Fill,
    Outline,
    FillAndOutline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterpolationAlgorithm {
    Linear,
    Lagrange,
    Hermite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceFrame {
    Fixed,
    Inertial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub rgba: Rgba,
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Self { rgba }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clock {
    pub interval: String,
    pub current_time: String,
    pub multiplier: u32,
    pub range: ClockRange,
    pub step: ClockStep,
}

/// First packet of every document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPacket {
    pub id: String,
    pub name: String,
    pub version: String,
    pub clock: Clock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Billboard {
    pub image: String,
    pub scale: f64,
    pub horizontal_origin: HorizontalOrigin,
    pub vertical_origin: VerticalOrigin,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelOffset {
    pub cartesian2: [i32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub text: String,
    pub font: String,
    pub horizontal_origin: HorizontalOrigin,
    pub vertical_origin: VerticalOrigin,
    pub pixel_offset: PixelOffset,
    pub fill_color: Color,
    pub outline_color: Color,
    pub outline_width: u32,
    pub style: LabelStyle,
}

/// Sampled position; `cartographic_degrees` is flat `[t, lon, lat, alt, t, lon, ...]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub interpolation_algorithm: InterpolationAlgorithm,
    pub interpolation_degree: u32,
    pub reference_frame: ReferenceFrame,
    pub epoch: String,
    pub cartographic_degrees: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidColor {
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub solid_color: SolidColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    pub show: bool,
    pub width: u32,
    pub material: Material,
    pub resolution: u32,
    pub lead_time: u32,
    pub trail_time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatellitePacket {
    pub id: String,
    pub name: String,
    pub availability: String,
    pub billboard: Billboard,
    pub label: Label,
    pub position: Position,
    pub path: Path,
}

impl SatellitePacket {
    pub fn sample_count(&self) -> usize {
        self.position.cartographic_degrees.len() / 4
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Packet {
    Document(DocumentPacket),
    Satellite(SatellitePacket),
}

impl Packet {
    pub fn id(&self) -> &str {
        match self {
            Packet::Document(p) => &p.id,
            Packet::Satellite(p) => &p.id,
        }
    }
}

/// Ordered packet list: the document header followed by one packet per satellite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CzmlDocument {
    pub packets: Vec<Packet>,
}

impl CzmlDocument {
    pub fn header(&self) -> Option<&DocumentPacket> {
        match self.packets.first() {
            Some(Packet::Document(p)) => Some(p),
            _ => None,
        }
    }

    pub fn satellites(&self) -> impl Iterator<Item = &SatellitePacket> {
        self.packets.iter().filter_map(|p| match p {
            Packet::Satellite(s) => Some(s),
            Packet::Document(_) => None,
        })
    }
}
