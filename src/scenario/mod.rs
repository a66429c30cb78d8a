mod builtin;
mod config;
mod error;
mod parsing;
mod types;

pub use config::Scenario;
pub use error::ScenarioError;
pub use types::{format_instant, Rgba, SatelliteRecord, TimeWindow};
