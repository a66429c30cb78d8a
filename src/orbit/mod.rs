mod error;
mod geodetic;
mod propagator;
mod sampler;

pub use error::PropagationError;
pub use propagator::{Propagator, Sgp4Propagator, Subpoint};
pub use sampler::{sample_track, PositionSample};

#[cfg(test)]
pub(crate) use sampler::tests::LinearStub;
