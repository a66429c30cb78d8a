use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropagationError {
    #[error("invalid tle for {name}: {source}")]
    InvalidTle {
        name: String,
        #[source]
        source: sgp4::TleError,
    },
    #[error("elements error for {name}: {source}")]
    Elements {
        name: String,
        #[source]
        source: sgp4::ElementsError,
    },
    #[error("propagator failed: {0}")]
    Propagation(String),
}

impl From<sgp4::Error> for PropagationError {
    fn from(err: sgp4::Error) -> Self {
        PropagationError::Propagation(err.to_string())
    }
}
