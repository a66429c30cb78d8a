use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid tle format for satellite {0}")]
    InvalidTleFormat(usize),
    #[error("satellite {0} has no name")]
    MissingName(usize),
    #[error("only one of 'end' and 'duration' may be given")]
    ConflictingEnd,
    #[error("invalid duration '{value}': {message}")]
    InvalidDuration { value: String, message: String },
    #[error("step must be a positive whole number of seconds, got {0}s")]
    InvalidStep(f64),
    #[error("No satellites in scenario")]
    NoSatellites,
}
