use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildwatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable {name} is not set")]
    MissingEnvVar { name: String },

    #[error("Disk probe error: {0}")]
    Probe(String),

    #[error("Metric publish error: {0}")]
    Publish(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BuildwatchError>;
