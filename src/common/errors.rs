// Custom errors used through the project
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid icon size {0:?}, expected a positive integer")]
    InvalidSize(String),

    #[error("Icon size list is empty")]
    EmptySizes,

    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),

    #[error("Missing argument <{0}>")]
    MissingArgument(&'static str),
}
