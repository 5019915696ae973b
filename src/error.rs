use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid direction: {token:?}")]
    InvalidDirection { token: String },

    #[error("Invalid vehicle size: {size}")]
    InvalidSize { size: u32 },

    #[error("Stage {index} has no cars")]
    EmptyStage { index: usize },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse solution: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
