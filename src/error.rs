use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not place a clearing after {attempts} attempts; grid too small or crowded for the requested radius")]
    ClearingPlacementExhausted { attempts: u32 },

    #[error("unable to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
