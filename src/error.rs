use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid zoom input: {value}")]
    InvalidZoomInput { value: f64 },

    #[error("catalog inconsistency: {0}")]
    CatalogInconsistency(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
