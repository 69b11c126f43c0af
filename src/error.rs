use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("invalid content rect: left={left}, top={top}, right={right}, bottom={bottom}")]
    InvalidContentRect {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },

    #[error("invalid thresholds: {0}")]
    InvalidThresholds(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("threshold parse error: {0}")]
    ThresholdParse(#[from] serde_json::Error),
}
