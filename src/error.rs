use thiserror::Error;

pub type RadarResult<T> = Result<T, RadarError>;

#[derive(Debug, Error)]
pub enum RadarError {
    #[error("invalid view box: width={width}, height={height}")]
    InvalidViewBox { width: f64, height: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
