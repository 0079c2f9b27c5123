use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid time axis config: {0}")]
    InvalidConfig(String),

    #[error("unrecognized interval `{0}`")]
    InvalidInterval(String),
}
