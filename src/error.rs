use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("sample `{label}` has a non-finite value")]
    NonFiniteValue { label: String },

    #[error("rendering requires at least {required} samples, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },

    #[error("invalid plot rectangle: width={width}, height={height}")]
    InvalidPlotRect { width: f64, height: f64 },

    #[error("degenerate value range: all samples share value {value}")]
    DegenerateValueRange { value: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
