use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("font `{name}` is not available")]
    FontUnavailable { name: String },

    #[error("unsupported file extension: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("output format `{format}` requires the `cairo-backend` feature")]
    BackendUnavailable { format: &'static str },

    #[error("backend error: {0}")]
    Backend(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
