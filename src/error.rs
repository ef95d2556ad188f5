use derive_more::IsVariant;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, IsVariant)]
pub enum Error {
    #[error("boundary keys must strictly increase: key at index {idx} is out of order")]
    UnsortedKeys { idx: usize },

    #[error("boundary at index {idx} repeats the value in effect before it")]
    RedundantBoundary { idx: usize },

    #[error(transparent)]
    Custom(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Create a custom error from any error type.
    pub fn custom<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Custom(Box::new(err))
    }
}
