use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpiQrError {
    #[error("Logging error: {0}")]
    Logging(String),
    #[error("Generic error: {0}")]
    Generic(String),
}

impl From<std::io::Error> for UpiQrError {
    fn from(value: std::io::Error) -> Self {
        Self::Generic(value.to_string())
    }
}
