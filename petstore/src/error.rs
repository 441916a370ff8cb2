use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetstoreError {
    #[error("Invalid JSON payload")]
    Json(#[source] serde_json::Error),
    #[error("Invalid XML payload")]
    Xml(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error(
        "Unsupported media type: {0}, the valid types: `application/json`, `application/xml`"
    )]
    UnsupportedMediaType(String),
    #[error("None of the accepted media types can be produced: {0}")]
    NotAcceptable(String),
    #[error("Unhandled")]
    Unhandled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<serde_json::Error> for PetstoreError {
    fn from(err: serde_json::Error) -> Self { PetstoreError::Json(err) }
}

impl PetstoreError {
    pub(crate) fn xml<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        PetstoreError::Xml(Box::new(err))
    }
}

from_external_error!(PetstoreError::Unhandled; std::str::Utf8Error, http::header::ToStrError);
