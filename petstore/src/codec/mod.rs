//! Wire formats a model can be encoded to, and the dispatch between them.

pub mod json;
pub mod media_type;
pub mod xml;

use crate::error::PetstoreError;
use crate::{JSON_CONTENT_TYPE, XML_CONTENT_TYPE};
use http::HeaderValue;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Xml,
}

impl Default for Format {
    fn default() -> Self { Format::Json }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("json"),
            Format::Xml => f.write_str("xml"),
        }
    }
}

impl Format {
    /// The canonical media type written into `Content-Type`
    pub fn content_type(self) -> &'static str {
        match self {
            Format::Json => JSON_CONTENT_TYPE,
            Format::Xml => XML_CONTENT_TYPE,
        }
    }

    pub fn header_value(self) -> HeaderValue { HeaderValue::from_static(self.content_type()) }

    /// Resolves a `Content-Type` value, parameters such as `charset` are ignored
    pub fn from_content_type(content_type: &str) -> crate::Result<Self> {
        media_type::MediaType::parse(content_type)
            .and_then(|mt| mt.format())
            .ok_or_else(|| PetstoreError::UnsupportedMediaType(content_type.into()))
    }

    /// Picks the format to answer with for the given `Accept` header.
    ///
    /// `default` is used when the header is absent, empty or only carries wildcards
    pub fn negotiate(accept: Option<&str>, default: Format) -> crate::Result<Self> {
        media_type::negotiate(accept, default)
    }
}

impl FromStr for Format {
    type Err = PetstoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Format::from_content_type(s) }
}

impl TryFrom<&HeaderValue> for Format {
    type Error = PetstoreError;

    fn try_from(value: &HeaderValue) -> Result<Self, Self::Error> {
        Format::from_content_type(value.to_str()?)
    }
}
