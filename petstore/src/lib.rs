#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

use crate::error::PetstoreError;

pub type Result<T> = std::result::Result<T, PetstoreError>;
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const XML_CONTENT_TYPE: &str = "application/xml";

#[macro_use]
mod macros;

pub mod codec;
pub mod error;
pub mod model;
pub mod settings;

pub use crate::codec::Format;
pub use crate::model::dog::Dog;
pub use crate::model::Model;
pub use crate::settings::CodecSettings;
