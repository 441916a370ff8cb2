pub mod dog;

use crate::codec::{json, xml, Format};
use crate::settings::CodecSettings;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A wire model that can be encoded to and decoded from every supported [`Format`].
///
/// The `Serialize`/`Deserialize` impls of the model itself describe the JSON form. The XML form
/// is described by a separate type, [`Model::Xml`], because the two formats do not share
/// field rules (e.g. omitting empty fields).
pub trait Model: Serialize + DeserializeOwned {
    /// Schema name of the model, used as the XML root element and in logs
    const NAME: &'static str;

    type Xml: Serialize + DeserializeOwned + Into<Self>;

    fn to_xml_repr(&self) -> Self::Xml;

    fn to_json(&self) -> crate::Result<String> { json::to_string(Self::NAME, self, false) }

    fn to_json_pretty(&self) -> crate::Result<String> { json::to_string(Self::NAME, self, true) }

    fn from_json(payload: &str) -> crate::Result<Self> { json::from_str(Self::NAME, payload) }

    fn to_xml(&self) -> crate::Result<String> {
        xml::to_string(Self::NAME, &self.to_xml_repr(), false)
    }

    fn from_xml(payload: &str) -> crate::Result<Self> {
        xml::from_str::<Self::Xml>(Self::NAME, payload).map(Into::into)
    }

    fn encode(&self, format: Format) -> crate::Result<String> {
        self.encode_with(&CodecSettings::new(format))
    }

    fn encode_with(&self, settings: &CodecSettings) -> crate::Result<String> {
        match settings.format {
            Format::Json => json::to_string(Self::NAME, self, settings.pretty),
            Format::Xml => xml::to_string(Self::NAME, &self.to_xml_repr(), settings.pretty),
        }
    }

    fn decode(format: Format, payload: &str) -> crate::Result<Self> {
        match format {
            Format::Json => Self::from_json(payload),
            Format::Xml => Self::from_xml(payload),
        }
    }

    /// Decodes a raw body, which must be UTF-8 for both formats
    fn decode_bytes(format: Format, payload: &[u8]) -> crate::Result<Self> {
        Self::decode(format, std::str::from_utf8(payload)?)
    }
}
