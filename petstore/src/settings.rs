use crate::codec::Format;

/// Codec options a host application can embed in its own configuration file
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, Eq, PartialEq)]
pub struct CodecSettings {
    #[serde(default)]
    pub format: Format,
    #[serde(default)]
    pub pretty: bool,
}

impl CodecSettings {
    pub fn new(format: Format) -> Self { CodecSettings { format, ..Default::default() } }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::CodecSettings;
    use crate::codec::Format;

    #[test]
    fn deserialize_test() {
        let settings: CodecSettings =
            serde_json::from_str(r#"{ "format": "xml", "pretty": true }"#).unwrap();
        assert_eq!(settings, CodecSettings::new(Format::Xml).pretty(true));

        let settings: CodecSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, CodecSettings { format: Format::Json, pretty: false });

        assert!(serde_json::from_str::<CodecSettings>(r#"{ "format": "yaml" }"#).is_err());
    }
}
