use crate::error::PetstoreError;
use quick_xml::events::{BytesText, Event};
use quick_xml::se::Serializer;
use quick_xml::{Reader, Writer};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes without an XML declaration, the root element name comes from the serde name of `T`
pub fn to_string<T: Serialize>(name: &str, value: &T, pretty: bool) -> crate::Result<String> {
    let mut encoded = String::new();
    let mut ser = Serializer::new(&mut encoded);
    if pretty {
        ser.indent(' ', 2);
    }
    value.serialize(ser).map_err(PetstoreError::xml)?;
    let encoded = escape_edge_whitespace(&encoded)?;
    trace!("Encoded `{}` as XML: {} bytes", name, encoded.len());
    Ok(encoded)
}

pub fn from_str<T: DeserializeOwned>(name: &str, payload: &str) -> crate::Result<T> {
    trace!("Decoding `{}` from XML: {} bytes", name, payload.len());
    quick_xml::de::from_str(payload).map_err(|err| {
        debug!("Failed to decode `{}` from XML: {}", name, err);
        PetstoreError::xml(err)
    })
}

fn is_xml_space(c: char) -> bool { matches!(c, ' ' | '\t' | '\r' | '\n') }

fn to_char_refs(spaces: &str) -> String {
    spaces.chars().map(|c| format!("&#{};", c as u32)).collect()
}

/// Rewrites leading and trailing whitespace of already escaped text as character references
fn protect_edges(text: &str) -> String {
    let body = text.trim_matches(is_xml_space);
    let start = text.len() - text.trim_start_matches(is_xml_space).len();
    format!(
        "{}{}{}",
        to_char_refs(&text[.. start]),
        body,
        to_char_refs(&text[start + body.len() ..])
    )
}

/// The deserializer trims text content before unescaping it. Leaf element text is rewritten so
/// its leading and trailing whitespace survives decoding; indentation between elements is kept.
fn escape_edge_whitespace(encoded: &str) -> crate::Result<String> {
    let mut reader = Reader::from_str(encoded);
    let mut events = Vec::new();
    loop {
        match reader.read_event().map_err(PetstoreError::xml)? {
            Event::Eof => break,
            event => events.push(event),
        }
    }

    let mut writer = Writer::new(Vec::with_capacity(encoded.len()));
    for (i, event) in events.iter().enumerate() {
        let is_leaf_text = i > 0
            && matches!(events[i - 1], Event::Start(_))
            && matches!(events.get(i + 1), Some(Event::End(_)));
        let written = match event {
            Event::Text(text) if is_leaf_text => {
                let text = std::str::from_utf8(text)?;
                writer.write_event(Event::Text(BytesText::from_escaped(protect_edges(text))))
            }
            event => writer.write_event(event.clone()),
        };
        written.map_err(PetstoreError::xml)?;
    }

    String::from_utf8(writer.into_inner()).map_err(PetstoreError::xml)
}
