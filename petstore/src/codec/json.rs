use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn to_string<T: Serialize>(name: &str, value: &T, pretty: bool) -> crate::Result<String> {
    let encoded =
        if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    trace!("Encoded `{}` as JSON: {} bytes", name, encoded.len());
    Ok(encoded)
}

pub fn from_str<T: DeserializeOwned>(name: &str, payload: &str) -> crate::Result<T> {
    trace!("Decoding `{}` from JSON: {} bytes", name, payload.len());
    serde_json::from_str(payload).map_err(|err| {
        debug!("Failed to decode `{}` from JSON: {}", name, err);
        err.into()
    })
}
