use crate::codec::Format;
use crate::error::PetstoreError;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashMap;

lazy_static! {
    static ref MEDIA_TYPE_REGEX: Regex =
        Regex::new(r#"^(?P<ty>[a-z0-9!#$&^_.+\-*]+)/(?P<subtype>[a-z0-9!#$&^_.+\-*]+)$"#).unwrap();
}

fn extract_params_of_media_type(media_type: &str) -> HashMap<String, String> {
    let mut params: HashMap<String, String> = Default::default();
    for param in media_type.split(';').skip(1) {
        let param: Vec<&str> = param.splitn(2, '=').map(|s| s.trim()).collect();
        if param.len() == 2 && !param[0].is_empty() {
            params.insert(param[0].to_ascii_lowercase(), param[1].trim_matches('"').into());
        }
    }

    params
}

/// A parsed media type or media range, e.g. `application/xml; charset=utf-8` or `text/*;q=0.5`
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MediaType {
    pub ty: String,
    pub subtype: String,
    pub params: HashMap<String, String>,
}

impl MediaType {
    /// Type and subtype are compared case-insensitively, so they are stored lowercased
    pub fn parse(media_type: &str) -> Option<Self> {
        let essence = media_type.split(';').next()?.trim().to_ascii_lowercase();
        let caps = MEDIA_TYPE_REGEX.captures(&essence)?;
        let ty = caps.name("ty")?.as_str().to_owned();
        let subtype = caps.name("subtype")?.as_str().to_owned();
        Some(MediaType { ty, subtype, params: extract_params_of_media_type(media_type) })
    }

    /// `*/*`, `application/*` and `text/*`
    pub fn is_wildcard(&self) -> bool {
        self.subtype == "*" && (self.ty == "*" || self.ty == "application" || self.ty == "text")
    }

    /// The wire format this media type names, structured syntax suffixes (`+json`, `+xml`) included
    pub fn format(&self) -> Option<Format> {
        if self.ty != "application" && self.ty != "text" {
            return None;
        }
        match self.subtype.rsplit('+').next() {
            Some("json") => Some(Format::Json),
            Some("xml") => Some(Format::Xml),
            _ => None,
        }
    }

    /// Whether this media range covers `content_type`, honouring `*/*` and `type/*`
    pub fn matches(&self, content_type: &str) -> bool {
        match MediaType::parse(content_type) {
            Some(other) => {
                (self.ty == "*" && self.subtype == "*")
                    || (self.ty == other.ty && (self.subtype == "*" || self.subtype == other.subtype))
            }
            None => false,
        }
    }

    /// The `q` weight of a media range, `1.0` when missing and clamped into `0.0..=1.0`
    pub fn quality(&self) -> f32 {
        self.params
            .get("q")
            .and_then(|q| q.parse::<f32>().ok())
            .filter(|q| !q.is_nan())
            .map(|q| q.max(0.0).min(1.0))
            .unwrap_or(1.0)
    }
}

pub(crate) fn negotiate(accept: Option<&str>, default: Format) -> crate::Result<Format> {
    let accept = match accept.map(str::trim) {
        Some(accept) if !accept.is_empty() => accept,
        _ => return Ok(default),
    };

    let mut ranges: Vec<MediaType> = accept.split(',').filter_map(MediaType::parse).collect();
    ranges.sort_by(|a, b| b.quality().partial_cmp(&a.quality()).unwrap_or(Ordering::Equal));

    let refusals: Vec<&MediaType> = ranges.iter().filter(|r| r.quality() <= 0.0).collect();
    let is_refused = |format: Format| {
        refusals.iter().any(|r| r.format() == Some(format) || r.matches(format.content_type()))
    };

    for range in ranges.iter().filter(|r| r.quality() > 0.0) {
        if let Some(format) = range.format() {
            if !is_refused(format) {
                debug!("Negotiated `{}` from Accept `{}`", format, accept);
                return Ok(format);
            }
        } else if range.is_wildcard() {
            let other = match default {
                Format::Json => Format::Xml,
                Format::Xml => Format::Json,
            };
            if let Some(format) = vec![default, other].into_iter().find(|&f| !is_refused(f)) {
                debug!("Negotiated `{}` from wildcard in Accept `{}`", format, accept);
                return Ok(format);
            }
        }
    }

    Err(PetstoreError::NotAcceptable(accept.into()))
}
