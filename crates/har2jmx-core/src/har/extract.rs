//! Normalize HAR entries into flat request records for the JMX builder.

use crate::error::ConvertError;

use super::parse::{Har, HarEntry};

/// One replayable request, flattened from a HAR entry.
///
/// Headers are carried as `"Name: Value"` strings; the builder splits them
/// back on the first colon when emitting the header manager.
#[derive(Debug, Clone)]
pub struct RequestRecord {
    pub url: String,
    pub method: String,
    pub post_body: Option<String>,
    pub headers: Vec<String>,
    pub cookies: Vec<(String, String)>,
}

/// Parses HAR text and returns its entries in capture order.
///
/// Invalid JSON is a hard failure. An absent `log` or `log.entries` path is
/// not: incomplete captures are common, and the contract for them is a test
/// plan with zero samplers, so this returns an empty list instead.
pub fn parse_har(text: &str) -> Result<Vec<HarEntry>, ConvertError> {
    let har: Har = serde_json::from_str(text)?;
    Ok(har.log.map(|log| log.entries).unwrap_or_default())
}

/// Flattens one HAR entry into a [`RequestRecord`].
///
/// `request`, `request.url`, and `request.method` are required; anything else
/// is optional. Header and cookie pairs lacking a name or value are dropped
/// rather than half-copied.
pub fn record_from_entry(entry: &HarEntry) -> Result<RequestRecord, ConvertError> {
    let request = entry.request.as_ref().ok_or(ConvertError::MissingRequest)?;
    let url = request.url.clone().ok_or(ConvertError::MissingUrl)?;
    let method = request.method.clone().ok_or(ConvertError::MissingMethod)?;

    let post_body = request.post_data.as_ref().and_then(|p| p.text.clone());

    let headers = request
        .headers
        .iter()
        .filter_map(|pair| match (&pair.name, &pair.value) {
            (Some(name), Some(value)) => Some(format!("{}: {}", name, value)),
            _ => None,
        })
        .collect();

    let cookies = request
        .cookies
        .iter()
        .filter_map(|pair| match (&pair.name, &pair.value) {
            (Some(name), Some(value)) => Some((name.clone(), value.clone())),
            _ => None,
        })
        .collect();

    Ok(RequestRecord {
        url,
        method,
        post_body,
        headers,
        cookies,
    })
}
