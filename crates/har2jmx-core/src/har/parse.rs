//! Minimal HAR 1.2 structures for extracting replayable requests.
//!
//! Every field below the root is optional or defaulted: browser exports are
//! routinely incomplete, and a missing field at any depth must read as
//! "absent", never as a deserialization failure for the whole capture.

use serde::Deserialize;

/// Root HAR wrapper. `log` itself may be absent in truncated captures.
#[derive(Debug, Deserialize)]
pub struct Har {
    #[serde(default)]
    pub log: Option<HarLog>,
}

#[derive(Debug, Deserialize)]
pub struct HarLog {
    #[serde(default)]
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HarEntry {
    #[serde(default)]
    pub request: Option<HarRequest>,
}

#[derive(Debug, Deserialize)]
pub struct HarRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default, rename = "postData")]
    pub post_data: Option<HarPostData>,
    #[serde(default)]
    pub headers: Vec<HarPair>,
    #[serde(default)]
    pub cookies: Vec<HarPair>,
}

#[derive(Debug, Deserialize)]
pub struct HarPostData {
    #[serde(default)]
    pub text: Option<String>,
}

/// Name/value pair as used by HAR `headers` and `cookies` arrays.
#[derive(Debug, Deserialize)]
pub struct HarPair {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}
