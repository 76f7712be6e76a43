//! HAR (HTTP Archive) extractor: parse a capture and yield normalized
//! request records in entry order.
//!
//! Tolerant by design: optional fields (`postData`, `headers`, `cookies`,
//! even `log.entries` itself) read as absent, not as parse failures. Only
//! invalid JSON, or an entry missing `request.url`/`request.method`, is an
//! error, and the latter two are scoped to their entry.

mod extract;
mod parse;

pub use extract::{parse_har, record_from_entry, RequestRecord};
pub use parse::{Har, HarEntry, HarLog, HarPair, HarPostData, HarRequest};
