//! JMX (JMeter test plan) builder: a fixed document skeleton that collects
//! one HTTP sampler subtree per converted HAR entry.

mod document;
mod element;
mod sampler;

pub use document::JmxDocument;
pub use element::{bool_prop, collection_prop, long_prop, string_prop, XmlElement};
pub use sampler::build_http_sampler;
