//! Conversion error type, split by blast radius: input-level errors abort the
//! whole run, entry-level errors are skippable per the conversion policy.

use thiserror::Error;

/// Error raised while converting a HAR capture to a JMX document.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source bytes are not valid JSON. Aborts the run; no document is written.
    #[error("malformed HAR input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Entry has no `request` object.
    #[error("entry has no request object")]
    MissingRequest,

    /// Entry has no `request.url` field.
    #[error("entry has no request.url")]
    MissingUrl,

    /// Entry has no `request.method` field.
    #[error("entry has no request.method")]
    MissingMethod,

    /// Entry URL cannot be decomposed into scheme/host/port.
    #[error("malformed URL {url:?}: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Header string lacks the `:` separating name from value.
    #[error("malformed header {header:?}: missing ':' separator")]
    MalformedHeader { header: String },

    /// XML serialization failed. Aborts the run.
    #[error("JMX serialization failed: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl ConvertError {
    /// True for failures scoped to a single HAR entry; the conversion run may
    /// skip the entry and continue. Input- and output-level failures abort.
    pub fn is_entry_scoped(&self) -> bool {
        match self {
            ConvertError::MissingRequest
            | ConvertError::MissingUrl
            | ConvertError::MissingMethod
            | ConvertError::MalformedUrl { .. }
            | ConvertError::MalformedHeader { .. } => true,
            ConvertError::MalformedInput(_) | ConvertError::Xml(_) => false,
        }
    }
}
