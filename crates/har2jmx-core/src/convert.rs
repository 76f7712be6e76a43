//! Conversion run: HAR text in, JMX document plus report out.
//!
//! Single-threaded and synchronous; entries are processed strictly in
//! capture order and sampler order in the output matches it.

use anyhow::{Context, Result};
use std::path::Path;

use crate::error::ConvertError;
use crate::har;
use crate::jmx::{self, JmxDocument};

/// What to do when a single entry cannot be converted (missing url/method,
/// unparsable URL, colon-less header). Malformed input JSON always aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryPolicy {
    /// Skip the offending entry, record a diagnostic, continue the run.
    #[default]
    Skip,
    /// Abort the whole run on the first offending entry.
    Abort,
}

/// One entry that was skipped under [`EntryPolicy::Skip`].
#[derive(Debug, Clone)]
pub struct SkippedEntry {
    /// Index into `log.entries`.
    pub index: usize,
    /// The entry URL, when it was at least present.
    pub url: Option<String>,
    pub reason: String,
}

/// Outcome summary for one conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub total_entries: usize,
    pub converted: usize,
    pub skipped: Vec<SkippedEntry>,
}

/// A finished conversion: the document to persist plus its report.
#[derive(Debug)]
pub struct Conversion {
    pub document: JmxDocument,
    pub report: ConversionReport,
}

/// Converts HAR text into a JMX document.
///
/// An absent `log.entries` path is tolerated and yields a document with zero
/// samplers. Per-entry failures follow `policy`; everything else aborts.
pub fn convert_text(har_text: &str, policy: EntryPolicy) -> Result<Conversion, ConvertError> {
    let entries = har::parse_har(har_text)?;
    let mut document = JmxDocument::new();
    let mut report = ConversionReport {
        total_entries: entries.len(),
        ..Default::default()
    };

    for (index, entry) in entries.iter().enumerate() {
        let result = har::record_from_entry(entry)
            .and_then(|record| jmx::build_http_sampler(&record));
        match result {
            Ok(sampler) => {
                document.append_sampler(sampler);
                report.converted += 1;
            }
            Err(err) if err.is_entry_scoped() && policy == EntryPolicy::Skip => {
                let url = entry.request.as_ref().and_then(|r| r.url.clone());
                tracing::warn!(index, url = url.as_deref(), "skipping entry: {}", err);
                report.skipped.push(SkippedEntry {
                    index,
                    url,
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    tracing::debug!(
        total = report.total_entries,
        converted = report.converted,
        skipped = report.skipped.len(),
        "conversion finished"
    );
    Ok(Conversion { document, report })
}

/// Reads a HAR file, converts it, and persists the JMX document.
///
/// The two I/O calls are single synchronous operations with no retries. On
/// malformed input no output file is written.
pub fn convert_file(
    har_path: &Path,
    jmx_path: &Path,
    policy: EntryPolicy,
) -> Result<ConversionReport> {
    let har_text = std::fs::read_to_string(har_path)
        .with_context(|| format!("read HAR file: {}", har_path.display()))?;
    let conversion = convert_text(&har_text, policy)
        .with_context(|| format!("convert HAR file: {}", har_path.display()))?;
    conversion.document.save(jmx_path)?;
    Ok(conversion.report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: &str) -> String {
        format!(r#"{{"request":{{"url":"{}","method":"GET"}}}}"#, url)
    }

    fn har_with(entries: &[String]) -> String {
        format!(r#"{{"log":{{"entries":[{}]}}}}"#, entries.join(","))
    }

    #[test]
    fn sampler_order_matches_entry_order() {
        let har = har_with(&[
            entry("http://example.com/first"),
            entry("http://example.com/second"),
            entry("http://example.com/third"),
        ]);
        let conversion = convert_text(&har, EntryPolicy::Skip).unwrap();
        assert_eq!(conversion.report.converted, 3);

        let xml = conversion.document.to_xml().unwrap();
        let first = xml.find("http://example.com/first").unwrap();
        let second = xml.find("http://example.com/second").unwrap();
        let third = xml.find("http://example.com/third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn cardinality_matches_entry_count() {
        let har = har_with(&[entry("http://a.example/"), entry("http://b.example/")]);
        let conversion = convert_text(&har, EntryPolicy::Skip).unwrap();
        assert_eq!(conversion.document.sampler_count(), 2);
        assert_eq!(conversion.report.total_entries, 2);
    }

    #[test]
    fn missing_entries_path_yields_empty_document() {
        let conversion = convert_text(r#"{"log":{"version":"1.2"}}"#, EntryPolicy::Skip).unwrap();
        assert_eq!(conversion.document.sampler_count(), 0);
        assert_eq!(conversion.report.total_entries, 0);
        assert!(conversion.report.skipped.is_empty());

        // Still a valid skeleton-only document.
        let xml = conversion.document.to_xml().unwrap();
        assert!(xml.contains("<jmeterTestPlan"));
        assert!(!xml.contains("HTTPSamplerProxy"));
    }

    #[test]
    fn malformed_input_aborts() {
        let err = convert_text("{{{", EntryPolicy::Skip).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedInput(_)));
    }

    #[test]
    fn skip_policy_records_diagnostic_and_continues() {
        let har = har_with(&[
            entry("http://example.com/ok"),
            entry("definitely not a url"),
            entry("http://example.com/also-ok"),
        ]);
        let conversion = convert_text(&har, EntryPolicy::Skip).unwrap();
        assert_eq!(conversion.report.converted, 2);
        assert_eq!(conversion.report.skipped.len(), 1);

        let skipped = &conversion.report.skipped[0];
        assert_eq!(skipped.index, 1);
        assert_eq!(skipped.url.as_deref(), Some("definitely not a url"));
        assert!(skipped.reason.contains("malformed URL"));

        let xml = conversion.document.to_xml().unwrap();
        assert!(xml.contains("http://example.com/ok"));
        assert!(xml.contains("http://example.com/also-ok"));
    }

    #[test]
    fn abort_policy_fails_on_first_bad_entry() {
        let har = har_with(&[entry("http://example.com/ok"), entry("bad url")]);
        let err = convert_text(&har, EntryPolicy::Abort).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedUrl { .. }));
    }

    #[test]
    fn skip_policy_covers_missing_url() {
        let har = r#"{"log":{"entries":[{"request":{"method":"GET"}}]}}"#;
        let conversion = convert_text(har, EntryPolicy::Skip).unwrap();
        assert_eq!(conversion.report.converted, 0);
        assert_eq!(conversion.report.skipped.len(), 1);
        assert!(conversion.report.skipped[0].url.is_none());
    }
}
