//! `har2jmx convert <HAR> <JMX>` – run one conversion and print the summary.

use anyhow::Result;
use har2jmx_core::convert::{convert_file, EntryPolicy};
use std::path::Path;

pub fn run_convert(har_path: &Path, jmx_path: &Path, fail_fast: bool) -> Result<()> {
    let policy = if fail_fast {
        EntryPolicy::Abort
    } else {
        EntryPolicy::Skip
    };

    tracing::debug!(
        har = %har_path.display(),
        jmx = %jmx_path.display(),
        ?policy,
        "starting conversion"
    );
    let report = convert_file(har_path, jmx_path, policy)?;
    println!(
        "Wrote {} of {} entries to {}",
        report.converted,
        report.total_entries,
        jmx_path.display()
    );
    for skipped in &report.skipped {
        match &skipped.url {
            Some(url) => println!("  skipped entry {} ({}): {}", skipped.index, url, skipped.reason),
            None => println!("  skipped entry {}: {}", skipped.index, skipped.reason),
        }
    }
    Ok(())
}
