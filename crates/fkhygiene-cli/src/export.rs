//! CSV report generation from stored artifacts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use fkhygiene_scraper::{extract_product_record, ProductRecord};

use crate::store::ArtifactStore;

/// Extracts one record per artifact and writes the hygiene report.
///
/// Unreadable or unparseable artifacts are logged and skipped; extraction
/// itself is total and never drops a record.
pub(crate) fn run_export(output_dir: &Path, out_path: &Path) -> anyhow::Result<()> {
    let store = ArtifactStore::open(output_dir)?;

    let mut records = Vec::new();
    for (key, path) in store.artifacts()? {
        let payload = match store.read(&path) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "unreadable artifact — skipping");
                continue;
            }
        };
        records.push(extract_product_record(
            &payload,
            &key.product_id,
            &key.pincode,
        ));
    }

    write_csv(File::create(out_path)?, &records)?;
    tracing::info!(rows = records.len(), out = %out_path.display(), "wrote hygiene report");
    Ok(())
}

/// Writes the header row plus one row per record.
pub(crate) fn write_csv<W: Write>(writer: W, records: &[ProductRecord]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
