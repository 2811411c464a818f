//! Sequential fetch pass over the (FSN, pincode) cross product.
//!
//! Pairs are independent: a failed fetch is logged and skipped rather than
//! propagated so one bad product or pincode does not abort the full run.

use std::path::Path;

use fkhygiene_core::AppConfig;
use fkhygiene_scraper::RomeClient;

use crate::inputs;
use crate::store::ArtifactStore;

/// Builds a `RomeClient` from the application config.
pub(crate) fn build_rome_client(config: &AppConfig) -> anyhow::Result<RomeClient> {
    Ok(RomeClient::new(
        &config.api_base,
        config.request_timeout_secs,
        config.retry_after_default_secs,
        config.proxy_url.as_deref(),
        config.accept_invalid_certs,
    )?)
}

/// Fetches every pair from the cross product of the two input files that does
/// not already have an artifact on disk, strictly one at a time.
pub(crate) async fn run_fetch(
    config: &AppConfig,
    products_path: &Path,
    pincodes_path: &Path,
    output_dir: &Path,
) -> anyhow::Result<()> {
    let product_ids = inputs::read_id_file(products_path)?;
    let pincodes = inputs::read_id_file(pincodes_path)?;
    let keys = inputs::cross_product(&product_ids, &pincodes);

    let store = ArtifactStore::open(output_dir)?;
    let existing = store.existing_keys()?;
    let client = build_rome_client(config)?;

    let mut fetched = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for key in keys {
        if existing.contains(&key) {
            skipped += 1;
            continue;
        }
        match client.fetch_page(&key.product_id, &key.pincode).await {
            Ok(payload) => {
                store.write(&key, &payload)?;
                fetched += 1;
            }
            Err(error) => {
                tracing::warn!(
                    product_id = %key.product_id,
                    pincode = %key.pincode,
                    %error,
                    "fetch failed — skipping pair"
                );
                failed += 1;
            }
        }
    }

    tracing::info!(fetched, skipped, failed, "fetch pass complete");
    Ok(())
}
