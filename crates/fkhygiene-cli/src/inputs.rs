//! Input enumeration: line-oriented ID files and their cross product.

use std::fs;
use std::io;
use std::path::Path;

use fkhygiene_scraper::FetchKey;

/// Reads one identifier per line. Lines are trimmed; empty lines and `#`
/// comments are skipped.
pub(crate) fn read_id_file(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect())
}

/// Every (FSN, pincode) combination, in product-major order.
pub(crate) fn cross_product(product_ids: &[String], pincodes: &[String]) -> Vec<FetchKey> {
    product_ids
        .iter()
        .flat_map(|fsn| pincodes.iter().map(move |pin| FetchKey::new(fsn, pin)))
        .collect()
}
