//! Domain types: the flat per-product record and the scrape-target key.

use serde::Serialize;
use serde_json::Number;

/// Identifies one scrape target and one persisted artifact: the pair of
/// platform product identifier (FSN) and delivery pincode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    pub product_id: String,
    pub pincode: String,
}

impl FetchKey {
    #[must_use]
    pub fn new(product_id: &str, pincode: &str) -> Self {
        Self {
            product_id: product_id.to_owned(),
            pincode: pincode.to_owned(),
        }
    }

    /// File name of the raw-payload artifact for this key.
    #[must_use]
    pub fn artifact_basename(&self) -> String {
        format!("{}_{}.json", self.product_id, self.pincode)
    }

    /// Parses an artifact basename back into a key. Returns `None` for file
    /// names that are not of the `{fsn}_{pincode}.json` form.
    #[must_use]
    pub fn from_basename(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".json")?;
        let (product_id, pincode) = stem.split_once('_')?;
        if product_id.is_empty() || pincode.is_empty() {
            return None;
        }
        Some(Self::new(product_id, pincode))
    }
}

/// One flat row of hygiene metrics for a (FSN, pincode) pair.
///
/// The serde renames are the canonical report column names; field order here
/// is column order in the CSV. `None` serializes as an empty cell. Fields
/// that cannot be derived from the page payload (`EDD_Fresh`, both BSR
/// columns, `SNS`) carry fixed placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    #[serde(rename = "Product ID")]
    pub product_id: String,
    #[serde(rename = "Pincode")]
    pub pincode: String,
    #[serde(rename = "Title Length")]
    pub title_length: usize,
    #[serde(rename = "MRP")]
    pub mrp: Option<Number>,
    /// The raw pricing block, compact-serialized; empty when absent.
    #[serde(rename = "Live Price")]
    pub live_price: String,
    #[serde(rename = "Availability")]
    pub availability: String,
    /// `"Yes"`/`"No"` from the special-price flag, unless a `SPECIAL_PRICE`
    /// pricing entry overwrites it with that entry's promotional name.
    #[serde(rename = "Deal Tag")]
    pub deal_tag: Option<String>,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Bullet Points")]
    pub bullet_points: Option<usize>,
    #[serde(rename = "Count of Catalog Images")]
    pub catalog_images: Option<u64>,
    #[serde(rename = "Videos in Catalog")]
    pub catalog_videos: u64,
    #[serde(rename = "EDD")]
    pub edd: Option<String>,
    #[serde(rename = "EDD_Fresh")]
    pub edd_fresh: Option<String>,
    #[serde(rename = "Number of Variations")]
    pub variations: usize,
    #[serde(rename = "3 Star Ratings")]
    pub three_star_ratings: Option<u64>,
    #[serde(rename = "2 Star Ratings")]
    pub two_star_ratings: Option<u64>,
    #[serde(rename = "1 Star Ratings")]
    pub one_star_ratings: Option<u64>,
    #[serde(rename = "Total Ratings")]
    pub total_ratings: Option<u64>,
    #[serde(rename = "Ratings")]
    pub average_rating: Option<Number>,
    #[serde(rename = "Sub-Category BSR")]
    pub sub_category_bsr: Option<String>,
    #[serde(rename = "Category BSR")]
    pub category_bsr: Option<String>,
    #[serde(rename = "Sold By")]
    pub sold_by: Option<String>,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "BXGY")]
    pub bxgy: String,
    #[serde(rename = "A+")]
    pub a_plus: String,
    #[serde(rename = "SNS")]
    pub sns: String,
    #[serde(rename = "Coupon")]
    pub coupon: String,
    #[serde(rename = "Number of Other Sellers")]
    pub other_sellers: Option<i64>,
}
