//! Defensive field extraction from raw page-composition payloads.
//!
//! ## Observed payload shape
//!
//! The page-fetch endpoint answers with a root object whose `RESPONSE` key
//! holds a `pageData` object (SEO metadata, pricing, swatches, and a large
//! `fdpEventTracking` analytics blob) plus an ordered `slots` array, each
//! slot wrapping a `widget` with widget-specific `data`. None of it is
//! schema-stable: keys come and go between renders, values change type, and
//! whole subtrees disappear for out-of-stock or delisted products.
//!
//! Every field probe below is therefore independent and total: it walks its
//! known path with the helpers in [`probe`] and degrades to the field's
//! documented fallback on any mismatch. Extraction as a whole never fails.

mod probe;
mod slots;

use serde_json::Value;

use crate::record::ProductRecord;
use probe::{array_at, bool_at, descend, i64_at, number_at, str_at, u64_at};
use slots::{any_offer, find_widget_data, widget_datas};

/// Minimum text length for a renderable component to count as a product
/// description rather than a caption or label.
const DESCRIPTION_MIN_CHARS: usize = 50;

/// Positions of the per-star buckets inside `pr.individualRatingsCount`,
/// which the upstream orders from 5-star down to 1-star.
const ONE_STAR_IDX: usize = 4;
const TWO_STAR_IDX: usize = 3;
const THREE_STAR_IDX: usize = 2;

/// Derives the flat hygiene record for one (FSN, pincode) pair from its raw
/// page payload. Pure and total: any probe that cannot resolve its path
/// yields that field's fallback, and no input shape can make it panic.
#[must_use]
pub fn extract_product_record(raw: &Value, product_id: &str, pincode: &str) -> ProductRecord {
    let null = Value::Null;
    let page_data = descend(raw, &["RESPONSE", "pageData"]).unwrap_or(&null);
    let psi = descend(
        page_data,
        &["pageContext", "fdpEventTracking", "events", "psi"],
    )
    .unwrap_or(&null);
    let tracking = descend(page_data, &["pageContext", "trackingDataV2"]).unwrap_or(&null);
    let pr = descend(
        page_data,
        &["pageContext", "fdpEventTracking", "commonContext", "pr"],
    )
    .unwrap_or(&null);

    let title = str_at(page_data, &["pageContext", "seo", "title"])
        .unwrap_or_default()
        .to_owned();
    let ratings = rating_breakdown(pr);

    ProductRecord {
        product_id: product_id.to_owned(),
        pincode: pincode.to_owned(),
        title_length: title.chars().count(),
        mrp: number_at(psi, &["ppd", "mrp"]),
        live_price: live_price(page_data),
        availability: yes_no(bool_at(psi, &["pls", "isAvailable"])),
        deal_tag: deal_tag(page_data, psi),
        title,
        bullet_points: bullet_points(raw),
        catalog_images: u64_at(psi, &["pas", "imagesCount"]),
        catalog_videos: u64_at(psi, &["pas", "videosCount"]).unwrap_or(0),
        edd: str_at(tracking, &["slaText"]).map(str::to_owned),
        edd_fresh: None,
        variations: array_at(page_data, &["swatchInfo", "mandatorySwatchAttributes"])
            .map_or(0, Vec::len),
        three_star_ratings: ratings.as_ref().and_then(|r| r.three_star),
        two_star_ratings: ratings.as_ref().and_then(|r| r.two_star),
        one_star_ratings: ratings.as_ref().and_then(|r| r.one_star),
        total_ratings: ratings.as_ref().and_then(|r| r.total),
        average_rating: number_at(pr, &["rating"]),
        sub_category_bsr: None,
        category_bsr: None,
        sold_by: str_at(tracking, &["sellerName"]).map(str::to_owned),
        description: yes_no(has_long_description(raw)),
        bxgy: yes_no(has_combo_offer(raw)),
        a_plus: yes_no(has_feature_set(raw)),
        sns: "NA".to_owned(),
        coupon: yes_no(has_coupon_offer(raw)),
        other_sellers: i64_at(tracking, &["sellerCount"]).map(|count| count - 1),
    }
}

fn yes_no(flag: bool) -> String {
    let rendered = if flag { "Yes" } else { "No" };
    rendered.to_owned()
}

/// The live pricing block is structured (price tiers, strike-through values)
/// and rendered per pincode; the row keeps it verbatim as compact JSON.
fn live_price(page_data: &Value) -> String {
    descend(page_data, &["paginationContextMap", "nps", "pricing"])
        .map(Value::to_string)
        .unwrap_or_default()
}

/// Two-pass deal tag. The special-price boolean yields a cheap `"Yes"`/`"No"`
/// default; a `SPECIAL_PRICE` entry in the pricing list then overwrites it
/// with that entry's promotional name. The overwrite is unconditional —
/// an empty or missing name still replaces the boolean-derived value.
fn deal_tag(page_data: &Value, psi: &Value) -> Option<String> {
    let mut tag = Some(yes_no(bool_at(psi, &["ppd", "isSpecialPrice"])));
    if let Some(prices) = array_at(page_data, &["pricing", "prices"]) {
        if let Some(special) = prices
            .iter()
            .find(|price| str_at(price, &["priceType"]) == Some("SPECIAL_PRICE"))
        {
            tag = str_at(special, &["name"]).map(str::to_owned);
        }
    }
    tag
}

/// Count of highlight bullets: the first slot whose widget data carries a
/// non-empty `highlights.value.text` array.
fn bullet_points(raw: &Value) -> Option<usize> {
    widget_datas(raw).find_map(|data| {
        let text = array_at(data, &["highlights", "value", "text"])?;
        if text.is_empty() {
            None
        } else {
            Some(text.len())
        }
    })
}

/// Per-star rating counts plus the aggregate, coupled as a unit: a missing
/// or short `individualRatingsCount` array fails all four fields together.
/// With the array present, each bucket lookup still degrades individually.
struct RatingBreakdown {
    one_star: Option<u64>,
    two_star: Option<u64>,
    three_star: Option<u64>,
    total: Option<u64>,
}

fn rating_breakdown(pr: &Value) -> Option<RatingBreakdown> {
    let counts = pr.get("individualRatingsCount")?.as_array()?;
    if counts.len() <= ONE_STAR_IDX {
        return None;
    }
    let bucket = |idx: usize| u64_at(&counts[idx], &["ratingCount"]);
    Some(RatingBreakdown {
        one_star: bucket(ONE_STAR_IDX),
        two_star: bucket(TWO_STAR_IDX),
        three_star: bucket(THREE_STAR_IDX),
        total: u64_at(pr, &["ratingsCount"]),
    })
}

fn has_long_description(raw: &Value) -> bool {
    find_widget_data(raw, |data| {
        data.get("renderableComponents")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .any(|component| {
                str_at(component, &["value", "text"])
                    .is_some_and(|text| text.chars().count() > DESCRIPTION_MIN_CHARS)
            })
    })
    .is_some()
}

fn has_combo_offer(raw: &Value) -> bool {
    any_offer(raw, |offer| {
        str_at(offer, &["action", "tracking", "offerType"]) == Some("Combo Offer")
            || array_at(offer, &["value", "tags"])
                .into_iter()
                .flatten()
                .any(|tag| tag.as_str() == Some("Combo Offer"))
    })
}

fn has_feature_set(raw: &Value) -> bool {
    find_widget_data(raw, |data| data.get("featureSetList").is_some()).is_some()
}

fn has_coupon_offer(raw: &Value) -> bool {
    any_offer(raw, |offer| {
        str_at(offer, &["value", "description"])
            .is_some_and(|description| description.to_lowercase().contains("coupon"))
    })
}

#[cfg(test)]
#[path = "../extract_test.rs"]
mod tests;
