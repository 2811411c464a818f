use serde_json::{json, Number, Value};

use super::*;

/// A trimmed but shape-faithful page payload covering every probed path.
fn sample_payload() -> Value {
    json!({
        "RESPONSE": {
            "pageData": {
                "pageContext": {
                    "seo": { "title": "Noise ColorFit Icon 2 Smartwatch" },
                    "trackingDataV2": {
                        "slaText": "Delivery by Tomorrow",
                        "sellerName": "RetailNet",
                        "sellerCount": 4
                    },
                    "fdpEventTracking": {
                        "events": {
                            "psi": {
                                "ppd": { "mrp": 5999, "isSpecialPrice": true },
                                "pls": { "isAvailable": true },
                                "pas": { "imagesCount": 7, "videosCount": 2 }
                            }
                        },
                        "commonContext": {
                            "pr": {
                                "rating": 4.3,
                                "ratingsCount": 1200,
                                "individualRatingsCount": [
                                    { "ratingCount": 700 },
                                    { "ratingCount": 250 },
                                    { "ratingCount": 120 },
                                    { "ratingCount": 80 },
                                    { "ratingCount": 50 }
                                ]
                            }
                        }
                    }
                },
                "pricing": {
                    "prices": [
                        { "priceType": "MRP", "name": "MRP" },
                        { "priceType": "SPECIAL_PRICE", "name": "Deal of the Day" }
                    ]
                },
                "paginationContextMap": {
                    "nps": { "pricing": { "finalPrice": { "value": 1899 } } }
                },
                "swatchInfo": {
                    "mandatorySwatchAttributes": ["color", "strap_size"]
                }
            },
            "slots": [
                {
                    "widget": {
                        "data": {
                            "highlights": {
                                "value": { "text": ["1.8\" display", "Bluetooth calling", "7-day battery"] }
                            }
                        }
                    }
                },
                {
                    "widget": {
                        "data": {
                            "renderableComponents": [
                                { "value": { "text": "short caption" } },
                                { "value": { "text": "A long-winded product description that easily clears the fifty character bar." } }
                            ]
                        }
                    }
                },
                {
                    "widget": {
                        "data": {
                            "offerInfo": {
                                "value": {
                                    "offerGroups": [
                                        {
                                            "offers": [
                                                {
                                                    "action": { "tracking": { "offerType": "Combo Offer" } },
                                                    "value": { "description": "Buy the watch, get a strap free", "tags": [] }
                                                },
                                                {
                                                    "value": { "description": "Extra 5% off with SuperCoupon", "tags": ["Bank Offer"] }
                                                }
                                            ]
                                        }
                                    ]
                                }
                            }
                        }
                    }
                },
                {
                    "widget": {
                        "data": { "featureSetList": [ { "title": "Design" } ] }
                    }
                }
            ]
        }
    })
}

// ---------------------------------------------------------------------------
// Full-payload extraction
// ---------------------------------------------------------------------------

#[test]
fn extracts_every_field_from_a_complete_payload() {
    let record = extract_product_record(&sample_payload(), "FSNWATCH00000001", "400013");

    assert_eq!(record.product_id, "FSNWATCH00000001");
    assert_eq!(record.pincode, "400013");
    assert_eq!(record.title, "Noise ColorFit Icon 2 Smartwatch");
    assert_eq!(record.title_length, 32);
    assert_eq!(record.mrp, Some(Number::from(5999)));
    assert_eq!(record.live_price, r#"{"finalPrice":{"value":1899}}"#);
    assert_eq!(record.availability, "Yes");
    assert_eq!(record.deal_tag.as_deref(), Some("Deal of the Day"));
    assert_eq!(record.bullet_points, Some(3));
    assert_eq!(record.catalog_images, Some(7));
    assert_eq!(record.catalog_videos, 2);
    assert_eq!(record.edd.as_deref(), Some("Delivery by Tomorrow"));
    assert_eq!(record.edd_fresh, None);
    assert_eq!(record.variations, 2);
    assert_eq!(record.one_star_ratings, Some(50));
    assert_eq!(record.two_star_ratings, Some(80));
    assert_eq!(record.three_star_ratings, Some(120));
    assert_eq!(record.total_ratings, Some(1200));
    assert_eq!(record.average_rating, Number::from_f64(4.3));
    assert_eq!(record.sub_category_bsr, None);
    assert_eq!(record.category_bsr, None);
    assert_eq!(record.sold_by.as_deref(), Some("RetailNet"));
    assert_eq!(record.description, "Yes");
    assert_eq!(record.bxgy, "Yes");
    assert_eq!(record.a_plus, "Yes");
    assert_eq!(record.sns, "NA");
    assert_eq!(record.coupon, "Yes");
    assert_eq!(record.other_sellers, Some(3));
}

#[test]
fn extraction_is_idempotent() {
    let payload = sample_payload();
    let first = extract_product_record(&payload, "FSN", "110001");
    let second = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(first, second, "same payload must yield identical records");
}

#[test]
fn record_serializes_to_exactly_28_columns() {
    let record = extract_product_record(&sample_payload(), "FSN", "110001");
    let value = serde_json::to_value(&record).expect("record must serialize");
    let columns = value.as_object().expect("record is a flat mapping");
    assert_eq!(columns.len(), 28);
    for name in [
        "Product ID",
        "Pincode",
        "Title Length",
        "MRP",
        "Live Price",
        "Availability",
        "Deal Tag",
        "Title",
        "Bullet Points",
        "Count of Catalog Images",
        "Videos in Catalog",
        "EDD",
        "EDD_Fresh",
        "Number of Variations",
        "3 Star Ratings",
        "2 Star Ratings",
        "1 Star Ratings",
        "Total Ratings",
        "Ratings",
        "Sub-Category BSR",
        "Category BSR",
        "Sold By",
        "Description",
        "BXGY",
        "A+",
        "SNS",
        "Coupon",
        "Number of Other Sellers",
    ] {
        assert!(columns.contains_key(name), "missing column {name}");
    }
}

// ---------------------------------------------------------------------------
// Degenerate payloads
// ---------------------------------------------------------------------------

#[test]
fn empty_and_null_payloads_fall_back_everywhere() {
    for payload in [json!({}), json!(null), json!([1, 2, 3]), json!("RESPONSE")] {
        let record = extract_product_record(&payload, "FSN", "110001");
        assert_eq!(record.title, "");
        assert_eq!(record.title_length, 0);
        assert_eq!(record.mrp, None);
        assert_eq!(record.live_price, "");
        assert_eq!(record.availability, "No");
        assert_eq!(record.deal_tag.as_deref(), Some("No"));
        assert_eq!(record.bullet_points, None);
        assert_eq!(record.catalog_images, None);
        assert_eq!(record.catalog_videos, 0);
        assert_eq!(record.edd, None);
        assert_eq!(record.variations, 0);
        assert_eq!(record.one_star_ratings, None);
        assert_eq!(record.total_ratings, None);
        assert_eq!(record.average_rating, None);
        assert_eq!(record.sold_by, None);
        assert_eq!(record.description, "No");
        assert_eq!(record.bxgy, "No");
        assert_eq!(record.a_plus, "No");
        assert_eq!(record.coupon, "No");
        assert_eq!(record.other_sellers, None);
    }
}

#[test]
fn missing_page_data_yields_documented_fallbacks() {
    let payload = json!({"RESPONSE": {"slots": []}});
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.title_length, 0);
    assert_eq!(record.availability, "No");
    assert_eq!(record.mrp, None);
}

#[test]
fn zero_slots_leaves_all_scan_flags_at_their_defaults() {
    let payload = json!({"RESPONSE": {"pageData": {}, "slots": []}});
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.description, "No");
    assert_eq!(record.bxgy, "No");
    assert_eq!(record.a_plus, "No");
    assert_eq!(record.coupon, "No");
    assert_eq!(record.bullet_points, None);
}

// ---------------------------------------------------------------------------
// Deal tag
// ---------------------------------------------------------------------------

fn payload_with_prices(is_special: bool, prices: Value) -> Value {
    json!({"RESPONSE": {"pageData": {
        "pageContext": {"fdpEventTracking": {"events": {"psi": {"ppd": {"isSpecialPrice": is_special}}}}},
        "pricing": {"prices": prices}
    }}})
}

#[test]
fn special_price_entry_overrides_the_boolean_default() {
    let payload = payload_with_prices(
        false,
        json!([
            {"priceType": "MRP", "name": "MRP"},
            {"priceType": "SPECIAL_PRICE", "name": "FLASH10"}
        ]),
    );
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(
        record.deal_tag.as_deref(),
        Some("FLASH10"),
        "pricing-list entry must win over the boolean-derived default"
    );
}

#[test]
fn boolean_flag_alone_yields_yes() {
    let payload = payload_with_prices(true, json!([]));
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.deal_tag.as_deref(), Some("Yes"));
}

#[test]
fn special_price_with_empty_name_still_overrides() {
    let payload = payload_with_prices(true, json!([{"priceType": "SPECIAL_PRICE", "name": ""}]));
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(
        record.deal_tag.as_deref(),
        Some(""),
        "override is unconditional, even for an empty name"
    );
}

#[test]
fn special_price_without_name_overrides_with_nothing() {
    let payload = payload_with_prices(true, json!([{"priceType": "SPECIAL_PRICE"}]));
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.deal_tag, None);
}

#[test]
fn first_special_price_entry_wins() {
    let payload = payload_with_prices(
        false,
        json!([
            {"priceType": "SPECIAL_PRICE", "name": "FIRST"},
            {"priceType": "SPECIAL_PRICE", "name": "SECOND"}
        ]),
    );
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.deal_tag.as_deref(), Some("FIRST"));
}

// ---------------------------------------------------------------------------
// Rating quad coupling
// ---------------------------------------------------------------------------

fn payload_with_pr(pr: Value) -> Value {
    json!({"RESPONSE": {"pageData": {"pageContext": {"fdpEventTracking": {"commonContext": {"pr": pr}}}}}})
}

#[test]
fn short_ratings_array_fails_all_four_fields_together() {
    let payload = payload_with_pr(json!({
        "ratingsCount": 900,
        "individualRatingsCount": [
            {"ratingCount": 1}, {"ratingCount": 2}, {"ratingCount": 3}, {"ratingCount": 4}
        ]
    }));
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.one_star_ratings, None);
    assert_eq!(record.two_star_ratings, None);
    assert_eq!(record.three_star_ratings, None);
    assert_eq!(
        record.total_ratings, None,
        "the aggregate is coupled to the per-star buckets"
    );
}

#[test]
fn missing_ratings_array_fails_the_quad_but_not_the_average() {
    let payload = payload_with_pr(json!({"rating": 3.9, "ratingsCount": 500}));
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.total_ratings, None);
    assert_eq!(record.one_star_ratings, None);
    assert_eq!(record.average_rating, Number::from_f64(3.9));
}

#[test]
fn full_ratings_array_degrades_per_bucket() {
    let payload = payload_with_pr(json!({
        "ratingsCount": 100,
        "individualRatingsCount": [
            {"ratingCount": 40}, {"ratingCount": 30}, {"ratingCount": 15},
            {}, {"ratingCount": 5}
        ]
    }));
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.one_star_ratings, Some(5));
    assert_eq!(record.two_star_ratings, None, "bucket without a count");
    assert_eq!(record.three_star_ratings, Some(15));
    assert_eq!(record.total_ratings, Some(100));
}

// ---------------------------------------------------------------------------
// Slot-derived fields
// ---------------------------------------------------------------------------

fn payload_with_slots(slots: Value) -> Value {
    json!({"RESPONSE": {"pageData": {}, "slots": slots}})
}

#[test]
fn bullet_points_counts_entries_of_the_first_matching_slot() {
    let payload = payload_with_slots(json!([
        {"widget": {"data": {"highlights": {"value": {"text": []}}}}},
        {"widget": {"data": {"highlights": {"value": {"text": ["a", "b"]}}}}},
        {"widget": {"data": {"highlights": {"value": {"text": ["c", "d", "e"]}}}}}
    ]));
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(
        record.bullet_points,
        Some(2),
        "empty text arrays are skipped; the first populated one wins"
    );
}

#[test]
fn string_typed_highlights_do_not_count_as_bullets() {
    let payload = payload_with_slots(json!([
        {"widget": {"data": {"highlights": {"value": {"text": "one blob of text"}}}}}
    ]));
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.bullet_points, None);
}

#[test]
fn description_requires_more_than_fifty_chars() {
    let exactly_fifty = "x".repeat(50);
    let payload = payload_with_slots(json!([
        {"widget": {"data": {"renderableComponents": [{"value": {"text": exactly_fifty}}]}}}
    ]));
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.description, "No", "50 chars is not enough");

    let fifty_one = "x".repeat(51);
    let payload = payload_with_slots(json!([
        {"widget": {"data": {"renderableComponents": [{"value": {"text": fifty_one}}]}}}
    ]));
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.description, "Yes");
}

#[test]
fn combo_offer_is_detected_via_tag_list_too() {
    let payload = payload_with_slots(json!([
        {"widget": {"data": {"offerInfo": {"value": {"offerGroups": [
            {"offers": [{"value": {"tags": ["Combo Offer"], "description": "bundle"}}]}
        ]}}}}}
    ]));
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.bxgy, "Yes");
}

#[test]
fn coupon_match_is_case_insensitive() {
    let payload = payload_with_slots(json!([
        {"widget": {"data": {"offerInfo": {"value": {"offerGroups": [
            {"offers": [{"value": {"description": "Apply COUPON at checkout"}}]}
        ]}}}}}
    ]));
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.coupon, "Yes");
}

// ---------------------------------------------------------------------------
// Remaining scalar probes
// ---------------------------------------------------------------------------

#[test]
fn other_sellers_is_seller_count_minus_one() {
    let payload = json!({"RESPONSE": {"pageData": {"pageContext": {"trackingDataV2": {"sellerCount": 1}}}}});
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.other_sellers, Some(0));
}

#[test]
fn string_typed_seller_count_degrades_to_none() {
    let payload = json!({"RESPONSE": {"pageData": {"pageContext": {"trackingDataV2": {"sellerCount": "4"}}}}});
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.other_sellers, None);
}

#[test]
fn videos_default_to_zero_when_images_are_unknown() {
    let payload = json!({"RESPONSE": {"pageData": {"pageContext": {"fdpEventTracking": {"events": {"psi": {"pas": {}}}}}}}});
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.catalog_images, None);
    assert_eq!(record.catalog_videos, 0);
}

#[test]
fn title_length_counts_chars_not_bytes() {
    let payload = json!({"RESPONSE": {"pageData": {"pageContext": {"seo": {"title": "चाय के कप"}}}}});
    let record = extract_product_record(&payload, "FSN", "110001");
    assert_eq!(record.title_length, 9);
}
