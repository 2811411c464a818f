//! Slot-sequence scanning combinators.
//!
//! A rendered page is an ordered sequence of slots, each wrapping a widget
//! whose `data` shape depends on the widget type. Several extraction rules
//! reduce to "find the first widget data matching a predicate"; they share
//! the iterators here rather than re-walking the tree each with its own
//! shape checks.

use serde_json::Value;

use super::probe::{array_at, descend};

/// Iterates over every slot's `widget.data` object, silently skipping slots
/// that are missing a widget, a data block, or are not objects at all.
pub(crate) fn widget_datas(raw: &Value) -> impl Iterator<Item = &Value> {
    array_at(raw, &["RESPONSE", "slots"])
        .into_iter()
        .flatten()
        .filter_map(|slot| descend(slot, &["widget", "data"]))
        .filter(|data| data.is_object())
}

/// First widget data matching `pred`, scanning slots in page order.
pub(crate) fn find_widget_data<'a, P>(raw: &'a Value, pred: P) -> Option<&'a Value>
where
    P: FnMut(&&Value) -> bool,
{
    widget_datas(raw).find(pred)
}

/// Walks every offer under `offerInfo.value.offerGroups[].offers[]` across
/// all slots, short-circuiting when `pred` matches one.
pub(crate) fn any_offer<P>(raw: &Value, pred: P) -> bool
where
    P: Fn(&Value) -> bool,
{
    widget_datas(raw).any(|data| {
        data.get("offerInfo").is_some_and(|offer_info| {
            array_at(offer_info, &["value", "offerGroups"])
                .into_iter()
                .flatten()
                .flat_map(|group| {
                    group
                        .get("offers")
                        .and_then(Value::as_array)
                        .into_iter()
                        .flatten()
                })
                .any(|offer| pred(offer))
        })
    })
}
