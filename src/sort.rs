//! Comparator factory for sortable tables.
//!
//! Rows expose their columns through [`SortableRow`]. The comparator handles
//! columns of mixed types with a fixed policy:
//!
//! - nulls sort after every non-null value in both directions;
//! - arrays, objects and other unsupported values compare equal, so sorting
//!   such a column leaves the rows where they were;
//! - numbers compare numerically, strings compare ignoring accents and case
//!   first, and timestamp columns compare by instant;
//! - any other pairing (number vs string, say) compares equal.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::text_match::normalize_nfc;
use crate::traits::SortableRow;

/// Columns holding timestamps rather than free text.
static TIMESTAMP_KEYS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["created_at", "updated_at", "createdAt", "updatedAt"]));

/// Sort direction.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// A column value as seen by the comparator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Null,
    Number(f64),
    Text(&'a str),
    /// Arrays, objects, booleans and missing columns.
    Unsupported,
}

impl<'a> From<Option<&'a Value>> for SortValue<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::Null) => SortValue::Null,
            Some(Value::Number(n)) => n.as_f64().map_or(SortValue::Unsupported, SortValue::Number),
            Some(Value::String(s)) => SortValue::Text(s),
            _ => SortValue::Unsupported,
        }
    }
}

impl SortableRow for Value {
    fn sort_value(&self, key: &str) -> SortValue<'_> {
        SortValue::from(self.get(key))
    }
}

impl SortableRow for serde_json::Map<String, Value> {
    fn sort_value(&self, key: &str) -> SortValue<'_> {
        SortValue::from(self.get(key))
    }
}

/// Whether `key` names a timestamp column.
pub fn is_timestamp_key(key: &str) -> bool {
    TIMESTAMP_KEYS.contains(key)
}

/// Build the comparator for column `order_by` in direction `order`.
///
/// The ordering is not total: unsupported and mixed-type pairs compare
/// equal to everything. Do not hand it to `slice::sort_by`, which may panic
/// on such comparators; use [`sort_rows`] instead.
pub fn get_comparator<R>(order: SortOrder, order_by: &str) -> impl Fn(&R, &R) -> Ordering
where
    R: SortableRow + ?Sized,
{
    let timestamps = is_timestamp_key(order_by);
    move |a: &R, b: &R| {
        compare_values(
            order,
            timestamps,
            a.sort_value(order_by),
            b.sort_value(order_by),
        )
    }
}

/// Stable-sort `rows` in place by column `order_by`.
///
/// Uses a merge sort that tolerates the comparator's inconsistencies
/// across value kinds; it always terminates with a permutation of `rows`.
pub fn sort_rows<R: SortableRow>(rows: &mut [R], order: SortOrder, order_by: &str) {
    let cmp = get_comparator::<R>(order, order_by);
    let permutation = merge_sort_indices(rows.len(), |i, j| cmp(&rows[i], &rows[j]));
    apply_permutation(rows, &permutation);
}

/// Stable bottom-up merge sort over the indices `0..len`.
fn merge_sort_indices<F>(len: usize, cmp: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> Ordering,
{
    let mut current: Vec<usize> = (0..len).collect();
    let mut buffer: Vec<usize> = Vec::with_capacity(len);
    let mut width = 1;

    while width < len {
        buffer.clear();
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);
            while left < mid && right < end {
                // take from the right only when strictly smaller, for stability
                if cmp(current[left], current[right]) == Ordering::Greater {
                    buffer.push(current[right]);
                    right += 1;
                } else {
                    buffer.push(current[left]);
                    left += 1;
                }
            }
            buffer.extend_from_slice(&current[left..mid]);
            buffer.extend_from_slice(&current[right..end]);
        }
        std::mem::swap(&mut current, &mut buffer);
        width *= 2;
    }
    current
}

/// Reorder `rows` so that position `i` holds the row previously at
/// `permutation[i]`.
fn apply_permutation<R>(rows: &mut [R], permutation: &[usize]) {
    for i in 0..permutation.len() {
        let mut source = permutation[i];
        // rows before `i` are already placed; follow where the wanted one went
        while source < i {
            source = permutation[source];
        }
        rows.swap(i, source);
    }
}

fn compare_values(
    order: SortOrder,
    timestamps: bool,
    a: SortValue<'_>,
    b: SortValue<'_>,
) -> Ordering {
    use SortValue::*;

    match (a, b) {
        (Null, Null) => Ordering::Equal,
        (Null, _) => Ordering::Greater,
        (_, Null) => Ordering::Less,
        (Unsupported, _) | (_, Unsupported) => Ordering::Equal,
        (Number(x), Number(y)) => order.apply(x.partial_cmp(&y).unwrap_or(Ordering::Equal)),
        (Text(x), Text(y)) if timestamps => match (parse_timestamp(x), parse_timestamp(y)) {
            (Some(x), Some(y)) => order.apply(x.cmp(&y)),
            // an unparseable side has no instant to compare
            _ => Ordering::Equal,
        },
        (Text(x), Text(y)) => order.apply(locale_compare(x, y)),
        _ => Ordering::Equal,
    }
}

/// Collation-style string comparison.
///
/// Letters compare without accents or case first (`é` sorts with `e`), then
/// with accents, and on a remaining tie lowercase sorts before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let a = normalize_nfc(a);
    let b = normalize_nfc(b);
    base_letters(&a)
        .cmp(&base_letters(&b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(&a))
}

/// Lowercase `s` with combining marks stripped after decomposition.
fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Parse a calendar timestamp as the API emits them.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS[.f]` and `YYYY-MM-DD HH:MM:SS`
/// (both read as UTC) and a bare `YYYY-MM-DD` (UTC midnight).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
