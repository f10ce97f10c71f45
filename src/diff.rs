//! Key-level diff between flat JSON records.
//!
//! The console edits configuration as a flat map of string keys to JSON
//! values and submits only the keys that changed. `object_diff` computes
//! that set: keys present in exactly one record, plus keys present in both
//! whose values are not structurally equal.

use serde_json::{Map, Value};

/// A flat record: string keys mapped to arbitrary JSON values.
pub type Record = Map<String, Value>;

/// Return the keys on which `first` and `second` disagree.
///
/// A key is reported when it exists in only one of the records, or when it
/// exists in both with values that are not deeply equal
/// ([`serde_json::Value`] equality is structural, so nested arrays and
/// objects compare by content). Keys with equal values are never reported,
/// and no key appears twice. Output order is unspecified; callers that need
/// a stable order should sort.
pub fn object_diff(first: &Record, second: &Record) -> Vec<String> {
    // Keys of `second` that are new or carry a changed value.
    let mut diff: Vec<String> = second
        .iter()
        .filter(|(key, value)| first.get(*key) != Some(*value))
        .map(|(key, _)| key.clone())
        .collect();

    // Keys that exist only in `first`.
    diff.extend(
        first
            .keys()
            .filter(|key| !second.contains_key(*key))
            .cloned(),
    );

    diff
}
