//! Domain-specific assertions for seismoscope harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* pipeline invariant was violated.

use seismo_core::{Event, RowSet};

/// Assert that `output` is an order-preserving subsequence of `input`.
pub fn assert_subsequence(output: &RowSet, input: &RowSet) {
    let mut remaining = input.iter();
    for (i, kept) in output.iter().enumerate() {
        if !remaining.any(|candidate| candidate == kept) {
            panic!(
                "assert_subsequence failed: output[{i}] ({:?} at {}) is missing from the \
                 input or out of order",
                kept.place, kept.occurred_at
            );
        }
    }
}

/// Assert that every event in `rows` satisfies `pred`.
pub fn assert_all(rows: &RowSet, what: &str, pred: impl Fn(&Event) -> bool) {
    let failing: Vec<_> = rows.iter().filter(|e| !pred(e)).collect();
    if !failing.is_empty() {
        panic!(
            "assert_all({what}) failed: {} of {} events did not satisfy it; first: {:?}",
            failing.len(),
            rows.len(),
            failing[0]
        );
    }
}

/// Places of `rows`, in order. Absent places become `"<none>"`.
pub fn places(rows: &RowSet) -> Vec<String> {
    rows.iter()
        .map(|e| e.place.clone().unwrap_or_else(|| "<none>".to_string()))
        .collect()
}
