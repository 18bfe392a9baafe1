//! Pair-sum search over a sorted working copy.
//!
//! The input is copied and sorted ascending. For every position `i` except
//! the last, the complement `target - values[i]` is looked up by binary search
//! among the elements after `i`. Each position that finds a complement
//! produces one [`PairResult`], so repeated values can yield repeated pairs.

use crate::domain::model::{PairResult, SearchBound};

/// Binary search for `needle` in `sorted[from..to]`.
///
/// `to` is exclusive. Empty or inverted ranges, and ranges reaching past the
/// end of the slice, are clamped and never index out of bounds.
pub fn contains_in_range(sorted: &[i64], from: usize, to: usize, needle: i64) -> bool {
    let (mut lo, mut hi) = (from, to.min(sorted.len()));

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match sorted[mid].cmp(&needle) {
            std::cmp::Ordering::Equal => return true,
            std::cmp::Ordering::Greater => hi = mid,
            std::cmp::Ordering::Less => lo = mid + 1,
        }
    }
    false
}

pub fn find_pairs(values: &[i64], target: i64) -> Vec<PairResult> {
    find_pairs_with(values, target, SearchBound::default())
}

pub fn find_pairs_with(values: &[i64], target: i64, bound: SearchBound) -> Vec<PairResult> {
    if values.len() < 2 {
        return Vec::new();
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let upper = match bound {
        SearchBound::Inclusive => sorted.len(),
        SearchBound::ExcludeLast => sorted.len() - 1,
    };

    let mut pairs = Vec::new();
    for i in 0..sorted.len() - 1 {
        let value = sorted[i];
        let Some(complement) = target.checked_sub(value) else {
            continue;
        };
        if contains_in_range(&sorted, i + 1, upper, complement) {
            pairs.push(PairResult { value, complement });
        }
    }
    pairs
}
