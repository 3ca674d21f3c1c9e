// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Consolidation of range sequences into a minimal disjoint cover.
//!
//! A single forward walk merges every run of ranges that overlap, touch,
//! or sit within `margin` of each other into one covering range. The
//! output is sorted, pairwise disjoint, and covers exactly the union of
//! the inputs (plus any sub-margin gaps that were bridged).

use tidespan_core::{Inclusivity, TimeDelta, TimeRange, TimeRangeError};

/// Merges overlapping or near-adjacent ranges in a pre-sorted sequence.
///
/// `margin` widens the merge test: ranges separated by a gap of at most
/// `margin` are treated as contiguous and merged. A zero margin merges
/// only ranges that genuinely overlap or share a boundary.
///
/// Runs in `O(n)` over input sorted by the `TimeRange` total order.
///
/// # Errors
///
/// Returns [`TimeRangeError::UnsortedInput`] on the first out-of-order
/// pair. Use [`consolidate`] when the input order is unknown.
///
/// # Examples
///
/// ```rust
/// use tidespan_core::{TimeDelta, TimeRange};
/// use tidespan_sweep::consolidate_sorted;
///
/// let ranges = vec![
///     TimeRange::new(
///         "2022-02-13T01:00:00Z".parse().unwrap(),
///         "2022-02-13T02:00:00Z".parse().unwrap(),
///     ),
///     TimeRange::new(
///         "2022-02-13T02:00:00Z".parse().unwrap(),
///         "2022-02-13T03:00:00Z".parse().unwrap(),
///     ),
/// ];
///
/// let merged = consolidate_sorted(&ranges, TimeDelta::zero()).unwrap();
/// assert_eq!(merged.len(), 1);
/// ```
pub fn consolidate_sorted(
    ranges: &[TimeRange],
    margin: TimeDelta,
) -> Result<Vec<TimeRange>, TimeRangeError> {
    let mut out = Vec::with_capacity(ranges.len());
    let mut iter = ranges.iter();
    let Some(&first) = iter.next() else {
        return Ok(out);
    };

    // `block` is the covering hull of the run being accumulated;
    // `previous` tracks raw input order for the sortedness check.
    let mut block = first;
    let mut previous = first;

    for &current in iter {
        if previous > current {
            return Err(TimeRangeError::UnsortedInput {
                operation: "consolidate_sorted",
                alternative: "consolidate",
            });
        }
        previous = current;

        if block.overlaps_within(current, margin, Inclusivity::Inclusive) {
            block = block.hull(current);
        } else {
            out.push(block);
            block = current;
        }
    }
    out.push(block);
    Ok(out)
}

/// Merges overlapping or near-adjacent ranges in arbitrary order.
///
/// Sorts an owned copy and delegates to [`consolidate_sorted`]; `O(n log n)`.
pub fn consolidate(ranges: &[TimeRange], margin: TimeDelta) -> Vec<TimeRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_unstable();
    consolidate_sorted(&sorted, margin).expect("ranges sorted prior to merging")
}
