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

//! Merge-join intersection of two sorted range sequences.
//!
//! A classic two-pointer sweep: hold one range from each side, emit their
//! intersection when it is non-empty, then advance whichever side ends
//! first. Each side is traversed exactly once.

use crate::consolidate::{consolidate, consolidate_sorted};
use tidespan_core::{TimeDelta, TimeRange, TimeRangeError};

/// Computes the intersection of two pre-sorted range sequences.
///
/// Returns the sorted, disjoint cover of all instants present in both
/// sequences. Touching intersection pieces produced by abutting input
/// ranges are merged before returning. Runs in `O(n + m)`.
///
/// # Errors
///
/// Returns [`TimeRangeError::UnsortedInput`] when either sequence is out
/// of order. Use [`overlapping`] when the input order is unknown.
///
/// # Examples
///
/// ```rust
/// use tidespan_core::TimeRange;
/// use tidespan_sweep::overlap_of_sorted;
///
/// let staff = vec![TimeRange::new(
///     "2022-02-13T09:00:00Z".parse().unwrap(),
///     "2022-02-13T17:00:00Z".parse().unwrap(),
/// )];
/// let room = vec![TimeRange::new(
///     "2022-02-13T14:00:00Z".parse().unwrap(),
///     "2022-02-13T20:00:00Z".parse().unwrap(),
/// )];
///
/// let both = overlap_of_sorted(&staff, &room).unwrap();
/// assert_eq!(both.len(), 1);
/// assert_eq!(both[0].start(), room[0].start());
/// assert_eq!(both[0].end(), staff[0].end());
/// ```
pub fn overlap_of_sorted(
    sorted_a: &[TimeRange],
    sorted_b: &[TimeRange],
) -> Result<Vec<TimeRange>, TimeRangeError> {
    if sorted_a.is_empty() || sorted_b.is_empty() {
        return Ok(Vec::new());
    }

    let mut hits = Vec::new();
    let mut index_a = 1;
    let mut index_b = 1;
    let mut current_a = sorted_a[0];
    let mut current_b = sorted_b[0];

    loop {
        if let Some(overlap) = current_a.overlap(current_b) {
            hits.push(overlap);
        }

        // Advance whichever side ends first; the other may still overlap
        // the next range on the advanced side.
        if current_a.end() >= current_b.end() {
            let Some(&next) = sorted_b.get(index_b) else {
                break;
            };
            if current_b > next {
                return Err(TimeRangeError::UnsortedInput {
                    operation: "overlap_of_sorted",
                    alternative: "overlapping",
                });
            }
            current_b = next;
            index_b += 1;
        } else {
            let Some(&next) = sorted_a.get(index_a) else {
                break;
            };
            if current_a > next {
                return Err(TimeRangeError::UnsortedInput {
                    operation: "overlap_of_sorted",
                    alternative: "overlapping",
                });
            }
            current_a = next;
            index_a += 1;
        }
    }

    consolidate_sorted(&hits, TimeDelta::zero())
}

/// Computes the intersection of two range sequences in arbitrary order.
///
/// Consolidates both sides (which also sorts them) and delegates to
/// [`overlap_of_sorted`].
pub fn overlapping(ranges_a: &[TimeRange], ranges_b: &[TimeRange]) -> Vec<TimeRange> {
    let a = consolidate(ranges_a, TimeDelta::zero());
    let b = consolidate(ranges_b, TimeDelta::zero());
    overlap_of_sorted(&a, &b).expect("consolidated inputs are sorted")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidespan_core::Timestamp;

    fn at(hm: &str) -> Timestamp {
        format!("2022-02-13T{hm}:00Z")
            .parse()
            .expect("test timestamp must parse")
    }

    fn range(start: &str, end: &str) -> TimeRange {
        TimeRange::new(at(start), at(end))
    }

    #[test]
    fn test_partial_overlap_yields_the_shared_window() {
        let a = vec![range("09:00", "17:00")];
        let b = vec![range("14:00", "20:00")];
        assert_eq!(
            overlap_of_sorted(&a, &b).unwrap(),
            vec![range("14:00", "17:00")]
        );
    }

    #[test]
    fn test_disjoint_sequences_yield_nothing() {
        let a = vec![range("09:00", "10:00")];
        let b = vec![range("11:00", "12:00")];
        assert!(overlap_of_sorted(&a, &b).unwrap().is_empty());
    }

    #[test]
    fn test_touching_ranges_yield_nothing() {
        // Half-open: sharing a boundary instant is not a shared window.
        let a = vec![range("09:00", "12:00")];
        let b = vec![range("12:00", "15:00")];
        assert!(overlap_of_sorted(&a, &b).unwrap().is_empty());
    }

    #[test]
    fn test_abutting_pieces_are_merged() {
        let a = vec![range("01:00", "08:00")];
        let b = vec![range("00:00", "04:00"), range("04:00", "08:00")];
        assert_eq!(
            overlap_of_sorted(&a, &b).unwrap(),
            vec![range("01:00", "08:00")]
        );
    }

    #[test]
    fn test_one_range_spanning_many() {
        let a = vec![range("00:00", "23:00")];
        let b = vec![
            range("01:00", "02:00"),
            range("05:00", "06:00"),
            range("22:00", "23:30"),
        ];
        assert_eq!(
            overlap_of_sorted(&a, &b).unwrap(),
            vec![
                range("01:00", "02:00"),
                range("05:00", "06:00"),
                range("22:00", "23:00"),
            ]
        );
    }

    #[test]
    fn test_empty_sides_yield_nothing() {
        let a = vec![range("09:00", "17:00")];
        assert!(overlap_of_sorted(&a, &[]).unwrap().is_empty());
        assert!(overlap_of_sorted(&[], &a).unwrap().is_empty());
        assert!(overlap_of_sorted(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_unsorted_input_is_rejected_on_either_side() {
        // The spanning range forces the sweep to advance the unsorted side.
        let spanning = vec![range("00:00", "23:00")];
        let unsorted = vec![range("05:00", "06:00"), range("01:00", "02:00")];

        assert_eq!(
            overlap_of_sorted(&unsorted, &spanning).err(),
            Some(TimeRangeError::UnsortedInput {
                operation: "overlap_of_sorted",
                alternative: "overlapping",
            })
        );
        assert!(overlap_of_sorted(&spanning, &unsorted).is_err());
    }

    #[test]
    fn test_overlapping_accepts_arbitrary_order() {
        let a = vec![range("14:00", "20:00"), range("01:00", "03:00")];
        let b = vec![range("02:00", "16:00")];

        assert_eq!(
            overlapping(&a, &b),
            vec![range("02:00", "03:00"), range("14:00", "16:00")]
        );
    }

    #[test]
    fn test_overlapping_is_symmetric() {
        let a = vec![range("01:00", "08:00"), range("10:00", "12:00")];
        let b = vec![range("04:00", "11:00")];
        assert_eq!(overlapping(&a, &b), overlapping(&b, &a));
    }
}
