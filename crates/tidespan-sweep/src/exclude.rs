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

//! Set difference: subtracting exclusion windows from ranges.
//!
//! The single-range form walks the sorted exclusions once with a cursor,
//! emitting each uncovered slice as soon as the exclusion that bounds it
//! is reached. The many-range form consolidates both sides first so the
//! cursor walk never has to look backwards.

use crate::consolidate::{consolidate, consolidate_sorted};
use tidespan_core::{Inclusivity, TimeDelta, TimeRange, TimeRangeError};

/// Subtracts a pre-sorted sequence of exclusions from a single range.
///
/// Yields the sorted, disjoint slices of `range` not covered by any
/// exclusion. Exclusions outside the range are skipped; the walk stops at
/// the first exclusion starting at or after the range's end. Runs in
/// `O(n)` over the exclusions.
///
/// # Errors
///
/// Returns [`TimeRangeError::UnsortedInput`] on the first out-of-order
/// exclusion pair. Use [`exclude`] when the input order is unknown.
///
/// # Examples
///
/// ```rust
/// use tidespan_core::TimeRange;
/// use tidespan_sweep::exclude_sorted;
///
/// let range = TimeRange::new(
///     "2022-02-13T09:00:00Z".parse().unwrap(),
///     "2022-02-13T17:00:00Z".parse().unwrap(),
/// );
/// let lunch = TimeRange::new(
///     "2022-02-13T12:00:00Z".parse().unwrap(),
///     "2022-02-13T13:00:00Z".parse().unwrap(),
/// );
///
/// let free = exclude_sorted(&range, &[lunch]).unwrap();
/// assert_eq!(free.len(), 2);
/// assert_eq!(free[0].end(), lunch.start());
/// assert_eq!(free[1].start(), lunch.end());
/// ```
pub fn exclude_sorted(
    range: &TimeRange,
    sorted_exclusions: &[TimeRange],
) -> Result<Vec<TimeRange>, TimeRangeError> {
    // Covers the zero-length range too, which the trailing guard would drop.
    if sorted_exclusions.is_empty() {
        return Ok(vec![*range]);
    }

    let mut out = Vec::new();
    let mut block_start = range.start();
    let mut last: Option<TimeRange> = None;

    for &exclusion in sorted_exclusions {
        if last.is_some_and(|prev| prev > exclusion) {
            return Err(TimeRangeError::UnsortedInput {
                operation: "exclude_sorted",
                alternative: "exclude",
            });
        }
        last = Some(exclusion);

        // Sorted, so nothing past the range's end can matter.
        if range.end() <= exclusion.start() {
            break;
        }
        if !range.overlaps(exclusion, Inclusivity::Exclusive) {
            continue;
        }

        if exclusion.start() > block_start {
            out.push(TimeRange::new(block_start, exclusion.start()));
            block_start = exclusion.end();
        } else {
            block_start = block_start.max(exclusion.end());
        }
    }

    if block_start < range.end() {
        out.push(TimeRange::new(block_start, range.end()));
    }
    Ok(out)
}

/// Subtracts exclusions in arbitrary order from a single range.
///
/// Consolidates the exclusions (which also sorts them) and delegates to
/// [`exclude_sorted`].
pub fn exclude(range: &TimeRange, exclusions: &[TimeRange]) -> Vec<TimeRange> {
    let merged = consolidate(exclusions, TimeDelta::zero());
    exclude_sorted(range, &merged).expect("consolidated exclusions are sorted")
}

/// Subtracts a pre-sorted sequence of exclusions from a pre-sorted
/// sequence of ranges.
///
/// Both sides are consolidated first, then each consolidated range has
/// the exclusions carved out of it. The output is sorted and disjoint.
///
/// # Errors
///
/// Returns [`TimeRangeError::UnsortedInput`] when either sequence is out
/// of order. Use [`exclude_all`] when the input order is unknown.
pub fn exclude_all_sorted(
    sorted_ranges: &[TimeRange],
    sorted_exclusions: &[TimeRange],
) -> Result<Vec<TimeRange>, TimeRangeError> {
    let ranges = consolidate_sorted(sorted_ranges, TimeDelta::zero())?;
    let exclusions = consolidate_sorted(sorted_exclusions, TimeDelta::zero())?;

    let mut out = Vec::new();
    for range in &ranges {
        out.extend(exclude_sorted(range, &exclusions)?);
    }
    Ok(out)
}

/// Subtracts exclusions in arbitrary order from ranges in arbitrary order.
///
/// Sorts and consolidates both sides, then delegates to
/// [`exclude_all_sorted`].
pub fn exclude_all(ranges: &[TimeRange], exclusions: &[TimeRange]) -> Vec<TimeRange> {
    let ranges = consolidate(ranges, TimeDelta::zero());
    let exclusions = consolidate(exclusions, TimeDelta::zero());
    exclude_all_sorted(&ranges, &exclusions).expect("consolidated inputs are sorted")
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
    fn test_layered_exclusions_leave_the_uncovered_slices() {
        let subject = range("01:00", "21:30");

        // Neighbouring, long-overlapping, nested, and end-overlapping
        // exclusions, plus one entirely before the range.
        let exclusions = vec![
            range("00:00", "01:00"),
            range("02:00", "03:00"),
            range("03:00", "04:00"),
            range("03:30", "09:00"),
            range("05:00", "06:00"),
            range("21:00", "22:00"),
        ];

        assert_eq!(
            exclude_sorted(&subject, &exclusions).unwrap(),
            vec![range("01:00", "02:00"), range("09:00", "21:00")]
        );
    }

    #[test]
    fn test_no_exclusions_returns_the_range() {
        let subject = range("09:00", "17:00");
        assert_eq!(exclude_sorted(&subject, &[]).unwrap(), vec![subject]);
        assert_eq!(exclude(&subject, &[]), vec![subject]);
    }

    #[test]
    fn test_no_exclusions_returns_a_zero_length_range_unchanged() {
        // A zero-length range is a legitimate value, not an absent one.
        let subject = range("10:00", "10:00");
        assert_eq!(exclude_sorted(&subject, &[]).unwrap(), vec![subject]);
        assert_eq!(exclude(&subject, &[]), vec![subject]);
    }

    #[test]
    fn test_exclusion_covering_the_whole_range_leaves_nothing() {
        let subject = range("09:00", "17:00");
        let cover = range("08:00", "18:00");
        assert!(exclude_sorted(&subject, &[cover]).unwrap().is_empty());
    }

    #[test]
    fn test_disjoint_exclusions_are_ignored() {
        let subject = range("09:00", "17:00");
        let before = range("01:00", "02:00");
        let after = range("18:00", "19:00");
        assert_eq!(
            exclude_sorted(&subject, &[before, after]).unwrap(),
            vec![subject]
        );
    }

    #[test]
    fn test_touching_exclusions_do_not_clip() {
        // Half-open: an exclusion ending exactly at the start covers nothing.
        let subject = range("09:00", "17:00");
        let touching = range("08:00", "09:00");
        assert_eq!(exclude_sorted(&subject, &[touching]).unwrap(), vec![subject]);
    }

    #[test]
    fn test_exclusion_slices_and_leftovers_cover_the_range() {
        let subject = range("01:00", "21:30");
        let exclusions = vec![
            range("02:00", "03:00"),
            range("03:30", "09:00"),
            range("21:00", "22:00"),
        ];

        let kept = exclude_sorted(&subject, &exclusions).unwrap();
        let mut reconstructed = kept;
        for &exclusion in &exclusions {
            if let Some(cut) = subject.overlap(exclusion) {
                reconstructed.push(cut);
            }
        }
        assert_eq!(consolidate(&reconstructed, TimeDelta::zero()), vec![subject]);
    }

    #[test]
    fn test_unsorted_exclusions_are_rejected() {
        let subject = range("01:00", "21:30");
        let exclusions = vec![range("05:00", "06:00"), range("02:00", "03:00")];
        assert_eq!(
            exclude_sorted(&subject, &exclusions).err(),
            Some(TimeRangeError::UnsortedInput {
                operation: "exclude_sorted",
                alternative: "exclude",
            })
        );
    }

    #[test]
    fn test_exclude_sorts_and_consolidates_for_the_caller() {
        let subject = range("01:00", "21:30");
        let exclusions = vec![
            range("21:00", "22:00"),
            range("03:30", "09:00"),
            range("02:00", "03:00"),
            range("05:00", "06:00"),
            range("03:00", "04:00"),
            range("00:00", "01:00"),
        ];

        assert_eq!(
            exclude(&subject, &exclusions),
            vec![range("01:00", "02:00"), range("09:00", "21:00")]
        );
    }

    #[test]
    fn test_exclude_all_carves_every_range() {
        let ranges = vec![range("01:00", "21:30")];
        let exclusions = vec![
            range("00:00", "01:00"),
            range("02:00", "03:00"),
            range("03:00", "04:00"),
            range("03:30", "09:00"),
            range("05:00", "06:00"),
            range("21:00", "22:00"),
        ];

        assert_eq!(
            exclude_all_sorted(&ranges, &exclusions).unwrap(),
            vec![range("01:00", "02:00"), range("09:00", "21:00")]
        );
        assert_eq!(
            exclude_all(&ranges, &exclusions),
            vec![range("01:00", "02:00"), range("09:00", "21:00")]
        );
    }

    #[test]
    fn test_exclude_all_handles_multiple_subject_ranges() {
        let ranges = vec![range("09:00", "12:00"), range("13:00", "17:00")];
        let exclusions = vec![range("11:00", "14:00")];

        assert_eq!(
            exclude_all_sorted(&ranges, &exclusions).unwrap(),
            vec![range("09:00", "11:00"), range("14:00", "17:00")]
        );
    }

    #[test]
    fn test_exclude_all_consolidates_overlapping_subjects_first() {
        let ranges = vec![range("09:00", "13:00"), range("12:00", "17:00")];
        let exclusions = vec![range("12:30", "12:45")];

        assert_eq!(
            exclude_all(&ranges, &exclusions),
            vec![range("09:00", "12:30"), range("12:45", "17:00")]
        );
    }

    #[test]
    fn test_exclude_all_with_unsorted_ranges_is_rejected() {
        let ranges = vec![range("13:00", "17:00"), range("09:00", "12:00")];
        assert!(matches!(
            exclude_all_sorted(&ranges, &[]),
            Err(TimeRangeError::UnsortedInput { .. })
        ));
    }
}
