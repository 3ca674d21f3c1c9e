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

use crate::error::TimeRangeError;
use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use std::cmp::{max, min, Ordering};

/// An absolute point in time with an associated display offset.
///
/// The offset is presentation metadata only: comparison, equality, and
/// hashing of a `Timestamp` operate strictly on the absolute instant, so
/// `2022-02-13T12:00:00+02:00` and `2022-02-13T10:00:00Z` are equal.
pub type Timestamp = DateTime<FixedOffset>;

/// The lowest representable instant, used to saturate margin expansion.
pub(crate) fn min_timestamp() -> Timestamp {
    DateTime::<Utc>::MIN_UTC.fixed_offset()
}

/// The highest representable instant, used to saturate margin expansion.
pub(crate) fn max_timestamp() -> Timestamp {
    DateTime::<Utc>::MAX_UTC.fixed_offset()
}

/// An immutable interval of time `[start, end]` with `start <= end`.
///
/// `TimeRange` is a plain value type: no identity, no shared mutable
/// state. It is created by construction or as algorithm output, consumed
/// by value, and never mutated in place, which makes it safe to use as a
/// key in associative containers.
///
/// The derived ordering is lexicographic on `(start, end)` and is a total
/// order suitable for sorting collections of ranges; every sorted-sequence
/// algorithm in `tidespan-sweep` relies on it. For comparing a range
/// against a single instant see [`TimeRange::cmp_instant`], which is a
/// membership query and deliberately *not* a sort key.
///
/// # Examples
///
/// ```rust
/// use tidespan_core::{TimeDelta, TimeRange, Timestamp};
///
/// let start: Timestamp = "2022-02-13T10:00:00Z".parse().unwrap();
/// let end: Timestamp = "2022-02-13T12:00:00Z".parse().unwrap();
///
/// let range = TimeRange::new(start, end);
/// assert_eq!(range.start(), start);
/// assert_eq!(range.end(), end);
/// assert_eq!(range.duration(), TimeDelta::hours(2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeRange {
    start: Timestamp,
    end: Timestamp,
}

impl TimeRange {
    /// Creates a new `TimeRange` from two instants.
    ///
    /// The bounds are normalized so that `start <= end` always holds:
    /// reversed arguments are swapped. All downstream algorithms assume
    /// ordered bounds, so this policy is applied uniformly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidespan_core::{TimeRange, Timestamp};
    ///
    /// let earlier: Timestamp = "2022-02-13T10:00:00Z".parse().unwrap();
    /// let later: Timestamp = "2022-02-13T12:00:00Z".parse().unwrap();
    ///
    /// let forward = TimeRange::new(earlier, later);
    /// let reversed = TimeRange::new(later, earlier);
    /// assert_eq!(forward, reversed);
    /// assert_eq!(reversed.start(), earlier);
    /// ```
    #[inline]
    pub fn new(a: Timestamp, b: Timestamp) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Returns the start of the range.
    #[inline]
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Returns the end of the range.
    #[inline]
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Returns the duration of the range (`end - start`).
    ///
    /// Never negative, since construction normalizes the bound order.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(self.start)
    }

    /// Returns `true` if the range has zero length (`start == end`).
    ///
    /// A zero-length range is a legitimate value, distinct from the
    /// absence of a range (which is modeled as `Option<TimeRange>`
    /// throughout this crate).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Compares the range against a single instant.
    ///
    /// Returns `Ordering::Less` if the instant precedes `start`,
    /// `Ordering::Greater` if it follows `end`, and `Ordering::Equal` if
    /// it lies within the bounds (inclusive). Every instant inside the
    /// range is treated as "equal" to it, so this is a point-membership
    /// query, **not** a total order — never use it for sorting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use tidespan_core::{TimeRange, Timestamp};
    ///
    /// let range = TimeRange::new(
    ///     "2022-02-13T10:00:00Z".parse().unwrap(),
    ///     "2022-02-13T12:00:00Z".parse().unwrap(),
    /// );
    /// let before: Timestamp = "2022-02-13T09:00:00Z".parse().unwrap();
    /// let within: Timestamp = "2022-02-13T11:00:00Z".parse().unwrap();
    /// let after: Timestamp = "2022-02-13T13:00:00Z".parse().unwrap();
    ///
    /// assert_eq!(range.cmp_instant(before), Ordering::Less);
    /// assert_eq!(range.cmp_instant(within), Ordering::Equal);
    /// assert_eq!(range.cmp_instant(after), Ordering::Greater);
    /// ```
    #[inline]
    pub fn cmp_instant(&self, instant: Timestamp) -> Ordering {
        if instant < self.start {
            Ordering::Less
        } else if instant > self.end {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Translates both bounds by `delta`, which may be negative.
    ///
    /// # Errors
    ///
    /// Returns [`TimeRangeError::InstantOutOfRange`] if a shifted bound
    /// would leave the representable instant domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidespan_core::{TimeDelta, TimeRange, Timestamp};
    ///
    /// let range = TimeRange::new(
    ///     "2022-02-13T10:00:00Z".parse().unwrap(),
    ///     "2022-02-13T12:00:00Z".parse().unwrap(),
    /// );
    /// let shifted = range.shift(TimeDelta::hours(1)).unwrap();
    /// assert_eq!(shifted.start(), "2022-02-13T11:00:00Z".parse::<Timestamp>().unwrap());
    /// assert_eq!(shifted.duration(), range.duration());
    /// ```
    pub fn shift(&self, delta: TimeDelta) -> Result<Self, TimeRangeError> {
        let start = self
            .start
            .checked_add_signed(delta)
            .ok_or(TimeRangeError::InstantOutOfRange)?;
        let end = self
            .end
            .checked_add_signed(delta)
            .ok_or(TimeRangeError::InstantOutOfRange)?;
        Ok(Self::new(start, end))
    }

    /// Repositions the range to start at `new_start`, keeping its duration.
    ///
    /// # Errors
    ///
    /// Returns [`TimeRangeError::InstantOutOfRange`] if the repositioned
    /// end would leave the representable instant domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidespan_core::{TimeRange, Timestamp};
    ///
    /// let range = TimeRange::new(
    ///     "2022-02-13T10:00:00Z".parse().unwrap(),
    ///     "2022-02-13T12:00:00Z".parse().unwrap(),
    /// );
    /// let new_start: Timestamp = "2022-02-14T08:00:00Z".parse().unwrap();
    ///
    /// let moved = range.move_to(new_start).unwrap();
    /// assert_eq!(moved.start(), new_start);
    /// assert_eq!(moved.duration(), range.duration());
    /// ```
    pub fn move_to(&self, new_start: Timestamp) -> Result<Self, TimeRangeError> {
        let end = new_start
            .checked_add_signed(self.duration())
            .ok_or(TimeRangeError::InstantOutOfRange)?;
        Ok(Self::new(new_start, end))
    }

    /// Coerces both bounds into `[lo, hi]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidespan_core::{TimeRange, Timestamp};
    ///
    /// let range = TimeRange::new(
    ///     "2022-02-13T08:00:00Z".parse().unwrap(),
    ///     "2022-02-13T20:00:00Z".parse().unwrap(),
    /// );
    /// let lo: Timestamp = "2022-02-13T09:00:00Z".parse().unwrap();
    /// let hi: Timestamp = "2022-02-13T17:00:00Z".parse().unwrap();
    ///
    /// let clamped = TimeRange::clamp(&range, lo, hi);
    /// assert_eq!(clamped, TimeRange::new(lo, hi));
    /// ```
    #[inline]
    pub fn clamp(&self, lo: Timestamp, hi: Timestamp) -> Self {
        Self::new(max(lo, self.start), min(hi, self.end))
    }

    /// Coerces both bounds into the bounds of `limits`.
    #[inline]
    pub fn clamp_to(&self, limits: TimeRange) -> Self {
        self.clamp(limits.start, limits.end)
    }

    /// Returns the smallest range covering both `self` and `other`.
    ///
    /// Unlike an overlap-aware union, the hull is always defined: for
    /// disjoint ranges it also covers the gap between them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidespan_core::TimeRange;
    ///
    /// let morning = TimeRange::new(
    ///     "2022-02-13T09:00:00Z".parse().unwrap(),
    ///     "2022-02-13T11:00:00Z".parse().unwrap(),
    /// );
    /// let afternoon = TimeRange::new(
    ///     "2022-02-13T14:00:00Z".parse().unwrap(),
    ///     "2022-02-13T16:00:00Z".parse().unwrap(),
    /// );
    ///
    /// let hull = morning.hull(afternoon);
    /// assert_eq!(hull.start(), morning.start());
    /// assert_eq!(hull.end(), afternoon.end());
    /// ```
    #[inline]
    pub fn hull(&self, other: TimeRange) -> Self {
        Self {
            start: min(self.start, other.start),
            end: max(self.end, other.end),
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
