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

//! Boundary-rule-aware membership and overlap detection.
//!
//! Two ranges overlap when they are equal or when any endpoint of one lies
//! within the other. The [`Inclusivity`] rule decides whether endpoints
//! that exactly touch count: under the default exclusive rule, a range
//! ending at 13:20 does not overlap one starting at 13:20. The
//! margin-tolerant variant notionally expands every endpoint outward
//! before testing, which lets callers merge near-adjacent windows.

use crate::range::{max_timestamp, min_timestamp, TimeRange, Timestamp};
use chrono::TimeDelta;
use smallvec::SmallVec;
use std::cmp::{max, min};

/// Boundary rule for membership and overlap tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Inclusivity {
    /// Endpoints that exactly touch a bound do not count.
    #[default]
    Exclusive,
    /// Endpoints that exactly touch a bound do count.
    Inclusive,
}

/// Adds `delta` to `t`, saturating at the instant domain bounds.
fn saturating_add(t: Timestamp, delta: TimeDelta) -> Timestamp {
    t.checked_add_signed(delta).unwrap_or_else(|| {
        if delta >= TimeDelta::zero() {
            max_timestamp()
        } else {
            min_timestamp()
        }
    })
}

impl TimeRange {
    /// Returns `true` if `instant` falls within the range under `rule`.
    ///
    /// Exclusive: `start < instant < end`. Inclusive:
    /// `start <= instant <= end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidespan_core::{Inclusivity, TimeRange, Timestamp};
    ///
    /// let range = TimeRange::new(
    ///     "2022-02-13T10:00:00Z".parse().unwrap(),
    ///     "2022-02-13T12:00:00Z".parse().unwrap(),
    /// );
    /// let boundary: Timestamp = "2022-02-13T10:00:00Z".parse().unwrap();
    ///
    /// assert!(!range.contains(boundary, Inclusivity::Exclusive));
    /// assert!(range.contains(boundary, Inclusivity::Inclusive));
    /// ```
    #[inline]
    pub fn contains(&self, instant: Timestamp, rule: Inclusivity) -> bool {
        match rule {
            Inclusivity::Exclusive => instant > self.start() && instant < self.end(),
            Inclusivity::Inclusive => instant >= self.start() && instant <= self.end(),
        }
    }

    /// Returns `true` if the ranges overlap under `rule`.
    ///
    /// Equal ranges always overlap; otherwise the test checks whether any
    /// endpoint of one range lies within the other, symmetrically.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidespan_core::{Inclusivity, TimeRange};
    ///
    /// let morning = TimeRange::new(
    ///     "2022-01-10T10:00:00Z".parse().unwrap(),
    ///     "2022-01-10T13:20:00Z".parse().unwrap(),
    /// );
    /// let lunch = TimeRange::new(
    ///     "2022-01-10T13:00:00Z".parse().unwrap(),
    ///     "2022-01-10T13:30:00Z".parse().unwrap(),
    /// );
    /// let afternoon = TimeRange::new(
    ///     "2022-01-10T13:20:00Z".parse().unwrap(),
    ///     "2022-01-10T13:50:00Z".parse().unwrap(),
    /// );
    ///
    /// assert!(morning.overlaps(lunch, Inclusivity::Exclusive));
    /// // Touching endpoints only count under the inclusive rule.
    /// assert!(!morning.overlaps(afternoon, Inclusivity::Exclusive));
    /// assert!(morning.overlaps(afternoon, Inclusivity::Inclusive));
    /// ```
    pub fn overlaps(&self, other: TimeRange, rule: Inclusivity) -> bool {
        *self == other
            || other.contains(self.start(), rule)
            || other.contains(self.end(), rule)
            || self.contains(other.start(), rule)
            || self.contains(other.end(), rule)
    }

    /// Returns `true` if the ranges overlap within a margin of error.
    ///
    /// A zero margin degenerates to [`TimeRange::overlaps`]. Otherwise
    /// every endpoint is expanded outward by `margin` (saturating at the
    /// instant domain bounds) before the symmetric membership tests, so
    /// two ranges separated by less than `margin` are considered
    /// overlapping.
    pub fn overlaps_within(&self, other: TimeRange, margin: TimeDelta, rule: Inclusivity) -> bool {
        if margin == TimeDelta::zero() {
            return self.overlaps(other, rule);
        }
        other.contains(saturating_add(self.start(), -margin), rule)
            || other.contains(saturating_add(self.end(), margin), rule)
            || self.contains(saturating_add(other.start(), -margin), rule)
            || self.contains(saturating_add(other.end(), margin), rule)
    }

    /// Returns the canonical intersection of two ranges.
    ///
    /// `Some([max(starts), min(ends)])` when the ranges overlap under the
    /// exclusive boundary rule, `None` otherwise (including when they
    /// merely touch).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidespan_core::TimeRange;
    ///
    /// let a = TimeRange::new(
    ///     "2022-01-10T10:00:00Z".parse().unwrap(),
    ///     "2022-01-10T13:20:00Z".parse().unwrap(),
    /// );
    /// let b = TimeRange::new(
    ///     "2022-01-10T13:00:00Z".parse().unwrap(),
    ///     "2022-01-10T13:30:00Z".parse().unwrap(),
    /// );
    ///
    /// let overlap = a.overlap(b).unwrap();
    /// assert_eq!(overlap.start(), b.start());
    /// assert_eq!(overlap.end(), a.end());
    /// ```
    pub fn overlap(&self, other: TimeRange) -> Option<TimeRange> {
        if !self.overlaps(other, Inclusivity::Exclusive) {
            return None;
        }
        Some(TimeRange::new(
            max(self.start(), other.start()),
            min(self.end(), other.end()),
        ))
    }

    /// Calculates the remainder of `self` after removing `other`.
    ///
    /// # Returns
    ///
    /// A vector containing:
    /// * 0 ranges: if `other` fully covers `self`.
    /// * 1 range: if `other` clips one side of `self` or does not overlap.
    /// * 2 ranges: if `other` lies strictly inside `self`, splitting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidespan_core::TimeRange;
    ///
    /// let shift = TimeRange::new(
    ///     "2022-01-10T09:00:00Z".parse().unwrap(),
    ///     "2022-01-10T17:00:00Z".parse().unwrap(),
    /// );
    /// let lunch = TimeRange::new(
    ///     "2022-01-10T12:00:00Z".parse().unwrap(),
    ///     "2022-01-10T13:00:00Z".parse().unwrap(),
    /// );
    ///
    /// let remainder = shift.difference(lunch);
    /// assert_eq!(remainder.len(), 2);
    /// assert_eq!(remainder[0].end(), lunch.start());
    /// assert_eq!(remainder[1].start(), lunch.end());
    /// ```
    pub fn difference(&self, other: TimeRange) -> SmallVec<[TimeRange; 2]> {
        if !self.overlaps(other, Inclusivity::Exclusive) {
            return smallvec::smallvec![*self];
        }

        let mut result = SmallVec::new();
        if other.start() > self.start() {
            result.push(TimeRange::new(self.start(), other.start()));
        }
        if other.end() < self.end() {
            result.push(TimeRange::new(other.end(), self.end()));
        }
        result
    }
}
