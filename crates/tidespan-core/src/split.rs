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

//! Partitioning a range into equal parts or fixed-duration chunks.
//!
//! Both operations are lazy iterators over a captured range: pure
//! functions of their inputs, restartable by calling the entry point
//! again, with no retained state between invocations.

use crate::error::TimeRangeError;
use crate::range::{TimeRange, Timestamp};
use chrono::TimeDelta;
use std::iter::FusedIterator;

impl TimeRange {
    /// Splits the range into `parts` contiguous segments of equal duration.
    ///
    /// `parts <= 1` yields the range itself. The unit duration is computed
    /// by exact division of the underlying tick representation rather than
    /// repeated subtraction, so rounding error does not compound; any
    /// remainder ticks are absorbed by the last segment, so the union of
    /// the segments reconstructs the range exactly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidespan_core::{TimeDelta, TimeRange};
    ///
    /// let range = TimeRange::new(
    ///     "2022-01-10T10:00:00Z".parse().unwrap(),
    ///     "2022-01-10T12:00:00Z".parse().unwrap(),
    /// );
    ///
    /// let parts: Vec<_> = range.split_into_parts(4).collect();
    /// assert_eq!(parts.len(), 4);
    /// assert_eq!(parts[0].duration(), TimeDelta::minutes(30));
    /// assert_eq!(parts[0].start(), range.start());
    /// assert_eq!(parts[3].end(), range.end());
    /// ```
    pub fn split_into_parts(&self, parts: i32) -> Parts {
        let total = parts.max(1);
        let unit = if total == 1 {
            self.duration()
        } else {
            self.duration() / total
        };
        Parts {
            range: *self,
            unit,
            total,
            index: 0,
        }
    }

    /// Splits the range into chunks of `chunk` duration.
    ///
    /// Walks greedily from `start` in steps of `chunk`, yielding full
    /// chunks; the final chunk is clamped to `end` when a full step would
    /// overshoot it. An empty range yields no chunks.
    ///
    /// # Errors
    ///
    /// Returns [`TimeRangeError::InvalidChunkDuration`] if `chunk` is zero
    /// or negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidespan_core::{TimeDelta, TimeRange};
    ///
    /// let range = TimeRange::new(
    ///     "2022-01-10T10:00:00Z".parse().unwrap(),
    ///     "2022-01-10T11:15:00Z".parse().unwrap(),
    /// );
    ///
    /// let chunks: Vec<_> = range.split_into_chunks(TimeDelta::minutes(30)).unwrap().collect();
    /// assert_eq!(chunks.len(), 3);
    /// assert_eq!(chunks[2].duration(), TimeDelta::minutes(15));
    /// assert_eq!(chunks[2].end(), range.end());
    /// ```
    pub fn split_into_chunks(&self, chunk: TimeDelta) -> Result<Chunks, TimeRangeError> {
        if chunk <= TimeDelta::zero() {
            return Err(TimeRangeError::InvalidChunkDuration { duration: chunk });
        }
        Ok(Chunks {
            cursor: self.start(),
            end: self.end(),
            chunk,
        })
    }
}

/// An iterator over the equal-duration segments of a range.
///
/// Created by [`TimeRange::split_into_parts`]. The last segment absorbs
/// any remainder ticks, ending exactly at the range's end.
#[derive(Clone, Debug)]
pub struct Parts {
    range: TimeRange,
    unit: TimeDelta,
    total: i32,
    index: i32,
}

impl Iterator for Parts {
    type Item = TimeRange;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.total {
            return None;
        }
        let start = self.range.start() + self.unit * self.index;
        let end = if self.index == self.total - 1 {
            self.range.end()
        } else {
            start + self.unit
        };
        self.index += 1;
        Some(TimeRange::new(start, end))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Parts {}
impl FusedIterator for Parts {}

/// An iterator over the fixed-duration chunks of a range.
///
/// Created by [`TimeRange::split_into_chunks`]. The final chunk is
/// clamped to the range's end.
#[derive(Clone, Debug)]
pub struct Chunks {
    cursor: Timestamp,
    end: Timestamp,
    chunk: TimeDelta,
}

impl Iterator for Chunks {
    type Item = TimeRange;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.end {
            return None;
        }
        // A step past the representable instant domain is an overshoot too.
        let step_end = match self.cursor.checked_add_signed(self.chunk) {
            Some(t) if t < self.end => t,
            _ => self.end,
        };
        let piece = TimeRange::new(self.cursor, step_end);
        self.cursor = step_end;
        Some(piece)
    }
}

impl FusedIterator for Chunks {}
