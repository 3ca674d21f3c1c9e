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

//! Precondition errors shared across the tidespan crates.
//!
//! Every error here is a deterministic function of the inputs and is
//! surfaced synchronously; there is no partial recovery. The caller fixes
//! the input (sorts the list, supplies a positive chunk duration, stays
//! within the instant domain) and retries the whole call.

use chrono::TimeDelta;

/// The error type for tidespan operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeRangeError {
    /// A `*_sorted` entry point received input that is not in
    /// non-decreasing order per the `TimeRange` total order.
    UnsortedInput {
        /// The operation that detected the violation.
        operation: &'static str,
        /// The unsorted convenience wrapper the caller should use instead.
        alternative: &'static str,
    },
    /// A zero or negative duration was passed to a chunked split.
    InvalidChunkDuration {
        /// The rejected duration.
        duration: TimeDelta,
    },
    /// Shifting or moving a range pushed a bound outside the representable
    /// instant domain.
    InstantOutOfRange,
}

impl std::fmt::Display for TimeRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsortedInput {
                operation,
                alternative,
            } => write!(
                f,
                "{operation} expects its input sorted by the TimeRange total order; \
                 sort the ranges first or use {alternative}"
            ),
            Self::InvalidChunkDuration { duration } => {
                write!(f, "chunk duration must be positive, got {duration}")
            }
            Self::InstantOutOfRange => {
                write!(f, "resulting bounds exceed the representable instant range")
            }
        }
    }
}

impl std::error::Error for TimeRangeError {}
