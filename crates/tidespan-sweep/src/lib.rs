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

//! # Tidespan Sweep
//!
//! Linear-time sweep algorithms over sequences of [`TimeRange`] values.
//! Where `tidespan-core` operates on one or two ranges at a time, this
//! crate walks whole sorted sequences in a single pass.
//!
//! ## Modules
//!
//! - `consolidate`: Merging overlapping or near-adjacent ranges into a
//!   minimal disjoint cover.
//! - `exclude`: Subtracting exclusion windows from ranges, yielding the
//!   uncovered remainder.
//! - `join`: Merge-join intersection of two sorted sequences.
//!
//! ## Sorted and unsorted entry points
//!
//! Every algorithm comes in two flavors. The `*_sorted` form takes input
//! already ordered by the `TimeRange` total order, runs in `O(n)`, and
//! fails with [`TimeRangeError::UnsortedInput`] when the order is
//! violated. The plain form accepts arbitrary order, sorts an owned copy
//! in `O(n log n)`, and cannot fail on ordering. Callers that maintain
//! sorted sequences anyway (timetables, appointment books) should use the
//! `*_sorted` form and skip the copy.
//!
//! [`TimeRange`]: tidespan_core::TimeRange
//! [`TimeRangeError::UnsortedInput`]: tidespan_core::TimeRangeError

pub mod consolidate;
pub mod exclude;
pub mod join;

pub use consolidate::{consolidate, consolidate_sorted};
pub use exclude::{exclude, exclude_all, exclude_all_sorted, exclude_sorted};
pub use join::{overlap_of_sorted, overlapping};
