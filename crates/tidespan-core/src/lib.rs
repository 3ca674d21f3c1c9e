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

//! # Tidespan Core
//!
//! The interval value type and pairwise operations underpinning the tidespan
//! time algebra. Callers that reason about scheduling windows, availability,
//! and calendar coverage build on the primitives in this crate; the
//! sorted-sequence algorithms (consolidation, set difference, merge-join
//! intersection) live in `tidespan-sweep`.
//!
//! ## Modules
//!
//! - `range`: The immutable [`TimeRange`] value type with auto-swap
//!   construction, a lexicographic `(start, end)` total order, point
//!   comparison, and the shift / clamp / move-to transformations.
//! - `overlap`: Boundary-rule-aware membership and overlap predicates,
//!   margin-tolerant overlap testing, canonical intersection, and
//!   single-pair difference.
//! - `split`: Lazy partitioning of a range into `n` equal parts or into
//!   fixed-duration chunks.
//! - `error`: The shared [`TimeRangeError`] type for precondition
//!   violations.
//!
//! ## Purpose
//!
//! Instants are absolute points in time (`chrono::DateTime<FixedOffset>`);
//! the carried offset is display metadata only and never participates in
//! comparison or equality. All values are `Copy`, all operations are pure,
//! and "no result" is always an explicit `Option` rather than a sentinel
//! value, so a legitimate zero-length range is never ambiguous.

pub mod error;
pub mod overlap;
pub mod range;
pub mod split;

pub use chrono::TimeDelta;
pub use error::TimeRangeError;
pub use overlap::Inclusivity;
pub use range::{TimeRange, Timestamp};
pub use split::{Chunks, Parts};
