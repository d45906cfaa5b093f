// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// The error type shared by the fallible operations on
/// [`List`][crate::List] and [`Stack`][crate::Stack].
///
/// Every operation that can fail reports a specific kind; no operation
/// leaves a container partially mutated on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation needs at least one element, but the collection is
    /// empty.
    #[error("operation requires a non-empty collection")]
    EmptyCollection,

    /// The requested position lies outside the collection's occupied
    /// range.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The position that was asked for.
        index: usize,
        /// The number of elements the collection held at the time.
        len: usize,
    },

    /// The global allocator could not provide the requested memory.
    #[error("memory allocation failed")]
    AllocationFailure,
}
