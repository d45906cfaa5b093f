// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fallible wrappers around `std::alloc` shared by both containers.
//!
//! Allocation failure is reported as [`Error::AllocationFailure`] instead
//! of aborting. Zero-sized layouts (zero-sized element types, or a zero
//! element count) never touch the allocator and are represented by a
//! dangling, well-aligned pointer.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::error::Error;

fn array_layout<A>(cap: usize) -> Result<Layout, Error> {
    Layout::array::<A>(cap).map_err(|_| Error::AllocationFailure)
}

/// Allocate an uninitialised buffer of `cap` elements of `A`.
pub(crate) fn alloc_array<A>(cap: usize) -> Result<NonNull<A>, Error> {
    let layout = array_layout::<A>(cap)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    let ptr = unsafe { alloc::alloc(layout) };
    NonNull::new(ptr.cast()).ok_or(Error::AllocationFailure)
}

/// Resize a buffer previously obtained from [`alloc_array`] with
/// `old_cap` elements to hold `new_cap` elements.
///
/// On failure the old buffer is untouched and remains valid. The first
/// `min(old_cap, new_cap)` elements keep their byte content and offsets.
///
/// # Safety
///
/// `ptr` must have come from `alloc_array::<A>(old_cap)` (or a previous
/// successful `realloc_array` to `old_cap` elements) and must not have
/// been deallocated.
pub(crate) unsafe fn realloc_array<A>(
    ptr: NonNull<A>,
    old_cap: usize,
    new_cap: usize,
) -> Result<NonNull<A>, Error> {
    let old_layout = array_layout::<A>(old_cap)?;
    let new_layout = array_layout::<A>(new_cap)?;
    if new_layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    if old_layout.size() == 0 {
        // Nothing was allocated yet, so this is a fresh allocation.
        let raw = alloc::alloc(new_layout);
        return NonNull::new(raw.cast()).ok_or(Error::AllocationFailure);
    }
    let raw = alloc::realloc(ptr.as_ptr().cast(), old_layout, new_layout.size());
    NonNull::new(raw.cast()).ok_or(Error::AllocationFailure)
}

/// Release a buffer of `cap` elements of `A`.
///
/// # Safety
///
/// `ptr` must have come from `alloc_array::<A>(cap)` (or a successful
/// `realloc_array` to `cap` elements), and must not be used afterwards.
pub(crate) unsafe fn dealloc_array<A>(ptr: NonNull<A>, cap: usize) {
    if let Ok(layout) = array_layout::<A>(cap) {
        if layout.size() != 0 {
            alloc::dealloc(ptr.as_ptr().cast(), layout);
        }
    }
}

/// Move `value` to the heap, reporting failure instead of aborting.
pub(crate) fn try_box<A>(value: A) -> Result<Box<A>, Error> {
    let layout = Layout::new::<A>();
    if layout.size() == 0 {
        // `Box::new` never allocates for zero-sized types.
        return Ok(Box::new(value));
    }
    let ptr = unsafe { alloc::alloc(layout) }.cast::<A>();
    match NonNull::new(ptr) {
        Some(ptr) => unsafe {
            ptr.as_ptr().write(value);
            Ok(Box::from_raw(ptr.as_ptr()))
        },
        None => Err(Error::AllocationFailure),
    }
}
