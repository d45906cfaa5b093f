// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};
use std::slice;

use crate::alloc::{alloc_array, dealloc_array, realloc_array};
use crate::error::Error;

/// A bounded stack backed by one contiguous buffer, growable only on
/// request.
///
/// The buffer is allocated up front for `capacity` elements and a cursor
/// tracks the occupied prefix. [`push`][Stack::push] never reallocates:
/// when the stack is full it hands the value back and the caller decides
/// whether to [`grow`][Stack::grow] and retry. [`grow`][Stack::grow]
/// reallocates, preserving every stored element and the cursor; there is
/// no shrink operation, and the buffer is released as one unit when the
/// stack is dropped.
///
/// Growing invalidates all element borrows into the old buffer, which
/// the borrow checker enforces for free.
///
/// # Example
///
/// ```rust
/// # use linkstack::Stack;
/// # fn main() -> Result<(), linkstack::Error> {
/// let mut stack: Stack<u32> = Stack::new(2)?;
/// stack.push(200).unwrap();
/// stack.push(200).unwrap();
/// assert_eq!(2, stack.len());
/// assert_eq!(Ok(&200), stack.top());
///
/// // Full: the value comes back and nothing changes.
/// assert_eq!(Err(300), stack.push(300));
/// assert_eq!(2, stack.len());
///
/// stack.grow(1)?;
/// stack.push(300).unwrap();
/// assert_eq!(3, stack.len());
/// # Ok(())
/// # }
/// ```
pub struct Stack<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    marker: PhantomData<T>,
}

// The stack is a plain single-owner buffer, so it is as thread-portable
// as the elements it holds, same as `Vec`.
unsafe impl<T: Send> Send for Stack<T> {}
unsafe impl<T: Sync> Sync for Stack<T> {}

impl<T> Stack<T> {
    /// Construct a stack with room for `capacity` elements, allocating
    /// the whole buffer up front.
    ///
    /// Fails with [`Error::AllocationFailure`] if the buffer cannot be
    /// allocated. A zero capacity (or a zero-sized element type) does
    /// not allocate at all.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            ptr: alloc_array(capacity)?,
            cap: capacity,
            len: 0,
            marker: PhantomData,
        })
    }

    /// The number of elements currently on the stack. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of elements the buffer can hold before
    /// [`grow`][Stack::grow] is needed.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Test whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Test whether a push would be rejected.
    pub fn is_full(&self) -> bool {
        self.len == self.cap
    }

    /// Push `value` onto the top of the stack.
    ///
    /// When the stack is full the value is handed back as `Err(value)`
    /// and the stack is left untouched; the caller may
    /// [`grow`][Stack::grow] and push again.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.len == self.cap {
            return Err(value);
        }
        unsafe { ptr::write(self.ptr.as_ptr().add(self.len), value) };
        self.len += 1;
        Ok(())
    }

    /// Pop the top element off the stack and return it.
    ///
    /// Fails with [`Error::EmptyCollection`] if the stack is empty,
    /// leaving it unchanged.
    pub fn pop(&mut self) -> Result<T, Error> {
        if self.len == 0 {
            return Err(Error::EmptyCollection);
        }
        self.len -= 1;
        Ok(unsafe { ptr::read(self.ptr.as_ptr().add(self.len)) })
    }

    /// Borrow the most recently pushed element.
    ///
    /// Fails with [`Error::EmptyCollection`] if the stack is empty.
    pub fn top(&self) -> Result<&T, Error> {
        if self.len == 0 {
            return Err(Error::EmptyCollection);
        }
        Ok(unsafe { &*self.ptr.as_ptr().add(self.len - 1) })
    }

    /// Mutably borrow the most recently pushed element.
    ///
    /// Fails with [`Error::EmptyCollection`] if the stack is empty.
    pub fn top_mut(&mut self) -> Result<&mut T, Error> {
        if self.len == 0 {
            return Err(Error::EmptyCollection);
        }
        Ok(unsafe { &mut *self.ptr.as_ptr().add(self.len - 1) })
    }

    /// Borrow the element in slot `index`, counting from the bottom of
    /// the stack.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] when `index >= len()`;
    /// slots between the cursor and the capacity hold no elements and
    /// are never readable.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(unsafe { &*self.ptr.as_ptr().add(index) })
    }

    /// Mutably borrow the element in slot `index`, counting from the
    /// bottom of the stack.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] when `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(unsafe { &mut *self.ptr.as_ptr().add(index) })
    }

    /// Increase the capacity by `extra` elements, reallocating the
    /// buffer. Stored elements keep their values, order and slots, and
    /// the cursor keeps its logical position.
    ///
    /// Fails with [`Error::AllocationFailure`] if the larger buffer
    /// cannot be obtained; the stack then still owns its old buffer and
    /// remains fully usable.
    pub fn grow(&mut self, extra: usize) -> Result<(), Error> {
        if extra == 0 {
            return Ok(());
        }
        let new_cap = self
            .cap
            .checked_add(extra)
            .ok_or(Error::AllocationFailure)?;
        self.ptr = unsafe { realloc_array(self.ptr, self.cap, new_cap)? };
        self.cap = new_cap;
        Ok(())
    }

    /// View the occupied slots, bottom of the stack first.
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            dealloc_array(self.ptr, self.cap);
        }
    }
}

impl<T: Debug> Debug for Stack<T> {
    /// Debug implementation for `Stack`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use linkstack::Stack;
    /// let mut stack: Stack<usize> = Stack::new(4).unwrap();
    /// stack.push(1).unwrap();
    /// stack.push(2).unwrap();
    /// assert_eq!("Stack[2/4]:[1, 2]", format!("{:?}", stack));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stack[{}/{}]:", self.len, self.cap)?;
        f.debug_list().entries(self.as_slice()).finish()
    }
}
