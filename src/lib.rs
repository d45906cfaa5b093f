// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two minimal owned containers: a singly linked [`List`][List] and a
//! bounded, explicitly growable [`Stack`][Stack].
//!
//! Both containers are generic over their element type and hold their
//! elements by value: pushing moves the value in, popping moves it back
//! out, and accessors hand out borrows that the borrow checker
//! invalidates across any mutation. Neither container shares anything:
//! a list owns its chain of nodes, and a stack owns its one buffer.
//!
//! # The list
//!
//! [`List`][List] is a singly linked chain with no cached tail and no
//! cached length. Front operations are O(1); anything touching the back
//! (including [`len()`][List::len]) walks the chain. Besides pushing and
//! popping at both ends it supports positional
//! [`insert`][List::insert] and [`remove`][List::remove], which relink
//! nodes without moving any element.
//!
//! # The stack
//!
//! [`Stack`][Stack] allocates one contiguous buffer up front and never
//! grows behind your back: a push onto a full stack hands the value
//! back, and it is the caller's decision to [`grow`][Stack::grow] and
//! retry. Growing reallocates while preserving every stored element and
//! the cursor position. There is no shrink operation.
//!
//! # Errors
//!
//! Every fallible operation returns a `Result` with a specific
//! [`Error`][Error] kind (empty collection, index out of bounds, or
//! allocation failure) and leaves the container unchanged when it
//! fails. The one exception is [`Stack::push`][Stack::push], which
//! reports fullness by handing the rejected value back as `Err(value)`
//! so it can be retried after a `grow` without cloning.
//!
//! # Example
//!
//! ```rust
//! # use linkstack::{List, Stack};
//! # fn main() -> Result<(), linkstack::Error> {
//! let mut list = List::new();
//! list.push_back("b")?;
//! list.push_front("a")?;
//! assert_eq!(2, list.len());
//! assert_eq!(Ok("b"), list.pop_back());
//!
//! let mut stack: Stack<&str> = Stack::new(1)?;
//! stack.push("a").unwrap();
//! assert_eq!(Err("b"), stack.push("b")); // full, value handed back
//! stack.grow(1)?;
//! stack.push("b").unwrap();
//! assert_eq!(Ok(&"b"), stack.top());
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! There is no built-in synchronisation: both containers are plain
//! single-owner values, [`Send`][Send] and [`Sync`][Sync] exactly when
//! their element type is, the same way [`Vec`][Vec] is. Wrap one in a
//! lock if it has to be shared.
//!
//! [List]: struct.List.html
//! [List::len]: struct.List.html#method.len
//! [List::insert]: struct.List.html#method.insert
//! [List::remove]: struct.List.html#method.remove
//! [Stack]: struct.Stack.html
//! [Stack::grow]: struct.Stack.html#method.grow
//! [Stack::push]: struct.Stack.html#method.push
//! [Error]: enum.Error.html
//! [Send]: https://doc.rust-lang.org/std/marker/trait.Send.html
//! [Sync]: https://doc.rust-lang.org/std/marker/trait.Sync.html
//! [Vec]: https://doc.rust-lang.org/std/vec/struct.Vec.html

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

mod alloc;
mod error;
mod list;
mod stack;

pub use self::error::Error;
pub use self::list::{IntoIter, Iter, IterMut, List};
pub use self::stack::Stack;
