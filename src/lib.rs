#![no_std]

//! `DynArray`: a growable array with explicit capacity control.
//!
//! `DynArray<T>` exclusively owns one contiguous buffer. The first `len` slots
//! hold live values; the rest of the buffer up to `capacity` is raw storage that
//! is never read, iterated or compared. Indexed access and removal are checked
//! and report `DynArrayError::IndexOutOfBounds` instead of touching raw storage.
//!
//! This crate is `no_std` compatible and only needs the `alloc` crate.
//!
//! # Growth
//!
//! When a push or insert finds the buffer full, the capacity is multiplied by the
//! growth factor (2 by default, starting from 1 for an empty buffer) until the new
//! element fits. The live values are moved into the new buffer and the old one is
//! released. If the allocation fails, the array is left exactly as it was.
//!
//! ## Time Complexity
//! - `push()`: amortized O(1)
//! - `get()`, `set()`, `pop()`: O(1)
//! - `insert()`, `remove_at()`: O(len - index)
//! - `clear()`, `truncate()`: O(dropped elements), capacity is kept
//! - `sort_descending()`: O(n log n), stable
//!
//! # Vector Interface
//!
//! ```
//! # use dynarray::{DynArray, DynArrayError};
//! let mut array = DynArray::try_from_iter([1, 2, 3, 4, 5]).unwrap();
//! assert_eq!(array.capacity(), 20);
//!
//! array.insert(2, 2).unwrap();
//! assert_eq!(array, [1, 2, 2, 3, 4, 5]);
//!
//! assert_eq!(array.remove_at(0), Ok(1));
//! assert_eq!(
//!     array.remove_at(9),
//!     Err(DynArrayError::IndexOutOfBounds { index: 9, length: 5 })
//! );
//!
//! // Inserting past the end appends
//! array.insert(100, 6).unwrap();
//! assert_eq!(array.to_string(), "{2, 2, 3, 4, 5, 6}");
//! ```
//!
//! # Stack Interface
//!
//! ```
//! # use dynarray::{DynArray, DynArrayError};
//! let mut stack = DynArray::new();
//!
//! stack.push("first").unwrap();
//! stack.push("second").unwrap();
//!
//! assert_eq!(stack.last(), Some(&"second"));
//! assert_eq!(stack.try_pop(), Ok("second"));
//! assert_eq!(stack.pop(), Some("first"));
//!
//! // Safe variants for error handling
//! assert_eq!(stack.pop(), None);
//! assert_eq!(stack.try_pop(), Err(DynArrayError::EmptyArray));
//! ```
//!
//! # Copying and Assignment
//!
//! Copies never share storage. `assign` reuses the existing buffer when it is
//! large enough and only reallocates when the source has more elements than the
//! destination can hold.
//!
//! ```
//! # use dynarray::DynArray;
//! let original = DynArray::from([3, 1, 2]);
//! let mut copy = original.try_clone().unwrap();
//! copy.push(4).unwrap();
//! copy.sort_descending();
//!
//! assert_eq!(original, [3, 1, 2]);
//! assert_eq!(copy, [4, 3, 2, 1]);
//!
//! let mut target = DynArray::with_capacity(50).unwrap();
//! target.assign(&original).unwrap();
//! assert_eq!(target, original);
//! assert_eq!(target.capacity(), 50);
//! ```
//!
//! # Key-Value Sequences
//!
//! [`PairSeq`] stores [`Pair`]s in a `DynArray` and forwards its operations to it.
//!
//! ```
//! # use dynarray::PairSeq;
//! let mut ages = PairSeq::new();
//! ages.push("Alice", 30).unwrap();
//! ages.push("Bob", 25).unwrap();
//!
//! for (name, age) in &ages {
//!     println!("{name} is {age}");
//! }
//!
//! ages.sort_descending();
//! assert_eq!(ages[0].first, "Bob");
//! assert_eq!(ages.to_string(), "{(Bob, 25), (Alice, 30)}");
//! ```

extern crate alloc;

mod core;
mod error;
mod iter;
mod pair;
mod pair_seq;
mod raw;

// Re-export public types and traits
pub use crate::core::{DynArray, DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR};
pub use error::DynArrayError;
pub use iter::{DynArrayIntoIter, DynArrayIter, DynArrayIterMut, DynArrayRevIter};
pub use pair::{make_pair, Pair};
pub use pair_seq::{PairSeq, PairSeqIter};
