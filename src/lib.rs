//! A doubly linked list addressed through copyable cursor handles.
//! *a cursor outlives any amount of unrelated mutation — and a stale one
//! is caught, not dereferenced.*
//!
//! `O(1)` insertion and deletion at any cursor.
//!
//! ## Example
//!
//! ```rust
//! use chainlist::{Error, List};
//!
//! let mut list = List::new();
//!
//! // a cursor captured from an empty list is the past-the-end
//! // position, so inserting through it appends
//! let it = list.start();
//! list.insert(it, 1).unwrap();
//! list.insert(it, 2).unwrap();
//! list.insert(it, 3).unwrap();
//!
//! assert_eq!(format!("{list:?}"), "[1, 2, 3]");
//! assert_eq!(list.len(), 3);
//!
//! let mid = list.advance(list.start()).unwrap();
//! assert_eq!(list.get(mid), Ok(&2));
//!
//! // inserting before the cursor leaves it on its node
//! list.insert(mid, 9).unwrap();
//! assert_eq!(format!("{list:?}"), "[1, 9, 2, 3]");
//! assert_eq!(list.get(mid), Ok(&2));
//!
//! // deleting through it makes every copy of it stale
//! assert_eq!(list.delete(mid), Ok(2));
//! assert_eq!(list.get(mid), Err(Error::StaleCursor));
//!
//! let sum: i32 = list.iter().sum();
//! assert_eq!(sum, 13);
//! ```
//!
//! The splice branches emit `log` trace lines; install a logger (e.g.
//! `env_logger` with `RUST_LOG=trace`) to watch the pointer surgery.

#![allow(forbidden_lint_groups)]
#![forbid(clippy::all)]

mod cursor;
mod error;
mod list;
mod node;

pub use cursor::Cursor;
pub use error::Error;
pub use list::{IntoIter, Iter, IterMut, List};
