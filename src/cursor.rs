use std::fmt;
use std::ptr::NonNull;

use crate::node::Node;

/// A position within a [`List`](crate::List): either a live node or the
/// past-the-end sentinel.
///
/// A `Cursor` is a plain value, not a borrow. It can be copied freely and
/// held across mutations of its list; every list operation that takes one
/// validates it first, so a cursor whose node is gone yields
/// [`Error::StaleCursor`](crate::Error::StaleCursor) instead of undefined
/// behaviour. It owns nothing and is only meaningful to the list that
/// issued it.
/// ```
/// # use chainlist::List;
/// let mut list = List::from(vec![1, 2, 3]);
///
/// let it = list.advance(list.start()).unwrap();
/// assert_eq!(list.get(it), Ok(&2));
///
/// // unrelated mutation; `it` survives
/// list.push_front(0);
/// list.push_back(4);
/// assert_eq!(list.get(it), Ok(&2));
/// ```
pub struct Cursor<T> {
	pub(crate) list:  u64,
	pub(crate) stamp: u64,
	pub(crate) node:  Option<NonNull<Node<T>>>,
}

// Hand-written so `T` needs no bounds; a cursor is two ids and a pointer
// no matter the element type.
impl<T> Clone for Cursor<T> {
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Cursor<T> {}

impl<T> PartialEq for Cursor<T> {
	/// Two cursors are equal when they address the same node of the same
	/// list, or are both past the end of the same list. A stale cursor is
	/// never equal to a live one, even at the same allocation.
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.list == other.list && self.node == other.node && self.stamp == other.stamp
	}
}

impl<T> Eq for Cursor<T> {}

// A cursor cannot reach its element without the list, so moving one
// between threads moves no data.
unsafe impl<T: Send> Send for Cursor<T> {}
unsafe impl<T: Sync> Sync for Cursor<T> {}

impl<T> Cursor<T> {
	/// `true` for the past-the-end position. `O(1)`.
	/// ```
	/// # use chainlist::List;
	/// let mut list = List::new();
	/// assert!(list.start().is_end());
	///
	/// list.push_back(1);
	/// assert!(!list.start().is_end());
	/// assert!(list.end().is_end());
	/// ```
	#[inline]
	pub const fn is_end(&self) -> bool {
		self.node.is_none()
	}
}

impl<T> fmt::Debug for Cursor<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.node {
			Some(ptr) => write!(f, "Cursor({:p})", ptr.as_ptr()),
			None      => write!(f, "Cursor(end)"),
		}
	}
}
