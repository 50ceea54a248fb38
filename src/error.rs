use thiserror::Error;

/// Failure conditions of the cursor-taking operations on a
/// [`List`](crate::List).
///
/// All of these are precondition violations reported as values; the list
/// is left untouched whenever one is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// The cursor sits at the past-the-end position, which has no node to
	/// read, advance from, or delete.
	#[error("cursor is past the end of the list")]
	CursorAtEnd,

	/// [`delete`](crate::List::delete) was called on a list with no nodes.
	#[error("delete called on an empty list")]
	EmptyList,

	/// The cursor's node has since been deleted, or the cursor was issued
	/// by a different list.
	#[error("cursor does not refer to a live node of this list")]
	StaleCursor,
}
