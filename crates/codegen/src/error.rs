//! Error types for the type arena and statement construction.

use thiserror::Error;

use crate::meta::MetaTypeId;

/// Errors raised while declaring or walking component types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
	/// A type with this fully qualified name was already declared.
	#[error("duplicate type declaration: {0}")]
	DuplicateType(String),

	/// The id does not refer to a declared type.
	#[error("unknown type id: {0}")]
	UnknownType(MetaTypeId),

	/// The parent chain of `ty` loops back onto itself.
	#[error("cyclic type hierarchy at {ty}")]
	CyclicHierarchy {
		/// Fully qualified name of the type where the cycle was detected.
		ty: String,
	},

	/// The parent chain of `ty` is deeper than the walk allows.
	#[error("type hierarchy of {ty} exceeds {limit} levels")]
	DepthExceeded {
		/// Fully qualified name of the queried type.
		ty: String,
		/// The configured depth limit.
		limit: usize,
	},
}

/// Errors raised while building statement fragments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
	/// The member name is not a valid Rust identifier.
	#[error("invalid member identifier: {0:?}")]
	InvalidIdent(String),

	/// The call path could not be parsed as a plain path.
	#[error("invalid call path {path:?}: {reason}")]
	InvalidPath {
		/// The rejected input.
		path: String,
		/// Why it was rejected.
		reason: String,
	},
}
