//! Error types for wiring, storage and bootstrap.

use thiserror::Error;

use crate::wiring::{ScopeMarker, WiringElementType};

/// Errors raised by the wiring-rule table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
	/// The marker already has a lifecycle category.
	#[error("scope marker {marker} is already mapped to {existing} (requested {requested})")]
	AlreadyMapped {
		marker: ScopeMarker,
		existing: WiringElementType,
		requested: WiringElementType,
	},

	/// The table was frozen at the end of bootstrap.
	#[error("wiring table is frozen; cannot map {marker} to {requested}")]
	Frozen {
		marker: ScopeMarker,
		requested: WiringElementType,
	},
}

/// Errors raised by the shared attribute store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
	/// The scan phase has ended; records can no longer be created or written.
	#[error("attribute store is sealed; cannot write {key}")]
	Sealed { key: String },

	/// The key names a different record type than the one requested.
	#[error("record kind mismatch for {key}: requested {requested}")]
	KindMismatch { key: String, requested: &'static str },
}

/// Errors returned by extension hooks.
#[derive(Debug, Error)]
pub enum ExtensionError {
	#[error(transparent)]
	Wiring(#[from] WiringError),

	#[error("{0}")]
	Other(String),
}

/// Errors raised while bootstrapping the container.
#[derive(Debug, Error)]
pub enum BootstrapError {
	/// Two extension definitions share an id.
	#[error("duplicate extension id {0}")]
	DuplicateExtension(&'static str),

	#[error("extension {id} failed to configure: {source}")]
	Configure {
		id: &'static str,
		#[source]
		source: ExtensionError,
	},

	#[error("extension {id} failed after initialization: {source}")]
	AfterInitialization {
		id: &'static str,
		#[source]
		source: ExtensionError,
	},
}
