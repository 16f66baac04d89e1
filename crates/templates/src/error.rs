//! Error types for data-field decoration, aggregation and configuration.

use std::path::PathBuf;

use thiserror::Error;
use trellis_codegen::MetaError;
use trellis_ioc::StoreError;

/// Errors raised while decorating a member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecorateError {
	/// The member needs adapting and is also marked for injection.
	#[error(
		"data field `{field}` in `{enclosing}` has type `{resolved}`, which cannot be injected; \
		 this instance must be created manually"
	)]
	DisallowedInject {
		field: String,
		enclosing: String,
		resolved: String,
	},

	/// Two members of one type resolve to the same data-field name.
	#[error("duplicate data field `{field}` in `{enclosing}`")]
	DuplicateDataField { field: String, enclosing: String },

	#[error(transparent)]
	Meta(#[from] MetaError),

	#[error(transparent)]
	Store(#[from] StoreError),
}

/// Errors raised while aggregating a component hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
	/// Aggregation ran before the scan phase was finished.
	#[error("data fields cannot be aggregated while the scan is in progress")]
	ScanInProgress,

	#[error(transparent)]
	Meta(#[from] MetaError),

	#[error(transparent)]
	Store(#[from] StoreError),
}

/// Errors that can occur when loading decorator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("I/O error reading {path}: {error}")]
	Io {
		path: PathBuf,
		error: std::io::Error,
	},
}
