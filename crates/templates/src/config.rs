//! Data-field decorator configuration.
//!
//! ```toml
//! adapter = "trellis_ui::ElementWrapperWidget::get_widget"
//! target = "element"
//! duplicates = "reject"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use trellis_codegen::{CallPath, Capability};

use crate::error::ConfigError;

/// Adapter used when no configuration overrides it.
pub const DEFAULT_ADAPTER: &str = "trellis_ui::ElementWrapperWidget::get_widget";

/// How to handle two members of one type resolving to the same data-field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
	/// Fail decoration of the second member.
	#[default]
	Reject,
	/// Keep the first member's entry.
	FirstWins,
	/// Replace the entry's value, keeping its position.
	LastWins,
}

/// Settings for [`DataFieldDecorator`](crate::DataFieldDecorator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataFieldConfig {
	/// Static function wrapping members assignable to `target`.
	pub adapter: CallPath,
	/// Capability whose members must be adapted.
	pub target: Capability,
	pub duplicates: DuplicatePolicy,
}

impl Default for DataFieldConfig {
	fn default() -> Self {
		Self {
			adapter: CallPath::parse(DEFAULT_ADAPTER).expect("default adapter path is valid"),
			target: Capability::Element,
			duplicates: DuplicatePolicy::default(),
		}
	}
}

impl DataFieldConfig {
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}
}
