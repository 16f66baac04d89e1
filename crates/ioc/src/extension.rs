//! Container bootstrap hooks.

use crate::context::InjectionContext;
use crate::error::ExtensionError;

/// A hook run once while the container bootstraps.
pub trait IocExtension: Send + Sync {
	/// Contributes wiring rules. The wiring table is still writable.
	fn configure(&self, ctx: &mut InjectionContext) -> Result<(), ExtensionError>;

	/// Runs after every extension has configured and the wiring table is frozen.
	fn after_initialization(&self, _ctx: &InjectionContext) -> Result<(), ExtensionError> {
		Ok(())
	}
}

/// A registered extension.
///
/// Submit definitions with [`register_extension!`](crate::register_extension)
/// so [`Bootstrapper::with_registered`](crate::Bootstrapper::with_registered)
/// discovers them.
pub struct ExtensionDef {
	/// Unique identifier, e.g. `"app::foobie_scope"`.
	pub id: &'static str,
	pub description: &'static str,
	/// Run order; lower runs first, ties broken by id.
	pub ordinal: i16,
	pub extension: &'static dyn IocExtension,
}

inventory::collect!(ExtensionDef);

impl ExtensionDef {
	pub const fn new(
		id: &'static str,
		description: &'static str,
		extension: &'static dyn IocExtension,
	) -> Self {
		Self {
			id,
			description,
			ordinal: 0,
			extension,
		}
	}

	pub const fn with_ordinal(mut self, ordinal: i16) -> Self {
		self.ordinal = ordinal;
		self
	}
}

impl std::fmt::Debug for ExtensionDef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ExtensionDef")
			.field("id", &self.id)
			.field("ordinal", &self.ordinal)
			.finish_non_exhaustive()
	}
}

/// Submits an [`ExtensionDef`] for discovery at bootstrap.
#[macro_export]
macro_rules! register_extension {
	($def:expr) => {
		$crate::inventory::submit! { $def }
	};
}
