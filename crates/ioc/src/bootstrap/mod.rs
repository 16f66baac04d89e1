//! Container bootstrap: runs extensions and freezes the wiring table.

use rustc_hash::FxHashSet;

use crate::context::InjectionContext;
use crate::error::BootstrapError;
use crate::extension::ExtensionDef;

/// What one extension contributed during `configure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRecord {
	pub extension_id: &'static str,
	pub mapped_markers: usize,
}

/// Result of a successful bootstrap.
#[derive(Debug)]
pub struct Bootstrapped {
	pub context: InjectionContext,
	pub records: Vec<ExtensionRecord>,
}

/// Collects extensions and runs them in `(ordinal, id)` order.
#[derive(Debug, Default)]
pub struct Bootstrapper {
	extensions: Vec<&'static ExtensionDef>,
	ids: FxHashSet<&'static str>,
}

impl Bootstrapper {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a bootstrapper holding every submitted [`ExtensionDef`].
	pub fn with_registered() -> Result<Self, BootstrapError> {
		let mut bootstrapper = Self::new();
		for def in inventory::iter::<ExtensionDef> {
			bootstrapper.add(def)?;
		}
		Ok(bootstrapper)
	}

	pub fn add(&mut self, def: &'static ExtensionDef) -> Result<(), BootstrapError> {
		if !self.ids.insert(def.id) {
			return Err(BootstrapError::DuplicateExtension(def.id));
		}
		self.extensions.push(def);
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.extensions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.extensions.is_empty()
	}

	pub fn run(self) -> Result<Bootstrapped, BootstrapError> {
		self.run_with(InjectionContext::new())
	}

	/// Runs all extensions against a caller-provided context.
	pub fn run_with(mut self, mut context: InjectionContext) -> Result<Bootstrapped, BootstrapError> {
		self.extensions.sort_by_key(|def| (def.ordinal, def.id));
		let mut records = Vec::with_capacity(self.extensions.len());

		for def in &self.extensions {
			let before = context.wiring().len();
			def.extension
				.configure(&mut context)
				.map_err(|source| BootstrapError::Configure { id: def.id, source })?;
			let mapped_markers = context.wiring().len().saturating_sub(before);

			tracing::info!(extension = def.id, mapped_markers, "configured IOC extension");
			records.push(ExtensionRecord {
				extension_id: def.id,
				mapped_markers,
			});
		}

		context.wiring_mut().freeze();

		for def in &self.extensions {
			def.extension
				.after_initialization(&context)
				.map_err(|source| BootstrapError::AfterInitialization { id: def.id, source })?;
		}

		Ok(Bootstrapped { context, records })
	}
}

#[cfg(test)]
mod tests;
