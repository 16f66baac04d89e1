//! Phase-scoped injection context passed to extensions and decorators.

use crate::error::WiringError;
use crate::store::AttributeStore;
use crate::wiring::{ScopeMarker, WiringElementType, WiringTable};

/// Owns the wiring rules and the shared attribute store for one build.
#[derive(Debug, Default)]
pub struct InjectionContext {
	wiring: WiringTable,
	attributes: AttributeStore,
}

impl InjectionContext {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn map_element_type(
		&mut self,
		category: WiringElementType,
		marker: ScopeMarker,
	) -> Result<(), WiringError> {
		self.wiring.map_element_type(category, marker)
	}

	pub fn wiring(&self) -> &WiringTable {
		&self.wiring
	}

	pub fn wiring_mut(&mut self) -> &mut WiringTable {
		&mut self.wiring
	}

	pub fn attributes(&self) -> &AttributeStore {
		&self.attributes
	}

	/// Ends the scan phase; see [`AttributeStore::seal`].
	pub fn finish_scan(&self) {
		self.attributes.seal();
	}
}
