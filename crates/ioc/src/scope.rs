use crate::context::InjectionContext;
use crate::error::ExtensionError;
use crate::extension::IocExtension;
use crate::wiring::{ScopeMarker, WiringElementType};

/// Extension that maps one custom scope marker to a lifecycle category.
///
/// ```ignore
/// static FOOBIE: ScopeRegistrar = ScopeRegistrar::dependent(ScopeMarker::new("app.FoobieScope"));
/// register_extension!(ExtensionDef::new("app::foobie", "Foobie scope", &FOOBIE));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScopeRegistrar {
	marker: ScopeMarker,
	category: WiringElementType,
}

impl ScopeRegistrar {
	pub const fn new(marker: ScopeMarker, category: WiringElementType) -> Self {
		Self { marker, category }
	}

	/// Maps `marker` to [`WiringElementType::DependentBean`].
	pub const fn dependent(marker: ScopeMarker) -> Self {
		Self::new(marker, WiringElementType::DependentBean)
	}

	pub fn marker(&self) -> ScopeMarker {
		self.marker
	}

	pub fn category(&self) -> WiringElementType {
		self.category
	}
}

impl IocExtension for ScopeRegistrar {
	fn configure(&self, ctx: &mut InjectionContext) -> Result<(), ExtensionError> {
		ctx.map_element_type(self.category, self.marker)?;
		Ok(())
	}
}
