//! Wiring-rule table: which scope marker selects which lifecycle category.

use rustc_hash::FxHashMap;

use crate::error::WiringError;

/// Lifecycle category assigned to beans annotated with a scope marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WiringElementType {
	/// A new instance per injection point.
	DependentBean,
	/// One proxied instance per active context.
	NormalScopedBean,
	/// One instance per container.
	SingletonBean,
	/// Replaces another bean when enabled.
	AlternativeBean,
	/// Supplies instances for an entire type.
	TopLevelProvider,
	/// A method or field producing bean instances.
	ProducerElement,
}

impl std::fmt::Display for WiringElementType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::DependentBean => "dependent",
			Self::NormalScopedBean => "normal-scoped",
			Self::SingletonBean => "singleton",
			Self::AlternativeBean => "alternative",
			Self::TopLevelProvider => "top-level-provider",
			Self::ProducerElement => "producer",
		};
		f.write_str(name)
	}
}

/// Qualified name of a scope annotation, e.g. `app.res.FoobieScope`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeMarker(&'static str);

impl ScopeMarker {
	pub const fn new(name: &'static str) -> Self {
		Self(name)
	}

	pub const fn name(self) -> &'static str {
		self.0
	}
}

impl std::fmt::Display for ScopeMarker {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.0)
	}
}

/// Marker to lifecycle-category rules, written once per marker.
#[derive(Debug, Default, Clone)]
pub struct WiringTable {
	by_marker: FxHashMap<ScopeMarker, WiringElementType>,
	/// Registration order.
	order: Vec<ScopeMarker>,
	frozen: bool,
}

impl WiringTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Maps `marker` to `category`.
	///
	/// Each marker may be mapped once; a second mapping is a caller error even
	/// when the category is the same.
	pub fn map_element_type(
		&mut self,
		category: WiringElementType,
		marker: ScopeMarker,
	) -> Result<(), WiringError> {
		if self.frozen {
			return Err(WiringError::Frozen {
				marker,
				requested: category,
			});
		}
		if let Some(&existing) = self.by_marker.get(&marker) {
			return Err(WiringError::AlreadyMapped {
				marker,
				existing,
				requested: category,
			});
		}

		tracing::debug!(%marker, %category, "mapped scope marker");
		self.by_marker.insert(marker, category);
		self.order.push(marker);
		Ok(())
	}

	pub fn category_of(&self, marker: ScopeMarker) -> Option<WiringElementType> {
		self.by_marker.get(&marker).copied()
	}

	pub fn is_element_type(&self, category: WiringElementType, marker: ScopeMarker) -> bool {
		self.category_of(marker) == Some(category)
	}

	/// Markers mapped to `category`, in registration order.
	pub fn markers(&self, category: WiringElementType) -> impl Iterator<Item = ScopeMarker> + '_ {
		self.order
			.iter()
			.copied()
			.filter(move |m| self.by_marker.get(m) == Some(&category))
	}

	/// Rejects all further mappings.
	pub fn freeze(&mut self) {
		self.frozen = true;
	}

	pub fn is_frozen(&self) -> bool {
		self.frozen
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}
}
