//! Component type arena.
//!
//! Types are stored densely and refer to their parent by [`MetaTypeId`]. The
//! host type system guarantees a tree, but [`TypeArena::link_parent`] allows
//! late linking, so every walk is guarded against cycles.

mod capability;

use rustc_hash::{FxHashMap, FxHashSet};

pub use capability::{Capability, CapabilitySet};

use crate::error::MetaError;

/// Upper bound on the number of types in one parent chain.
pub const MAX_HIERARCHY_DEPTH: usize = 256;

/// Dense identifier of a type in a [`TypeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetaTypeId(u32);

impl MetaTypeId {
	/// Returns the arena index.
	#[inline]
	pub fn index(self) -> usize {
		self.0 as usize
	}
}

impl std::fmt::Display for MetaTypeId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "MetaTypeId({})", self.0)
	}
}

/// A declared component type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaType {
	name: String,
	parent: Option<MetaTypeId>,
	capabilities: CapabilitySet,
}

impl MetaType {
	/// Fully qualified name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Unqualified name: the last `.` or `::` separated segment.
	pub fn simple_name(&self) -> &str {
		let tail = self.name.rsplit("::").next().unwrap_or(&self.name);
		tail.rsplit('.').next().unwrap_or(tail)
	}

	pub fn parent(&self) -> Option<MetaTypeId> {
		self.parent
	}

	/// Capabilities declared directly on this type, excluding ancestors.
	pub fn capabilities(&self) -> CapabilitySet {
		self.capabilities
	}
}

/// Arena of component types with single-parent links.
#[derive(Debug, Default, Clone)]
pub struct TypeArena {
	types: Vec<MetaType>,
	by_name: FxHashMap<String, MetaTypeId>,
}

impl TypeArena {
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares a type. The parent, if any, must already be declared.
	pub fn declare(
		&mut self,
		name: impl Into<String>,
		parent: Option<MetaTypeId>,
		capabilities: CapabilitySet,
	) -> Result<MetaTypeId, MetaError> {
		let name = name.into();
		if self.by_name.contains_key(&name) {
			return Err(MetaError::DuplicateType(name));
		}
		if let Some(parent) = parent {
			self.get(parent)?;
		}

		let id = MetaTypeId(self.types.len() as u32);
		self.by_name.insert(name.clone(), id);
		self.types.push(MetaType {
			name,
			parent,
			capabilities,
		});
		Ok(id)
	}

	/// Sets the parent of an already declared type.
	///
	/// Acyclicity is not checked here; [`TypeArena::ancestry`] reports cycles.
	pub fn link_parent(&mut self, child: MetaTypeId, parent: MetaTypeId) -> Result<(), MetaError> {
		self.get(parent)?;
		let ty = self
			.types
			.get_mut(child.index())
			.ok_or(MetaError::UnknownType(child))?;
		ty.parent = Some(parent);
		Ok(())
	}

	pub fn get(&self, id: MetaTypeId) -> Result<&MetaType, MetaError> {
		self.types.get(id.index()).ok_or(MetaError::UnknownType(id))
	}

	pub fn lookup(&self, name: &str) -> Option<MetaTypeId> {
		self.by_name.get(name).copied()
	}

	/// Returns the fully qualified name, or a placeholder for unknown ids.
	pub fn name_of(&self, id: MetaTypeId) -> String {
		match self.get(id) {
			Ok(ty) => ty.name.clone(),
			Err(_) => id.to_string(),
		}
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	/// Returns the chain from the root ancestor down to `id` (inclusive).
	pub fn ancestry(&self, id: MetaTypeId) -> Result<Vec<MetaTypeId>, MetaError> {
		let mut chain = Vec::new();
		let mut seen = FxHashSet::default();
		let mut cursor = Some(id);

		while let Some(current) = cursor {
			let ty = self.get(current)?;
			if !seen.insert(current) {
				return Err(MetaError::CyclicHierarchy {
					ty: ty.name.clone(),
				});
			}
			if chain.len() == MAX_HIERARCHY_DEPTH {
				return Err(MetaError::DepthExceeded {
					ty: self.name_of(id),
					limit: MAX_HIERARCHY_DEPTH,
				});
			}
			chain.push(current);
			cursor = ty.parent;
		}

		chain.reverse();
		Ok(chain)
	}

	/// Union of the capabilities declared on `id` and all of its ancestors.
	pub fn effective_capabilities(&self, id: MetaTypeId) -> Result<CapabilitySet, MetaError> {
		let mut set = CapabilitySet::empty();
		for ancestor in self.ancestry(id)? {
			set |= self.get(ancestor)?.capabilities;
		}
		Ok(set)
	}

	/// Returns true if `id` is assignable to `capability`.
	pub fn is_assignable_to(&self, id: MetaTypeId, capability: Capability) -> Result<bool, MetaError> {
		Ok(self.effective_capabilities(id)?.contains(capability.as_set()))
	}
}
