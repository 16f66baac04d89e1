//! Members handed to decorators by the introspection layer.

use trellis_codegen::{CodegenError, MemberIdent, MetaTypeId, Statement};

/// Whether the member is a field or a zero-argument method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
	Field,
	Method,
}

bitflags::bitflags! {
	/// Container annotations present on a member besides the decorating one.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct MemberMarkers: u8 {
		/// The container constructs the value (`@Inject`).
		const INJECT = 1 << 0;
	}
}

/// A named, typed slot declared directly on one component type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectableMember {
	name: MemberIdent,
	kind: MemberKind,
	/// Field type, or return type for methods.
	resolved_type: MetaTypeId,
	enclosing_type: MetaTypeId,
	markers: MemberMarkers,
}

impl InjectableMember {
	pub fn new(
		name: MemberIdent,
		kind: MemberKind,
		resolved_type: MetaTypeId,
		enclosing_type: MetaTypeId,
	) -> Self {
		Self {
			name,
			kind,
			resolved_type,
			enclosing_type,
			markers: MemberMarkers::empty(),
		}
	}

	pub fn field(
		name: &str,
		resolved_type: MetaTypeId,
		enclosing_type: MetaTypeId,
	) -> Result<Self, CodegenError> {
		Ok(Self::new(
			MemberIdent::new(name)?,
			MemberKind::Field,
			resolved_type,
			enclosing_type,
		))
	}

	pub fn method(
		name: &str,
		resolved_type: MetaTypeId,
		enclosing_type: MetaTypeId,
	) -> Result<Self, CodegenError> {
		Ok(Self::new(
			MemberIdent::new(name)?,
			MemberKind::Method,
			resolved_type,
			enclosing_type,
		))
	}

	pub fn with_markers(mut self, markers: MemberMarkers) -> Self {
		self.markers |= markers;
		self
	}

	pub fn name(&self) -> &MemberIdent {
		&self.name
	}

	pub fn kind(&self) -> MemberKind {
		self.kind
	}

	pub fn resolved_type(&self) -> MetaTypeId {
		self.resolved_type
	}

	pub fn enclosing_type(&self) -> MetaTypeId {
		self.enclosing_type
	}

	pub fn markers(&self) -> MemberMarkers {
		self.markers
	}

	pub fn has_marker(&self, marker: MemberMarkers) -> bool {
		self.markers.contains(marker)
	}

	/// Direct reference to the member's value.
	pub fn value_statement(&self) -> Statement {
		match self.kind {
			MemberKind::Field => Statement::field(self.name.clone()),
			MemberKind::Method => Statement::method(self.name.clone()),
		}
	}
}
