//! Build-phase type model and generated-code fragments.
//!
//! This crate provides the pieces shared by the container and by decorators:
//! - [`TypeArena`]: component types with single-parent links
//! - [`Capability`] / [`CapabilitySet`]: precomputed assignability tags
//! - [`Statement`]: opaque "how to obtain this value" code fragments

pub mod error;
pub mod meta;
pub mod statement;

pub use error::{CodegenError, MetaError};
pub use meta::{
	Capability, CapabilitySet, MAX_HIERARCHY_DEPTH, MetaType, MetaTypeId, TypeArena,
};
pub use statement::{CallPath, MemberIdent, Statement};
