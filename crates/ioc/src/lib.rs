//! Container-side infrastructure for build-phase code generation.
//!
//! - [`WiringTable`]: scope marker to lifecycle category rules
//! - [`IocExtension`] / [`ExtensionDef`]: bootstrap hooks, discovered with `inventory`
//! - [`ScopeRegistrar`]: extension mapping one custom scope marker
//! - [`Bootstrapper`]: runs every extension and freezes the wiring table
//! - [`AttributeStore`]: phase-scoped keyed store shared by decorators
//! - [`InjectableMember`] / [`CodeDecorator`]: the member decoration seam

pub mod bootstrap;
pub mod context;
pub mod decorator;
pub mod error;
pub mod extension;
pub mod member;
pub mod scope;
pub mod store;
pub mod wiring;

pub use bootstrap::{Bootstrapped, Bootstrapper, ExtensionRecord};
pub use context::InjectionContext;
pub use decorator::CodeDecorator;
pub use error::{BootstrapError, ExtensionError, StoreError, WiringError};
pub use extension::{ExtensionDef, IocExtension};
pub use member::{InjectableMember, MemberKind, MemberMarkers};
pub use scope::ScopeRegistrar;
pub use store::{AttributeStore, Record, RecordKey};
pub use wiring::{ScopeMarker, WiringElementType, WiringTable};

#[doc(hidden)]
pub use inventory;
