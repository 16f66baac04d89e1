use serde::{Deserialize, Serialize};

/// A capability a component type can be assignable to.
///
/// Resolved once by the introspection layer and stored on each [`MetaType`],
/// so decorators never query live type reflection.
///
/// [`MetaType`]: super::MetaType
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
	/// A raw DOM element.
	Element,
	/// A widget that can be attached to a template.
	Widget,
	/// A type exposing a bindable value.
	HasValue,
}

bitflags::bitflags! {
	/// A set of capabilities.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct CapabilitySet: u32 {
		/// A raw DOM element.
		const ELEMENT = 1 << 0;
		/// A template-attachable widget.
		const WIDGET = 1 << 1;
		/// A type exposing a bindable value.
		const HAS_VALUE = 1 << 2;
	}
}

impl Capability {
	/// Returns the bitflag for this capability.
	pub const fn as_set(self) -> CapabilitySet {
		match self {
			Self::Element => CapabilitySet::ELEMENT,
			Self::Widget => CapabilitySet::WIDGET,
			Self::HasValue => CapabilitySet::HAS_VALUE,
		}
	}
}

impl core::fmt::Display for Capability {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Element => f.write_str("element"),
			Self::Widget => f.write_str("widget"),
			Self::HasValue => f.write_str("has-value"),
		}
	}
}

impl From<Capability> for CapabilitySet {
	fn from(cap: Capability) -> Self {
		cap.as_set()
	}
}

impl FromIterator<Capability> for CapabilitySet {
	fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
		let mut set = CapabilitySet::empty();
		for cap in iter {
			set |= cap.as_set();
		}
		set
	}
}
