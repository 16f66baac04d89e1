/// Payload of a `@DataField` annotation.
///
/// `value` overrides the template data-field name. It is trimmed before use;
/// an empty or all-whitespace value falls back to the member's own name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataField {
	value: Option<String>,
}

impl DataField {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn named(value: impl Into<String>) -> Self {
		Self {
			value: Some(value.into()),
		}
	}

	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	/// Resolves the data-field name for a member called `member_name`.
	pub fn resolve_name<'a>(&'a self, member_name: &'a str) -> &'a str {
		match self.value.as_deref().map(str::trim) {
			Some(value) if !value.is_empty() => value,
			_ => member_name,
		}
	}
}
