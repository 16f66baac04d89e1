//! Hierarchy-wide view of a component's data fields.

use indexmap::IndexMap;
use trellis_codegen::{MetaTypeId, Statement, TypeArena};
use trellis_ioc::AttributeStore;

use crate::decorator::DataFieldDecorator;
use crate::error::AggregateError;
use crate::record::DataFieldRecord;

/// Data fields of a component and all of its ancestors.
///
/// A name keeps the position of its most ancestral declaration and the value
/// of its most specific one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregateView {
	statements: IndexMap<String, Statement>,
	types: IndexMap<String, MetaTypeId>,
}

impl AggregateView {
	/// Appends unseen names and replaces seen ones in place.
	fn merge_in_order(&mut self, record: &DataFieldRecord) {
		for (name, statement) in record.statements() {
			self.statements.insert(name.clone(), statement.clone());
		}
		for (name, ty) in record.types() {
			self.types.insert(name.clone(), *ty);
		}
	}

	pub fn statements(&self) -> &IndexMap<String, Statement> {
		&self.statements
	}

	pub fn types(&self) -> &IndexMap<String, MetaTypeId> {
		&self.types
	}

	pub fn get(&self, name: &str) -> Option<(&Statement, MetaTypeId)> {
		Some((self.statements.get(name)?, *self.types.get(name)?))
	}

	/// `(name, statement, type)` in aggregate order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Statement, MetaTypeId)> {
		self.statements
			.iter()
			.filter_map(|(name, stmt)| Some((name.as_str(), stmt, *self.types.get(name)?)))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.statements.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.statements.len()
	}

	pub fn is_empty(&self) -> bool {
		self.statements.is_empty()
	}

	pub fn into_parts(self) -> (IndexMap<String, Statement>, IndexMap<String, MetaTypeId>) {
		(self.statements, self.types)
	}
}

/// Merges the data-field records of `component`'s ancestors (root first) and
/// of `component` itself.
///
/// Read-only; the store must be sealed so every decoration is visible.
pub fn aggregate_data_fields(
	store: &AttributeStore,
	types: &TypeArena,
	component: MetaTypeId,
) -> Result<AggregateView, AggregateError> {
	if !store.is_sealed() {
		return Err(AggregateError::ScanInProgress);
	}

	let mut view = AggregateView::default();
	for ty in types.ancestry(component)? {
		store.read(DataFieldDecorator::record_key(ty), |record: &DataFieldRecord| {
			view.merge_in_order(record)
		})?;
	}

	tracing::trace!(
		component = %types.name_of(component),
		fields = view.len(),
		"aggregated data fields"
	);
	Ok(view)
}
