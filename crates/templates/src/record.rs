//! Per-type decoration record.

use indexmap::IndexMap;
use trellis_codegen::{MetaTypeId, Statement};
use trellis_ioc::Record;

/// Data fields declared directly on one component type, in scan order.
///
/// `statements` and `types` always hold the same keys in the same order;
/// both are written together under the record's lock.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DataFieldRecord {
	statements: IndexMap<String, Statement>,
	types: IndexMap<String, MetaTypeId>,
}

impl Record for DataFieldRecord {
	const KIND: &'static str = "DATA_FIELD_MAP";
}

/// What happened to a data field on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
	/// The name was new to this type.
	Inserted,
	/// The name existed; the earlier entry was kept.
	KeptExisting,
	/// The name existed; its value was replaced in place.
	Replaced,
}

impl DataFieldRecord {
	pub fn contains(&self, name: &str) -> bool {
		self.statements.contains_key(name)
	}

	/// Inserts or replaces `name`. A replaced name keeps its position.
	pub fn insert(&mut self, name: String, statement: Statement, ty: MetaTypeId) -> InsertOutcome {
		self.types.insert(name.clone(), ty);
		match self.statements.insert(name, statement) {
			Some(_) => InsertOutcome::Replaced,
			None => InsertOutcome::Inserted,
		}
	}

	pub fn statements(&self) -> &IndexMap<String, Statement> {
		&self.statements
	}

	pub fn types(&self) -> &IndexMap<String, MetaTypeId> {
		&self.types
	}

	pub fn len(&self) -> usize {
		self.statements.len()
	}

	pub fn is_empty(&self) -> bool {
		self.statements.is_empty()
	}
}
