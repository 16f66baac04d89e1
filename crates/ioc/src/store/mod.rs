//! Phase-scoped keyed store shared by decorators.
//!
//! Records are created lazily under the map's write lock, so two decorators
//! targeting the same owner never race on creation. Each record sits behind
//! its own mutex: writes to one record are serialized, writes to different
//! records are independent.
//!
//! [`AttributeStore::seal`] marks the end of the scan phase. After sealing no
//! record can be created or written, and readers may traverse freely.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use trellis_codegen::MetaTypeId;

use crate::error::StoreError;

/// A value kept in the store, one per [`RecordKey`].
pub trait Record: Default + Send + 'static {
	/// Record kind, part of every key addressing this record type.
	const KIND: &'static str;
}

/// Deterministic address of a record: namespace, owning type and record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey {
	namespace: &'static str,
	owner: MetaTypeId,
	kind: &'static str,
}

impl RecordKey {
	pub const fn new(namespace: &'static str, owner: MetaTypeId, kind: &'static str) -> Self {
		Self {
			namespace,
			owner,
			kind,
		}
	}

	/// Key for record type `R` owned by `owner`.
	pub const fn of<R: Record>(namespace: &'static str, owner: MetaTypeId) -> Self {
		Self::new(namespace, owner, R::KIND)
	}

	pub fn namespace(&self) -> &'static str {
		self.namespace
	}

	pub fn owner(&self) -> MetaTypeId {
		self.owner
	}

	pub fn kind(&self) -> &'static str {
		self.kind
	}
}

impl fmt::Display for RecordKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}::{}#{}", self.namespace, self.kind, self.owner.index())
	}
}

type Slot = Arc<dyn Any + Send + Sync>;

/// Keyed store of decoration records.
#[derive(Default)]
pub struct AttributeStore {
	records: RwLock<FxHashMap<RecordKey, Slot>>,
	sealed: AtomicBool,
}

impl fmt::Debug for AttributeStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AttributeStore")
			.field("records", &self.len())
			.field("sealed", &self.is_sealed())
			.finish()
	}
}

impl AttributeStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the record at `key`, creating an empty one if absent.
	///
	/// Lookup and creation form one atomic check-and-set.
	pub fn get_or_create<R: Record>(&self, key: RecordKey) -> Result<Arc<Mutex<R>>, StoreError> {
		check_kind::<R>(key)?;

		{
			let records = self.records.read();
			self.check_open(key)?;
			if let Some(slot) = records.get(&key) {
				return downcast(key, slot.clone());
			}
		}

		let mut records = self.records.write();
		self.check_open(key)?;
		let slot = records
			.entry(key)
			.or_insert_with(|| {
				tracing::debug!(%key, "created record");
				let slot: Slot = Arc::new(Mutex::new(R::default()));
				slot
			})
			.clone();
		downcast(key, slot)
	}

	/// Returns the record at `key`, if one was created.
	pub fn get<R: Record>(&self, key: RecordKey) -> Result<Option<Arc<Mutex<R>>>, StoreError> {
		check_kind::<R>(key)?;
		let slot = self.records.read().get(&key).cloned();
		slot.map(|slot| downcast(key, slot)).transpose()
	}

	/// Runs `f` on the record at `key` with the record locked, creating it if absent.
	pub fn update<R: Record, T>(
		&self,
		key: RecordKey,
		f: impl FnOnce(&mut R) -> T,
	) -> Result<T, StoreError> {
		let record = self.get_or_create::<R>(key)?;
		let mut guard = record.lock();
		Ok(f(&mut *guard))
	}

	/// Runs `f` on the record at `key`, if one exists.
	pub fn read<R: Record, T>(
		&self,
		key: RecordKey,
		f: impl FnOnce(&R) -> T,
	) -> Result<Option<T>, StoreError> {
		Ok(self.get::<R>(key)?.map(|record| {
			let guard = record.lock();
			f(&*guard)
		}))
	}

	/// Ends the scan phase.
	pub fn seal(&self) {
		let records = self.records.write();
		self.sealed.store(true, Ordering::Release);
		tracing::debug!(records = records.len(), "sealed attribute store");
	}

	pub fn is_sealed(&self) -> bool {
		self.sealed.load(Ordering::Acquire)
	}

	/// All keys in the store, sorted.
	pub fn keys(&self) -> Vec<RecordKey> {
		let mut keys: Vec<_> = self.records.read().keys().copied().collect();
		keys.sort_unstable();
		keys
	}

	pub fn len(&self) -> usize {
		self.records.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.read().is_empty()
	}

	fn check_open(&self, key: RecordKey) -> Result<(), StoreError> {
		if self.is_sealed() {
			return Err(StoreError::Sealed {
				key: key.to_string(),
			});
		}
		Ok(())
	}
}

fn check_kind<R: Record>(key: RecordKey) -> Result<(), StoreError> {
	if key.kind != R::KIND {
		return Err(StoreError::KindMismatch {
			key: key.to_string(),
			requested: R::KIND,
		});
	}
	Ok(())
}

fn downcast<R: Record>(key: RecordKey, slot: Slot) -> Result<Arc<Mutex<R>>, StoreError> {
	slot.downcast::<Mutex<R>>()
		.map_err(|_| StoreError::KindMismatch {
			key: key.to_string(),
			requested: R::KIND,
		})
}
