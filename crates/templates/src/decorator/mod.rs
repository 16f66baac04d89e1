//! `@DataField` member decorator.

use trellis_codegen::{MetaTypeId, Statement, TypeArena};
use trellis_ioc::{CodeDecorator, InjectableMember, InjectionContext, MemberMarkers, RecordKey};

use crate::config::{DataFieldConfig, DuplicatePolicy};
use crate::data_field::DataField;
use crate::error::DecorateError;
use crate::record::{DataFieldRecord, InsertOutcome};

/// Namespace of every record written by [`DataFieldDecorator`].
pub const DATA_FIELD_NAMESPACE: &str = "trellis_templates::data_field";

/// Stores each `@DataField` member's value statement and type in the record
/// of its declaring type.
///
/// Members assignable to the configured target capability are wrapped in the
/// configured adapter call. Such members cannot also be `@Inject`ed: the
/// adapted value is not something the container can construct.
#[derive(Debug, Clone, Default)]
pub struct DataFieldDecorator {
	config: DataFieldConfig,
}

impl DataFieldDecorator {
	pub fn new(config: DataFieldConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &DataFieldConfig {
		&self.config
	}

	/// Key of the record owned by `component`.
	pub const fn record_key(component: MetaTypeId) -> RecordKey {
		RecordKey::of::<DataFieldRecord>(DATA_FIELD_NAMESPACE, component)
	}

	/// Decorates one member. Nothing is written when this fails.
	pub fn decorate(
		&self,
		ctx: &InjectionContext,
		types: &TypeArena,
		member: &InjectableMember,
		annotation: &DataField,
	) -> Result<InsertOutcome, DecorateError> {
		let enclosing = types.get(member.enclosing_type())?;
		let name = annotation.resolve_name(member.name().as_str()).to_string();
		let mut value = member.value_statement();

		if types.is_assignable_to(member.resolved_type(), self.config.target)? {
			if member.has_marker(MemberMarkers::INJECT) {
				return Err(DecorateError::DisallowedInject {
					field: name,
					enclosing: enclosing.name().to_string(),
					resolved: types.name_of(member.resolved_type()),
				});
			}
			value = Statement::adapted(self.config.adapter.clone(), value);
		}

		let key = Self::record_key(member.enclosing_type());
		let outcome = ctx.attributes().update(key, |record: &mut DataFieldRecord| {
			self.store(record, enclosing.name(), name, value, member.resolved_type())
		})??;

		tracing::debug!(
			%key,
			member = %member.name(),
			?outcome,
			"decorated data field"
		);
		Ok(outcome)
	}

	fn store(
		&self,
		record: &mut DataFieldRecord,
		enclosing: &str,
		name: String,
		value: Statement,
		ty: MetaTypeId,
	) -> Result<InsertOutcome, DecorateError> {
		if record.contains(&name) {
			match self.config.duplicates {
				DuplicatePolicy::Reject => {
					return Err(DecorateError::DuplicateDataField {
						field: name,
						enclosing: enclosing.to_string(),
					});
				}
				DuplicatePolicy::FirstWins => {
					tracing::warn!(field = %name, enclosing, "duplicate data field ignored");
					return Ok(InsertOutcome::KeptExisting);
				}
				DuplicatePolicy::LastWins => {
					tracing::warn!(field = %name, enclosing, "duplicate data field replaces earlier entry");
				}
			}
		}
		Ok(record.insert(name, value, ty))
	}
}

impl CodeDecorator for DataFieldDecorator {
	type Annotation = DataField;
	type Error = DecorateError;

	fn generate_decorator(
		&self,
		ctx: &InjectionContext,
		types: &TypeArena,
		member: &InjectableMember,
		annotation: &DataField,
	) -> Result<Vec<Statement>, DecorateError> {
		self.decorate(ctx, types, member, annotation)?;
		Ok(Vec::new())
	}
}

#[cfg(test)]
mod tests;
