use pretty_assertions::assert_eq;
use trellis_codegen::{CallPath, Capability, CapabilitySet, MemberIdent};
use trellis_ioc::StoreError;

use super::*;

struct Fixture {
	types: TypeArena,
	ctx: InjectionContext,
	form: MetaTypeId,
	string: MetaTypeId,
	div: MetaTypeId,
	span: MetaTypeId,
}

impl Fixture {
	fn new() -> Self {
		let mut types = TypeArena::new();
		let form = types
			.declare("app.ui.LoginForm", None, CapabilitySet::WIDGET)
			.unwrap();
		let string = types
			.declare("lang.String", None, CapabilitySet::empty())
			.unwrap();
		let element = types
			.declare("dom.Element", None, CapabilitySet::ELEMENT)
			.unwrap();
		let div = types
			.declare("dom.DivElement", Some(element), CapabilitySet::empty())
			.unwrap();
		let span = types
			.declare("dom.SpanElement", Some(element), CapabilitySet::empty())
			.unwrap();
		Self {
			types,
			ctx: InjectionContext::new(),
			form,
			string,
			div,
			span,
		}
	}

	fn decorate(
		&self,
		decorator: &DataFieldDecorator,
		member: &InjectableMember,
		annotation: &DataField,
	) -> Result<InsertOutcome, DecorateError> {
		decorator.decorate(&self.ctx, &self.types, member, annotation)
	}

	fn record(&self) -> Option<DataFieldRecord> {
		self.ctx
			.attributes()
			.read(DataFieldDecorator::record_key(self.form), |r: &DataFieldRecord| {
				r.clone()
			})
			.unwrap()
	}
}

fn ident(name: &str) -> MemberIdent {
	MemberIdent::new(name).unwrap()
}

#[test]
fn plain_member_gets_direct_reference() {
	let fx = Fixture::new();
	let member = InjectableMember::field("title", fx.string, fx.form).unwrap();

	let outcome = fx
		.decorate(&DataFieldDecorator::default(), &member, &DataField::new())
		.unwrap();
	assert_eq!(outcome, InsertOutcome::Inserted);

	let record = fx.record().unwrap();
	assert_eq!(record.statements()["title"], Statement::field(ident("title")));
	assert_eq!(record.types()["title"], fx.string);
}

#[test]
fn capability_member_gets_adapted_reference() {
	let fx = Fixture::new();
	let decorator = DataFieldDecorator::default();
	let member = InjectableMember::field("icon", fx.div, fx.form).unwrap();

	fx.decorate(&decorator, &member, &DataField::new()).unwrap();

	let record = fx.record().unwrap();
	assert_eq!(
		record.statements()["icon"],
		Statement::adapted(
			decorator.config().adapter.clone(),
			Statement::field(ident("icon"))
		)
	);
	assert_eq!(record.types()["icon"], fx.div);
}

#[test]
fn method_members_are_called() {
	let fx = Fixture::new();
	let decorator = DataFieldDecorator::default();
	let plain = InjectableMember::method("caption", fx.string, fx.form).unwrap();
	let element = InjectableMember::method("root", fx.span, fx.form).unwrap();

	fx.decorate(&decorator, &plain, &DataField::new()).unwrap();
	fx.decorate(&decorator, &element, &DataField::new()).unwrap();

	let record = fx.record().unwrap();
	assert_eq!(record.statements()["caption"], Statement::method(ident("caption")));
	assert_eq!(
		record.statements()["root"],
		Statement::adapted(
			decorator.config().adapter.clone(),
			Statement::method(ident("root"))
		)
	);
}

#[test]
fn target_capability_is_configurable() {
	let fx = Fixture::new();
	let decorator = DataFieldDecorator::new(DataFieldConfig {
		adapter: CallPath::parse("ui::attach").unwrap(),
		target: Capability::Widget,
		..DataFieldConfig::default()
	});
	let nested = InjectableMember::field("nested", fx.form, fx.form).unwrap();
	let icon = InjectableMember::field("icon", fx.div, fx.form).unwrap();

	fx.decorate(&decorator, &nested, &DataField::new()).unwrap();
	fx.decorate(&decorator, &icon, &DataField::new()).unwrap();

	let record = fx.record().unwrap();
	assert_eq!(
		record.statements()["nested"].adapter(),
		Some(&CallPath::parse("ui::attach").unwrap())
	);
	assert!(record.statements()["icon"].is_direct());
}

#[test]
fn injected_capability_member_is_rejected_without_writing() {
	let fx = Fixture::new();
	let member = InjectableMember::field("icon", fx.div, fx.form)
		.unwrap()
		.with_markers(MemberMarkers::INJECT);

	let err = fx
		.decorate(&DataFieldDecorator::default(), &member, &DataField::named("logo"))
		.unwrap_err();

	assert_eq!(
		err,
		DecorateError::DisallowedInject {
			field: "logo".into(),
			enclosing: "app.ui.LoginForm".into(),
			resolved: "dom.DivElement".into(),
		}
	);
	assert!(err.to_string().contains("must be created manually"));
	assert!(fx.record().is_none());
	assert!(fx.ctx.attributes().is_empty());
}

#[test]
fn injected_plain_member_is_allowed() {
	let fx = Fixture::new();
	let member = InjectableMember::field("service", fx.string, fx.form)
		.unwrap()
		.with_markers(MemberMarkers::INJECT);

	fx.decorate(&DataFieldDecorator::default(), &member, &DataField::new())
		.unwrap();
	assert!(fx.record().unwrap().statements()["service"].is_direct());
}

#[test]
fn override_name_becomes_the_key() {
	let fx = Fixture::new();
	let member = InjectableMember::field("title", fx.string, fx.form).unwrap();

	fx.decorate(&DataFieldDecorator::default(), &member, &DataField::named(" header "))
		.unwrap();

	let record = fx.record().unwrap();
	assert!(record.contains("header"));
	assert!(!record.contains("title"));
}

#[test]
fn whitespace_override_matches_empty_override() {
	let blank = Fixture::new();
	let empty = Fixture::new();
	let decorator = DataFieldDecorator::default();

	let member = InjectableMember::field("title", blank.string, blank.form).unwrap();
	blank.decorate(&decorator, &member, &DataField::named("  ")).unwrap();
	empty.decorate(&decorator, &member, &DataField::named("")).unwrap();

	assert_eq!(blank.record(), empty.record());
	assert!(blank.record().unwrap().contains("title"));
}

#[test]
fn duplicate_name_is_rejected_by_default() {
	let fx = Fixture::new();
	let decorator = DataFieldDecorator::default();
	let first = InjectableMember::field("title", fx.string, fx.form).unwrap();
	let second = InjectableMember::field("heading", fx.div, fx.form).unwrap();

	fx.decorate(&decorator, &first, &DataField::new()).unwrap();
	let err = fx
		.decorate(&decorator, &second, &DataField::named("title"))
		.unwrap_err();

	assert_eq!(
		err,
		DecorateError::DuplicateDataField {
			field: "title".into(),
			enclosing: "app.ui.LoginForm".into(),
		}
	);
	let record = fx.record().unwrap();
	assert_eq!(record.statements()["title"], Statement::field(ident("title")));
	assert_eq!(record.types()["title"], fx.string);
}

#[test]
fn duplicate_policies_keep_position() {
	for (policy, expected) in [
		(DuplicatePolicy::FirstWins, InsertOutcome::KeptExisting),
		(DuplicatePolicy::LastWins, InsertOutcome::Replaced),
	] {
		let fx = Fixture::new();
		let decorator = DataFieldDecorator::new(DataFieldConfig {
			duplicates: policy,
			..DataFieldConfig::default()
		});
		let title = InjectableMember::field("title", fx.string, fx.form).unwrap();
		let body = InjectableMember::field("body", fx.string, fx.form).unwrap();
		let heading = InjectableMember::field("heading", fx.div, fx.form).unwrap();

		fx.decorate(&decorator, &title, &DataField::new()).unwrap();
		fx.decorate(&decorator, &body, &DataField::new()).unwrap();
		let outcome = fx
			.decorate(&decorator, &heading, &DataField::named("title"))
			.unwrap();
		assert_eq!(outcome, expected);

		let record = fx.record().unwrap();
		assert_eq!(
			record.statements().keys().collect::<Vec<_>>(),
			vec!["title", "body"]
		);
		assert_eq!(
			record.types().keys().collect::<Vec<_>>(),
			vec!["title", "body"]
		);
		let winner = if policy == DuplicatePolicy::LastWins {
			fx.div
		} else {
			fx.string
		};
		assert_eq!(record.types()["title"], winner);
	}
}

#[test]
fn generate_decorator_emits_nothing() {
	let fx = Fixture::new();
	let member = InjectableMember::field("title", fx.string, fx.form).unwrap();

	let statements = DataFieldDecorator::default()
		.generate_decorator(&fx.ctx, &fx.types, &member, &DataField::new())
		.unwrap();
	assert!(statements.is_empty());
	assert_eq!(fx.record().unwrap().len(), 1);
}

#[test]
fn decorating_after_scan_fails() {
	let fx = Fixture::new();
	fx.ctx.finish_scan();
	let member = InjectableMember::field("title", fx.string, fx.form).unwrap();

	assert!(matches!(
		fx.decorate(&DataFieldDecorator::default(), &member, &DataField::new()),
		Err(DecorateError::Store(StoreError::Sealed { .. }))
	));
}
