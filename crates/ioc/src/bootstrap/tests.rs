use std::sync::atomic::{AtomicBool, Ordering};

use pretty_assertions::assert_eq;

use super::*;
use crate::error::{ExtensionError, WiringError};
use crate::extension::IocExtension;
use crate::scope::ScopeRegistrar;
use crate::wiring::{ScopeMarker, WiringElementType};

const FOOBIE: ScopeMarker = ScopeMarker::new("app.res.FoobieScope");
const SESSION: ScopeMarker = ScopeMarker::new("app.res.SessionScope");

static FOOBIE_SCOPE: ScopeRegistrar = ScopeRegistrar::dependent(FOOBIE);
static SESSION_SCOPE: ScopeRegistrar =
	ScopeRegistrar::new(SESSION, WiringElementType::NormalScopedBean);

static FOOBIE_DEF: ExtensionDef = ExtensionDef::new("test::foobie", "Foobie scope", &FOOBIE_SCOPE);
static FOOBIE_AGAIN_DEF: ExtensionDef =
	ExtensionDef::new("test::foobie_again", "Foobie scope, twice", &FOOBIE_SCOPE);
static SESSION_DEF: ExtensionDef =
	ExtensionDef::new("test::session", "Session scope", &SESSION_SCOPE).with_ordinal(-1);

/// Checks that the table is complete and frozen once initialization ends.
struct FrozenProbe {
	saw_frozen: AtomicBool,
}

impl IocExtension for FrozenProbe {
	fn configure(&self, _ctx: &mut InjectionContext) -> Result<(), ExtensionError> {
		Ok(())
	}

	fn after_initialization(&self, ctx: &InjectionContext) -> Result<(), ExtensionError> {
		let complete = ctx.wiring().category_of(FOOBIE).is_some();
		self.saw_frozen
			.store(complete && ctx.wiring().is_frozen(), Ordering::SeqCst);
		Ok(())
	}
}

static PROBE: FrozenProbe = FrozenProbe {
	saw_frozen: AtomicBool::new(false),
};
static PROBE_DEF: ExtensionDef = ExtensionDef::new("test::probe", "Frozen probe", &PROBE);

struct Failing;

impl IocExtension for Failing {
	fn configure(&self, _ctx: &mut InjectionContext) -> Result<(), ExtensionError> {
		Ok(())
	}

	fn after_initialization(&self, _ctx: &InjectionContext) -> Result<(), ExtensionError> {
		Err(ExtensionError::Other("post-bootstrap check failed".into()))
	}
}

static FAILING: Failing = Failing;
static FAILING_DEF: ExtensionDef = ExtensionDef::new("test::failing", "Always fails", &FAILING);

#[test]
fn scope_registrar_maps_dependent_lifecycle() {
	let mut bootstrapper = Bootstrapper::new();
	bootstrapper.add(&FOOBIE_DEF).unwrap();
	let Bootstrapped { context, records } = bootstrapper.run().unwrap();

	assert_eq!(
		context.wiring().category_of(FOOBIE),
		Some(WiringElementType::DependentBean)
	);
	assert!(context.wiring().is_frozen());
	assert_eq!(
		records,
		vec![ExtensionRecord {
			extension_id: "test::foobie",
			mapped_markers: 1,
		}]
	);
}

#[test]
fn extensions_run_by_ordinal_then_id() {
	let mut bootstrapper = Bootstrapper::new();
	bootstrapper.add(&FOOBIE_DEF).unwrap();
	bootstrapper.add(&PROBE_DEF).unwrap();
	bootstrapper.add(&SESSION_DEF).unwrap();
	let booted = bootstrapper.run().unwrap();

	let order: Vec<_> = booted.records.iter().map(|r| r.extension_id).collect();
	assert_eq!(order, vec!["test::session", "test::foobie", "test::probe"]);
	assert!(PROBE.saw_frozen.load(Ordering::SeqCst));
}

#[test]
fn duplicate_extension_ids_are_rejected() {
	let mut bootstrapper = Bootstrapper::new();
	bootstrapper.add(&FOOBIE_DEF).unwrap();
	assert!(matches!(
		bootstrapper.add(&FOOBIE_DEF),
		Err(BootstrapError::DuplicateExtension("test::foobie"))
	));
	assert_eq!(bootstrapper.len(), 1);
}

#[test]
fn registering_a_marker_twice_fails_configure() {
	let mut bootstrapper = Bootstrapper::new();
	bootstrapper.add(&FOOBIE_DEF).unwrap();
	bootstrapper.add(&FOOBIE_AGAIN_DEF).unwrap();

	match bootstrapper.run() {
		Err(BootstrapError::Configure { id, source }) => {
			assert_eq!(id, "test::foobie_again");
			assert!(matches!(
				source,
				ExtensionError::Wiring(WiringError::AlreadyMapped { .. })
			));
		}
		other => panic!("expected configure failure, got {other:?}"),
	}
}

#[test]
fn after_initialization_errors_surface() {
	let mut bootstrapper = Bootstrapper::new();
	bootstrapper.add(&FAILING_DEF).unwrap();
	assert!(matches!(
		bootstrapper.run(),
		Err(BootstrapError::AfterInitialization {
			id: "test::failing",
			..
		})
	));
}

#[test]
fn default_after_initialization_is_a_no_op() {
	let mut context = InjectionContext::new();
	FOOBIE_SCOPE.configure(&mut context).unwrap();
	context.wiring_mut().freeze();

	FOOBIE_SCOPE.after_initialization(&context).unwrap();
	assert_eq!(context.wiring().len(), 1);
}
