//! Installing the process-wide registry. Kept in its own test binary because
//! the global can only be installed once per process.

use enumera_registry::{
	EnumError, Enumeration, RegistryConfig, RetryPolicy, Slot, TypeState, registry, try_init,
};
use pretty_assertions::assert_eq;

struct Flaky;

impl Enumeration for Flaky {
	const NAME: &'static str = "Flaky";
	type Ext = ();
}

static ONE: Slot<Flaky> = Slot::new("ONE");

#[test]
fn try_init_installs_before_first_use_only() {
	let config = RegistryConfig::new("global").with_retry(RetryPolicy::AllowAfterRejection);
	let Ok(installed) = try_init(config) else {
		panic!("nothing touched the global registry yet");
	};
	assert!(std::ptr::eq(installed, registry()));
	assert_eq!(registry().config(), config);

	let Err(late) = try_init(RegistryConfig::default()) else {
		panic!("a second install must be refused");
	};
	assert!(std::ptr::eq(late, installed));
	assert_eq!(registry().config().label, "global");

	// The installed retry policy applies to the global registry.
	assert_eq!(
		Flaky::register(&[]).unwrap_err(),
		EnumError::EmptyDeclaration { owner: "Flaky" }
	);
	assert_eq!(registry().state::<Flaky>(), TypeState::Unregistered);

	let values = Flaky::register(&[&ONE]).unwrap();
	assert_eq!(values.len(), 1);
	assert!(std::ptr::eq(values[0], ONE.get().unwrap()));
	assert_eq!(
		Flaky::register(&[&ONE]).unwrap_err(),
		EnumError::AlreadyRegistered { owner: "Flaky" }
	);
}
