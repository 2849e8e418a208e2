//! Invariant proofs for registration and lookup.
#![allow(dead_code)]

use std::sync::Barrier;
use std::thread;

use super::claim::TypeState;
use super::runtime::Registry;
use crate::config::RegistryConfig;
use crate::decl::{Enumeration, Shape, Slot};
use crate::error::EnumError;

fn fresh() -> Registry {
	Registry::with_config(RegistryConfig::new("proofs"))
}

struct Weekday;

impl Enumeration for Weekday {
	const NAME: &'static str = "Weekday";
	type Ext = ();
}

/// Invariant: `values` holds every declared variant, ordinals `0..n` in declaration order.
pub(crate) fn inv_dense_ordinals_in_declaration_order() {
	static MON: Slot<Weekday> = Slot::new("MON");
	static TUE: Slot<Weekday> = Slot::new("TUE");
	static WED: Slot<Weekday> = Slot::new("WED");

	let registry = fresh();
	let published = registry.register::<Weekday>(&[&MON, &TUE, &WED]).unwrap();

	let values = registry.values::<Weekday>().unwrap();
	assert!(std::ptr::eq(published, values), "register must return the published view");

	let ordinals: Vec<usize> = values.iter().map(|v| v.ordinal()).collect();
	assert_eq!(ordinals, [0, 1, 2]);
	let names: Vec<&str> = values.iter().map(|v| v.name()).collect();
	assert_eq!(names, ["MON", "TUE", "WED"]);
}

#[cfg_attr(test, test)]
pub(crate) fn test_dense_ordinals_in_declaration_order() {
	inv_dense_ordinals_in_declaration_order()
}

struct Color;

impl Enumeration for Color {
	const NAME: &'static str = "Color";
	type Ext = ();
}

/// Invariant: `value_of` returns the instance bound to the slot, on every call.
pub(crate) fn inv_value_of_returns_slot_singleton() {
	static RED: Slot<Color> = Slot::new("RED");
	static GREEN: Slot<Color> = Slot::new("GREEN");

	let registry = fresh();
	registry.register::<Color>(&[&RED, &GREEN]).unwrap();

	for slot in [&RED, &GREEN] {
		let bound = slot.get().unwrap();
		for _ in 0..3 {
			let found = registry.value_of::<Color>(slot.name()).unwrap();
			assert!(std::ptr::eq(found, bound), "{} resolved to a different instance", slot.name());
			assert_eq!(found, bound);
		}
	}
	assert_ne!(RED.get().unwrap(), GREEN.get().unwrap());
}

#[cfg_attr(test, test)]
pub(crate) fn test_value_of_returns_slot_singleton() {
	inv_value_of_returns_slot_singleton()
}

struct Draft;

impl Enumeration for Draft {
	const NAME: &'static str = "Draft";
	const SHAPE: Shape = Shape::SEALED.open();
	type Ext = ();
}

struct Planet;

impl Enumeration for Planet {
	const NAME: &'static str = "Planet";
	type Ext = ();
}

/// Invariant: once claimed, a type never registers again, whether or not the
/// first attempt succeeded.
pub(crate) fn inv_rejected_type_stays_blocked() {
	static FIRST: Slot<Draft> = Slot::new("FIRST");
	static MERCURY: Slot<Planet> = Slot::new("MERCURY");
	static VENUS: Slot<Planet> = Slot::new("VENUS");

	let registry = fresh();

	assert_eq!(
		registry.register::<Draft>(&[&FIRST]).unwrap_err(),
		EnumError::NotClosed { owner: "Draft" }
	);
	assert_eq!(registry.state::<Draft>(), TypeState::Rejected);
	assert_eq!(
		registry.register::<Draft>(&[&FIRST]).unwrap_err(),
		EnumError::AlreadyRegistered { owner: "Draft" }
	);
	assert_eq!(
		registry.values::<Draft>().unwrap_err(),
		EnumError::NotRegistered { owner: "Draft" }
	);
	assert!(matches!(
		registry.value_of::<Draft>("FIRST"),
		Err(EnumError::NoSuchSymbol { .. })
	));
	assert!(!FIRST.is_bound());

	registry.register::<Planet>(&[&MERCURY, &VENUS]).unwrap();
	assert_eq!(
		registry.register::<Planet>(&[&MERCURY, &VENUS]).unwrap_err(),
		EnumError::AlreadyRegistered { owner: "Planet" }
	);
	let names: Vec<&str> = registry
		.values::<Planet>()
		.unwrap()
		.iter()
		.map(|v| v.name())
		.collect();
	assert_eq!(names, ["MERCURY", "VENUS"]);
}

#[cfg_attr(test, test)]
pub(crate) fn test_rejected_type_stays_blocked() {
	inv_rejected_type_stays_blocked()
}

struct Race;

impl Enumeration for Race {
	const NAME: &'static str = "Race";
	type Ext = ();
}

/// Invariant: concurrent `register` calls for one type produce exactly one winner.
pub(crate) fn inv_concurrent_register_single_winner() {
	const THREADS: usize = 8;
	static A: Slot<Race> = Slot::new("A");
	static B: Slot<Race> = Slot::new("B");

	let registry = fresh();
	let barrier = Barrier::new(THREADS);

	let results: Vec<_> = thread::scope(|s| {
		let handles: Vec<_> = (0..THREADS)
			.map(|_| {
				s.spawn(|| {
					barrier.wait();
					registry.register::<Race>(&[&A, &B]).map(|values| values.len())
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});

	let winners = results.iter().filter(|r| r.is_ok()).count();
	assert_eq!(winners, 1, "exactly one registration must win: {results:?}");
	for result in &results {
		match result {
			Ok(len) => assert_eq!(*len, 2),
			Err(err) => assert_eq!(*err, EnumError::AlreadyRegistered { owner: "Race" }),
		}
	}
	assert_eq!(registry.values::<Race>().unwrap().len(), 2);
}

#[cfg_attr(test, test)]
pub(crate) fn test_concurrent_register_single_winner() {
	inv_concurrent_register_single_winner()
}

struct Tide;

impl Enumeration for Tide {
	const NAME: &'static str = "Tide";
	type Ext = ();
}

/// Invariant: slots are bound before the entry is published, so a reader that
/// sees `values` succeed finds every slot bound to the same instance.
pub(crate) fn inv_slots_bound_before_publication() {
	static HIGH: Slot<Tide> = Slot::new("HIGH");
	static LOW: Slot<Tide> = Slot::new("LOW");
	static SLOTS: [&Slot<Tide>; 2] = [&HIGH, &LOW];

	let registry = fresh();
	let barrier = Barrier::new(2);

	thread::scope(|s| {
		let reader = s.spawn(|| {
			barrier.wait();
			loop {
				if let Ok(values) = registry.values::<Tide>() {
					for (slot, value) in SLOTS.iter().zip(values) {
						let bound = slot.get().expect("published variant without a bound slot");
						assert!(std::ptr::eq(bound, *value));
					}
					return;
				}
				assert_ne!(registry.state::<Tide>(), TypeState::Rejected);
				thread::yield_now();
			}
		});

		barrier.wait();
		registry.register::<Tide>(&SLOTS).unwrap();
		reader.join().unwrap();
	});
}

#[cfg_attr(test, test)]
pub(crate) fn test_slots_bound_before_publication() {
	inv_slots_bound_before_publication()
}
