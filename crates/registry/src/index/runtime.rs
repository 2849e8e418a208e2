//! Registry container and the registrar.
//!
//! # Role
//!
//! This module owns the claim map and turns a slot list into a published
//! variant set. Lookups live in [`super::lookup`].
//!
//! # Invariants
//!
//! - Claiming a type is a single CAS on the claim map, so two `register` calls
//!   for one type never both proceed (see `invariants::test_concurrent_register_single_winner`).
//! - A type's entry is published only after every variant was built and every
//!   slot bound (see `invariants::test_rejected_type_stays_blocked` and
//!   `invariants::test_slots_bound_before_publication`).

use std::any::TypeId;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::claim::{Claim, Pending, TypeState};
use super::entry::Entry;
use super::validate;
use crate::config::RegistryConfig;
use crate::decl::{Enumeration, Seed, Slot};
use crate::error::{EnumError, Result};
use crate::variant::Variant;

type ClaimMap = FxHashMap<TypeId, Arc<Claim>>;

/// Process-wide store of enumeration types and their variants.
///
/// Reads are wait-free loads of the current claim map. Writes only happen in
/// [`Registry::register`], once per type.
pub struct Registry {
	config: RegistryConfig,
	pub(super) claims: ArcSwap<ClaimMap>,
	next_seq: AtomicU64,
}

impl Registry {
	pub(crate) fn with_config(config: RegistryConfig) -> Self {
		Self {
			config,
			claims: ArcSwap::from_pointee(ClaimMap::default()),
			next_seq: AtomicU64::new(0),
		}
	}

	pub fn config(&self) -> RegistryConfig {
		self.config
	}

	/// Registers `E` with `slots` in declaration order.
	///
	/// Each slot gets the ordinal of its position. The initializer of every
	/// slot runs before anything is published; on success every slot is bound
	/// and the returned view equals [`Registry::values`].
	///
	/// Any failure leaves no variant visible and, under the default
	/// [`RetryPolicy`](crate::RetryPolicy), blocks `E` for the rest of the process.
	pub fn register<E: Enumeration>(
		&self,
		slots: &[&'static Slot<E>],
	) -> Result<&'static [&'static Variant<E>]> {
		let pending = self.claim::<E>()?;

		validate::check_shape::<E>()?;
		validate::check_slots(slots)?;

		let mut values = Vec::with_capacity(slots.len());
		for (ordinal, slot) in slots.iter().enumerate() {
			let seed = Seed::new(slot.name(), ordinal, E::NAME);
			let ext = (slot.initializer())(&seed);
			let variant: &'static Variant<E> = Box::leak(Box::new(Variant::new(slot.name(), ordinal, ext)));
			debug!(registry = self.config.label, owner = E::NAME, name = variant.name(), ordinal, "variant built");
			values.push(variant);
		}

		// Bind before publishing: a visible entry implies bound slots.
		for (slot, &variant) in slots.iter().zip(&values) {
			slot.bind(variant)?;
		}

		let entry: &'static Entry<E> = Box::leak(Box::new(Entry::new(values)));
		pending.publish(entry);

		let published: &'static [&'static Variant<E>] = &entry.values;
		info!(registry = self.config.label, owner = E::NAME, variants = published.len(), "enum registered");
		Ok(published)
	}

	/// Read-only eligibility check for `E`.
	///
	/// Reports `AlreadyRegistered` for any claimed type, then the structural
	/// errors `register` would raise.
	pub fn validate<E: Enumeration>(&self) -> Result<()> {
		if self.claims.load().contains_key(&TypeId::of::<E>()) {
			return Err(EnumError::AlreadyRegistered { owner: E::NAME });
		}
		validate::check_shape::<E>()
	}

	pub fn state<E: Enumeration>(&self) -> TypeState {
		self.claims
			.load()
			.get(&TypeId::of::<E>())
			.map_or(TypeState::Unregistered, |claim| claim.state())
	}

	/// Names of every registered type, in claim order.
	pub fn registered(&self) -> Vec<&'static str> {
		let claims = self.claims.load();
		let mut done: Vec<&Arc<Claim>> = claims
			.values()
			.filter(|claim| claim.state() == TypeState::Registered)
			.collect();
		done.sort_by_key(|claim| claim.seq);
		done.into_iter().map(|claim| claim.owner).collect()
	}

	/// Returns the number of registered types.
	pub fn len(&self) -> usize {
		self.claims
			.load()
			.values()
			.filter(|claim| claim.state() == TypeState::Registered)
			.count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn claim<E: Enumeration>(&self) -> Result<Pending<'_>> {
		let key = TypeId::of::<E>();
		let claim = Arc::new(Claim::new(E::NAME, self.next_seq.fetch_add(1, Ordering::Relaxed)));

		loop {
			let old = self.claims.load_full();
			if old.contains_key(&key) {
				return Err(EnumError::AlreadyRegistered { owner: E::NAME });
			}

			let mut next = (*old).clone();
			next.insert(key, Arc::clone(&claim));

			let prev = self.claims.compare_and_swap(&old, Arc::new(next));
			if Arc::ptr_eq(&prev, &old) {
				break;
			}
			// Lost the CAS to another writer; re-check against the new map.
		}

		debug!(registry = self.config.label, owner = E::NAME, "enum claimed");
		Ok(Pending {
			registry: self,
			key,
			claim,
		})
	}

	/// Drops `claim` from the map if it is still the one stored under `key`.
	pub(super) fn release(&self, key: TypeId, claim: &Arc<Claim>) {
		self.claims.rcu(|current| {
			let mut next = (**current).clone();
			if next.get(&key).is_some_and(|stored| Arc::ptr_eq(stored, claim)) {
				next.remove(&key);
			}
			next
		});
		debug!(registry = self.config.label, owner = claim.owner, "enum claim released");
	}
}

