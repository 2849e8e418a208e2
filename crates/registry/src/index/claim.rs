//! Per-type registration claims.
//!
//! # Role
//!
//! A [`Claim`] is inserted into the registry map the moment a type is first
//! registered. It moves from in-flight to a terminal [`Outcome`] exactly once.
//!
//! # Invariants
//!
//! - The outcome is written once, by the owner of the [`Pending`] guard.
//! - A dropped guard without an outcome (validation failure, panicking hook)
//!   resolves the claim as rejected.

use std::any::{Any, TypeId};
use std::sync::{Arc, OnceLock};

use tracing::warn;

use super::entry::Entry;
use super::runtime::Registry;
use crate::config::RetryPolicy;
use crate::decl::Enumeration;

/// Lifecycle of one enumeration type within a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeState {
	/// Never claimed (or released after a rejection under a retry policy).
	Unregistered,
	/// A `register` call is in flight on another thread.
	Registering,
	/// Variants are published.
	Registered,
	/// Registration failed; the type stays blocked with no variants visible.
	Rejected,
}

pub(crate) type Erased = &'static (dyn Any + Send + Sync);

#[derive(Clone, Copy)]
pub(crate) enum Outcome {
	Registered(Erased),
	Rejected,
}

pub(crate) struct Claim {
	pub(crate) owner: &'static str,
	/// Claim order within the registry.
	pub(crate) seq: u64,
	outcome: OnceLock<Outcome>,
}

impl Claim {
	pub(crate) fn new(owner: &'static str, seq: u64) -> Self {
		Self {
			owner,
			seq,
			outcome: OnceLock::new(),
		}
	}

	pub(crate) fn state(&self) -> TypeState {
		match self.outcome.get() {
			None => TypeState::Registering,
			Some(Outcome::Registered(_)) => TypeState::Registered,
			Some(Outcome::Rejected) => TypeState::Rejected,
		}
	}

	pub(crate) fn entry<E: Enumeration>(&self) -> Option<&'static Entry<E>> {
		match *self.outcome.get()? {
			Outcome::Registered(erased) => erased.downcast_ref::<Entry<E>>(),
			Outcome::Rejected => None,
		}
	}
}

/// Exclusive right to finish the registration of one type.
pub(crate) struct Pending<'r> {
	pub(crate) registry: &'r Registry,
	pub(crate) key: TypeId,
	pub(crate) claim: Arc<Claim>,
}

impl Pending<'_> {
	pub(crate) fn publish<E: Enumeration>(self, entry: &'static Entry<E>) {
		let resolved = self.claim.outcome.set(Outcome::Registered(entry));
		debug_assert!(resolved.is_ok(), "claim for {} resolved twice", self.claim.owner);
	}
}

impl Drop for Pending<'_> {
	fn drop(&mut self) {
		if self.claim.outcome.get().is_some() {
			return;
		}
		let resolved = self.claim.outcome.set(Outcome::Rejected);
		debug_assert!(resolved.is_ok(), "claim for {} resolved twice", self.claim.owner);

		let config = self.registry.config();
		warn!(
			registry = config.label,
			owner = self.claim.owner,
			retry = ?config.retry,
			"enum registration rejected"
		);
		if config.retry == RetryPolicy::AllowAfterRejection {
			self.registry.release(self.key, &self.claim);
		}
	}
}
