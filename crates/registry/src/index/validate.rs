//! Eligibility checks run before any variant is built.
//!
//! Nothing here mutates state. The already-registered check lives with the
//! claim in [`super::runtime`], where it is atomic with respect to other
//! `register` calls.

use rustc_hash::FxHashSet;

use crate::decl::{Enumeration, Parent, Slot};
use crate::error::{EnumError, Result};

/// Rejects open types and types that do not directly refine the variant base.
pub(crate) fn check_shape<E: Enumeration>() -> Result<()> {
	let shape = E::SHAPE;
	if !shape.closed {
		return Err(EnumError::NotClosed { owner: E::NAME });
	}
	match shape.parent {
		Parent::Base => Ok(()),
		Parent::Enumeration(parent) => Err(EnumError::NotDirectRefinement {
			owner: E::NAME,
			parent,
		}),
	}
}

/// Rejects empty declarations, repeated names and slots that already hold a variant.
pub(crate) fn check_slots<E: Enumeration>(slots: &[&'static Slot<E>]) -> Result<()> {
	if slots.is_empty() {
		return Err(EnumError::EmptyDeclaration { owner: E::NAME });
	}

	let mut seen = FxHashSet::default();
	for slot in slots {
		if slot.is_bound() || !seen.insert(slot.name()) {
			return Err(EnumError::IllegalDuplication {
				owner: E::NAME,
				name: slot.name(),
			});
		}
	}
	Ok(())
}
