#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Registration and lookup machinery.
//!
//! # Mental Model
//!
//! 1. **Claim:** [`Registry::register`] inserts a claim for the type into the
//!    claim map with a CAS. Losing the race, or finding any earlier claim,
//!    yields `AlreadyRegistered`.
//! 2. **Validate:** shape and slot checks run under the claim. A failure
//!    resolves the claim as [`TypeState::Rejected`].
//! 3. **Build:** variants are constructed in slot order, ordinal = position,
//!    each passed through its initializer before anyone can see it.
//! 4. **Publish:** slots are bound, then the entry is leaked and written into
//!    the claim once. The write is the release point readers synchronize on.
//!    Binding and publication are two steps: a slot can resolve shortly before
//!    `values` does, never the other way round.
//! 5. **Read:** lookups load the claim map and read the immutable entry.
//!
//! # Invariants
//!
//! - Must publish exactly the declared variants with dense ordinals.
//!   - Enforced in: [`Registry::register`].
//!   - Tested by: [`invariants::test_dense_ordinals_in_declaration_order`]
//!   - Failure symptom: `values` length or ordinals disagree with the declaration.
//!
//! - Must hand out one instance per variant.
//!   - Enforced in: [`crate::decl::Slot`] (write-once cell), [`crate::Variant`] (no `Clone`).
//!   - Tested by: [`invariants::test_value_of_returns_slot_singleton`]
//!   - Failure symptom: identity comparison between a slot and `value_of` fails.
//!
//! - Must never register a type twice, even after a failed attempt.
//!   - Enforced in: `Registry::claim`.
//!   - Tested by: [`invariants::test_rejected_type_stays_blocked`]
//!   - Failure symptom: a second variant set replaces or shadows the first.
//!
//! - Must let exactly one of several concurrent `register` calls for a type win.
//!   - Enforced in: `Registry::claim` (CAS loop).
//!   - Tested by: [`invariants::test_concurrent_register_single_winner`]
//!   - Failure symptom: two threads both observe success for one type.
//!
//! - Must bind every slot before the type's entry becomes visible.
//!   - Enforced in: [`Registry::register`] (bind loop runs before `Pending::publish`).
//!   - Tested by: [`invariants::test_slots_bound_before_publication`]
//!   - Failure symptom: `values` succeeds while a declared slot still reports `NotRegistered`.
//!   - A bind failure after earlier slots were bound leaves those slots holding
//!     variants that are never published. Only a second registry racing on the
//!     same slots can cause it, and registries other than the process-wide one
//!     are crate-private.

mod claim;
mod entry;
mod lookup;
mod runtime;
mod validate;

pub use claim::TypeState;
pub use runtime::Registry;

#[cfg(any(test, doc))]
pub(crate) mod invariants;
