//! The singleton variant value.
//!
//! A [`Variant`] is only ever built by the registrar and only ever handed out
//! as `&'static Variant<E>`. It has no `Clone`, no `Serialize`, no public
//! constructor, and its `Deserialize` impl always fails, so a second instance
//! of a published variant cannot be produced.
//!
//! ```compile_fail
//! use enumera_registry::{Enumeration, Slot, Variant};
//!
//! struct Suit;
//! impl Enumeration for Suit {
//! 	const NAME: &'static str = "Suit";
//! 	type Ext = ();
//! }
//!
//! static HEART: Slot<Suit> = Slot::new("HEART");
//!
//! let heart = HEART.get().unwrap();
//! let copy: Variant<Suit> = (*heart).clone();
//! ```
//!
//! Persist the symbol name instead of the variant:
//!
//! ```compile_fail
//! use enumera_registry::{Enumeration, Slot};
//!
//! struct Suit;
//! impl Enumeration for Suit {
//! 	const NAME: &'static str = "Suit";
//! 	type Ext = ();
//! }
//!
//! static HEART: Slot<Suit> = Slot::new("HEART");
//!
//! let heart = HEART.get().unwrap();
//! let json = serde_json::to_string(heart).unwrap();
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::decl::Enumeration;
use crate::error::EnumError;

/// One named, ordinal-tagged member of the enumeration `E`.
pub struct Variant<E: Enumeration> {
	name: &'static str,
	ordinal: usize,
	ext: E::Ext,
	owner: PhantomData<fn() -> E>,
}

impl<E: Enumeration> Variant<E> {
	pub(crate) fn new(name: &'static str, ordinal: usize, ext: E::Ext) -> Self {
		Self {
			name,
			ordinal,
			ext,
			owner: PhantomData,
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Zero-based position in declaration order.
	pub fn ordinal(&self) -> usize {
		self.ordinal
	}

	pub fn owner(&self) -> &'static str {
		E::NAME
	}

	/// Extension data filled in by the initialization hook.
	pub fn ext(&self) -> &E::Ext {
		&self.ext
	}
}

// Identity equality. Variants are singletons, so this agrees with comparing
// `(owner, name)`.
impl<E: Enumeration> PartialEq for Variant<E> {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self, other)
	}
}

impl<E: Enumeration> Eq for Variant<E> {}

impl<E: Enumeration> Hash for Variant<E> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		E::NAME.hash(state);
		self.name.hash(state);
	}
}

impl<E: Enumeration> PartialOrd for Variant<E> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<E: Enumeration> Ord for Variant<E> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.ordinal.cmp(&other.ordinal)
	}
}

impl<E: Enumeration> fmt::Display for Variant<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Enum[{} : {}]", E::NAME, self.name)
	}
}

impl<E: Enumeration> fmt::Debug for Variant<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Variant")
			.field("owner", &E::NAME)
			.field("name", &self.name)
			.field("ordinal", &self.ordinal)
			.finish()
	}
}

impl<'de, E: Enumeration> Deserialize<'de> for Variant<E> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let _ = deserializer;
		Err(D::Error::custom(EnumError::IllegalReconstruction { owner: E::NAME }))
	}
}
