//! Read accessors over published entries.
//!
//! All reads are a wait-free load of the claim map followed by a lookup in a
//! leaked, immutable [`Entry`]. A type that is still registering or was
//! rejected reads exactly like one that was never registered.

use std::any::TypeId;

use super::entry::Entry;
use super::runtime::Registry;
use crate::decl::Enumeration;
use crate::error::{EnumError, Result};
use crate::variant::Variant;

impl Registry {
	/// All variants of `E` in declaration order.
	pub fn values<E: Enumeration>(&self) -> Result<&'static [&'static Variant<E>]> {
		self.entry::<E>()
			.map(|entry| &*entry.values)
			.ok_or(EnumError::NotRegistered { owner: E::NAME })
	}

	/// The singleton variant of `E` named `symbol`.
	pub fn value_of<E: Enumeration>(&self, symbol: &str) -> Result<&'static Variant<E>> {
		self.find::<E>(symbol).ok_or_else(|| EnumError::NoSuchSymbol {
			owner: E::NAME,
			symbol: symbol.to_owned(),
		})
	}

	/// Like [`Registry::value_of`], returning `fallback` when nothing matches.
	pub fn value_or_default<E: Enumeration>(
		&self,
		symbol: &str,
		fallback: &'static Variant<E>,
	) -> &'static Variant<E> {
		self.find::<E>(symbol).unwrap_or(fallback)
	}

	fn find<E: Enumeration>(&self, symbol: &str) -> Option<&'static Variant<E>> {
		self.entry::<E>()?.get(symbol)
	}

	fn entry<E: Enumeration>(&self) -> Option<&'static Entry<E>> {
		self.claims.load().get(&TypeId::of::<E>())?.entry::<E>()
	}
}
