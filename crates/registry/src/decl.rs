//! Client-side declaration of an enumeration.
//!
//! A client type implements [`Enumeration`] and owns one `static` [`Slot`] per
//! variant. Registration fills every slot exactly once; from then on the slot
//! and the registry hand out the same `&'static` [`Variant`].

use std::fmt;
use std::sync::OnceLock;

use crate::error::{EnumError, Result};
use crate::variant::Variant;

/// Declared parent of an enumeration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
	/// The abstract variant base. The only parent accepted at registration.
	Base,
	/// Another enumeration, by name.
	Enumeration(&'static str),
}

/// Structural declaration checked before any variant is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
	/// Whether the type forbids further specialization.
	pub closed: bool,
	/// What the type refines.
	pub parent: Parent,
}

impl Shape {
	/// Closed, directly refining the variant base.
	pub const SEALED: Shape = Shape {
		closed: true,
		parent: Parent::Base,
	};

	/// Returns this shape marked open for specialization.
	pub const fn open(self) -> Self {
		Shape {
			closed: false,
			parent: self.parent,
		}
	}

	/// Returns this shape refining another enumeration.
	pub const fn extending(self, parent: &'static str) -> Self {
		Shape {
			closed: self.closed,
			parent: Parent::Enumeration(parent),
		}
	}
}

impl Default for Shape {
	fn default() -> Self {
		Self::SEALED
	}
}

/// What an initialization hook knows about the variant it is preparing.
#[derive(Debug, Clone, Copy)]
pub struct Seed<'a> {
	name: &'a str,
	ordinal: usize,
	owner: &'static str,
}

impl<'a> Seed<'a> {
	pub(crate) fn new(name: &'a str, ordinal: usize, owner: &'static str) -> Self {
		Self { name, ordinal, owner }
	}

	pub fn name(&self) -> &'a str {
		self.name
	}

	pub fn ordinal(&self) -> usize {
		self.ordinal
	}

	pub fn owner(&self) -> &'static str {
		self.owner
	}
}

/// Builds the extension payload of one variant.
pub type Initializer<E> = fn(&Seed<'_>) -> <E as Enumeration>::Ext;

/// A closed enumeration type.
///
/// Implementors are usually zero-sized markers; the variants themselves are
/// [`Variant<Self>`] values published into the type's [`Slot`]s by
/// [`Registry::register`](crate::Registry::register).
pub trait Enumeration: Sized + 'static {
	/// Name used in error messages and the printable form of each variant.
	const NAME: &'static str;

	/// Structural declaration. Anything other than [`Shape::SEALED`] is rejected.
	const SHAPE: Shape = Shape::SEALED;

	/// Extra per-variant data populated by [`Enumeration::initialize`].
	type Ext: Default + Send + Sync + 'static;

	/// Called once per variant, after construction and before publication.
	fn initialize(seed: &Seed<'_>) -> Self::Ext {
		let _ = seed;
		Self::Ext::default()
	}

	/// Registers this type in the process-wide registry.
	fn register(slots: &[&'static Slot<Self>]) -> Result<&'static [&'static Variant<Self>]> {
		crate::registry().register::<Self>(slots)
	}

	/// All variants in declaration order.
	fn values() -> Result<&'static [&'static Variant<Self>]> {
		crate::registry().values::<Self>()
	}

	/// The variant named `symbol`.
	fn value_of(symbol: &str) -> Result<&'static Variant<Self>> {
		crate::registry().value_of::<Self>(symbol)
	}

	/// The variant named `symbol`, or `fallback`.
	fn value_or_default(symbol: &str, fallback: &'static Variant<Self>) -> &'static Variant<Self> {
		crate::registry().value_or_default::<Self>(symbol, fallback)
	}
}

/// Declared placeholder for one variant of `E`.
///
/// Meant to live in a `static`. The slot is bound once, by the registration
/// that lists it, and never changes afterwards.
pub struct Slot<E: Enumeration> {
	name: &'static str,
	init: Option<Initializer<E>>,
	cell: OnceLock<&'static Variant<E>>,
}

impl<E: Enumeration> Slot<E> {
	/// A slot initialized by [`Enumeration::initialize`].
	pub const fn new(name: &'static str) -> Self {
		Self {
			name,
			init: None,
			cell: OnceLock::new(),
		}
	}

	/// A slot with its own initializer, used instead of the type-level hook.
	pub const fn with_init(name: &'static str, init: Initializer<E>) -> Self {
		Self {
			name,
			init: Some(init),
			cell: OnceLock::new(),
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// The published variant, or `NotRegistered` before registration.
	pub fn get(&self) -> Result<&'static Variant<E>> {
		self.cell
			.get()
			.copied()
			.ok_or(EnumError::NotRegistered { owner: E::NAME })
	}

	pub fn is_bound(&self) -> bool {
		self.cell.get().is_some()
	}

	pub(crate) fn initializer(&self) -> Initializer<E> {
		self.init.unwrap_or(E::initialize as Initializer<E>)
	}

	pub(crate) fn bind(&self, variant: &'static Variant<E>) -> Result<()> {
		self.cell.set(variant).map_err(|_| EnumError::IllegalDuplication {
			owner: E::NAME,
			name: self.name,
		})
	}
}

impl<E: Enumeration> fmt::Debug for Slot<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Slot")
			.field("owner", &E::NAME)
			.field("name", &self.name)
			.field("bound", &self.is_bound())
			.finish()
	}
}
