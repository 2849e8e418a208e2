//! Closed enumerations of singleton variants.
//!
//! This crate provides the registry behind named, ordered, closed variant sets:
//! - [`Enumeration`]: Trait a client type implements to declare itself
//! - [`Slot`]: Static placeholder a variant is published into
//! - [`Variant`]: The singleton value, compared by identity
//! - [`Registry`]: Validates, builds and publishes variant sets, and serves lookups
//! - [`EnumError`]: Registration, lookup and lifecycle failures
//!
//! # Example
//!
//! ```
//! use enumera_registry::{Enumeration, Seed, Slot};
//!
//! struct Suit;
//!
//! impl Enumeration for Suit {
//! 	const NAME: &'static str = "Suit";
//! 	type Ext = usize;
//!
//! 	fn initialize(seed: &Seed<'_>) -> usize {
//! 		seed.name().len()
//! 	}
//! }
//!
//! static HEART: Slot<Suit> = Slot::new("HEART");
//! static SPADE: Slot<Suit> = Slot::new("SPADE");
//!
//! Suit::register(&[&HEART, &SPADE])?;
//!
//! let spade = Suit::value_of("SPADE")?;
//! assert_eq!(spade.ordinal(), 1);
//! assert_eq!(*spade.ext(), 5);
//! assert_eq!(spade.to_string(), "Enum[Suit : SPADE]");
//! assert!(std::ptr::eq(Suit::value_of("HEART")?, HEART.get()?));
//! assert_eq!(Suit::value_or_default("JOKER", spade), spade);
//! # Ok::<(), enumera_registry::EnumError>(())
//! ```

mod config;
mod db;
mod decl;
mod error;
mod index;
mod variant;

pub use config::{RegistryConfig, RetryPolicy};
pub use db::{registry, try_init};
pub use decl::{Enumeration, Initializer, Parent, Seed, Shape, Slot};
pub use error::{EnumError, ErrorClass, Result};
pub use index::{Registry, TypeState};
pub use variant::Variant;
