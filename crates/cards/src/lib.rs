//! The four French suits as a closed enumeration.
//!
//! Each suit carries a description filled in by the initialization hook.
//! Call [`register`] once at startup, then use the slots or
//! [`Enumeration::value_of`].

use enumera_registry::{EnumError, Enumeration, Seed, Slot, Variant};
use tracing::debug;

/// Marker type for the card suits.
pub struct CardType;

/// One card suit.
pub type Card = Variant<CardType>;

impl Enumeration for CardType {
	const NAME: &'static str = "CardType";
	type Ext = &'static str;

	fn initialize(seed: &Seed<'_>) -> &'static str {
		let description = match seed.name() {
			"HEART" => "My heart goes boom boom!",
			"DIAMOND" => "I'm the precious one!",
			"CLUB" => "Flowers all around the world!",
			"SPADE" => "Lemmy Docet!",
			_ => "",
		};
		debug!(card = seed.name(), description, "card initialized");
		description
	}
}

pub static HEART: Slot<CardType> = Slot::new("HEART");
pub static DIAMOND: Slot<CardType> = Slot::new("DIAMOND");
pub static CLUB: Slot<CardType> = Slot::new("CLUB");
pub static SPADE: Slot<CardType> = Slot::new("SPADE");

/// Declaration order of the suits.
pub static SUITS: [&Slot<CardType>; 4] = [&HEART, &DIAMOND, &CLUB, &SPADE];

/// Registers [`CardType`] in the process-wide registry.
pub fn register() -> Result<&'static [&'static Card], EnumError> {
	CardType::register(&SUITS)
}

/// The description attached to `card` at registration.
pub fn description(card: &Card) -> &'static str {
	card.ext()
}

/// Branches over every suit by identity.
pub fn cheer(card: &Card) -> Result<&'static str, EnumError> {
	let cheer = if card == HEART.get()? {
		"yeah heart"
	} else if card == DIAMOND.get()? {
		"yeah diamond"
	} else if card == CLUB.get()? {
		"yeah club"
	} else if card == SPADE.get()? {
		"yeah the ace of spade"
	} else {
		return Err(EnumError::NoSuchSymbol {
			owner: CardType::NAME,
			symbol: card.name().to_owned(),
		});
	};
	Ok(cheer)
}
