use std::sync::Once;

use enumera_cards::{CLUB, Card, CardType, DIAMOND, HEART, SPADE, SUITS};
use enumera_registry::{EnumError, Enumeration, TypeState, registry};
use pretty_assertions::assert_eq;

fn cards() -> &'static [&'static Card] {
	static INIT: Once = Once::new();
	INIT.call_once(|| {
		enumera_cards::register().unwrap();
	});
	CardType::values().unwrap()
}

#[test]
fn registers_four_suits_in_order() {
	let values = cards();
	assert_eq!(values.len(), 4);

	let ordinals: Vec<usize> = values.iter().map(|c| c.ordinal()).collect();
	assert_eq!(ordinals, [0, 1, 2, 3]);
	let names: Vec<&str> = values.iter().map(|c| c.name()).collect();
	assert_eq!(names, ["HEART", "DIAMOND", "CLUB", "SPADE"]);

	assert_eq!(CardType::value_of("HEART").unwrap().ordinal(), 0);
	assert_eq!(registry().state::<CardType>(), TypeState::Registered);
}

#[test]
fn value_of_is_the_slot_instance() {
	cards();
	let heart = CardType::value_of("HEART").unwrap();
	assert!(std::ptr::eq(heart, HEART.get().unwrap()));

	for slot in SUITS {
		assert!(std::ptr::eq(CardType::value_of(slot.name()).unwrap(), slot.get().unwrap()));
	}
}

#[test]
fn unknown_symbol_and_fallback() {
	cards();
	assert_eq!(
		CardType::value_of("JOKER").unwrap_err(),
		EnumError::NoSuchSymbol {
			owner: "CardType",
			symbol: "JOKER".into()
		}
	);

	let spade = CardType::value_of("SPADE").unwrap();
	assert!(std::ptr::eq(CardType::value_or_default("JOKER", spade), spade));
}

#[test]
fn second_registration_is_refused() {
	let before = cards();
	assert_eq!(
		enumera_cards::register().unwrap_err(),
		EnumError::AlreadyRegistered { owner: "CardType" }
	);

	let after = CardType::values().unwrap();
	assert!(std::ptr::eq(before, after));
	assert_eq!(after.len(), 4);
}

#[test]
fn descriptions_and_printable_form() {
	cards();
	let descriptions: Vec<&str> = SUITS
		.iter()
		.map(|slot| enumera_cards::description(slot.get().unwrap()))
		.collect();
	assert_eq!(
		descriptions,
		[
			"My heart goes boom boom!",
			"I'm the precious one!",
			"Flowers all around the world!",
			"Lemmy Docet!"
		]
	);
	assert_eq!(CLUB.get().unwrap().to_string(), "Enum[CardType : CLUB]");
}

#[test]
fn cheer_covers_every_suit() {
	cards();
	assert_eq!(enumera_cards::cheer(HEART.get().unwrap()).unwrap(), "yeah heart");
	assert_eq!(enumera_cards::cheer(DIAMOND.get().unwrap()).unwrap(), "yeah diamond");
	assert_eq!(enumera_cards::cheer(CLUB.get().unwrap()).unwrap(), "yeah club");
	assert_eq!(
		enumera_cards::cheer(SPADE.get().unwrap()).unwrap(),
		"yeah the ace of spade"
	);
}
