//! Console walkthrough of the `CardType` enumeration.

use anyhow::Context;
use clap::Parser;
use enumera_cards::{CardType, HEART, SPADE};
use enumera_registry::Enumeration;
use tracing::info;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "enumera-cards")]
#[command(about = "Register the card suits and walk through lookups")]
struct Args {
	/// Suit to describe; unknown names fall back to SPADE
	#[arg(short, long, value_name = "NAME", default_value = "HEART")]
	card: String,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if args.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.with_writer(std::io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	enumera_cards::register().context("registering CardType")?;

	let heart = HEART.get()?;
	println!(
		"card type: {} description: {}",
		heart.name(),
		enumera_cards::description(heart)
	);

	let card = CardType::value_or_default(&args.card, SPADE.get()?);
	info!(requested = %args.card, resolved = card.name(), "card selected");

	let looked_up = CardType::value_of(card.name()).with_context(|| format!("looking up {}", card.name()))?;
	println!("they are the same: {}", std::ptr::eq(looked_up, card));

	println!(
		"card type: {} description: {}",
		card.name(),
		enumera_cards::description(card)
	);
	println!("card type: {card}");
	println!("{}", enumera_cards::cheer(card)?);

	for value in CardType::values()? {
		println!("{value}");
	}

	Ok(())
}
