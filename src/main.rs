//! Command-line front end: roll dice notation, average it, or estimate a chance to hit.

use clap::{Parser, Subcommand};
use rpdice::{dice::roller::FastRand, hit, Advantage, Expr};

/// Printed in place of any result when the notation fails to parse, for every mode alike.
const INVALID: &str = "Invalid Input";

/// Calculator for role-playing dice
#[derive(Parser, Debug)]
#[command(name = "rpdice", version, about)]
struct Cli {
	#[command(subcommand)]
	command: Option<Command>,

	/// Dice notation to roll, e.g. `2d6+3`
	#[arg(value_name = "DICE", allow_hyphen_values = true)]
	dice: Option<String>,
}

/// The calculation modes beyond plain rolling
#[derive(Subcommand, Debug)]
enum Command {
	/// Calculate the average roll
	Avg {
		/// Dice notation to average
		#[arg(value_name = "DICE", allow_hyphen_values = true)]
		dice: Option<String>,
	},

	/// Calculate the chance of hitting an enemy
	Hit {
		/// Attack-bonus notation, e.g. `1d4+5` or `+5`
		#[arg(value_name = "DICE", allow_hyphen_values = true)]
		dice: Option<String>,

		/// The armor class of the target
		#[arg(long, default_value_t = 10)]
		ac: i32,

		/// Whether the roll has advantage [values -1,0,1]
		#[arg(long, alias = "adv", default_value_t = 0, allow_negative_numbers = true)]
		advantage: i32,
	},
}

fn main() {
	let cli = Cli::parse();

	// No notation given means no output at all; a parse failure still prints a line.
	let line = match cli.command {
		None => cli.dice.map(|input| roll(&input)),
		Some(Command::Avg { dice }) => dice.map(|input| average(&input)),
		Some(Command::Hit { dice, ac, advantage }) => {
			dice.map(|input| hit_chance(&input, ac, advantage.into()))
		}
	};

	if let Some(line) = line {
		println!("{}", line);
	}
}

/// Rolls the notation once with a fresh RNG and formats the total.
fn roll(input: &str) -> String {
	input
		.parse::<Expr>()
		.map(|expr| expr.roll(&mut FastRand::default()).to_string())
		.unwrap_or_else(|_| INVALID.to_owned())
}

/// Formats the average of the notation.
fn average(input: &str) -> String {
	input
		.parse::<Expr>()
		.map(|expr| expr.average().to_string())
		.unwrap_or_else(|_| INVALID.to_owned())
}

/// Formats the chance of the notation hitting the given armor class as a percentage.
fn hit_chance(input: &str, armor_class: i32, advantage: Advantage) -> String {
	hit::chance_from_notation(input, armor_class, advantage)
		.map(|percent| format!("{}%", percent))
		.unwrap_or_else(|_| INVALID.to_owned())
}
