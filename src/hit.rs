//! Chance-to-hit estimation for d20 attack rolls against an armor class.

#[cfg(feature = "parse")]
use crate::{expr::Expr, parse};

/// Advantage state of an attack roll: roll two d20s and keep the higher (advantage) or lower
/// (disadvantage) one, or just roll a single die.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "The three states are fixed by the game rules")]
pub enum Advantage {
	/// Roll twice, keep the lower
	Disadvantage,

	/// Single roll
	#[default]
	Normal,

	/// Roll twice, keep the higher
	Advantage,
}

impl From<i32> for Advantage {
	/// Converts the conventional `-1`/`0`/`1` command-line flag into an advantage state.
	/// Anything out of range counts as a normal roll.
	fn from(flag: i32) -> Self {
		match flag {
			1 => Self::Advantage,
			-1 => Self::Disadvantage,
			_ => Self::Normal,
		}
	}
}

/// Estimates the chance that a d20 roll plus the given average bonus meets or exceeds an armor
/// class, as a whole percentage.
///
/// A natural 20 always hits and a natural 1 always misses, so the result is clamped away from 0%
/// and 100%; the exact bounds depend on the advantage state, since rolling two dice shifts how
/// likely the extremes are. Percentages round ties to even, and the clamping makes the result
/// well-defined for arbitrarily extreme armor classes and bonuses.
///
/// # Examples
/// ```
/// use rpdice::{hit, Advantage};
///
/// assert_eq!(hit::chance(0.0, 10, Advantage::Normal), 55);
/// assert_eq!(hit::chance(0.0, 10, Advantage::Disadvantage), 30);
/// ```
#[must_use]
pub fn chance(bonus: f64, armor_class: i32, advantage: Advantage) -> i32 {
	let ac = f64::from(armor_class);

	let (chance, min, max) = match advantage {
		Advantage::Advantage => {
			// The square-of-the-miss-chance formula needs the bonus (plus one) to fall short
			// of the armor class; past that the hit is certain before clamping.
			let chance = if bonus + 1.0 < ac {
				1.0 - (ac - bonus - 1.0).powi(2) / 400.0
			} else {
				1.0
			};
			(chance, 10, 99)
		}
		Advantage::Disadvantage => {
			// Squaring only describes a probability while the gap is smaller than the die.
			let chance = if 21.0 + bonus - ac > 0.0 {
				(21.0 + bonus - ac).powi(2) / 400.0
			} else {
				0.0
			};
			(chance, 1, 90)
		}
		Advantage::Normal => ((21.0 + bonus - ac) / 20.0, 5, 95),
	};

	percent(chance).clamp(min, max)
}

/// Converts a probability to a whole percentage, rounding ties to even. Out-of-range values
/// saturate and are left for the caller's clamp.
#[expect(clippy::cast_possible_truncation, reason = "The cast saturates, which the clamp finishes")]
fn percent(chance: f64) -> i32 {
	(chance * 100.0).round_ties_even() as i32
}

/// Parses attack-bonus notation and estimates the hit chance against an armor class.
///
/// The notation does not need to contain any dice: an input without a `d`, such as a bare `+5`,
/// gets a zero-faced die term (`1d0`) prepended so that it parses like any other expression
/// without affecting the average.
///
/// # Errors
/// Any parse failure is passed through unchanged; no partial result is produced. An empty input
/// is rejected rather than rescued.
///
/// # Examples
/// ```
/// use rpdice::{hit, Advantage};
///
/// assert_eq!(hit::chance_from_notation("2d6+3", 15, Advantage::Normal)?, 80);
/// assert_eq!(hit::chance_from_notation("+5", 18, Advantage::Advantage)?, 64);
/// # Ok::<(), rpdice::parse::Error>(())
/// ```
#[cfg(feature = "parse")]
pub fn chance_from_notation(
	input: &str,
	armor_class: i32,
	advantage: Advantage,
) -> Result<i32, parse::Error> {
	let input = input.to_lowercase();
	if input.is_empty() {
		return Err(parse::Error::NoDiceMarker);
	}

	let expr: Expr = if input.contains('d') {
		input.parse()?
	} else {
		format!("1d0{}", input).parse()?
	};

	Ok(chance(expr.average(), armor_class, advantage))
}
