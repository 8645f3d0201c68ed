//! A flat dice expression: any number of dice terms plus a single integer modifier, and the
//! calculations shared by every evaluation mode.

use std::fmt;

use crate::dice::{Dice, Roller};

/// A parsed dice expression such as `2d6+1d4-1`: dice terms in the order they appeared, and one
/// flat modifier accumulated from every bare integer in the notation.
///
/// Everything in an expression is additive. Subtraction in the source notation is folded into the
/// data by the parser - a subtracted dice term carries a negative count and a subtracted integer
/// is already negative in `modifier` - so evaluation never needs to know about operators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[allow(clippy::exhaustive_structs, reason = "The flat shape is the whole point")]
pub struct Expr {
	/// Dice terms in the order they appeared in the notation
	pub terms: Vec<Dice>,

	/// Flat modifier applied to every roll and average
	pub modifier: i32,
}

impl Expr {
	/// Calculates the expected value of the whole expression: the sum of every term's average
	/// plus the modifier. Deterministic, unrounded.
	///
	/// # Examples
	/// ```
	/// use rpdice::Expr;
	///
	/// let expr: Expr = "2d6+3".parse()?;
	/// assert_eq!(expr.average(), 10.0);
	///
	/// let expr: Expr = "1d20-2".parse()?;
	/// assert_eq!(expr.average(), 8.5);
	/// # Ok::<(), rpdice::parse::Error>(())
	/// ```
	#[must_use]
	pub fn average(&self) -> f64 {
		self.terms.iter().map(Dice::average).sum::<f64>() + f64::from(self.modifier)
	}

	/// Rolls every term using the given roller and totals the results along with the modifier.
	///
	/// # Examples
	/// ```
	/// use rpdice::{dice::roller::Max as MaxRoller, Expr};
	///
	/// let expr: Expr = "3d6+2".parse()?;
	/// assert_eq!(expr.roll(&mut MaxRoller), 20);
	/// # Ok::<(), rpdice::parse::Error>(())
	/// ```
	pub fn roll(&self, roller: &mut impl Roller) -> i32 {
		self.terms.iter().map(|dice| roller.roll(dice)).sum::<i32>() + self.modifier
	}
}

impl fmt::Display for Expr {
	/// Formats the expression back into notation. Negative term counts and modifiers render as
	/// subtraction, so output from this re-parses to an equal expression.
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (i, dice) in self.terms.iter().enumerate() {
			if i > 0 && dice.count >= 0 {
				write!(f, "+")?;
			}
			write!(f, "{}", dice)?;
		}

		if self.terms.is_empty() {
			write!(f, "{}", self.modifier)?;
		} else if self.modifier != 0 {
			write!(f, "{:+}", self.modifier)?;
		}

		Ok(())
	}
}
