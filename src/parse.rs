#![cfg(feature = "parse")]

//! Parsers for dice notation, turning strings like `2d6+3` into [`Expr`]s.

use std::{iter::once, str::FromStr};

use chumsky::prelude::*;

use crate::{dice::Dice, expr::Expr};

/// A single signed element of a flat expression: a dice term or a bare integer.
#[derive(Debug, Clone)]
enum Element {
	/// Dice term like `2d6`
	Dice(Dice),
	/// Bare integer destined for the modifier
	Num(i32),
}

/// Generates a parser for an unsigned integer literal. Unlike [`text::int`], leading zeroes are
/// accepted (`05` is `5`), matching ordinary integer parsing.
fn digits<'src>() -> impl Parser<'src, &'src str, &'src str, extra::Err<Rich<'src, char>>> + Clone {
	any::<&'src str, extra::Err<Rich<'src, char>>>()
		.filter(char::is_ascii_digit)
		.repeated()
		.at_least(1)
		.to_slice()
}

/// Generates a parser that specifically handles dice terms like "2d6" or "1d20".
/// The count is required: "d20" is not a valid term.
pub fn dice_part<'src>() -> impl Parser<'src, &'src str, Dice, extra::Err<Rich<'src, char>>> + Clone {
	digits()
		.then_ignore(just('d'))
		.then(digits())
		.try_map(|(count, faces), span| {
			let count = count
				.parse()
				.map_err(|err| Rich::custom(span, format!("Dice count: {}", err)))?;
			let faces = faces
				.parse()
				.map_err(|err| Rich::custom(span, format!("Die faces: {}", err)))?;

			Ok(Dice::new(count, faces))
		})
}

/// Generates a parser that specifically handles dice terms like "2d6" or "1d20"
/// and expects end of input
pub fn dice<'src>() -> impl Parser<'src, &'src str, Dice, extra::Err<Rich<'src, char>>> + Clone {
	dice_part().then_ignore(end())
}

/// Generates a parser that handles a full flat expression: dice terms and integer modifiers
/// joined by `+` and `-`, with an optional sign on the first element.
///
/// A `-` negates the element it precedes - the count of a dice term, or the integer itself -
/// so the resulting [`Expr`] is purely additive.
pub fn expr_part<'src>() -> impl Parser<'src, &'src str, Expr, extra::Err<Rich<'src, char>>> + Clone {
	let sign = choice((just('+').to(1i32), just('-').to(-1i32))).padded();

	let element = choice((
		dice_part().map(Element::Dice),
		digits().try_map(|num: &str, span| {
			num.parse()
				.map(Element::Num)
				.map_err(|err| Rich::custom(span, format!("Modifier: {}", err)))
		}),
	))
	.padded();

	sign.clone()
		.or_not()
		.then(element.clone())
		.then(sign.then(element).repeated().collect::<Vec<_>>())
		.map(|((lead, first), rest)| {
			let mut expr = Expr::default();
			for (sign, element) in once((lead.unwrap_or(1), first)).chain(rest) {
				match element {
					Element::Dice(mut dice) => {
						dice.count *= sign;
						expr.terms.push(dice);
					}
					Element::Num(num) => expr.modifier += sign * num,
				}
			}
			expr
		})
}

/// Generates a parser that handles a full flat expression and expects end of input
pub fn expr<'src>() -> impl Parser<'src, &'src str, Expr, extra::Err<Rich<'src, char>>> + Clone {
	expr_part().then_ignore(end())
}

/// An error produced while parsing dice notation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// The input contains no `d` at all, so there is no dice term to work with
	#[error("no dice marker (`d`) in input")]
	NoDiceMarker,

	/// Some part of the input that should be an integer could not be parsed as one
	#[error("invalid number: {0}")]
	InvalidNumber(String),
}

/// Joins a parser's errors into a single [`Error::InvalidNumber`].
fn invalid(errs: &[Rich<char>]) -> Error {
	Error::InvalidNumber(errs.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))
}

impl FromStr for Dice {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lc = s.to_lowercase();
		if !lc.contains('d') {
			return Err(Error::NoDiceMarker);
		}

		let result = dice().parse(&lc).into_result().map_err(|errs| invalid(&errs));
		result
	}
}

impl FromStr for Expr {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lc = s.to_lowercase();
		if !lc.contains('d') {
			return Err(Error::NoDiceMarker);
		}

		let result = expr().parse(&lc).into_result().map_err(|errs| invalid(&errs));
		result
	}
}
