//! Abstractions for rolling [`Dice`] using various means.

use std::iter::Peekable;

#[cfg(feature = "fastrand")]
use fastrand::Rng;

use super::Dice;

/// Rolls dice - what else is there to say?
pub trait Roller {
	/// Rolls a single die, yielding a value in `1..=faces`. A die with zero faces always yields 0.
	#[must_use]
	fn roll_die(&mut self, faces: i32) -> i32;

	/// Rolls a whole set of dice and totals the results.
	///
	/// A negative count subtracts the rolled total rather than adding it, matching the sign
	/// convention of [`Dice::average`].
	fn roll(&mut self, dice: &Dice) -> i32 {
		let mut total = 0;
		for _ in 0..dice.count.unsigned_abs() {
			total += self.roll_die(dice.faces);
		}

		if dice.count < 0 {
			-total
		} else {
			total
		}
	}
}

/// Generates rolls with random values using [fastrand]. Requires the `fastrand` feature (enabled
/// by default).
///
/// # Examples
///
/// ## Default fastrand roller
/// ```
/// use rpdice::dice::{roller::{FastRand as FastRandRoller, Roller}, Dice};
///
/// let mut roller = FastRandRoller::default();
///
/// let dice = Dice::new(4, 6);
/// let total = roller.roll(&dice);
/// assert!((4..=24).contains(&total));
/// ```
///
/// ## Manually seeded fastrand roller
/// ```
/// use rpdice::dice::{roller::{FastRand as FastRandRoller, Roller}, Dice};
///
/// let mut roller = FastRandRoller::with_seed(0x750c38d574400);
/// let _ = roller.roll(&Dice::new(4, 6));
/// ```
#[cfg(feature = "fastrand")]
#[derive(Debug, Clone, Default)]
pub struct FastRand(Rng);

#[cfg(feature = "fastrand")]
impl FastRand {
	/// Creates a new fastrand roller that uses the given RNG instance to generate rolls.
	#[must_use]
	#[inline]
	pub const fn new(rng: Rng) -> Self {
		Self(rng)
	}

	/// Creates a new fastrand roller that uses a pre-seeded RNG instance to generate rolls.
	#[must_use]
	#[inline]
	pub fn with_seed(seed: u64) -> Self {
		Self(Rng::with_seed(seed))
	}
}

#[cfg(feature = "fastrand")]
impl Roller for FastRand {
	/// Rolls a single die using the [`fastrand::Rng`] the roller was created with.
	#[inline]
	fn roll_die(&mut self, faces: i32) -> i32 {
		if faces > 0 {
			self.0.i32(1..=faces)
		} else {
			0
		}
	}
}

/// Generates rolls that always have their max value.
///
/// # Examples
/// ```
/// use rpdice::dice::{roller::{Max as MaxRoller, Roller}, Dice};
///
/// let mut roller = MaxRoller;
/// assert_eq!(roller.roll(&Dice::new(4, 6)), 24);
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Max;

impl Roller for Max {
	/// Rolls a single die, always with the max value (same as the number of faces).
	#[inline]
	fn roll_die(&mut self, faces: i32) -> i32 {
		faces
	}
}

/// Generates rolls that always have a specific value.
///
/// # Examples
/// ```
/// use rpdice::dice::{roller::{Roller, Val as ValRoller}, Dice};
///
/// let mut roller = ValRoller(3);
/// assert_eq!(roller.roll(&Dice::new(4, 6)), 12);
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Val(pub i32);

impl Roller for Val {
	/// Rolls a single die, always with one specific value.
	#[inline]
	fn roll_die(&mut self, _faces: i32) -> i32 {
		self.0
	}
}

/// Generates rolls from an iterator of values. Mainly useful for testing purposes.
///
/// # Examples
/// ```
/// use rpdice::dice::{roller::{Iter as IterRoller, Roller}, Dice};
///
/// let mut roller = IterRoller::new(vec![1, 2, 3, 4]);
/// assert_eq!(roller.roll(&Dice::new(4, 6)), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Iter<I: Iterator<Item = i32>>(Peekable<I>);

impl<I: Iterator<Item = i32>> Iter<I> {
	/// Checks whether the iterator still has values available.
	#[inline]
	pub fn can_roll(&mut self) -> bool {
		self.0.peek().is_some()
	}

	/// Creates a new roller that uses the given iterator to provide roll values.
	#[must_use]
	#[inline]
	pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
		Self(iter.into_iter().peekable())
	}
}

impl<I: Iterator<Item = i32>> Roller for Iter<I> {
	/// Rolls a die with the value from the next iteration.
	///
	/// # Panics
	/// If the iterator has finished, this will panic.
	#[inline]
	#[expect(
		clippy::expect_used,
		reason = "Mostly for testing, otherwise manual checking of can_roll() is expected"
	)]
	fn roll_die(&mut self, _faces: i32) -> i32 {
		self.0.next().expect("iterator is finished")
	}
}
