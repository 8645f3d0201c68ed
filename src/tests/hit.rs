use crate::hit::{self, Advantage};

#[test]
fn flat_attacker_vs_base_armor() {
	assert_eq!(hit::chance(0.0, 10, Advantage::Normal), 55);
}

#[test]
fn normal_roll() {
	assert_eq!(hit::chance(10.0, 15, Advantage::Normal), 80);
	assert_eq!(hit::chance(3.0, 10, Advantage::Normal), 70);
}

#[test]
fn advantage_roll() {
	assert_eq!(hit::chance(5.0, 18, Advantage::Advantage), 64);
}

#[test]
fn advantage_bonus_meets_armor() {
	// The squared formula stops applying once bonus + 1 reaches the armor class; the hit is
	// certain before clamping.
	assert_eq!(hit::chance(10.0, 11, Advantage::Advantage), 99);
	assert_eq!(hit::chance(20.0, 11, Advantage::Advantage), 99);
}

#[test]
fn disadvantage_roll() {
	assert_eq!(hit::chance(0.0, 10, Advantage::Disadvantage), 30);
}

#[test]
fn disadvantage_hopeless_bonus() {
	assert_eq!(hit::chance(-5.0, 20, Advantage::Disadvantage), 1);
}

#[test]
fn rounds_ties_to_even() {
	// (21 + 2.5 - 21) / 20 is exactly 0.125, so the percentage is an exact 12.5.
	assert_eq!(hit::chance(2.5, 21, Advantage::Normal), 12);
}

#[test]
fn clamped_at_extremes() {
	assert_eq!(hit::chance(0.0, 1000, Advantage::Normal), 5);
	assert_eq!(hit::chance(0.0, -1000, Advantage::Normal), 95);
	assert_eq!(hit::chance(0.0, 1000, Advantage::Advantage), 10);
	assert_eq!(hit::chance(0.0, -1000, Advantage::Advantage), 99);
	assert_eq!(hit::chance(0.0, 1000, Advantage::Disadvantage), 1);
	assert_eq!(hit::chance(0.0, -1000, Advantage::Disadvantage), 90);
}

#[test]
fn extreme_armor_classes_saturate() {
	assert_eq!(hit::chance(0.0, i32::MAX, Advantage::Advantage), 10);
	assert_eq!(hit::chance(0.0, i32::MIN, Advantage::Disadvantage), 90);
	assert_eq!(hit::chance(f64::from(i32::MAX), i32::MIN, Advantage::Normal), 95);
}

#[test]
fn notation_with_dice() {
	assert_eq!(hit::chance_from_notation("2d6+3", 15, Advantage::Normal).unwrap(), 80);
}

#[test]
fn pure_modifier_rescued_by_zero_die() {
	assert_eq!(hit::chance_from_notation("+5", 18, Advantage::Advantage).unwrap(), 64);
	assert_eq!(hit::chance_from_notation("-2", 10, Advantage::Normal).unwrap(), 45);
}

#[test]
fn bare_number_becomes_die_faces() {
	// "5" turns into "1d05" when the zero-die prefix is glued on: one five-faced die, average 3.
	assert_eq!(hit::chance_from_notation("5", 10, Advantage::Normal).unwrap(), 70);
}

#[test]
fn zero_die_notation() {
	assert_eq!(hit::chance_from_notation("1d0", 10, Advantage::Normal).unwrap(), 55);
}

#[test]
fn invalid_notation() {
	assert!(hit::chance_from_notation("2dx", 10, Advantage::Normal).is_err());
	assert!(hit::chance_from_notation("abc", 10, Advantage::Normal).is_err());
}

#[test]
fn empty_notation_rejected() {
	assert!(hit::chance_from_notation("", 10, Advantage::Normal).is_err());
}

#[test]
fn advantage_from_flag() {
	assert_eq!(Advantage::from(1), Advantage::Advantage);
	assert_eq!(Advantage::from(-1), Advantage::Disadvantage);
	assert_eq!(Advantage::from(0), Advantage::Normal);
	assert_eq!(Advantage::from(2), Advantage::Normal);
}
