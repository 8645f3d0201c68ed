//! Unit tests for the whole crate.

#![allow(clippy::unwrap_used, reason = "An unwrap failure here is a test failure")]

mod hit;
