#![doc = pretty_readme::docify!("README.md", "https://docs.rs/rpdice/latest/rpdice/", "./")]
#![deny(macro_use_extern_crate, meta_variable_misuse, unit_bindings)]
#![warn(
	explicit_outlives_requirements,
	missing_docs,
	missing_debug_implementations,
	unreachable_pub,
	unused_crate_dependencies,
	unused_qualifications,
	clippy::pedantic,
	clippy::absolute_paths,
	clippy::allow_attributes_without_reason,
	clippy::dbg_macro,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::if_then_some_else_none,
	clippy::lossy_float_literal,
	clippy::map_err_ignore,
	clippy::missing_const_for_fn,
	clippy::missing_docs_in_private_items,
	clippy::panic_in_result_fn,
	clippy::print_stderr,
	clippy::print_stdout,
	clippy::redundant_type_annotations,
	clippy::str_to_string,
	clippy::tests_outside_test_module,
	clippy::unwrap_in_result,
	clippy::unwrap_used
)]

pub mod dice;
pub mod expr;
pub mod hit;
#[cfg(feature = "parse")]
pub mod parse;

pub use dice::Dice;
pub use expr::Expr;
pub use hit::Advantage;
#[cfg(feature = "parse")]
pub use parse::expr as parser;

#[cfg(test)]
mod tests;

#[cfg(feature = "build-binary")]
use clap as _;
