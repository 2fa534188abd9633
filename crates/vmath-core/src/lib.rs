//! # vmath-core
//!
//! Foundation types for the vmath value-type library.
//!
//! This crate provides what every other vmath crate builds on:
//!
//! - [`Scalar`] - Floating-point abstraction implemented for `f32` and `f64`
//! - [`Error`], [`Result`] - The error taxonomy shared by all value types
//! - [`parse_tuple`], [`parse_rows`] - The `(a, b, c)` / `|a, b|` text format
//!
//! ## Crate Structure
//!
//! ```text
//! vmath-core (this crate)
//!    ^
//!    |
//!    +-- vmath-linalg (vectors, matrices, quaternions, complex numbers)
//!    +-- vmath-color (RGBA float color)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod parse;
pub mod scalar;

pub use error::*;
pub use parse::{parse_rows, parse_tuple, write_rows, write_tuple};
pub use scalar::*;
