//! Text format shared by all vmath value types.
//!
//! Vectors, complex numbers, quaternions and colors format as a
//! parenthesized, comma-separated tuple:
//!
//! ```text
//! (1, 2)          Vector2
//! (1, 2, 3)       Vector3
//! (w, x, y, z)    Quaternion
//! ```
//!
//! Matrices format one row per line between vertical bars:
//!
//! ```text
//! |1, 0|
//! |0, 1|
//! ```
//!
//! Components use the shortest representation that parses back to the
//! same value, so `format` followed by `parse` is lossless.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::scalar::Scalar;

fn tuple_regex() -> &'static Regex {
    static TUPLE: OnceLock<Regex> = OnceLock::new();
    TUPLE.get_or_init(|| Regex::new(r"^\s*\((?<body>.*)\)\s*$").expect("tuple pattern is valid"))
}

fn row_regex() -> &'static Regex {
    static ROW: OnceLock<Regex> = OnceLock::new();
    ROW.get_or_init(|| Regex::new(r"^\s*\|(?<body>.*)\|\s*$").expect("row pattern is valid"))
}

/// Parses `N` comma-separated scalars from the body of a tuple or row.
fn parse_components<T: Scalar, const N: usize>(
    body: &str,
    kind: &'static str,
    input: &str,
) -> Result<[T; N]> {
    let parts: Vec<&str> = body.split(',').collect();
    if parts.len() != N {
        return Err(Error::parse(
            kind,
            input,
            format!("expected {N} components, found {}", parts.len()),
        ));
    }

    let mut out = [T::ZERO; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .trim()
            .parse::<T>()
            .map_err(|e| Error::parse(kind, input, format!("{:?}: {e}", part.trim())))?;
    }
    Ok(out)
}

/// Parses a parenthesized tuple of `N` scalars.
///
/// # Example
///
/// ```
/// use vmath_core::parse_tuple;
///
/// let [x, y] = parse_tuple::<f64, 2>("(1.5, -2)", "Vector2").unwrap();
/// assert_eq!((x, y), (1.5, -2.0));
///
/// assert!(parse_tuple::<f64, 2>("1.5, -2", "Vector2").is_err());
/// assert!(parse_tuple::<f64, 3>("(1.5, -2)", "Vector3").is_err());
/// ```
pub fn parse_tuple<T: Scalar, const N: usize>(input: &str, kind: &'static str) -> Result<[T; N]> {
    let result = match tuple_regex().captures(input) {
        Some(caps) => parse_components::<T, N>(&caps["body"], kind, input),
        None => Err(Error::parse(kind, input, "unsuccessful match")),
    };
    if let Err(e) = &result {
        tracing::debug!(kind, input, error = %e, "tuple parse failed");
    }
    result
}

/// Parses an `R`x`C` matrix written as one `|a, b, ...|` row per line.
///
/// Blank lines are ignored.
pub fn parse_rows<T: Scalar, const R: usize, const C: usize>(
    input: &str,
    kind: &'static str,
) -> Result<[[T; C]; R]> {
    let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() != R {
        let e = Error::parse(kind, input, format!("expected {R} rows, found {}", lines.len()));
        tracing::debug!(kind, error = %e, "matrix parse failed");
        return Err(e);
    }

    let mut rows = [[T::ZERO; C]; R];
    for (row, line) in rows.iter_mut().zip(lines) {
        let caps = row_regex().captures(line).ok_or_else(|| {
            let e = Error::parse(kind, input, format!("malformed row {line:?}"));
            tracing::debug!(kind, error = %e, "matrix parse failed");
            e
        })?;
        *row = parse_components::<T, C>(&caps["body"], kind, input)?;
    }
    Ok(rows)
}

/// Writes `(a, b, ...)`.
pub fn write_tuple<T: fmt::Display>(f: &mut fmt::Formatter<'_>, components: &[T]) -> fmt::Result {
    f.write_str("(")?;
    write_list(f, components)?;
    f.write_str(")")
}

/// Writes `|a, b, ...|` followed by a newline for every row.
pub fn write_rows<T: fmt::Display, const C: usize>(
    f: &mut fmt::Formatter<'_>,
    rows: &[[T; C]],
) -> fmt::Result {
    for row in rows {
        f.write_str("|")?;
        write_list(f, row)?;
        f.write_str("|\n")?;
    }
    Ok(())
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
