//! The kinds of error the engine can report.
//!
//! Every error is wrapped in a [`symdiff_error::Error`], which records the regions of the input
//! text the error refers to. For monomial errors, that is the offending part of the monomial
//! string, so the error can be rendered with the bad characters highlighted.

use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::{ErrorKind, EXPR};

/// An explicit exponent in a monomial is not an integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid exponent `{}`", self.exponent),
    labels = ["this exponent"],
    help = format!(
        "exponents must be integers, such as {} or {}",
        "x^2".fg(EXPR),
        "y^-3".fg(EXPR),
    ),
)]
pub struct MalformedExponent {
    /// The text following the `^`.
    pub exponent: String,
}

/// The exponent of a symbol in a monomial does not fit in a 32-bit integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the exponent of `{}` is out of range", self.symbol),
    labels = ["the exponent overflows here"],
    help = format!("exponents must lie between {} and {}", i32::MIN, i32::MAX),
)]
pub struct ExponentOverflow {
    /// The symbol whose exponent overflowed.
    pub symbol: char,
}

/// A monomial contains a character that is neither a symbol nor part of an exponent.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}` in monomial", self.found),
    labels = ["expected a lowercase letter here"],
    help = format!(
        "monomials are products of single-letter symbols, such as {}",
        "x^2yz".fg(EXPR),
    ),
)]
pub struct UnexpectedCharacter {
    /// The character that was found.
    pub found: char,
}

/// Two terms given to [`Polynomial::new`] describe the same monomial.
///
/// [`Polynomial::new`]: crate::symbolic::polynomial::Polynomial::new
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` and `{}` are the same monomial", self.first, self.second),
    help = format!("both reduce to `{}`; combine their coefficients into one term", self.key),
)]
pub struct DuplicateTerm {
    /// The first term, as written.
    pub first: String,

    /// The second term, as written.
    pub second: String,

    /// The canonical key both terms reduce to.
    pub key: String,
}

/// A symbol has no value during evaluation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` has no value", self.name),
    help = format!("give {} a value in the variables passed to `eval`", (&self.name).fg(EXPR)),
)]
pub struct UndefinedVariable {
    /// The name of the symbol.
    pub name: String,
}
