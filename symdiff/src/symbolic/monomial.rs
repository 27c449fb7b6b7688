//! Canonical encoding of monomials.
//!
//! A monomial is a product of single-letter symbols, each raised to an integer power, such as
//! `x^2y^3` or `ab^-1`. Its **canonical key** is the unique string describing it:
//!
//! - each symbol appears at most once, with the exponents of repeated occurrences summed,
//! - symbols whose exponents sum to zero are removed,
//! - symbols are sorted lexicographically,
//! - an exponent of 1 is written bare (`x`), any other exponent uses the `^` suffix (`x^-2`).
//!
//! The constant monomial (the empty product) has the empty string as its key.
//!
//! ```
//! use symdiff::symbolic::monomial::reduce;
//!
//! assert_eq!(reduce("xxy^2zx").unwrap(), "x^3y^2z");
//! assert_eq!(reduce("y^2nmz^2").unwrap(), "mny^2z^2");
//! assert_eq!(reduce("xx^-1").unwrap(), "");
//! ```

use crate::error::{ExponentOverflow, MalformedExponent, UnexpectedCharacter};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    num::IntErrorKind,
    str::FromStr,
};
use symdiff_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Matches a single symbol, optionally followed by an explicit exponent. The exponent text is not
/// validated here, so that a bad exponent can be reported with its span.
static FACTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z](?:\^[^a-z]*)?").unwrap());

/// A product of single-letter symbols raised to integer powers.
///
/// A [`Monomial`] is parsed from, and displayed as, its canonical key (see the
/// [module-level documentation](self)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(into = "String", try_from = "String"))]
pub struct Monomial {
    /// The exponent of each symbol. Zero exponents are never stored.
    powers: BTreeMap<char, i32>,
}

impl Monomial {
    /// The constant monomial, `1`.
    pub fn one() -> Self {
        Self::default()
    }

    /// The monomial consisting of one symbol raised to the first power.
    pub fn symbol(symbol: char) -> Self {
        Self { powers: BTreeMap::from([(symbol, 1)]) }
    }

    /// Returns true if this is the constant monomial.
    pub fn is_constant(&self) -> bool {
        self.powers.is_empty()
    }

    /// Returns the exponent of the given symbol, or 0 if it does not appear.
    pub fn degree(&self, symbol: char) -> i32 {
        self.powers.get(&symbol).copied().unwrap_or(0)
    }

    /// Returns true if the given symbol appears in this monomial.
    pub fn contains(&self, symbol: char) -> bool {
        self.powers.contains_key(&symbol)
    }

    /// Returns an iterator over the symbols and their exponents, in canonical order.
    pub fn powers(&self) -> impl Iterator<Item = (char, i32)> + '_ {
        self.powers.iter().map(|(&symbol, &exponent)| (symbol, exponent))
    }

    /// Raises this monomial to the given power.
    ///
    /// Returns [`None`] if an exponent of the result does not fit in an [`i32`].
    pub fn checked_pow(&self, exponent: i32) -> Option<Self> {
        let mut result = Self::default();
        for (symbol, power) in self.powers() {
            result.insert(symbol, power.checked_mul(exponent)?)?;
        }
        Some(result)
    }

    /// Multiplies two monomials by summing the exponents of each symbol. This is equivalent to
    /// concatenating their keys and reducing the result.
    ///
    /// Returns [`None`] if an exponent of the product does not fit in an [`i32`].
    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let mut product = self.clone();
        for (symbol, exponent) in rhs.powers() {
            product.insert(symbol, exponent)?;
        }
        Some(product)
    }

    /// Multiplies `symbol^exponent` into this monomial, dropping the symbol if its exponent
    /// becomes zero. On overflow, returns [`None`] and leaves the monomial unchanged.
    fn insert(&mut self, symbol: char, exponent: i32) -> Option<()> {
        let sum = self.degree(symbol).checked_add(exponent)?;
        if sum == 0 {
            self.powers.remove(&symbol);
        } else {
            self.powers.insert(symbol, sum);
        }
        Some(())
    }

    /// Differentiates this monomial with respect to the given symbol.
    ///
    /// Returns the factor brought down by the power rule, along with the remaining monomial.
    ///
    /// Returns [`None`] if the symbol does not appear, or if its exponent is [`i32::MIN`], whose
    /// derivative cannot be represented.
    pub fn differentiate(&self, symbol: char) -> Option<(i32, Self)> {
        let exponent = self.powers.get(&symbol).copied()?;
        let mut rest = self.clone();
        rest.insert(symbol, -1)?;
        Some((exponent, rest))
    }
}

impl Display for Monomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (symbol, exponent) in self.powers() {
            if exponent == 1 {
                write!(f, "{}", symbol)?;
            } else {
                write!(f, "{}^{}", symbol, exponent)?;
            }
        }
        Ok(())
    }
}

/// Parses an explicit exponent: an optional `-` followed by decimal digits.
///
/// On failure, returns the reason [`i32`] parsing gave, or [`None`] if the text was rejected
/// before parsing.
fn parse_exponent(text: &str) -> Result<i32, Option<IntErrorKind>> {
    if !text.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        return Err(None);
    }
    text.parse::<i32>().map_err(|err| Some(err.kind().clone()))
}

/// Parse a monomial from a string.
///
/// The string should be a sequence of lowercase letters, each optionally followed by
/// `^<exponent>`, where `<exponent>` is a signed integer. A letter without an exponent has the
/// implied exponent 1. The empty string is the constant monomial.
impl FromStr for Monomial {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        /// Builds the error for an unexpected character at the given byte offset.
        fn unexpected(value: &str, start: usize) -> Error {
            let found = value[start..].chars().next().unwrap_or_default();
            Error::new(
                vec![start..start + found.len_utf8()],
                UnexpectedCharacter { found },
            )
        }

        // exponents are summed wide, so only the final exponent of each symbol has to fit
        let mut sums = BTreeMap::<char, i64>::new();
        let mut cursor = 0;
        for factor in FACTOR.find_iter(value) {
            if factor.start() > cursor {
                return Err(unexpected(value, cursor));
            }

            let text = factor.as_str();
            let mut chars = text.chars();
            let Some(symbol) = chars.next() else {
                continue;
            };
            let exponent = match chars.as_str().strip_prefix('^') {
                Some(exponent) => parse_exponent(exponent).map_err(|kind| {
                    let span = vec![factor.start() + 1..factor.end()];
                    match kind {
                        Some(IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                            Error::new(span, ExponentOverflow { symbol })
                        },
                        _ => Error::new(span, MalformedExponent { exponent: exponent.to_owned() }),
                    }
                })?,
                None => 1,
            };

            let sum = sums.entry(symbol).or_insert(0);
            *sum = sum.checked_add(exponent.into())
                .ok_or_else(|| Error::new(vec![0..value.len()], ExponentOverflow { symbol }))?;
            cursor = factor.end();
        }

        if cursor < value.len() {
            return Err(unexpected(value, cursor));
        }

        let mut powers = BTreeMap::new();
        for (symbol, sum) in sums {
            let exponent = i32::try_from(sum)
                .map_err(|_| Error::new(vec![0..value.len()], ExponentOverflow { symbol }))?;
            if exponent != 0 {
                powers.insert(symbol, exponent);
            }
        }
        Ok(Self { powers })
    }
}

impl TryFrom<&str> for Monomial {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Monomial {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Monomial> for String {
    fn from(monomial: Monomial) -> Self {
        monomial.to_string()
    }
}

/// Reduces a monomial string to its canonical key.
///
/// Returns [`Err`] if the string contains a character that is not a lowercase letter or part of
/// an exponent, or if an explicit exponent is not an integer.
pub fn reduce(monomial: &str) -> Result<String, Error> {
    Ok(monomial.parse::<Monomial>()?.to_string())
}

#[cfg(test)]
mod tests {
    use crate::error::{ExponentOverflow, MalformedExponent, UnexpectedCharacter};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn reduce_repeated_symbols() {
        assert_eq!(reduce("xxy^2zx").unwrap(), "x^3y^2z");
        assert_eq!(reduce("zyx").unwrap(), "xyz");
        assert_eq!(reduce("x^2y^111z^3y^2nmz^2").unwrap(), "mnx^2y^113z^5");
    }

    #[test]
    fn reduce_empty() {
        assert_eq!(reduce("").unwrap(), "");
    }

    #[test]
    fn reduce_cancelling_exponents() {
        assert_eq!(reduce("x^2yx^-2").unwrap(), "y");
        assert_eq!(reduce("aa^-1").unwrap(), "");
    }

    #[test]
    fn reduce_negative_exponents() {
        assert_eq!(reduce("x^-1").unwrap(), "x^-1");
        assert_eq!(reduce("y^-2x^-2y").unwrap(), "x^-2y^-1");
    }

    #[test]
    fn reduce_is_canonical() {
        for input in ["yx^2", "x^2y", "xyx", "x^1y^1x"] {
            assert_eq!(reduce(input).unwrap(), "x^2y");
        }
    }

    #[test]
    fn malformed_exponent() {
        let err = reduce("x^2.5y").unwrap_err();
        assert_eq!(err.spans, vec![1..5]);
        assert_eq!(
            err.downcast_ref::<MalformedExponent>(),
            Some(&MalformedExponent { exponent: "2.5".to_string() }),
        );

        let err = reduce("xy^").unwrap_err();
        assert_eq!(err.spans, vec![2..3]);
        assert!(err.downcast_ref::<MalformedExponent>().is_some());
    }

    #[test]
    fn exponent_needs_digits() {
        let err = reduce("x^+2").unwrap_err();
        assert_eq!(err.spans, vec![1..4]);
        assert_eq!(
            err.downcast_ref::<MalformedExponent>(),
            Some(&MalformedExponent { exponent: "+2".to_string() }),
        );
        assert!(reduce("x^-").is_err());
        assert_eq!(reduce("x^-0").unwrap(), "");
    }

    #[test]
    fn exponent_overflow() {
        // the result fits, whatever order the factors come in
        for input in ["x^2147483647xx^-1", "x^-1x^2147483647x", "xx^-1x^2147483647"] {
            assert_eq!(reduce(input).unwrap(), "x^2147483647");
        }
        assert_eq!(reduce("y^-2147483648").unwrap(), "y^-2147483648");

        let err = reduce("x^2147483647x").unwrap_err();
        assert_eq!(err.spans, vec![0..13]);
        assert_eq!(err.downcast_ref::<ExponentOverflow>(), Some(&ExponentOverflow { symbol: 'x' }));

        let err = reduce("yz^3000000000").unwrap_err();
        assert_eq!(err.spans, vec![2..13]);
        assert_eq!(err.downcast_ref::<ExponentOverflow>(), Some(&ExponentOverflow { symbol: 'z' }));
    }

    #[test]
    fn unexpected_character() {
        let err = reduce("x2").unwrap_err();
        assert_eq!(err.spans, vec![1..2]);
        assert_eq!(
            err.downcast_ref::<UnexpectedCharacter>(),
            Some(&UnexpectedCharacter { found: '2' }),
        );

        let err = reduce("xY").unwrap_err();
        assert_eq!(err.downcast_ref::<UnexpectedCharacter>(), Some(&UnexpectedCharacter { found: 'Y' }));
    }

    #[test]
    fn multiply() {
        let a: Monomial = "x^2y".parse().unwrap();
        let b: Monomial = "yz^-1".parse().unwrap();
        assert_eq!(a.checked_mul(&b).unwrap().to_string(), "x^2y^2z^-1");
        assert_eq!(a.checked_mul(&Monomial::one()), Some(a.clone()));

        let big: Monomial = "x^2147483647".parse().unwrap();
        assert_eq!(big.checked_mul(&a), None);
    }

    #[test]
    fn pow() {
        let m: Monomial = "x^2y^-1".parse().unwrap();
        assert_eq!(m.checked_pow(3).unwrap().to_string(), "x^6y^-3");
        assert_eq!(m.checked_pow(0), Some(Monomial::one()));
        assert_eq!(m.checked_pow(1 << 30), None);
    }

    #[test]
    fn differentiate() {
        let m: Monomial = "x^3y".parse().unwrap();
        assert_eq!(m.differentiate('x'), Some((3, "x^2y".parse().unwrap())));
        assert_eq!(m.differentiate('y'), Some((1, "x^3".parse().unwrap())));
        assert_eq!(m.differentiate('z'), None);

        let lowest: Monomial = "x^-2147483648".parse().unwrap();
        assert_eq!(lowest.differentiate('x'), None);
    }
}
