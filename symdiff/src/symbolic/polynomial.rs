//! Canonical multivariate polynomials with floating-point coefficients.
//!
//! A [`Polynomial`] maps each [`Monomial`] to its coefficient. Two polynomials describing the same
//! function have identical term maps, which makes [`Polynomial`] the normal form the
//! [`to_polynomial`](super::combine::to_polynomial) pass folds expressions into.
//!
//! # Pruning
//!
//! A term whose coefficient is within [`EPSILON`](crate::consts::EPSILON) of zero is removed as
//! soon as it is produced, whether by construction, addition, or multiplication. The zero
//! polynomial is therefore always the empty map.

use crate::approx::is_zero;
use crate::error::DuplicateTerm;
use super::{expr::Expr, monomial::Monomial};
use std::{
    collections::{btree_map::Entry, BTreeMap, BTreeSet},
    fmt::{self, Display, Formatter},
    ops::{Add, Mul},
};
use symdiff_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A multivariate polynomial, stored as a map from monomials to coefficients.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    /// The coefficient of each monomial. No coefficient is ever near zero.
    terms: BTreeMap<Monomial, f64>,
}

impl Polynomial {
    /// Creates a polynomial from `(monomial string, coefficient)` pairs.
    ///
    /// Every monomial string is reduced to its canonical key. Returns [`Err`] if a string is not
    /// a valid monomial, or if two strings reduce to the same key (such as `xy` and `yx`).
    ///
    /// ```
    /// use symdiff::symbolic::polynomial::Polynomial;
    ///
    /// let p = Polynomial::new([("", 4.0), ("yx^2", 3.5), ("x", 2.0)]).unwrap();
    /// assert_eq!(p.get("x^2y"), Some(3.5));
    ///
    /// assert!(Polynomial::new([("xy", 1.0), ("yx", 2.0)]).is_err());
    /// ```
    pub fn new<I, K>(terms: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut written = BTreeMap::<Monomial, String>::new();
        let mut poly = Self::default();
        for (raw, coefficient) in terms {
            let raw = raw.as_ref();
            let monomial = raw.parse::<Monomial>()?;
            if let Some(first) = written.get(&monomial) {
                return Err(Error::new(Vec::new(), DuplicateTerm {
                    first: first.clone(),
                    second: raw.to_owned(),
                    key: monomial.to_string(),
                }));
            }

            written.insert(monomial.clone(), raw.to_owned());
            poly.insert(monomial, coefficient);
        }
        Ok(poly)
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A polynomial with only a constant term.
    pub fn constant(value: f64) -> Self {
        Self::term(Monomial::one(), value)
    }

    /// A polynomial with a single term.
    pub fn term(monomial: Monomial, coefficient: f64) -> Self {
        let mut poly = Self::default();
        poly.insert(monomial, coefficient);
        poly
    }

    /// The polynomial `1 * symbol`, if `name` is a valid monomial symbol (a single lowercase
    /// letter).
    pub fn symbol(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) if symbol.is_ascii_lowercase() => {
                Some(Self::term(Monomial::symbol(symbol), 1.0))
            },
            _ => None,
        }
    }

    /// Adds `coefficient * monomial` to this polynomial, removing the term if its coefficient
    /// becomes (nearly) zero.
    fn insert(&mut self, monomial: Monomial, coefficient: f64) {
        match self.terms.entry(monomial) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += coefficient;
                if is_zero(*entry.get()) {
                    entry.remove();
                }
            },
            Entry::Vacant(entry) => {
                if !is_zero(coefficient) {
                    entry.insert(coefficient);
                }
            },
        }
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if this polynomial has no terms. Equivalent to [`Polynomial::is_zero`].
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the coefficient of the monomial described by `key`, which need not be canonical.
    ///
    /// Returns [`None`] if the term is absent or `key` is not a valid monomial.
    pub fn get(&self, key: &str) -> Option<f64> {
        let monomial = key.parse::<Monomial>().ok()?;
        self.coefficient(&monomial)
    }

    /// Returns the coefficient of the given monomial, if the term is present.
    pub fn coefficient(&self, monomial: &Monomial) -> Option<f64> {
        self.terms.get(monomial).copied()
    }

    /// Returns an iterator over the terms, ordered by monomial.
    pub fn iter(&self) -> impl Iterator<Item = (&Monomial, f64)> + '_ {
        self.terms.iter().map(|(monomial, &coefficient)| (monomial, coefficient))
    }

    /// If this polynomial has exactly one term, returns it.
    pub fn as_term(&self) -> Option<(&Monomial, f64)> {
        if self.terms.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Returns the set of symbols appearing in any term.
    pub fn symbols(&self) -> BTreeSet<char> {
        self.terms.keys()
            .flat_map(|monomial| monomial.powers().map(|(symbol, _)| symbol))
            .collect()
    }

    /// Returns true if the given symbol appears in any term.
    pub fn mentions(&self, symbol: char) -> bool {
        self.terms.keys().any(|monomial| monomial.contains(symbol))
    }

    /// Raises a single-term polynomial to an integer power, `(c*m)^k = c^k * m^k`.
    ///
    /// Polynomials with several terms are never expanded, since the number of terms of `p^k` grows
    /// with `k`. Returns [`None`] for them, for the zero polynomial, and when the result is not
    /// representable: an exponent overflowing [`i32`] or a coefficient that is not finite.
    pub fn pow(&self, exponent: i32) -> Option<Self> {
        let (monomial, coefficient) = self.as_term()?;
        let coefficient = coefficient.powi(exponent);
        if !coefficient.is_finite() {
            return None;
        }
        Some(Self::term(monomial.checked_pow(exponent)?, coefficient))
    }

    /// Multiplies two polynomials term by term. Vanishing terms are pruned after every
    /// accumulation.
    ///
    /// Returns [`None`] if the exponent of a symbol in some product of terms overflows [`i32`].
    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let mut product = Self::default();
        for (lhs_monomial, lhs_coefficient) in self.iter() {
            for (rhs_monomial, rhs_coefficient) in rhs.iter() {
                product.insert(
                    lhs_monomial.checked_mul(rhs_monomial)?,
                    lhs_coefficient * rhs_coefficient,
                );
            }
        }
        Some(product)
    }

    /// Differentiates this polynomial, treating every symbol as the variable of differentiation.
    ///
    /// This matches how [`derivative`](super::derivative::derivative) treats a bare symbol: the
    /// derivative of every symbol is 1, so each monomial is differentiated with the product rule
    /// over its symbols.
    ///
    /// Returns [`None`] if a symbol has the exponent [`i32::MIN`].
    pub fn derivative(&self) -> Option<Self> {
        let mut result = Self::default();
        for (monomial, coefficient) in self.iter() {
            for (symbol, _) in monomial.powers() {
                let (exponent, rest) = monomial.differentiate(symbol)?;
                result.insert(rest, coefficient * exponent as f64);
            }
        }
        Some(result)
    }

    /// Expands this polynomial into an equivalent tree of sums and products.
    ///
    /// Each term becomes `coefficient * (s1^k1 * (s2^k2 * ...))`, and the terms are summed in
    /// monomial order. The zero polynomial becomes the number `0`.
    pub fn to_expr(&self) -> Expr {
        let terms = self.iter()
            .map(|(monomial, coefficient)| {
                let factors = monomial.powers()
                    .map(|(symbol, exponent)| {
                        let symbol = Expr::Symbol(symbol.to_string());
                        if exponent == 1 {
                            symbol
                        } else {
                            Expr::pow(symbol, exponent as f64)
                        }
                    })
                    .collect::<Vec<_>>();
                match Expr::product_of(factors) {
                    Some(factors) => Expr::Number(coefficient) * factors,
                    None => Expr::Number(coefficient),
                }
            })
            .collect::<Vec<_>>();
        Expr::sum_of(terms).unwrap_or(Expr::Number(0.0))
    }
}

/// Adds two polynomials, summing the coefficients of like terms and pruning any that vanish.
impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        let mut sum = self.clone();
        for (monomial, coefficient) in rhs.iter() {
            sum.insert(monomial.clone(), coefficient);
        }
        sum
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

/// Multiplies two polynomials term by term. See [`Polynomial::checked_mul`].
///
/// # Panics
///
/// Panics if the exponent of a symbol overflows [`i32`], as integer multiplication does.
impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        match self.checked_mul(rhs) {
            Some(product) => product,
            None => panic!("exponent overflow multiplying {} by {}", self, rhs),
        }
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "P{{")?;
        let mut iter = self.iter();
        match iter.next() {
            Some(term) => {
                write_term(f, term)?;
                for term in iter {
                    write!(f, " + ")?;
                    write_term(f, term)?;
                }
            },
            None => write!(f, "0")?,
        }
        write!(f, "}}")
    }
}

/// Writes a single term, omitting a coefficient of exactly 1 on non-constant terms.
fn write_term(f: &mut Formatter<'_>, (monomial, coefficient): (&Monomial, f64)) -> fmt::Result {
    if monomial.is_constant() {
        write!(f, "{}", coefficient)
    } else if coefficient == 1.0 {
        write!(f, "{}", monomial)
    } else {
        write!(f, "{}{}", coefficient, monomial)
    }
}
