//! The expression tree manipulated by every pass in this crate.
//!
//! An [`Expr`] is a binary tree: sums, products and quotients always have exactly two operands,
//! and a chain such as `a + b + c` is represented by nesting, `a + (b + c)`. The simplifier
//! produces right-associated chains, so this nesting is part of the normal form.
//!
//! Expressions are never mutated in place. Every pass takes an expression by reference (or by
//! value) and returns a new tree.
//!
//! # Structural equality
//!
//! The [`PartialEq`] implementation for [`Expr`] compares trees **structurally**: two expressions
//! are equal if they have the same shape, the same symbols, and bit-for-bit equal numbers. It says
//! nothing about mathematical equivalence; `x + 1` and `1 + x` are different trees.
//!
//! To compare two expressions mathematically, reduce both to a normal form first, with
//! [`simplify`](super::simplify::simplify) and then
//! [`to_polynomial`](super::combine::to_polynomial). Polynomial-shaped subtrees fold into a
//! [`Polynomial`], whose canonical term map makes structural equality meaningful:
//!
//! ```
//! use symdiff::symbolic::{simplify, to_polynomial, Expr};
//!
//! let a = Expr::sym("x") + Expr::num(1.0);
//! let b = Expr::num(1.0) + Expr::sym("x");
//! assert_ne!(a, b);
//! assert_eq!(to_polynomial(&simplify(&a)), to_polynomial(&simplify(&b)));
//! ```

mod iter;

use iter::ExprIter;
use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
    ops::{Add, Div, Mul, Neg, Sub},
};
use super::polynomial::Polynomial;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A subtree proven not to depend on the variable of a partial derivative.
///
/// The field is private to this crate, so a [`Marked`] value can only be produced by the
/// constant-marking pass. No public operation returns an expression containing one.
#[derive(Debug, Clone, PartialEq)]
pub struct Marked(pub(crate) Box<Expr>);

impl Marked {
    /// Returns the marked subtree.
    pub fn inner(&self) -> &Expr {
        &self.0
    }
}

/// A symbolic mathematical expression.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal number, such as `2` or `-0.5`.
    Number(f64),

    /// A free variable, such as `x`.
    Symbol(String),

    /// The sum of two expressions.
    Sum(Box<Expr>, Box<Expr>),

    /// The product of two expressions.
    Product(Box<Expr>, Box<Expr>),

    /// The quotient of two expressions, numerator first.
    Quotient(Box<Expr>, Box<Expr>),

    /// An expression raised to a literal real exponent.
    Power(Box<Expr>, f64),

    /// The cosine of an expression.
    Cos(Box<Expr>),

    /// The sine of an expression.
    Sin(Box<Expr>),

    /// A subtree treated as a constant during partial differentiation.
    #[cfg_attr(feature = "serde", serde(skip))]
    Const(Marked),

    /// A polynomial in canonical form.
    Polynomial(Polynomial),
}

impl Expr {
    /// Creates a [`Expr::Number`].
    pub fn num(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a [`Expr::Symbol`].
    pub fn sym(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates a [`Expr::Power`], `base^exponent`.
    pub fn pow(base: Self, exponent: f64) -> Self {
        Self::Power(Box::new(base), exponent)
    }

    /// Creates a [`Expr::Cos`].
    pub fn cos(operand: Self) -> Self {
        Self::Cos(Box::new(operand))
    }

    /// Creates a [`Expr::Sin`].
    pub fn sin(operand: Self) -> Self {
        Self::Sin(Box::new(operand))
    }

    /// Creates a [`Expr::Polynomial`].
    pub fn poly(polynomial: Polynomial) -> Self {
        Self::Polynomial(polynomial)
    }

    /// Sums the given expressions into a right-associated chain, `a + (b + (c + ...))`.
    ///
    /// Returns [`None`] if there are no expressions.
    pub fn sum_of(terms: impl IntoIterator<Item = Self>) -> Option<Self> {
        right_fold(terms, Self::Sum)
    }

    /// Multiplies the given expressions into a right-associated chain, `a * (b * (c * ...))`.
    ///
    /// Returns [`None`] if there are no expressions.
    pub fn product_of(factors: impl IntoIterator<Item = Self>) -> Option<Self> {
        right_fold(factors, Self::Product)
    }

    /// Wraps this expression in a constant marker.
    pub(crate) fn mark(self) -> Self {
        Self::Const(Marked(Box::new(self)))
    }

    /// Returns true if this is a [`Expr::Const`].
    pub(crate) fn is_marked(&self) -> bool {
        matches!(self, Self::Const(_))
    }

    /// If the expression is a [`Expr::Number`], returns the contained number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the expression is a [`Expr::Symbol`], returns the symbol's name.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// If the expression is a [`Expr::Polynomial`], returns a reference to the polynomial.
    pub fn as_polynomial(&self) -> Option<&Polynomial> {
        match self {
            Self::Polynomial(poly) => Some(poly),
            _ => None,
        }
    }

    /// Returns true if the expression is a number within [`EPSILON`] of zero.
    ///
    /// [`EPSILON`]: crate::consts::EPSILON
    pub fn is_zero(&self) -> bool {
        self.as_number().is_some_and(crate::approx::is_zero)
    }

    /// Returns true if the expression is a number within [`EPSILON`] of one.
    ///
    /// [`EPSILON`]: crate::consts::EPSILON
    pub fn is_one(&self) -> bool {
        self.as_number().is_some_and(crate::approx::is_one)
    }

    /// Returns the direct children of this expression, left to right. A [`Expr::Power`] has one
    /// child, its base.
    pub(crate) fn children(&self) -> [Option<&Self>; 2] {
        match self {
            Self::Number(_) | Self::Symbol(_) | Self::Polynomial(_) => [None, None],
            Self::Sum(lhs, rhs)
                | Self::Product(lhs, rhs)
                | Self::Quotient(lhs, rhs) => [Some(&**lhs), Some(&**rhs)],
            Self::Power(base, _) => [Some(&**base), None],
            Self::Cos(operand) | Self::Sin(operand) => [Some(&**operand), None],
            Self::Const(marked) => [Some(marked.inner()), None],
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the names of the free symbols in this expression, including the symbols of any
    /// polynomial subtree.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut symbols = BTreeSet::new();
        for expr in self.post_order_iter() {
            match expr {
                Self::Symbol(name) => {
                    symbols.insert(name.clone());
                },
                Self::Polynomial(poly) => {
                    symbols.extend(poly.symbols().into_iter().map(String::from));
                },
                _ => (),
            }
        }
        symbols
    }

    /// Returns true if a constant marker appears anywhere in this expression.
    pub(crate) fn contains_marker(&self) -> bool {
        self.post_order_iter().any(Self::is_marked)
    }
}

/// Folds a sequence into a right-associated chain using the given binary constructor.
fn right_fold(
    exprs: impl IntoIterator<Item = Expr>,
    node: fn(Box<Expr>, Box<Expr>) -> Expr,
) -> Option<Expr> {
    let mut exprs = exprs.into_iter().collect::<Vec<_>>();
    let last = exprs.pop()?;
    Some(exprs.into_iter()
        .rev()
        .fold(last, |chain, expr| node(Box::new(expr), Box::new(chain))))
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Symbol(name) => write!(f, "{}", name),
            Self::Sum(lhs, rhs) => write!(f, "({}+{})", lhs, rhs),
            Self::Product(lhs, rhs) => write!(f, "({}*{})", lhs, rhs),
            Self::Quotient(lhs, rhs) => write!(f, "({}/{})", lhs, rhs),
            Self::Power(base, exponent) => write!(f, "{}^{}", base, exponent),
            Self::Cos(operand) => write!(f, "Cos({})", operand),
            Self::Sin(operand) => write!(f, "Sin({})", operand),
            Self::Const(marked) => write!(f, "CONST({})", marked.inner()),
            Self::Polynomial(poly) => write!(f, "{}", poly),
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Polynomial> for Expr {
    fn from(poly: Polynomial) -> Self {
        Self::Polynomial(poly)
    }
}

/// Adds two [`Expr`]s together. No simplification is done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Sum(Box::new(self), Box::new(rhs))
    }
}

/// Subtracts `rhs` by adding `-1 * rhs`. No simplification is done.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

/// Multiplies two [`Expr`]s together. No simplification is done.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::Product(Box::new(self), Box::new(rhs))
    }
}

/// Divides `self` by `rhs`. No simplification is done.
impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::Quotient(Box::new(self), Box::new(rhs))
    }
}

/// Multiplies this expression by -1. No simplification is done.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::Number(-1.0) * self
    }
}
