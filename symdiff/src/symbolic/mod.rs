//! Symbolic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions are trees of [`Expr`] nodes: numbers, symbols, binary sums, products and
//! quotients, powers with a numeric exponent, cosines, sines, and canonical [`Polynomial`]s.
//! Every pass in this module takes an expression and returns a new one.
//!
//! ```
//! use symdiff::symbolic::Expr;
//!
//! // x * (y + 2)
//! let expr = Expr::sym("x") * (Expr::sym("y") + Expr::num(2.0));
//! assert_eq!(expr.to_string(), "(x*(y+2))");
//! ```
//!
//! # Differentiation
//!
//! [`derivative`] and [`partial_derivative`] rewrite an expression into its derivative. The result
//! is correct but verbose, full of products with `0` and `1`.
//!
//! # Normal form
//!
//! [`simplify`] removes those, flattens chains of sums and products, and distributes products
//! over sums. [`to_polynomial`] then folds whatever is polynomial-shaped into a [`Polynomial`],
//! keyed by canonical monomials, so that equal polynomials compare equal.
//!
//! ```
//! use symdiff::symbolic::{derivative, polynomial::Polynomial, simplify, to_polynomial, Expr};
//!
//! // d/dx (x^2 + 3x)
//! let expr = Expr::pow(Expr::sym("x"), 2.0) + Expr::num(3.0) * Expr::sym("x");
//! let normal = to_polynomial(&simplify(&derivative(&expr)));
//! assert_eq!(normal, Expr::poly(Polynomial::new([("x", 2.0), ("", 3.0)]).unwrap()));
//! ```

#[cfg(test)]
pub(crate) mod arbitrary;
pub mod combine;
pub(crate) mod constant;
pub mod derivative;
pub mod eval;
pub mod expr;
pub mod monomial;
pub mod polynomial;
pub mod simplify;
pub mod step_collector;
pub mod traverse;

pub use combine::to_polynomial;
pub use derivative::{derivative, partial_derivative};
pub use expr::Expr;
pub use polynomial::Polynomial;
pub use simplify::{simplify, simplify_with, simplify_with_steps, step::Step};
pub use step_collector::StepCollector;
