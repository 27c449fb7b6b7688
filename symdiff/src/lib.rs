//! Symbolic differentiation, simplification and polynomial normal forms.
//!
//! The engine lives in [`symbolic`]: build an [`Expr`](symbolic::Expr), differentiate it, then
//! [`simplify`](symbolic::simplify) it and fold it with
//! [`to_polynomial`](symbolic::to_polynomial) to compare results up to algebraic equivalence.
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for the expression, polynomial, monomial and
//! step types.

pub mod approx;
pub mod consts;
pub mod error;
pub mod symbolic;
