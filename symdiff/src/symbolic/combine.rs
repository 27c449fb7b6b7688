//! Folding polynomial-shaped subtrees into [`Polynomial`]s.
//!
//! [`simplify`](super::simplify::simplify) cleans up an expression, but its result still depends
//! on the order the terms were written in. [`to_polynomial`] goes one step further: every subtree
//! built only from numbers, single-letter symbols, sums, products and integer powers is collapsed
//! into one canonical [`Polynomial`], so that two such subtrees are structurally equal exactly
//! when they describe the same polynomial.

use crate::approx::as_integer;
use log::{debug, trace, warn};
use super::{
    expr::{Expr, Marked},
    polynomial::Polynomial,
    traverse::post_order,
};

/// Folds one node whose children have already been folded.
fn fold(expr: Expr) -> Expr {
    match expr {
        Expr::Number(value) => Expr::Polynomial(Polynomial::constant(value)),
        Expr::Symbol(name) => match Polynomial::symbol(&name) {
            Some(poly) => Expr::Polynomial(poly),
            None => {
                warn!("symbol `{}` is not a single lowercase letter; leaving it unfolded", name);
                Expr::Symbol(name)
            },
        },
        Expr::Const(Marked(inner)) => *inner,
        Expr::Sum(lhs, rhs) => match (*lhs, *rhs) {
            (Expr::Polynomial(lhs), Expr::Polynomial(rhs)) => {
                trace!("adding {} and {}", lhs, rhs);
                Expr::Polynomial(lhs + rhs)
            },
            (lhs, rhs) => lhs + rhs,
        },
        Expr::Product(lhs, rhs) => match (*lhs, *rhs) {
            (Expr::Polynomial(lhs), Expr::Polynomial(rhs)) => match lhs.checked_mul(&rhs) {
                Some(product) => {
                    trace!("multiplied {} and {}", lhs, rhs);
                    Expr::Polynomial(product)
                },
                None => {
                    warn!("exponent overflow multiplying {} and {}; leaving it unfolded", lhs, rhs);
                    Expr::Polynomial(lhs) * Expr::Polynomial(rhs)
                },
            },
            (lhs, rhs) => lhs * rhs,
        },
        Expr::Power(base, exponent) => {
            let folded = base.as_polynomial()
                .zip(as_integer(exponent))
                .and_then(|(poly, exponent)| poly.pow(exponent));
            match folded {
                Some(poly) => {
                    trace!("raised {} to the power {}", base, exponent);
                    Expr::Polynomial(poly)
                },
                None => Expr::Power(base, exponent),
            }
        },
        expr @ (Expr::Quotient(..) | Expr::Cos(_) | Expr::Sin(_) | Expr::Polynomial(_)) => expr,
    }
}

/// Folds every polynomial-shaped subtree of `expr` into a [`Polynomial`].
///
/// Numbers become constant polynomials and single-letter symbols become `1 * symbol`. A sum or
/// product whose operands both folded becomes their polynomial sum or product; otherwise it is
/// kept, with whatever its operands folded into. A power folds only when its base folded into a
/// single nonzero term and its exponent is an integer; powers of sums are never expanded. A
/// product or power whose exponents would overflow is also kept. Quotients, cosines and sines are
/// never folded themselves, but their operands are.
///
/// Constant markers are removed. The input is usually the output of
/// [`simplify`](super::simplify::simplify), but any expression is accepted.
///
/// ```
/// use symdiff::symbolic::{polynomial::Polynomial, simplify, to_polynomial, Expr};
///
/// // 9 + 3 * (2 + z)
/// let expr = Expr::num(9.0) + Expr::num(3.0) * (Expr::num(2.0) + Expr::sym("z"));
/// assert_eq!(
///     to_polynomial(&simplify(&expr)),
///     Expr::poly(Polynomial::new([("", 15.0), ("z", 3.0)]).unwrap()),
/// );
/// ```
pub fn to_polynomial(expr: &Expr) -> Expr {
    debug!("folding {}", expr);
    let result = post_order(expr.clone(), &mut fold);
    debug_assert!(!result.contains_marker());
    debug!("folded {} into {}", expr, result);
    result
}
