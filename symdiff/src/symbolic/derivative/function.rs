//! Symbolic derivatives of the elementary functions [`Expr`] supports, with the chain rule.

use crate::symbolic::Expr;
use log::trace;
use super::differentiate;

/// Multiplies the derivative of the outer function by the derivative of its operand.
fn chain_rule(outer: Expr, operand: &Expr) -> Expr {
    outer * differentiate(operand)
}

/// `cos(u)' = -1 * sin(u) * u'`
pub(super) fn cos(operand: &Expr) -> Expr {
    trace!("cosine rule on Cos({})", operand);
    chain_rule(Expr::num(-1.0) * Expr::sin(operand.clone()), operand)
}

/// `sin(u)' = cos(u) * u'`
pub(super) fn sin(operand: &Expr) -> Expr {
    trace!("sine rule on Sin({})", operand);
    chain_rule(Expr::cos(operand.clone()), operand)
}

/// `(u^n)' = n * u^(n-1) * u'`
pub(super) fn power(base: &Expr, exponent: f64) -> Expr {
    trace!("power rule on {}^{}", base, exponent);
    chain_rule(
        Expr::num(exponent) * Expr::pow(base.clone(), exponent - 1.0),
        base,
    )
}
