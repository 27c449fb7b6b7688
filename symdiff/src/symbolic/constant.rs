//! Marking the subtrees of an expression that do not depend on a variable.
//!
//! Partial differentiation reuses the ordinary [`derivative`](super::derivative::derivative)
//! rules. Before differentiating with respect to `x`, every maximal subtree that does not mention
//! `x` is wrapped in a [`Expr::Const`] marker, which differentiates to zero. Afterwards, the
//! markers are removed with [`strip_constants`].

use log::trace;
use std::ops::ControlFlow;
use super::{
    expr::{Expr, Marked},
    traverse::{post_order, traverse},
};

/// Returns the symbol a polynomial would use for `variable`, if it is a single lowercase letter.
fn monomial_symbol(variable: &str) -> Option<char> {
    let mut chars = variable.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) if symbol.is_ascii_lowercase() => Some(symbol),
        _ => None,
    }
}

/// Marks every maximal subtree of `expr` that does not mention `variable` as constant.
///
/// Each such subtree is wrapped exactly once, at its outermost point; markers never nest. A
/// polynomial that mentions `variable` is expanded into sums and products so that its constant
/// parts can be marked individually.
pub fn mark_constant(variable: &str, expr: &Expr) -> Expr {
    let symbol = monomial_symbol(variable);
    traverse(
        expr.clone(),
        &mut |expr| match expr {
            Expr::Number(_) => ControlFlow::Break(expr.mark()),
            Expr::Symbol(ref name) if name == variable => ControlFlow::Break(expr),
            Expr::Symbol(_) => ControlFlow::Break(expr.mark()),
            Expr::Const(_) => ControlFlow::Break(expr),
            Expr::Polynomial(ref poly) => match symbol {
                Some(symbol) if poly.mentions(symbol) => {
                    trace!("expanding {} to mark its constant terms", poly);
                    ControlFlow::Continue(poly.to_expr())
                },
                _ => ControlFlow::Break(expr.mark()),
            },
            expr => ControlFlow::Continue(expr),
        },
        &mut mark_if_all_marked,
    )
}

/// Unwraps a marked child so its parent can be marked in its place.
fn unmark(expr: Box<Expr>) -> Box<Expr> {
    match *expr {
        Expr::Const(Marked(inner)) => inner,
        expr => Box::new(expr),
    }
}

/// If every child of the node is marked, moves the markers up to the node itself.
fn mark_if_all_marked(expr: Expr) -> Expr {
    match expr {
        Expr::Sum(lhs, rhs) if lhs.is_marked() && rhs.is_marked() => {
            Expr::Sum(unmark(lhs), unmark(rhs)).mark()
        },
        Expr::Product(lhs, rhs) if lhs.is_marked() && rhs.is_marked() => {
            Expr::Product(unmark(lhs), unmark(rhs)).mark()
        },
        Expr::Quotient(lhs, rhs) if lhs.is_marked() && rhs.is_marked() => {
            Expr::Quotient(unmark(lhs), unmark(rhs)).mark()
        },
        Expr::Power(base, exponent) if base.is_marked() => {
            Expr::Power(unmark(base), exponent).mark()
        },
        Expr::Cos(operand) if operand.is_marked() => Expr::Cos(unmark(operand)).mark(),
        Expr::Sin(operand) if operand.is_marked() => Expr::Sin(unmark(operand)).mark(),
        expr => expr,
    }
}

/// Removes every constant marker from `expr`.
pub(crate) fn strip_constants(expr: Expr) -> Expr {
    post_order(expr, &mut |expr| match expr {
        Expr::Const(Marked(inner)) => *inner,
        expr => expr,
    })
}

#[cfg(test)]
mod tests {
    use crate::symbolic::polynomial::Polynomial;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::sym(name)
    }

    #[test]
    fn leaves() {
        assert_eq!(mark_constant("x", &sym("x")), sym("x"));
        assert_eq!(mark_constant("x", &sym("y")), sym("y").mark());
        assert_eq!(mark_constant("x", &Expr::num(3.0)), Expr::num(3.0).mark());
    }

    #[test]
    fn maximal_subtree_marked_once() {
        // a * sin(5 + b), with respect to a
        let expr = sym("a") * Expr::sin(Expr::num(5.0) + sym("b"));
        assert_eq!(
            mark_constant("a", &expr),
            sym("a") * Expr::sin(Expr::num(5.0) + sym("b")).mark(),
        );

        // with respect to b
        assert_eq!(
            mark_constant("b", &expr),
            sym("a").mark() * Expr::sin(Expr::num(5.0).mark() + sym("b")),
        );
    }

    #[test]
    fn whole_expression_constant() {
        let expr = Expr::cos(sym("y") * sym("z")) / Expr::pow(sym("y"), 2.0);
        assert_eq!(mark_constant("x", &expr), expr.clone().mark());
    }

    #[test]
    fn markers_never_nest() {
        let expr = Expr::pow(Expr::sin(Expr::cos(sym("y"))), 3.0) + sym("x");
        let marked = mark_constant("x", &expr);
        let markers = marked.post_order_iter().filter(|e| e.is_marked()).count();
        assert_eq!(markers, 1);
    }

    #[test]
    fn polynomials() {
        let constant = Expr::poly(Polynomial::new([("yz", 2.0), ("", 1.0)]).unwrap());
        assert_eq!(mark_constant("x", &constant), constant.clone().mark());

        // 3x + y becomes 3*x + 1*CONST(y)
        let mixed = Expr::poly(Polynomial::new([("x", 3.0), ("y", 1.0)]).unwrap());
        assert_eq!(
            mark_constant("x", &mixed),
            Expr::num(3.0).mark() * sym("x") + (Expr::num(1.0) * sym("y")).mark(),
        );
    }

    #[test]
    fn strip() {
        let expr = sym("a").mark() * Expr::sin(Expr::num(5.0).mark() + sym("b"));
        let stripped = strip_constants(expr);
        assert_eq!(stripped, sym("a") * Expr::sin(Expr::num(5.0) + sym("b")));
        assert!(!stripped.contains_marker());
    }
}
