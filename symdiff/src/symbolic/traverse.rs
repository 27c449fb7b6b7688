//! A reusable recursive-descent schema over [`Expr`] trees.
//!
//! [`traverse`] rebuilds a tree bottom-up, giving the caller two chances to rewrite each node: a
//! pre-order hook that may stop the descent early, and a post-order hook that sees the node after
//! all of its children have been rewritten. The constant-marking pass, the marker-stripping pass
//! and the polynomial combiner are all written in terms of it.

use std::ops::ControlFlow;
use super::expr::{Expr, Marked};

/// Rewrites `expr` by recursive descent.
///
/// For every node, `before` is called first:
///
/// - [`ControlFlow::Break`] ends the descent at this node. The returned expression is the result
/// for the whole subtree; its children are not visited and `after` is not called.
/// - [`ControlFlow::Continue`] descends into the children of the returned (possibly rewritten)
/// expression, replacing each child with the result of traversing it. `after` is then called with
/// the rebuilt node, and its return value is the result for the subtree.
///
/// The exponent of a [`Expr::Power`] is a literal and is not visited.
///
/// Recursion depth equals the depth of the tree.
pub fn traverse<B, A>(expr: Expr, before: &mut B, after: &mut A) -> Expr
where
    B: FnMut(Expr) -> ControlFlow<Expr, Expr>,
    A: FnMut(Expr) -> Expr,
{
    let expr = match before(expr) {
        ControlFlow::Break(expr) => return expr,
        ControlFlow::Continue(expr) => expr,
    };

    let rebuilt = match expr {
        Expr::Number(_) | Expr::Symbol(_) | Expr::Polynomial(_) => expr,
        Expr::Sum(lhs, rhs) => {
            let lhs = visit(*lhs, before, after);
            Expr::Sum(lhs, visit(*rhs, before, after))
        },
        Expr::Product(lhs, rhs) => {
            let lhs = visit(*lhs, before, after);
            Expr::Product(lhs, visit(*rhs, before, after))
        },
        Expr::Quotient(lhs, rhs) => {
            let lhs = visit(*lhs, before, after);
            Expr::Quotient(lhs, visit(*rhs, before, after))
        },
        Expr::Power(base, exponent) => Expr::Power(visit(*base, before, after), exponent),
        Expr::Cos(operand) => Expr::Cos(visit(*operand, before, after)),
        Expr::Sin(operand) => Expr::Sin(visit(*operand, before, after)),
        Expr::Const(Marked(inner)) => Expr::Const(Marked(visit(*inner, before, after))),
    };

    after(rebuilt)
}

/// Traverses a child, boxing the result for its parent.
fn visit<B, A>(child: Expr, before: &mut B, after: &mut A) -> Box<Expr>
where
    B: FnMut(Expr) -> ControlFlow<Expr, Expr>,
    A: FnMut(Expr) -> Expr,
{
    Box::new(traverse(child, before, after))
}

/// Rewrites `expr` bottom-up, calling `after` on every node once its children are rewritten.
pub fn post_order<A>(expr: Expr, after: &mut A) -> Expr
where
    A: FnMut(Expr) -> Expr,
{
    traverse(expr, &mut ControlFlow::<Expr, Expr>::Continue, after)
}
