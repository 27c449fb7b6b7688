//! Simplification of expressions into a normal form.
//!
//! [`simplify`] rewrites an expression bottom-up. Operands are always simplified before the node
//! that contains them, and then a small set of rules is applied to the node itself:
//!
//! - constant markers are removed,
//! - sums and products with an identity or absorbing operand (`0+a`, `1*a`, `0*a`) are reduced,
//! - chains of nested sums or products are flattened, their numbers are combined into a single
//! total or coefficient placed first, and the chain is rebuilt right-associated,
//! - a product chain ending in a sum is distributed over it, and the result simplified again.
//!
//! Cosines, sines, powers and quotients only have their operands simplified. Numbers are compared
//! with the tolerance [`EPSILON`](crate::consts::EPSILON).
//!
//! Simplifying is idempotent: simplifying a simplified expression returns it unchanged.
//!
//! ```
//! use symdiff::symbolic::{simplify, Expr};
//!
//! // 5 + 6 * (cos(x) * 0)
//! let expr = Expr::num(5.0) + Expr::num(6.0) * (Expr::cos(Expr::sym("x")) * Expr::num(0.0));
//! assert_eq!(simplify(&expr), Expr::num(5.0));
//! ```
//!
//! The steps taken can be recorded through a [`StepCollector`]; see [`simplify_with_steps`].

pub mod rules;
pub mod step;

use crate::symbolic::{expr::Expr, step_collector::StepCollector};
use log::debug;
use rules::{add, distribute, multiply};
use step::Step;

/// Simplifies a product whose operands are simplified.
fn simplify_product(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let product = lhs * rhs;
    let folded = multiply::all(&product, step_collector).unwrap_or(product);
    match distribute::distributive_property(&folded, step_collector) {
        Some(distributed) => simplify_node(&distributed, step_collector),
        None => folded,
    }
}

/// Simplifies an expression and everything below it.
fn simplify_node(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Symbol(_) | Expr::Polynomial(_) => expr.clone(),
        Expr::Const(marked) => {
            step_collector.push(Step::StripConstant);
            simplify_node(marked.inner(), step_collector)
        },
        Expr::Sum(lhs, rhs) => {
            let sum = simplify_node(lhs, step_collector) + simplify_node(rhs, step_collector);
            add::all(&sum, step_collector).unwrap_or(sum)
        },
        Expr::Product(lhs, rhs) => {
            let lhs = simplify_node(lhs, step_collector);
            simplify_product(lhs, simplify_node(rhs, step_collector), step_collector)
        },
        Expr::Quotient(lhs, rhs) => {
            simplify_node(lhs, step_collector) / simplify_node(rhs, step_collector)
        },
        Expr::Power(base, exponent) => Expr::pow(simplify_node(base, step_collector), *exponent),
        Expr::Cos(operand) => Expr::cos(simplify_node(operand, step_collector)),
        Expr::Sin(operand) => Expr::sin(simplify_node(operand, step_collector)),
    }
}

/// Simplifies the given expression, reporting each rule applied to `step_collector`.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    debug!("simplifying {}", expr);
    let result = simplify_node(expr, step_collector);
    debug_assert!(!result.contains_marker());
    debug!("simplified {} to {}", expr, result);
    result
}

/// Simplifies the given expression.
///
/// For more information, see the [module-level documentation](self).
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Simplifies the given expression, returning the steps taken in the order they were applied.
///
/// ```
/// use symdiff::symbolic::{simplify::step::Step, simplify_with_steps, Expr};
///
/// // 4.5 * (2 + y)
/// let expr = Expr::num(4.5) * (Expr::num(2.0) + Expr::sym("y"));
/// let (simplified, steps) = simplify_with_steps(&expr);
/// assert_eq!(simplified, Expr::num(9.0) + Expr::num(4.5) * Expr::sym("y"));
/// assert_eq!(steps, vec![Step::DistributiveProperty, Step::FoldNumbers]);
/// ```
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps);
    (simplified, steps)
}
