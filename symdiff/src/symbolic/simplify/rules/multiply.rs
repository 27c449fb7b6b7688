//! Simplification rules for products.

use crate::approx::{is_one, is_zero};
use crate::symbolic::{
    expr::Expr,
    simplify::{rules::{do_product, flatten_product, partition_numbers}, step::Step},
    step_collector::StepCollector,
};
use log::trace;

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |lhs, rhs| {
        if lhs.is_zero() || rhs.is_zero() {
            Some(Expr::Number(0.0))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |lhs, rhs| {
        if lhs.is_one() {
            Some(rhs.clone())
        } else if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Flattens a chain of products, multiplies its numeric factors into one coefficient, and
/// rebuilds the chain right-associated with the coefficient first. A coefficient of one is
/// dropped unless it is the only factor left, and a coefficient of zero collapses the whole
/// product.
///
/// `(3*z)*(y*-1) = -3*(z*y)`
/// `(2*x)*0.5 = x`
pub fn fold_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (opt, folded) = do_product(expr, |lhs, rhs| {
        let mut factors = Vec::new();
        flatten_product(lhs, &mut factors);
        flatten_product(rhs, &mut factors);

        let (numbers, mut rest) = partition_numbers(factors);
        let coefficient = numbers.iter().product::<f64>();
        let folded = numbers.len() > 1;

        if rest.is_empty() {
            return Some((Expr::Number(coefficient), folded));
        }
        if is_zero(coefficient) {
            return Some((Expr::Number(0.0), true));
        }
        if !is_one(coefficient) {
            rest.insert(0, Expr::Number(coefficient));
        }
        Some((Expr::product_of(rest)?, folded))
    })?;

    if folded {
        trace!("folded the numbers of {} into {}", expr, opt);
        step_collector.push(Step::FoldNumbers);
    }
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| fold_factors(expr, step_collector))
}
