//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules expect the operands of the expression to be simplified already.

pub mod add;
pub mod distribute;
pub mod multiply;

use crate::symbolic::expr::Expr;

/// If the expression is a sum, calls the given transformation function with its two terms.
///
/// Returns `Some(value)` with the result of the transformation if it applied.
pub(crate) fn do_sum<T>(expr: &Expr, f: impl FnOnce(&Expr, &Expr) -> Option<T>) -> Option<T> {
    if let Expr::Sum(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a product, calls the given transformation function with its two factors.
///
/// Returns `Some(value)` with the result of the transformation if it applied.
pub(crate) fn do_product<T>(expr: &Expr, f: impl FnOnce(&Expr, &Expr) -> Option<T>) -> Option<T> {
    if let Expr::Product(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// Collects the terms of a chain of nested sums, left to right.
pub(crate) fn flatten_sum<'a>(expr: &'a Expr, terms: &mut Vec<&'a Expr>) {
    match expr {
        Expr::Sum(lhs, rhs) => {
            flatten_sum(lhs, terms);
            flatten_sum(rhs, terms);
        },
        _ => terms.push(expr),
    }
}

/// Collects the factors of a chain of nested products, left to right.
pub(crate) fn flatten_product<'a>(expr: &'a Expr, factors: &mut Vec<&'a Expr>) {
    match expr {
        Expr::Product(lhs, rhs) => {
            flatten_product(lhs, factors);
            flatten_product(rhs, factors);
        },
        _ => factors.push(expr),
    }
}

/// Splits operands into the numbers among them and clones of everything else, keeping order.
pub(crate) fn partition_numbers(operands: Vec<&Expr>) -> (Vec<f64>, Vec<Expr>) {
    let mut numbers = Vec::new();
    let mut rest = Vec::new();
    for operand in operands {
        match operand.as_number() {
            Some(n) => numbers.push(n),
            None => rest.push(operand.clone()),
        }
    }
    (numbers, rest)
}
