//! Simplification rules for sums.

use crate::approx::is_zero;
use crate::symbolic::{
    expr::Expr,
    simplify::{rules::{do_sum, flatten_sum, partition_numbers}, step::Step},
    step_collector::StepCollector,
};
use log::trace;

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sum(expr, |lhs, rhs| {
        if lhs.is_zero() {
            Some(rhs.clone())
        } else if rhs.is_zero() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Flattens a chain of sums, adds up its numeric terms, and rebuilds the chain right-associated
/// with the total first. A total of zero is dropped unless it is the only term left.
///
/// `(x+2)+(3+y) = 5+(x+y)`
/// `(x+1)+-1 = x`
/// `2+3 = 5`
pub fn fold_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (opt, folded) = do_sum(expr, |lhs, rhs| {
        let mut terms = Vec::new();
        flatten_sum(lhs, &mut terms);
        flatten_sum(rhs, &mut terms);

        let (numbers, mut rest) = partition_numbers(terms);
        let total = numbers.iter().sum::<f64>();
        let folded = numbers.len() > 1;

        if rest.is_empty() {
            return Some((Expr::Number(total), folded));
        }
        if !is_zero(total) {
            rest.insert(0, Expr::Number(total));
        }
        Some((Expr::sum_of(rest)?, folded))
    })?;

    if folded {
        trace!("folded the numbers of {} into {}", expr, opt);
        step_collector.push(Step::FoldNumbers);
    }
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
        .or_else(|| fold_terms(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::sym(name)
    }

    #[test]
    fn zero_terms() {
        let mut steps = Vec::new();
        assert_eq!(add_zero(&(Expr::num(0.0) + sym("x")), &mut steps), Some(sym("x")));
        assert_eq!(add_zero(&(sym("x") + Expr::num(1e-12)), &mut steps), Some(sym("x")));
        assert_eq!(add_zero(&(sym("x") + sym("y")), &mut steps), None);
        assert_eq!(steps, vec![Step::AddZero, Step::AddZero]);
    }

    #[test]
    fn fold_total_first() {
        let expr = (sym("x") + Expr::num(2.0)) + (Expr::num(3.0) + sym("y"));
        let mut steps = Vec::new();
        assert_eq!(
            fold_terms(&expr, &mut steps),
            Some(Expr::num(5.0) + (sym("x") + sym("y"))),
        );
        assert_eq!(steps, vec![Step::FoldNumbers]);
    }

    #[test]
    fn fold_drops_zero_total() {
        let expr = (Expr::num(1.0) + sym("x")) + Expr::num(-1.0);
        assert_eq!(fold_terms(&expr, &mut ()), Some(sym("x")));
    }

    #[test]
    fn fold_all_numbers() {
        let expr = Expr::num(2.0) + (Expr::num(3.0) + Expr::num(-5.0));
        assert_eq!(fold_terms(&expr, &mut ()), Some(Expr::num(0.0)));
    }

    #[test]
    fn fold_without_numbers() {
        let expr = (sym("a") + sym("b")) + sym("c");
        let mut steps = Vec::new();
        assert_eq!(fold_terms(&expr, &mut steps), Some(sym("a") + (sym("b") + sym("c"))));
        assert!(steps.is_empty());
    }
}
