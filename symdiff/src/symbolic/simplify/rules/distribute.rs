//! Simplification rules related to the distributive property.

use crate::symbolic::{
    expr::Expr,
    simplify::{rules::{do_product, flatten_product}, step::Step},
    step_collector::StepCollector,
};
use log::trace;

/// `a*(b+c) = a*b + a*c`
///
/// Applies when the last factor of a product chain is a sum; every other factor of the chain is
/// distributed over it. The result is not simplified.
pub fn distributive_property(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |lhs, rhs| {
        let mut factors = Vec::new();
        flatten_product(lhs, &mut factors);
        flatten_product(rhs, &mut factors);

        let (last, rest) = factors.split_last()?;
        let Expr::Sum(first_term, other_terms) = last else {
            return None;
        };

        let distributed = Expr::product_of(rest.iter().map(|&factor| factor.clone()))?;
        Some(
            distributed.clone() * (**first_term).clone()
                + distributed * (**other_terms).clone()
        )
    })?;

    // keep the step collection logic outside of the closure
    trace!("distributed {} into {}", expr, opt);
    step_collector.push(Step::DistributiveProperty);
    Some(opt)
}
