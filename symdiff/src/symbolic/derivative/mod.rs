//! Symbolic differentiation by structural rewriting.
//!
//! [`derivative`] applies the sum, product, quotient and chain rules node by node. The result is
//! **not** simplified; it usually contains products with `0` and `1` that
//! [`simplify`](super::simplify::simplify) removes.
//!
//! Every [`Expr::Symbol`] differentiates to 1, so [`derivative`] on its own is only meaningful for
//! expressions in a single variable. To differentiate with respect to one variable of many, use
//! [`partial_derivative`], which first marks every subtree that does not mention the variable as
//! a constant.

mod function;

use log::{debug, trace};
use super::{
    constant::{mark_constant, strip_constants},
    expr::Expr,
};

/// `(f + g)' = f' + g'`
fn sum_rule(lhs: &Expr, rhs: &Expr) -> Expr {
    trace!("sum rule on ({}+{})", lhs, rhs);
    differentiate(lhs) + differentiate(rhs)
}

/// `(f * g)' = f * g' + f' * g`
fn product_rule(lhs: &Expr, rhs: &Expr) -> Expr {
    trace!("product rule on ({}*{})", lhs, rhs);
    lhs.clone() * differentiate(rhs) + differentiate(lhs) * rhs.clone()
}

/// `(u / v)' = (u' * v + -1 * (u * v')) / (v * v)`
fn quotient_rule(numerator: &Expr, denominator: &Expr) -> Expr {
    trace!("quotient rule on ({}/{})", numerator, denominator);
    let lhs = differentiate(numerator) * denominator.clone();
    let rhs = Expr::num(-1.0) * (numerator.clone() * differentiate(denominator));
    (lhs + rhs) / (denominator.clone() * denominator.clone())
}

/// Applies the differentiation rules without logging the operation as a whole.
fn differentiate(expr: &Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Const(_) => Expr::num(0.0),
        Expr::Symbol(_) => Expr::num(1.0),
        Expr::Sum(lhs, rhs) => sum_rule(lhs, rhs),
        Expr::Product(lhs, rhs) => product_rule(lhs, rhs),
        Expr::Quotient(numerator, denominator) => quotient_rule(numerator, denominator),
        Expr::Power(base, exponent) => function::power(base, *exponent),
        Expr::Cos(operand) => function::cos(operand),
        Expr::Sin(operand) => function::sin(operand),
        Expr::Polynomial(poly) => match poly.derivative() {
            Some(derivative) => Expr::Polynomial(derivative),
            None => differentiate(&poly.to_expr()),
        },
    }
}

/// Computes the derivative of the given expression, treating every symbol as the variable of
/// differentiation.
///
/// Numbers (and anything marked constant) differentiate to 0 and symbols to 1. A
/// [`Expr::Polynomial`] is differentiated term by term, consistently with that rule, and the
/// result is again a polynomial.
///
/// ```
/// use symdiff::symbolic::{derivative, Expr};
///
/// let expr = Expr::sin(Expr::sym("x"));
/// assert_eq!(
///     derivative(&expr),
///     Expr::cos(Expr::sym("x")) * Expr::num(1.0),
/// );
/// ```
pub fn derivative(expr: &Expr) -> Expr {
    debug!("differentiating {}", expr);
    let result = differentiate(expr);
    debug!("derivative of {} is {}", expr, result);
    result
}

/// Computes the partial derivative of the given expression with respect to `variable`.
///
/// Every subtree that does not mention `variable` is treated as a constant. The result is
/// unsimplified and contains no constant markers.
///
/// ```
/// use symdiff::symbolic::{partial_derivative, simplify, Expr};
///
/// // d/da (a * y) = y
/// let expr = Expr::sym("a") * Expr::sym("y");
/// assert_eq!(simplify(&partial_derivative("a", &expr)), Expr::sym("y"));
/// ```
pub fn partial_derivative(variable: &str, expr: &Expr) -> Expr {
    debug!("differentiating {} with respect to {}", expr, variable);
    let marked = mark_constant(variable, expr);
    trace!("marked constants: {}", marked);
    let result = strip_constants(differentiate(&marked));
    debug_assert!(!result.contains_marker());
    debug!("partial derivative of {} with respect to {} is {}", expr, variable, result);
    result
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_absolute_error_msg, afe_is_absolute_eq, assert_float_absolute_eq};
    use crate::symbolic::{
        arbitrary::random_expr,
        combine::to_polynomial,
        polynomial::Polynomial,
        simplify::simplify,
    };
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashMap;
    use super::*;

    fn x() -> Expr {
        Expr::sym("x")
    }

    fn poly(terms: &[(&str, f64)]) -> Expr {
        Expr::poly(Polynomial::new(terms.iter().copied()).unwrap())
    }

    /// Simplifies and folds an expression into its normal form.
    fn normal(expr: &Expr) -> Expr {
        to_polynomial(&simplify(expr))
    }

    /// Approximates the derivative of `expr` at `x = at` with a central difference.
    fn finite_difference(expr: &Expr, at: f64) -> f64 {
        const DX: f64 = 1e-5;
        let eval_at = |x: f64| expr.eval(&HashMap::from([("x".to_string(), x)])).unwrap();
        (eval_at(at + DX) - eval_at(at - DX)) / (2.0 * DX)
    }

    fn check_against_finite_difference(expr: Expr, points: impl IntoIterator<Item = f64>) {
        let symbolic = derivative(&expr);
        for point in points {
            let vars = HashMap::from([("x".to_string(), point)]);
            let symbolically_computed = symbolic.eval(&vars).unwrap();
            let numerically_computed = finite_difference(&expr, point);
            assert_float_absolute_eq!(symbolically_computed, numerically_computed, 1e-4);
        }
    }

    #[test_log::test]
    fn chain_rule_table() {
        // sin(6 * sin(x))
        let expr = Expr::sin(Expr::num(6.0) * Expr::sin(x()));
        assert_eq!(
            simplify(&derivative(&expr)),
            Expr::num(6.0) * (Expr::cos(Expr::num(6.0) * Expr::sin(x())) * Expr::cos(x())),
        );
    }

    #[test_log::test]
    fn power_rule() {
        // x^4 + 3x^9
        let expr = Expr::pow(x(), 4.0) + Expr::num(3.0) * Expr::pow(x(), 9.0);
        let simplified = simplify(&derivative(&expr));
        assert_eq!(
            simplified,
            Expr::num(4.0) * Expr::pow(x(), 3.0) + Expr::num(27.0) * Expr::pow(x(), 8.0),
        );
        assert_eq!(to_polynomial(&simplified), poly(&[("x^3", 4.0), ("x^8", 27.0)]));
    }

    #[test_log::test]
    fn power_rule_any_exponent() {
        for n in 2..8 {
            let expr = Expr::pow(x(), n as f64);
            let key = if n == 2 { "x".to_string() } else { format!("x^{}", n - 1) };
            assert_eq!(normal(&derivative(&expr)), poly(&[(key.as_str(), n as f64)]));
        }
    }

    #[test_log::test]
    fn quotient_rule() {
        // (3z + 9) / (2 - z)
        let z = || Expr::sym("z");
        let expr = (Expr::num(3.0) * z() + Expr::num(9.0))
            / (Expr::num(2.0) + Expr::num(-1.0) * z());
        assert_eq!(
            normal(&derivative(&expr)),
            poly(&[("", 15.0)]) / poly(&[("", 4.0), ("z^2", 1.0), ("z", -4.0)]),
        );
    }

    #[test_log::test]
    fn trig_cycle() {
        let table = [
            "Sin(x)",
            "Cos(x)",
            "(-1*Sin(x))",
            "(-1*Cos(x))",
            "Sin(x)",
            "Cos(x)",
            "(-1*Sin(x))",
        ];

        let mut expr = Expr::sin(x());
        for expected in table {
            assert_eq!(expr.to_string(), expected);
            expr = simplify(&derivative(&expr));
        }
    }

    #[test_log::test]
    fn polynomial_derivative() {
        let expr = poly(&[("x^3", 2.0), ("x", 1.0), ("", 7.0)]);
        assert_eq!(derivative(&expr), poly(&[("x^2", 6.0), ("", 1.0)]));

        // the exponent of the derivative would not fit, so the power rule applies instead
        let expr = poly(&[("x^-2147483648", 1.0)]);
        let expected = derivative(&(Expr::num(1.0) * Expr::pow(x(), i32::MIN as f64)));
        assert_eq!(derivative(&expr), expected);
    }

    #[test_log::test]
    fn matches_finite_difference() {
        check_against_finite_difference(
            Expr::pow(x(), 2.0) + x() + Expr::num(1.0),
            [0.0, 1.0, 2.0, 5.0, 8.0],
        );
        check_against_finite_difference(
            Expr::sin(Expr::pow(x(), 2.0)) * Expr::cos(x()),
            [-1.5, 0.0, 0.3, 2.0],
        );
        check_against_finite_difference(
            Expr::sin(x()) / (Expr::num(2.0) + Expr::cos(x())),
            [-2.0, 0.5, 1.0, 3.0],
        );
        check_against_finite_difference(
            Expr::pow(Expr::num(1.0) + Expr::pow(x(), 2.0), 0.5),
            [-1.0, 0.0, 4.0],
        );
    }

    #[test_log::test]
    fn linearity() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let a = random_expr(&mut rng, 3);
            let b = random_expr(&mut rng, 3);
            let lhs = derivative(&(a.clone() + b.clone()));
            let rhs = derivative(&a) + derivative(&b);
            assert_eq!(normal(&lhs), normal(&rhs));
        }
    }

    #[test_log::test]
    fn partial_masks_other_variables() {
        let (a, b) = (|| Expr::sym("a"), || Expr::sym("b"));
        let expr = a() * Expr::sin(Expr::num(5.0) + b());

        assert_eq!(
            normal(&partial_derivative("a", &expr)),
            Expr::sin(poly(&[("", 5.0), ("b", 1.0)])),
        );
        assert_eq!(
            normal(&partial_derivative("b", &expr)),
            poly(&[("a", 1.0)]) * Expr::cos(poly(&[("", 5.0), ("b", 1.0)])),
        );
    }

    #[test_log::test]
    fn partial_chain_rule() {
        let y = || Expr::sym("y");

        // sin(x * y) with respect to x
        let expr = Expr::sin(x() * y());
        assert_eq!(
            simplify(&partial_derivative("x", &expr)),
            Expr::cos(x() * y()) * y(),
        );

        // 5 * cos(y * x)^3 with respect to x
        let expr = Expr::num(5.0) * Expr::pow(Expr::cos(y() * x()), 3.0);
        assert_eq!(
            simplify(&partial_derivative("x", &expr)),
            Expr::num(-15.0) * (
                Expr::pow(Expr::cos(y() * x()), 2.0)
                    * (Expr::sin(y() * x()) * y())
            ),
        );
    }

    #[test_log::test]
    fn partial_of_polynomial() {
        // d/dx (3x^2y + y) = 6xy
        let expr = poly(&[("x^2y", 3.0), ("y", 1.0)]);
        assert_eq!(normal(&partial_derivative("x", &expr)), poly(&[("xy", 6.0)]));

        // a polynomial without the variable is constant
        assert_eq!(normal(&partial_derivative("z", &expr)), poly(&[]));
    }

    #[test_log::test]
    fn partial_result_has_no_markers() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let expr = random_expr(&mut rng, 4);
            assert!(!partial_derivative("x", &expr).contains_marker());
        }
    }
}
