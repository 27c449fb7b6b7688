//! Numerical evaluation of expressions at a point.

use crate::error::UndefinedVariable;
use std::collections::HashMap;
use super::{expr::Expr, polynomial::Polynomial};
use symdiff_error::Error;

/// Looks up the value of a symbol.
fn lookup(vars: &HashMap<String, f64>, name: &str) -> Result<f64, Error> {
    vars.get(name)
        .copied()
        .ok_or_else(|| Error::new(Vec::new(), UndefinedVariable { name: name.to_owned() }))
}

impl Expr {
    /// Evaluates the expression, substituting the given values for its symbols.
    ///
    /// Returns [`Err`] if a symbol has no value in `vars`. Division by zero and similar operations
    /// follow IEEE 754, producing infinities or NaN rather than an error.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use symdiff::symbolic::Expr;
    ///
    /// let expr = Expr::pow(Expr::sym("x"), 2.0) + Expr::num(1.0);
    /// let vars = HashMap::from([("x".to_string(), 3.0)]);
    /// assert_eq!(expr.eval(&vars).unwrap(), 10.0);
    /// ```
    pub fn eval(&self, vars: &HashMap<String, f64>) -> Result<f64, Error> {
        Ok(match self {
            Self::Number(n) => *n,
            Self::Symbol(name) => lookup(vars, name)?,
            Self::Sum(lhs, rhs) => lhs.eval(vars)? + rhs.eval(vars)?,
            Self::Product(lhs, rhs) => lhs.eval(vars)? * rhs.eval(vars)?,
            Self::Quotient(lhs, rhs) => lhs.eval(vars)? / rhs.eval(vars)?,
            Self::Power(base, exponent) => base.eval(vars)?.powf(*exponent),
            Self::Cos(operand) => operand.eval(vars)?.cos(),
            Self::Sin(operand) => operand.eval(vars)?.sin(),
            Self::Const(marked) => marked.inner().eval(vars)?,
            Self::Polynomial(poly) => poly.eval(vars)?,
        })
    }
}

impl Polynomial {
    /// Evaluates the polynomial, substituting the given values for its symbols.
    ///
    /// Returns [`Err`] if a symbol has no value in `vars`.
    pub fn eval(&self, vars: &HashMap<String, f64>) -> Result<f64, Error> {
        let mut buf = [0; 4];
        self.iter().try_fold(0.0, |sum, (monomial, coefficient)| -> Result<f64, Error> {
            let mut term = coefficient;
            for (symbol, exponent) in monomial.powers() {
                term *= lookup(vars, symbol.encode_utf8(&mut buf))?.powi(exponent);
            }
            Ok(sum + term)
        })
    }
}
