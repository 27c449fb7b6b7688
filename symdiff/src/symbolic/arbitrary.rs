//! Random expressions for property tests.

use rand::Rng;
use super::{expr::Expr, polynomial::Polynomial};

/// Generates a random leaf: a small integer or one of the symbols `x`, `y` and `z`.
fn random_leaf<R: Rng>(rng: &mut R) -> Expr {
    if rng.gen_bool(0.4) {
        Expr::num(rng.gen_range(-4..=4) as f64)
    } else {
        let names = ["x", "y", "z"];
        Expr::sym(names[rng.gen_range(0..names.len())])
    }
}

/// Generates a random single-term polynomial in `x` and `y`.
fn random_term<R: Rng>(rng: &mut R) -> Expr {
    let monomial = format!("x^{}y^{}", rng.gen_range(0..=2), rng.gen_range(0..=2));
    let coefficient = rng.gen_range(1..=5) as f64;
    Expr::poly(Polynomial::new([(monomial.as_str(), coefficient)]).unwrap())
}

/// Generates a random expression at most `depth` levels deep.
pub fn random_expr<R: Rng>(rng: &mut R, depth: u32) -> Expr {
    if depth == 0 || rng.gen_bool(0.25) {
        return random_leaf(rng);
    }

    let depth = depth - 1;
    match rng.gen_range(0..14) {
        0..=3 => random_expr(rng, depth) + random_expr(rng, depth),
        4..=7 => random_expr(rng, depth) * random_expr(rng, depth),
        8 => random_expr(rng, depth) / random_expr(rng, depth),
        9 | 10 => Expr::pow(random_expr(rng, depth), rng.gen_range(1..=3) as f64),
        11 => Expr::cos(random_expr(rng, depth)),
        12 => Expr::sin(random_expr(rng, depth)),
        _ => random_term(rng),
    }
}
