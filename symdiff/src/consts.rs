//! Numeric constants used throughout the library.

/// The tolerance below which a floating-point value is treated as exactly zero.
///
/// Two numbers closer together than this are considered equal by every pass: the simplifier uses
/// it to recognize additive and multiplicative identities, and [`Polynomial`]s use it to prune
/// vanishing terms.
///
/// [`Polynomial`]: crate::symbolic::polynomial::Polynomial
pub const EPSILON: f64 = 1e-10;
