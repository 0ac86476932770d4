//! # Wing Load Formulas
//!
//! Closed-form load chain from aircraft mass to spar root moment.
//!
//! ## Notation
//!
//! - `m` = Aircraft mass
//! - `g` = Gravitational acceleration
//! - `n` = Load factor (multiple of g)
//! - `W` = Weight
//! - `L` = Limit lift load
//! - `b` = Wingspan
//! - `M` = Root bending moment
//!
//! ## Lift Model
//!
//! Lift is taken as uniform over the whole span and the root moment as
//! `M = L·b/8`. Real lift distributions are closer to elliptical and the
//! two wing halves are really two cantilevers, so this is a sizing
//! approximation rather than a stress analysis. The formula is kept exactly
//! as the quick-sizing method defines it.

use crate::units::{Kilograms, Meters, NewtonMeters, Newtons};

/// Standard gravitational acceleration (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Calculate aircraft weight
///
/// # Formula
/// W = m × g
///
/// # Example
/// ```rust
/// use spar_core::equations::load::weight;
/// use spar_core::units::Kilograms;
///
/// let w = weight(Kilograms(5.0), 9.81);
/// assert!((w.0 - 49.05).abs() < 1e-9);
/// ```
#[inline]
pub fn weight(mass: Kilograms, g: f64) -> Newtons {
    Newtons(mass.0 * g)
}

/// Calculate the limit lift load at a given load factor
///
/// # Formula
/// L = W × n
#[inline]
pub fn limit_load(weight: Newtons, load_factor: f64) -> Newtons {
    weight * load_factor
}

/// Calculate root bending moment under the uniform-lift assumption
///
/// ```text
///   ↑  ↑  ↑  ↑  ↑  ↑  ↑  ↑   uniform lift, total L
///   ════════════╤════════════
///               root
///   ←──────────  b  ─────────→
/// ```
///
/// # Formula
/// M = L × b / 8
///
/// Equivalent to `wb²/8` with `w = L/b`.
///
/// # Example
/// ```rust
/// use spar_core::equations::load::uniform_lift_root_moment;
/// use spar_core::units::{Meters, Newtons};
///
/// let m = uniform_lift_root_moment(Newtons(147.15), Meters(2.0));
/// assert!((m.0 - 36.7875).abs() < 1e-9);
/// ```
#[inline]
pub fn uniform_lift_root_moment(limit_load: Newtons, span: Meters) -> NewtonMeters {
    NewtonMeters(limit_load.0 * span.0 / 8.0)
}
