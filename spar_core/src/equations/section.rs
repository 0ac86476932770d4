//! # Tube Section and Stress Formulas
//!
//! Geometric properties of a hollow circular tube and the bending stress
//! check built on them.
//!
//! ## Notation
//!
//! - `D` = Outer diameter
//! - `d` = Inner diameter
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area)
//! - `c` = Distance to extreme fibre = D/2
//! - `S` = Section modulus (I/c)
//! - `σ` = Bending stress
//! - `F` = Allowable material strength
//!
//! All diameters are in mm, so `I` is in mm⁴ and `S` in mm³. Stress is MPa
//! when the moment is supplied in N·mm.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1
//! - Any mechanics of materials text (σ = M/S)

use std::f64::consts::PI;

use crate::units::{Megapascals, Millimeters, Mm2, Mm3, Mm4, NewtonMillimeters};

// =============================================================================
// HOLLOW CIRCULAR SECTION PROPERTIES
// =============================================================================

/// Calculate moment of inertia for a hollow circular tube
///
/// ```text
///        ╭───────╮
///      ╱  ╭───╮   ╲
///     │   │ d │    │  D
///      ╲  ╰───╯   ╱
///        ╰───────╯
/// ```
///
/// # Formula
/// I = π/64 × (D⁴ − d⁴)
///
/// # Example
/// ```rust
/// use spar_core::equations::section::tube_moment_of_inertia;
/// use spar_core::units::Millimeters;
///
/// // 12 x 8 mm tube: π/64 × 16640
/// let i = tube_moment_of_inertia(Millimeters(12.0), Millimeters(8.0));
/// assert!((i.0 - 816.81).abs() < 0.01);
/// ```
#[inline]
pub fn tube_moment_of_inertia(outer: Millimeters, inner: Millimeters) -> Mm4 {
    Mm4(PI / 64.0 * (outer.0.powi(4) - inner.0.powi(4)))
}

/// Calculate section modulus for a hollow circular tube
///
/// # Formula
/// S = I / c = I / (D/2)
///
/// # Example
/// ```rust
/// use spar_core::equations::section::{tube_moment_of_inertia, tube_section_modulus};
/// use spar_core::units::Millimeters;
///
/// let i = tube_moment_of_inertia(Millimeters(12.0), Millimeters(8.0));
/// let s = tube_section_modulus(i, Millimeters(12.0));
/// assert!((s.0 - 136.14).abs() < 0.01);
/// ```
#[inline]
pub fn tube_section_modulus(moment_of_inertia: Mm4, outer: Millimeters) -> Mm3 {
    Mm3(moment_of_inertia.0 / (outer.0 / 2.0))
}

/// Calculate cross-sectional area of a hollow circular tube
///
/// # Formula
/// A = π/4 × (D² − d²)
#[inline]
pub fn tube_area(outer: Millimeters, inner: Millimeters) -> Mm2 {
    Mm2(PI / 4.0 * (outer.0.powi(2) - inner.0.powi(2)))
}

/// Wall thickness t = (D − d)/2
#[inline]
pub fn tube_wall_thickness(outer: Millimeters, inner: Millimeters) -> Millimeters {
    Millimeters((outer.0 - inner.0) / 2.0)
}

// =============================================================================
// STRESS CHECK
// =============================================================================

/// Calculate peak bending stress
///
/// # Formula
/// σ = M / S
///
/// With `M` in N·mm and `S` in mm³ the result is N/mm² = MPa.
#[inline]
pub fn bending_stress(moment: NewtonMillimeters, section_modulus: Mm3) -> Megapascals {
    moment / section_modulus
}

/// Calculate safety factor against the allowable strength
///
/// # Formula
/// SF = F / σ
#[inline]
pub fn safety_factor(allowable: Megapascals, stress: Megapascals) -> f64 {
    allowable.0 / stress.0
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.01;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 0.001
    }

    #[test]
    fn test_tube_moment_of_inertia() {
        // π/64 × (12⁴ − 8⁴) = π/64 × 16640 = 816.81
        let i = tube_moment_of_inertia(Millimeters(12.0), Millimeters(8.0));
        assert!(approx_eq(i.0, 816.81), "I = {} (expected 816.81)", i.0);
    }

    #[test]
    fn test_solid_rod_matches_circle_formula() {
        // d = 0 reduces to πD⁴/64
        let i = tube_moment_of_inertia(Millimeters(10.0), Millimeters(0.0));
        let expected = PI * 10.0_f64.powi(4) / 64.0;
        assert!(approx_eq(i.0, expected), "I = {} (expected {})", i.0, expected);
    }

    #[test]
    fn test_tube_section_modulus() {
        let i = tube_moment_of_inertia(Millimeters(12.0), Millimeters(8.0));
        let s = tube_section_modulus(i, Millimeters(12.0));
        assert!(approx_eq(s.0, 136.14), "S = {} (expected 136.14)", s.0);

        // S = π/32 × (D⁴ − d⁴)/D
        let closed_form = PI / 32.0 * (12.0_f64.powi(4) - 8.0_f64.powi(4)) / 12.0;
        assert!(approx_eq(s.0, closed_form), "S = {}, closed form = {}", s.0, closed_form);
    }

    #[test]
    fn test_tube_area() {
        // π/4 × (144 − 64) = 20π
        let a = tube_area(Millimeters(12.0), Millimeters(8.0));
        assert!(approx_eq(a.0, 20.0 * PI), "A = {} (expected {})", a.0, 20.0 * PI);
    }

    #[test]
    fn test_tube_wall_thickness() {
        assert_eq!(tube_wall_thickness(Millimeters(12.0), Millimeters(8.0)).0, 2.0);
    }

    #[test]
    fn test_bending_stress_and_safety_factor() {
        let stress = bending_stress(NewtonMillimeters(36_787.5), Mm3(136.1357));
        assert!(approx_eq(stress.0, 270.23), "stress = {} (expected 270.23)", stress.0);

        let sf = safety_factor(Megapascals(600.0), stress);
        assert!(approx_eq(sf, 2.22), "SF = {} (expected 2.22)", sf);
    }
}
