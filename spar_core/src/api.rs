//! # Scalar API
//!
//! Flat entry points taking plain numbers, for front ends that collect a few
//! form values and a list of `(outer, inner)` pairs. Each function validates
//! its inputs and forwards to [`crate::calculations`].
//!
//! Units: mass in kg, span in m, diameters in mm, strength in MPa, load
//! factor as a multiple of g.
//!
//! ## Example
//!
//! ```rust
//! use spar_core::api;
//!
//! let (stress_mpa, safety_factor) = api::evaluate(5.0, 2.0, 3.0, 12.0, 8.0, 600.0).unwrap();
//! assert!((stress_mpa - 270.2).abs() < 0.1);
//! assert!((safety_factor - 2.22).abs() < 0.01);
//!
//! let report = api::rank(5.0, 2.0, 3.0, &[(10.0, 8.0), (12.0, 8.0)], 600.0, 2.0).unwrap();
//! assert_eq!(report.recommendation.unwrap().geometry.outer_diameter_mm, 12.0);
//! ```

use crate::calculations::{
    self, LoadInputs, LoadResult, MaterialSpec, RankedReport, SectionProperties, TubeGeometry,
};
use crate::errors::SparResult;

/// Weight, limit load, and root moment at standard gravity.
pub fn compute_load(mass_kg: f64, span_m: f64, load_factor: f64) -> SparResult<LoadResult> {
    calculations::compute_load(&LoadInputs::new(mass_kg, span_m, load_factor))
}

/// Weight, limit load, and root moment at a given gravitational acceleration.
pub fn compute_load_with_gravity(
    mass_kg: f64,
    span_m: f64,
    load_factor: f64,
    gravity_mps2: f64,
) -> SparResult<LoadResult> {
    calculations::compute_load(&LoadInputs::new(mass_kg, span_m, load_factor).with_gravity(gravity_mps2))
}

/// Moment of inertia and section modulus of a tube.
pub fn section_properties(outer_diameter_mm: f64, inner_diameter_mm: f64) -> SparResult<SectionProperties> {
    calculations::section_properties(&TubeGeometry::new(outer_diameter_mm, inner_diameter_mm))
}

/// Stress (MPa) and safety factor of one tube.
pub fn evaluate(
    mass_kg: f64,
    span_m: f64,
    load_factor: f64,
    outer_diameter_mm: f64,
    inner_diameter_mm: f64,
    allowable_strength_mpa: f64,
) -> SparResult<(f64, f64)> {
    let load = compute_load(mass_kg, span_m, load_factor)?;
    // Target only drives `passes`, which this entry point does not return
    let material = MaterialSpec::new(allowable_strength_mpa, 1.0);
    let result = calculations::evaluate(
        &load,
        &TubeGeometry::new(outer_diameter_mm, inner_diameter_mm),
        &material,
    )?;
    Ok((result.stress_mpa, result.safety_factor))
}

/// Rank `(outer, inner)` pairs and pick the smallest passing tube.
pub fn rank(
    mass_kg: f64,
    span_m: f64,
    load_factor: f64,
    geometries: &[(f64, f64)],
    allowable_strength_mpa: f64,
    target_safety_factor: f64,
) -> SparResult<RankedReport> {
    let load = compute_load(mass_kg, span_m, load_factor)?;
    let candidates: Vec<TubeGeometry> = geometries
        .iter()
        .map(|&(outer, inner)| TubeGeometry::new(outer, inner))
        .collect();
    calculations::rank(
        &load,
        &candidates,
        &MaterialSpec::new(allowable_strength_mpa, target_safety_factor),
    )
}
