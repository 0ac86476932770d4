//! # Tube Section Evaluation
//!
//! Section properties of a hollow circular spar tube, and the bending
//! stress / safety factor check of one tube against a [`LoadResult`].
//!
//! ## Assumptions
//!
//! - Concentric circular tube, bending about a diameter
//! - Linear elastic material, peak stress at the outer fibre
//! - Bending only: no buckling, shear, or torsion checks
//!
//! ## Example
//!
//! ```rust
//! use spar_core::calculations::load::{compute_load, LoadInputs};
//! use spar_core::calculations::section::{evaluate, MaterialSpec, TubeGeometry};
//!
//! let load = compute_load(&LoadInputs::new(5.0, 2.0, 3.0)).unwrap();
//! let tube = TubeGeometry::new(12.0, 8.0);
//! let material = MaterialSpec::new(600.0, 2.0);
//!
//! let result = evaluate(&load, &tube, &material).unwrap();
//!
//! println!("Stress: {:.1} MPa", result.stress_mpa);
//! println!("SF: {:.2}", result.safety_factor);
//! assert!(result.passes);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::load::LoadResult;
use crate::equations::section::{
    bending_stress, safety_factor, tube_area, tube_moment_of_inertia, tube_section_modulus,
    tube_wall_thickness,
};
use crate::errors::{require_positive, SparError, SparResult};
use crate::units::{Megapascals, Millimeters, Mm3};

// ============================================================================
// Geometry
// ============================================================================

/// Candidate spar tube, diameters in mm.
///
/// ## JSON Example
///
/// ```json
/// { "outer_diameter_mm": 12.0, "inner_diameter_mm": 8.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TubeGeometry {
    /// Outer diameter D (mm)
    pub outer_diameter_mm: f64,

    /// Inner diameter d (mm)
    pub inner_diameter_mm: f64,
}

impl TubeGeometry {
    /// Create a geometry. Call [`validate`](Self::validate) before trusting it.
    pub fn new(outer_diameter_mm: f64, inner_diameter_mm: f64) -> Self {
        TubeGeometry {
            outer_diameter_mm,
            inner_diameter_mm,
        }
    }

    /// Check `0 < d < D` with both diameters finite.
    pub fn validate(&self) -> SparResult<()> {
        let (outer, inner) = (self.outer_diameter_mm, self.inner_diameter_mm);
        if !outer.is_finite() || !inner.is_finite() {
            return Err(SparError::invalid_geometry(outer, inner, "Diameters must be finite numbers"));
        }
        if outer <= 0.0 || inner <= 0.0 {
            return Err(SparError::invalid_geometry(outer, inner, "Diameters must be positive"));
        }
        if inner >= outer {
            return Err(SparError::invalid_geometry(
                outer,
                inner,
                "Inner diameter must be smaller than outer diameter",
            ));
        }
        Ok(())
    }

    fn outer(&self) -> Millimeters {
        Millimeters(self.outer_diameter_mm)
    }

    fn inner(&self) -> Millimeters {
        Millimeters(self.inner_diameter_mm)
    }
}

impl fmt::Display for TubeGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} mm", self.outer_diameter_mm, self.inner_diameter_mm)
    }
}

/// Parses a single `"outer,inner"` pair; spaces are ignored.
///
/// ```rust
/// use spar_core::calculations::section::TubeGeometry;
///
/// let tube: TubeGeometry = " 12, 8 ".parse().unwrap();
/// assert_eq!(tube, TubeGeometry::new(12.0, 8.0));
/// assert!("8,12".parse::<TubeGeometry>().is_err());
/// ```
impl FromStr for TubeGeometry {
    type Err = SparError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| *c != ' ').collect();
        let parts: Vec<&str> = compact.trim().split(',').collect();
        let [outer, inner] = parts.as_slice() else {
            return Err(SparError::invalid_input(
                "tube",
                s.trim(),
                "Expected 'outer,inner' in mm",
            ));
        };
        let parse = |field: &str| {
            field.parse::<f64>().map_err(|_| {
                SparError::invalid_input("tube", s.trim(), format!("'{}' is not a number", field))
            })
        };
        let geometry = TubeGeometry::new(parse(*outer)?, parse(*inner)?);
        geometry.validate()?;
        Ok(geometry)
    }
}

// ============================================================================
// Material
// ============================================================================

/// Allowable strength and the margin the design must keep against it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Allowable material strength (MPa)
    pub allowable_strength_mpa: f64,

    /// Minimum acceptable safety factor
    pub target_safety_factor: f64,
}

impl MaterialSpec {
    pub fn new(allowable_strength_mpa: f64, target_safety_factor: f64) -> Self {
        MaterialSpec {
            allowable_strength_mpa,
            target_safety_factor,
        }
    }

    /// Both values must be strictly positive.
    pub fn validate(&self) -> SparResult<()> {
        require_positive("allowable_strength_mpa", self.allowable_strength_mpa)?;
        require_positive("target_safety_factor", self.target_safety_factor)?;
        Ok(())
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Geometric properties of a tube section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Moment of inertia I = π/64·(D⁴ − d⁴) (mm⁴)
    pub moment_of_inertia_mm4: f64,

    /// Section modulus S = I/(D/2) (mm³)
    pub section_modulus_mm3: f64,

    /// Cross-sectional area (mm²)
    pub area_mm2: f64,

    /// Wall thickness (mm)
    pub wall_thickness_mm: f64,
}

/// Calculate section properties of a tube.
///
/// # Returns
///
/// * `Ok(SectionProperties)` - I, S, area, and wall thickness
/// * `Err(SparError::InvalidGeometry)` - `d >= D`, a non-positive diameter,
///   or a section modulus that is not strictly positive
///
/// # Example
///
/// ```rust
/// use spar_core::calculations::section::{section_properties, TubeGeometry};
///
/// let props = section_properties(&TubeGeometry::new(12.0, 8.0)).unwrap();
/// assert!((props.moment_of_inertia_mm4 - 816.81).abs() < 0.01);
/// assert!((props.section_modulus_mm3 - 136.14).abs() < 0.01);
/// ```
pub fn section_properties(geometry: &TubeGeometry) -> SparResult<SectionProperties> {
    geometry.validate()?;

    let i = tube_moment_of_inertia(geometry.outer(), geometry.inner());
    let s = tube_section_modulus(i, geometry.outer());

    if !(s.0.is_finite() && s.0 > 0.0) {
        return Err(SparError::invalid_geometry(
            geometry.outer_diameter_mm,
            geometry.inner_diameter_mm,
            format!("Section modulus must be positive (computed {})", s.0),
        ));
    }

    Ok(SectionProperties {
        moment_of_inertia_mm4: i.0,
        section_modulus_mm3: s.0,
        area_mm2: tube_area(geometry.outer(), geometry.inner()).0,
        wall_thickness_mm: tube_wall_thickness(geometry.outer(), geometry.inner()).0,
    })
}

// ============================================================================
// Evaluation
// ============================================================================

/// Stress check of one tube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// The tube evaluated
    pub geometry: TubeGeometry,

    /// Its section properties
    pub section: SectionProperties,

    /// Peak bending stress at the root (MPa)
    pub stress_mpa: f64,

    /// Allowable strength / stress
    pub safety_factor: f64,

    /// `safety_factor >= target_safety_factor`
    pub passes: bool,
}

/// Evaluate one tube against the wing load.
///
/// The root moment is converted to N·mm before dividing by the section
/// modulus in mm³, so the stress is in MPa.
///
/// # Returns
///
/// * `Ok(EvaluationResult)` - Stress, safety factor, and pass flag
/// * `Err(SparError::InvalidGeometry)` - See [`section_properties`]
/// * `Err(SparError::InvalidInput)` - Material values or root moment not strictly positive,
///   or the resulting stress or safety factor is zero or infinite
pub fn evaluate(
    load: &LoadResult,
    geometry: &TubeGeometry,
    material: &MaterialSpec,
) -> SparResult<EvaluationResult> {
    material.validate()?;
    require_positive("root_moment_nm", load.root_moment_nm)?;

    let section = section_properties(geometry)?;

    let stress = bending_stress(
        load.root_moment_for_stress(),
        Mm3(section.section_modulus_mm3),
    );
    let sf = safety_factor(Megapascals(material.allowable_strength_mpa), stress);
    require_positive("stress_mpa", stress.0)?;
    require_positive("safety_factor", sf)?;
    let passes = sf >= material.target_safety_factor;

    trace!(
        outer_mm = geometry.outer_diameter_mm,
        inner_mm = geometry.inner_diameter_mm,
        stress_mpa = stress.0,
        safety_factor = sf,
        passes,
        "evaluated tube"
    );

    Ok(EvaluationResult {
        geometry: *geometry,
        section,
        stress_mpa: stress.0,
        safety_factor: sf,
        passes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::load::{compute_load, LoadInputs};
    use approx::assert_relative_eq;
    use rstest::rstest;
    use std::f64::consts::PI;

    fn reference_load() -> LoadResult {
        compute_load(&LoadInputs::new(5.0, 2.0, 3.0)).unwrap()
    }

    #[test]
    fn test_section_properties_reference_tube() {
        let props = section_properties(&TubeGeometry::new(12.0, 8.0)).unwrap();
        assert_relative_eq!(props.moment_of_inertia_mm4, PI / 64.0 * 16_640.0, max_relative = 1e-12);
        assert_relative_eq!(
            props.section_modulus_mm3,
            props.moment_of_inertia_mm4 / 6.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(props.wall_thickness_mm, 2.0);
    }

    #[rstest]
    #[case(8.0, 6.0)]
    #[case(10.0, 8.0)]
    #[case(25.0, 23.5)]
    #[case(3.0, 0.5)]
    fn test_section_properties_closed_form(#[case] outer: f64, #[case] inner: f64) {
        let props = section_properties(&TubeGeometry::new(outer, inner)).unwrap();
        let i = PI / 64.0 * (outer.powi(4) - inner.powi(4));
        assert_relative_eq!(props.moment_of_inertia_mm4, i, max_relative = 1e-12);
        assert_relative_eq!(props.section_modulus_mm3, i / (outer / 2.0), max_relative = 1e-12);
    }

    #[rstest]
    #[case(8.0, 8.0)]
    #[case(8.0, 10.0)]
    #[case(0.0, -1.0)]
    #[case(10.0, 0.0)]
    #[case(-10.0, -12.0)]
    #[case(f64::INFINITY, 8.0)]
    #[case(12.0, f64::NAN)]
    fn test_invalid_geometry(#[case] outer: f64, #[case] inner: f64) {
        let result = section_properties(&TubeGeometry::new(outer, inner));
        assert!(
            matches!(result, Err(SparError::InvalidGeometry { .. })),
            "{} x {} should be rejected, got {:?}",
            outer,
            inner,
            result
        );
    }

    #[test]
    fn test_evaluate_reference_tube() {
        let result = evaluate(
            &reference_load(),
            &TubeGeometry::new(12.0, 8.0),
            &MaterialSpec::new(600.0, 2.0),
        )
        .unwrap();
        assert_relative_eq!(result.stress_mpa, 270.226_729_338_143, max_relative = 1e-9);
        assert_relative_eq!(result.safety_factor, 2.220_357_702_842_939, max_relative = 1e-9);
        assert!(result.passes);
    }

    #[test]
    fn test_evaluate_fails_below_target() {
        let result = evaluate(
            &reference_load(),
            &TubeGeometry::new(10.0, 8.0),
            &MaterialSpec::new(600.0, 2.0),
        )
        .unwrap();
        assert_relative_eq!(result.safety_factor, 0.945_359_991_171_974_6, max_relative = 1e-9);
        assert!(!result.passes);
    }

    #[test]
    fn test_passes_at_exact_target() {
        let load = reference_load();
        let tube = TubeGeometry::new(12.0, 8.0);
        let sf = evaluate(&load, &tube, &MaterialSpec::new(600.0, 1.0)).unwrap().safety_factor;
        let at_target = evaluate(&load, &tube, &MaterialSpec::new(600.0, sf)).unwrap();
        assert!(at_target.passes);
    }

    #[test]
    fn test_stress_decreases_with_outer_diameter() {
        let load = reference_load();
        let material = MaterialSpec::new(600.0, 2.0);
        let mut previous: Option<EvaluationResult> = None;
        for outer in [9.0, 10.0, 12.0, 15.0, 20.0, 30.0] {
            let current = evaluate(&load, &TubeGeometry::new(outer, 8.0), &material).unwrap();
            if let Some(prev) = previous {
                assert!(current.stress_mpa < prev.stress_mpa);
                assert!(current.safety_factor > prev.safety_factor);
            }
            previous = Some(current);
        }
    }

    #[test]
    fn test_evaluate_rejects_bad_material() {
        let result = evaluate(
            &reference_load(),
            &TubeGeometry::new(12.0, 8.0),
            &MaterialSpec::new(0.0, 2.0),
        );
        assert!(matches!(
            result,
            Err(SparError::InvalidInput { ref field, .. }) if field == "allowable_strength_mpa"
        ));
    }

    #[test]
    fn test_evaluate_rejects_zero_moment() {
        let load = LoadResult {
            weight_n: 0.0,
            limit_load_n: 0.0,
            root_moment_nm: 0.0,
            root_moment_nmm: 0.0,
        };
        let result = evaluate(&load, &TubeGeometry::new(12.0, 8.0), &MaterialSpec::new(600.0, 2.0));
        assert!(matches!(result, Err(SparError::InvalidInput { .. })));
    }

    #[rstest]
    #[case(1.2e-320, "safety_factor")]
    #[case(1e308, "stress_mpa")]
    fn test_evaluate_rejects_out_of_range_results(#[case] moment_nm: f64, #[case] expected_field: &str) {
        let load = LoadResult {
            weight_n: 1.0,
            limit_load_n: 1.0,
            root_moment_nm: moment_nm,
            root_moment_nmm: moment_nm * 1000.0,
        };
        match evaluate(&load, &TubeGeometry::new(12.0, 8.0), &MaterialSpec::new(600.0, 2.0)) {
            Err(SparError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_geometry() {
        assert_eq!("14,10".parse::<TubeGeometry>().unwrap(), TubeGeometry::new(14.0, 10.0));
        assert_eq!("1 6 , 1 2".parse::<TubeGeometry>().unwrap(), TubeGeometry::new(16.0, 12.0));
        assert!(matches!("12".parse::<TubeGeometry>(), Err(SparError::InvalidInput { .. })));
        assert!(matches!("12,8,4".parse::<TubeGeometry>(), Err(SparError::InvalidInput { .. })));
        assert!(matches!("a,8".parse::<TubeGeometry>(), Err(SparError::InvalidInput { .. })));
        assert!(matches!("8,12".parse::<TubeGeometry>(), Err(SparError::InvalidGeometry { .. })));
    }

    #[test]
    fn test_display() {
        assert_eq!(TubeGeometry::new(12.0, 8.0).to_string(), "12 x 8 mm");
        assert_eq!(TubeGeometry::new(12.5, 10.0).to_string(), "12.5 x 10 mm");
    }
}
