//! # Spar Sizing Calculations
//!
//! The sizing pipeline runs one way:
//!
//! ```text
//! LoadInputs ──compute_load──▶ LoadResult ──evaluate (per tube)──▶ EvaluationResult
//!                                                 │
//!                                 rank ◀──────────┘──▶ RankedReport
//! ```
//!
//! Each step follows the same pattern:
//!
//! - `*Inputs` / `MaterialSpec` - Input parameters (JSON-serializable)
//! - `*Result` / report types - Calculation results (JSON-serializable)
//! - A pure function returning `Result<_, SparError>`
//!
//! ## Available Calculations
//!
//! - [`load`] - Weight, limit load, root bending moment
//! - [`section`] - Tube section properties, stress, and safety factor
//! - [`ranking`] - Candidate sorting and recommendation

pub mod load;
pub mod ranking;
pub mod section;

use serde::{Deserialize, Serialize};

use crate::errors::SparResult;

// Re-export commonly used types
pub use load::{compute_load, LoadInputs, LoadResult};
pub use ranking::{rank, RankedReport, RejectedCandidate};
pub use section::{
    evaluate, section_properties, EvaluationResult, MaterialSpec, SectionProperties, TubeGeometry,
};

/// One complete sizing job: aircraft, material, and candidate tubes.
///
/// ## JSON Example
///
/// ```json
/// {
///   "load": { "mass_kg": 5.0, "span_m": 2.0, "load_factor": 3.0 },
///   "material": { "allowable_strength_mpa": 600.0, "target_safety_factor": 2.0 },
///   "candidates": [
///     { "outer_diameter_mm": 10.0, "inner_diameter_mm": 8.0 },
///     { "outer_diameter_mm": 12.0, "inner_diameter_mm": 8.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingRequest {
    /// Aircraft parameters
    pub load: LoadInputs,

    /// Allowable strength and target safety factor
    pub material: MaterialSpec,

    /// Candidate tubes in caller order
    pub candidates: Vec<TubeGeometry>,
}

impl SizingRequest {
    /// Run the whole pipeline.
    ///
    /// ```rust
    /// use spar_core::calculations::SizingRequest;
    ///
    /// let request: SizingRequest = serde_json::from_str(r#"{
    ///     "load": { "mass_kg": 5.0, "span_m": 2.0, "load_factor": 3.0 },
    ///     "material": { "allowable_strength_mpa": 600.0, "target_safety_factor": 2.0 },
    ///     "candidates": [
    ///         { "outer_diameter_mm": 10.0, "inner_diameter_mm": 8.0 },
    ///         { "outer_diameter_mm": 12.0, "inner_diameter_mm": 8.0 }
    ///     ]
    /// }"#).unwrap();
    ///
    /// let report = request.calculate().unwrap();
    /// assert_eq!(report.recommendation.unwrap().geometry.outer_diameter_mm, 12.0);
    /// ```
    pub fn calculate(&self) -> SparResult<RankedReport> {
        let load = compute_load(&self.load)?;
        rank(&load, &self.candidates, &self.material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SparError;

    #[test]
    fn test_request_invalid_load_short_circuits() {
        let request = SizingRequest {
            load: LoadInputs::new(-5.0, 2.0, 3.0),
            material: MaterialSpec::new(600.0, 2.0),
            candidates: vec![TubeGeometry::new(12.0, 8.0)],
        };
        assert!(matches!(request.calculate(), Err(SparError::InvalidInput { .. })));
    }

    #[test]
    fn test_request_roundtrip() {
        let request = SizingRequest {
            load: LoadInputs::new(5.0, 2.0, 3.0),
            material: MaterialSpec::new(600.0, 2.0),
            candidates: vec![TubeGeometry::new(12.0, 8.0)],
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: SizingRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, back);
    }
}
