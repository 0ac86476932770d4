//! # Candidate Ranking
//!
//! Evaluates a list of candidate tubes against one wing load and picks the
//! recommended tube.
//!
//! ## Selection Policy
//!
//! Candidates are sorted by outer diameter, smallest first (stable, so equal
//! diameters keep their input order). The recommendation is the first tube
//! in that order that meets the target safety factor: the smallest passing
//! outer diameter is taken as the lightest acceptable spar. When nothing
//! passes the report has no recommendation; that is a result, not an error.
//!
//! Invalid geometries are set aside in [`RankedReport::rejected`] and the
//! rest of the list is still ranked.
//!
//! ## Example
//!
//! ```rust
//! use spar_core::calculations::load::{compute_load, LoadInputs};
//! use spar_core::calculations::ranking::rank;
//! use spar_core::calculations::section::{MaterialSpec, TubeGeometry};
//!
//! let load = compute_load(&LoadInputs::new(5.0, 2.0, 3.0)).unwrap();
//! let tubes = [
//!     TubeGeometry::new(14.0, 10.0),
//!     TubeGeometry::new(10.0, 8.0),
//!     TubeGeometry::new(12.0, 8.0),
//! ];
//!
//! let report = rank(&load, &tubes, &MaterialSpec::new(600.0, 2.0)).unwrap();
//!
//! let best = report.recommendation.unwrap();
//! assert_eq!(best.geometry, TubeGeometry::new(12.0, 8.0));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::load::LoadResult;
use super::section::{evaluate, EvaluationResult, MaterialSpec, TubeGeometry};
use crate::errors::{require_positive, SparError, SparResult};

/// A candidate left out of the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedCandidate {
    /// Position in the caller's candidate list (0-based)
    pub index: usize,

    /// Why it was rejected; carries the diameters as supplied
    pub error: SparError,
}

/// Full result of ranking a candidate list.
///
/// ## JSON Example
///
/// ```json
/// {
///   "load": { "weight_n": 49.05, "limit_load_n": 147.15, "root_moment_nm": 36.7875, "root_moment_nmm": 36787.5 },
///   "material": { "allowable_strength_mpa": 600.0, "target_safety_factor": 2.0 },
///   "evaluations": [ { "geometry": { "outer_diameter_mm": 12.0, "inner_diameter_mm": 8.0 }, "stress_mpa": 270.2, "safety_factor": 2.22, "passes": true, "section": { "...": 0 } } ],
///   "recommendation": { "geometry": { "outer_diameter_mm": 12.0, "inner_diameter_mm": 8.0 }, "...": 0 },
///   "rejected": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedReport {
    /// Wing load every tube was checked against
    pub load: LoadResult,

    /// Material and target used for the pass/fail decision
    pub material: MaterialSpec,

    /// Evaluated tubes, sorted by outer diameter ascending
    pub evaluations: Vec<EvaluationResult>,

    /// First passing entry of `evaluations`, if any
    pub recommendation: Option<EvaluationResult>,

    /// Candidates excluded because their geometry was invalid
    pub rejected: Vec<RejectedCandidate>,
}

impl RankedReport {
    /// Whether any tube meets the target safety factor
    pub fn has_recommendation(&self) -> bool {
        self.recommendation.is_some()
    }

    /// Tubes meeting the target, in ranked order
    pub fn passing(&self) -> impl Iterator<Item = &EvaluationResult> {
        self.evaluations.iter().filter(|e| e.passes)
    }
}

/// Rank candidate tubes for a wing load.
///
/// # Returns
///
/// * `Ok(RankedReport)` - Sorted evaluations and the recommendation
/// * `Err(SparError::NoCandidates)` - The list is empty, or every entry was rejected
/// * `Err(SparError::InvalidInput)` - Material or load values not strictly positive
pub fn rank(
    load: &LoadResult,
    geometries: &[TubeGeometry],
    material: &MaterialSpec,
) -> SparResult<RankedReport> {
    if geometries.is_empty() {
        return Err(SparError::NoCandidates);
    }
    material.validate()?;
    require_positive("root_moment_nm", load.root_moment_nm)?;

    let mut evaluations = Vec::with_capacity(geometries.len());
    let mut rejected = Vec::new();

    for (index, geometry) in geometries.iter().enumerate() {
        match evaluate(load, geometry, material) {
            Ok(result) => evaluations.push(result),
            Err(error @ SparError::InvalidGeometry { .. }) => {
                warn!(index, %geometry, %error, "rejected candidate tube");
                rejected.push(RejectedCandidate { index, error });
            }
            Err(error) => return Err(error),
        }
    }

    if evaluations.is_empty() {
        return Err(SparError::NoCandidates);
    }

    // Vec::sort_by is stable, so equal diameters keep input order
    evaluations.sort_by(|a, b| {
        a.geometry
            .outer_diameter_mm
            .total_cmp(&b.geometry.outer_diameter_mm)
    });

    let recommendation = evaluations.iter().find(|e| e.passes).copied();

    match &recommendation {
        Some(best) => info!(
            tube = %best.geometry,
            safety_factor = best.safety_factor,
            "recommended tube"
        ),
        None => info!(
            target = material.target_safety_factor,
            "no tube meets the target safety factor"
        ),
    }
    debug!(
        evaluated = evaluations.len(),
        rejected = rejected.len(),
        "ranking complete"
    );

    Ok(RankedReport {
        load: *load,
        material: *material,
        evaluations,
        recommendation,
        rejected,
    })
}
