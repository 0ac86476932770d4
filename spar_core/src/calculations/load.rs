//! # Wing Load Calculation
//!
//! Derives weight, limit lift load, and root bending moment from aircraft
//! mass, wingspan, and load factor.
//!
//! ## Assumptions
//!
//! - Lift is uniform over the full span (see [`crate::equations::load`])
//! - The whole aircraft load is carried by the wing at the root
//! - Gravitational acceleration defaults to 9.81 m/s²
//!
//! ## Example
//!
//! ```rust
//! use spar_core::calculations::load::{compute_load, LoadInputs};
//!
//! let inputs = LoadInputs::new(5.0, 2.0, 3.0);
//! let load = compute_load(&inputs).unwrap();
//!
//! assert!((load.weight_n - 49.05).abs() < 1e-9);
//! assert!((load.limit_load_n - 147.15).abs() < 1e-9);
//! assert!((load.root_moment_nm - 36.7875).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::load::{limit_load, uniform_lift_root_moment, weight, STANDARD_GRAVITY};
use crate::errors::{require_positive, SparResult};
use crate::units::{Kilograms, Meters, NewtonMeters, NewtonMillimeters};

fn default_gravity() -> f64 {
    STANDARD_GRAVITY
}

/// Aircraft parameters driving the wing load.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mass_kg": 5.0,
///   "span_m": 2.0,
///   "load_factor": 3.0,
///   "gravity_mps2": 9.81
/// }
/// ```
///
/// `gravity_mps2` may be omitted and defaults to 9.81.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadInputs {
    /// Aircraft mass in kilograms
    pub mass_kg: f64,

    /// Wingspan in metres
    pub span_m: f64,

    /// Load factor as a multiple of g (e.g., 3.0 for a 3g pull-up)
    pub load_factor: f64,

    /// Gravitational acceleration in m/s²
    #[serde(default = "default_gravity")]
    pub gravity_mps2: f64,
}

impl LoadInputs {
    /// Create inputs with standard gravity.
    pub fn new(mass_kg: f64, span_m: f64, load_factor: f64) -> Self {
        LoadInputs {
            mass_kg,
            span_m,
            load_factor,
            gravity_mps2: STANDARD_GRAVITY,
        }
    }

    /// Override gravitational acceleration.
    pub fn with_gravity(mut self, gravity_mps2: f64) -> Self {
        self.gravity_mps2 = gravity_mps2;
        self
    }

    /// Validate input parameters. Every field must be strictly positive.
    pub fn validate(&self) -> SparResult<()> {
        require_positive("mass_kg", self.mass_kg)?;
        require_positive("span_m", self.span_m)?;
        require_positive("load_factor", self.load_factor)?;
        require_positive("gravity_mps2", self.gravity_mps2)?;
        Ok(())
    }
}

/// Loads derived from [`LoadInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    /// Aircraft weight W = m·g (N)
    pub weight_n: f64,

    /// Limit lift load L = W·n (N)
    pub limit_load_n: f64,

    /// Root bending moment M = L·b/8 (N·m)
    pub root_moment_nm: f64,

    /// Root bending moment in N·mm, the form used against a section modulus in mm³
    pub root_moment_nmm: f64,
}

impl LoadResult {
    /// Root moment as a typed value
    pub fn root_moment(&self) -> NewtonMeters {
        NewtonMeters(self.root_moment_nm)
    }

    /// Root moment converted for stress calculation in MPa
    pub fn root_moment_for_stress(&self) -> NewtonMillimeters {
        self.root_moment().into()
    }
}

/// Calculate wing loads.
///
/// # Returns
///
/// * `Ok(LoadResult)` - Weight, limit load, and root moment
/// * `Err(SparError::InvalidInput)` - A field is non-positive or not finite, or a
///   derived load overflows or underflows
pub fn compute_load(inputs: &LoadInputs) -> SparResult<LoadResult> {
    inputs.validate()?;

    let w = weight(Kilograms(inputs.mass_kg), inputs.gravity_mps2);
    let lift = limit_load(w, inputs.load_factor);
    let moment = uniform_lift_root_moment(lift, Meters(inputs.span_m));
    let moment_nmm: NewtonMillimeters = moment.into();

    // Extreme inputs can overflow to inf or underflow to zero
    require_positive("weight_n", w.0)?;
    require_positive("limit_load_n", lift.0)?;
    require_positive("root_moment_nm", moment.0)?;
    require_positive("root_moment_nmm", moment_nmm.0)?;

    debug!(
        weight_n = w.0,
        limit_load_n = lift.0,
        root_moment_nm = moment.0,
        "computed wing load"
    );

    Ok(LoadResult {
        weight_n: w.0,
        limit_load_n: lift.0,
        root_moment_nm: moment.0,
        root_moment_nmm: moment_nmm.0,
    })
}
