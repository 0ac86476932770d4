//! # Sizing Defaults
//!
//! Default inputs for a sizing run, optionally loaded from a TOML file.
//! Keys left out of the file keep their compiled defaults.
//!
//! ## File Format
//!
//! ```toml
//! mass_kg = 5.0
//! span_m = 2.0
//! load_factor = 3.0
//! gravity_mps2 = 9.81
//! allowable_strength_mpa = 600.0
//! target_safety_factor = 2.0
//! candidates = """
//! 8,6
//! 10,8
//! 12,8
//! """
//! ```
//!
//! ## Example
//!
//! ```rust
//! use spar_core::settings::SizingDefaults;
//!
//! let defaults = SizingDefaults::from_toml_str("mass_kg = 7.5").unwrap();
//! assert_eq!(defaults.mass_kg, 7.5);
//! assert_eq!(defaults.span_m, 2.0);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{LoadInputs, MaterialSpec, SizingRequest};
use crate::candidates::{parse_candidates, ParsedCandidates};
use crate::equations::load::STANDARD_GRAVITY;
use crate::errors::{SparError, SparResult};

/// Candidate list offered when the user has not typed one
pub const DEFAULT_CANDIDATES: &str = "8,6\n10,8\n12,8\n14,10\n16,12\n18,14";

/// Default values for every sizing input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingDefaults {
    /// Aircraft mass (kg)
    pub mass_kg: f64,
    /// Wingspan (m)
    pub span_m: f64,
    /// Load factor (g)
    pub load_factor: f64,
    /// Gravitational acceleration (m/s²)
    pub gravity_mps2: f64,
    /// Allowable material strength (MPa)
    pub allowable_strength_mpa: f64,
    /// Target safety factor
    pub target_safety_factor: f64,
    /// Candidate tubes, one `outer,inner` pair per line
    pub candidates: String,
}

impl Default for SizingDefaults {
    fn default() -> Self {
        SizingDefaults {
            mass_kg: 5.0,
            span_m: 2.0,
            load_factor: 3.0,
            gravity_mps2: STANDARD_GRAVITY,
            allowable_strength_mpa: 600.0,
            target_safety_factor: 2.0,
            candidates: DEFAULT_CANDIDATES.to_string(),
        }
    }
}

impl SizingDefaults {
    /// Parse defaults from TOML text.
    pub fn from_toml_str(text: &str) -> SparResult<Self> {
        toml::from_str(text).map_err(|e| SparError::config_error("<string>", e.to_string()))
    }

    /// Load defaults from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SparResult<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| SparError::config_error(&shown, e.to_string()))?;
        let defaults: SizingDefaults =
            toml::from_str(&text).map_err(|e| SparError::config_error(&shown, e.to_string()))?;
        debug!(path = %shown, "loaded sizing defaults");
        Ok(defaults)
    }

    /// Serialize back to TOML, e.g. to write a starter config file.
    pub fn to_toml_string(&self) -> SparResult<String> {
        toml::to_string_pretty(self).map_err(|e| SparError::config_error("<string>", e.to_string()))
    }

    pub fn load_inputs(&self) -> LoadInputs {
        LoadInputs::new(self.mass_kg, self.span_m, self.load_factor).with_gravity(self.gravity_mps2)
    }

    pub fn material(&self) -> MaterialSpec {
        MaterialSpec::new(self.allowable_strength_mpa, self.target_safety_factor)
    }

    /// Parse the candidate text leniently.
    pub fn parsed_candidates(&self) -> ParsedCandidates {
        parse_candidates(&self.candidates)
    }

    /// Build a complete request from these defaults.
    pub fn to_request(&self) -> SizingRequest {
        SizingRequest {
            load: self.load_inputs(),
            material: self.material(),
            candidates: self.parsed_candidates().geometries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_run() {
        let defaults = SizingDefaults::default();
        let report = defaults.to_request().calculate().unwrap();
        assert_eq!(report.evaluations.len(), 6);
        assert_eq!(report.recommendation.unwrap().geometry.outer_diameter_mm, 12.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let defaults = SizingDefaults::from_toml_str(
            "load_factor = 4.5\ncandidates = \"20,18\\n22,18\"",
        )
        .unwrap();
        assert_eq!(defaults.load_factor, 4.5);
        assert_eq!(defaults.mass_kg, 5.0);
        assert_eq!(defaults.parsed_candidates().geometries.len(), 2);
    }

    #[test]
    fn test_malformed_toml() {
        let err = SizingDefaults::from_toml_str("mass_kg = \"heavy\"").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_toml_roundtrip() {
        let defaults = SizingDefaults {
            span_m: 3.2,
            ..SizingDefaults::default()
        };
        let text = defaults.to_toml_string().unwrap();
        assert_eq!(SizingDefaults::from_toml_str(&text).unwrap(), defaults);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("spar_defaults_{}.toml", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "mass_kg = 9.0").unwrap();
            writeln!(file, "allowable_strength_mpa = 450.0").unwrap();
        }
        let defaults = SizingDefaults::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(defaults.mass_kg, 9.0);
        assert_eq!(defaults.material().allowable_strength_mpa, 450.0);
    }

    #[test]
    fn test_missing_file() {
        let err = SizingDefaults::load("/definitely/not/here/spar.toml").unwrap_err();
        assert!(matches!(err, SparError::ConfigError { ref path, .. } if path.contains("spar.toml")));
    }
}
