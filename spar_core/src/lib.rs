//! # spar_core - Wing Spar Sizing Engine
//!
//! `spar_core` computes bending stress and safety factor for tubular wing
//! spars and ranks candidate tubes against a target safety margin. It is
//! meant for quick structural sizing of model and small aircraft.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Auditable**: Every formula lives in [`equations`] with its metadata
//!
//! ## Quick Start
//!
//! ```rust
//! use spar_core::calculations::{compute_load, rank, LoadInputs, MaterialSpec};
//! use spar_core::candidates::parse_candidates;
//!
//! let load = compute_load(&LoadInputs::new(5.0, 2.0, 3.0)).unwrap();
//! let tubes = parse_candidates("8,6\n10,8\n12,8\n14,10");
//! let report = rank(&load, &tubes.geometries, &MaterialSpec::new(600.0, 2.0)).unwrap();
//!
//! match report.recommendation {
//!     Some(best) => println!("Recommended: {} (SF={:.2})", best.geometry, best.safety_factor),
//!     None => println!("No tube meets the target safety factor"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Load model, tube evaluation, and candidate ranking
//! - [`equations`] - Closed-form formulas and the equation registry
//! - [`api`] - Flat entry points over plain numbers
//! - [`candidates`] - Lenient free-text tube list parser
//! - [`settings`] - Default inputs and TOML configuration
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod api;
pub mod calculations;
pub mod candidates;
pub mod equations;
pub mod errors;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    EvaluationResult, LoadInputs, LoadResult, MaterialSpec, RankedReport, SectionProperties,
    SizingRequest, TubeGeometry,
};
pub use errors::{SparError, SparResult};
pub use settings::SizingDefaults;
