//! # Spar Sizing Equations
//!
//! Every closed-form formula the sizing engine uses lives here, one function
//! per formula, so the physics can be checked in one place.
//!
//! ## Modules
//!
//! - [`load`] - Weight, limit load, and uniform-lift root moment
//! - [`section`] - Hollow tube properties (I, S, A) and the stress check
//! - [`registry`] - Equation metadata and the markdown reference generator
//!
//! ## Units
//!
//! - **Loads**: N, moments in N·m
//! - **Sections**: mm, mm², mm³, mm⁴
//! - **Stress**: MPa, from a moment converted to N·mm
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition

pub mod load;
pub mod registry;
pub mod section;

// Re-export commonly used items
pub use load::{limit_load, uniform_lift_root_moment, weight, STANDARD_GRAVITY};

pub use section::{
    bending_stress,
    safety_factor,
    tube_area,
    tube_moment_of_inertia,
    tube_section_modulus,
    tube_wall_thickness,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
