//! # Equation Registry
//!
//! Central registry of every formula the sizing engine applies, with the
//! metadata an engineer needs to audit it: plain-text formula, variables
//! with units, reference, and assumptions.
//!
//! ## Usage
//!
//! ```rust
//! use spar_core::equations::registry::{Equation, EquationCategory};
//!
//! let meta = Equation::UniformLiftRootMoment.metadata();
//! assert_eq!(meta.formula_plain, "M = L * b / 8");
//! assert_eq!(meta.category, EquationCategory::Loads);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference backing an equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
    },
    /// Simplifying assumption of the quick-sizing method itself
    SizingAssumption,
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Roarks { edition, table } => {
                format!("Roark's {}ed, {}", edition, table)
            }
            CodeReference::SizingAssumption => "Quick-sizing assumption".to_string(),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Weight, lift, and root moment
    Loads,
    /// Tube area, I, and S
    SectionProperties,
    /// Bending stress
    Stresses,
    /// Safety factor and pass/fail
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Loads => "Loads",
            EquationCategory::SectionProperties => "Section Properties",
            EquationCategory::Stresses => "Stresses",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order in the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Loads => 1,
            EquationCategory::SectionProperties => 2,
            EquationCategory::Stresses => 3,
            EquationCategory::DesignChecks => 4,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "M", "D", "S")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "N*m", "mm", "MPa")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one sizing equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the spar sizing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// W = m * g
    Weight,
    /// L = W * n
    LimitLoad,
    /// M = L * b / 8
    UniformLiftRootMoment,
    /// I = pi/64 * (D^4 - d^4)
    TubeMomentOfInertia,
    /// S = I / (D/2)
    TubeSectionModulus,
    /// A = pi/4 * (D^2 - d^2)
    TubeArea,
    /// sigma = M / S
    BendingStress,
    /// SF = F / sigma
    SafetyFactor,
    /// SF >= SF_target
    SafetyFactorCheck,
}

/// Every equation in reference-document order.
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::Weight,
    Equation::LimitLoad,
    Equation::UniformLiftRootMoment,
    Equation::TubeMomentOfInertia,
    Equation::TubeSectionModulus,
    Equation::TubeArea,
    Equation::BendingStress,
    Equation::SafetyFactor,
    Equation::SafetyFactorCheck,
];

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::Weight => EquationMetadata {
                name: "Aircraft Weight",
                description: "Gravitational force on the aircraft at 1g",
                formula_plain: "W = m * g",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("W", "Weight", "N"),
                    Variable::new("m", "Aircraft mass", "kg"),
                    Variable::new("g", "Gravitational acceleration", "m/s^2"),
                ],
                assumptions: vec!["g defaults to 9.81 m/s^2"],
                category: EquationCategory::Loads,
                source_module: "equations/load.rs",
                source_function: "weight",
            },

            Equation::LimitLoad => EquationMetadata {
                name: "Limit Lift Load",
                description: "Total lift the wing carries at the design load factor",
                formula_plain: "L = W * n",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("L", "Limit lift load", "N"),
                    Variable::new("n", "Load factor", "g"),
                ],
                assumptions: vec!["Wing carries the full aircraft load"],
                category: EquationCategory::Loads,
                source_module: "equations/load.rs",
                source_function: "limit_load",
            },

            Equation::UniformLiftRootMoment => EquationMetadata {
                name: "Root Bending Moment",
                description: "Bending moment at the spar root under uniform lift",
                formula_plain: "M = L * b / 8",
                reference: CodeReference::SizingAssumption,
                variables: vec![
                    Variable::new("M", "Root bending moment", "N*m"),
                    Variable::new("b", "Wingspan", "m"),
                ],
                assumptions: vec![
                    "Lift uniformly distributed over the span",
                    "Not a substitute for a spanwise lift distribution",
                ],
                category: EquationCategory::Loads,
                source_module: "equations/load.rs",
                source_function: "uniform_lift_root_moment",
            },

            Equation::TubeMomentOfInertia => EquationMetadata {
                name: "Tube Moment of Inertia",
                description: "Second moment of area of a hollow circular section",
                formula_plain: "I = pi/64 * (D^4 - d^4)",
                reference: CodeReference::Roarks { edition: 8, table: "Table A.1" },
                variables: vec![
                    Variable::new("I", "Moment of inertia", "mm^4"),
                    Variable::new("D", "Outer diameter", "mm"),
                    Variable::new("d", "Inner diameter", "mm"),
                ],
                assumptions: vec!["Concentric circular tube", "d < D"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "tube_moment_of_inertia",
            },

            Equation::TubeSectionModulus => EquationMetadata {
                name: "Tube Section Modulus",
                description: "Elastic section modulus to the outer fibre",
                formula_plain: "S = I / (D/2)",
                reference: CodeReference::Roarks { edition: 8, table: "Table A.1" },
                variables: vec![Variable::new("S", "Section modulus", "mm^3")],
                assumptions: vec!["Extreme fibre at c = D/2"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "tube_section_modulus",
            },

            Equation::TubeArea => EquationMetadata {
                name: "Tube Area",
                description: "Cross-sectional area of a hollow circular section",
                formula_plain: "A = pi/4 * (D^2 - d^2)",
                reference: CodeReference::Roarks { edition: 8, table: "Table A.1" },
                variables: vec![Variable::new("A", "Cross-sectional area", "mm^2")],
                assumptions: vec!["Reported only; not part of the pass/fail rule"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "tube_area",
            },

            Equation::BendingStress => EquationMetadata {
                name: "Bending Stress",
                description: "Peak bending stress at the spar root",
                formula_plain: "sigma = (M * 1000) / S",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("sigma", "Bending stress", "MPa"),
                    Variable::new("M * 1000", "Root moment", "N*mm"),
                ],
                assumptions: vec!["Linear elastic material", "Moment converted from N*m to N*mm"],
                category: EquationCategory::Stresses,
                source_module: "equations/section.rs",
                source_function: "bending_stress",
            },

            Equation::SafetyFactor => EquationMetadata {
                name: "Safety Factor",
                description: "Ratio of allowable strength to computed stress",
                formula_plain: "SF = F / sigma",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("SF", "Safety factor", "-"),
                    Variable::new("F", "Allowable strength", "MPa"),
                ],
                assumptions: vec!["Bending only; no buckling, shear, or torsion"],
                category: EquationCategory::DesignChecks,
                source_module: "equations/section.rs",
                source_function: "safety_factor",
            },

            Equation::SafetyFactorCheck => EquationMetadata {
                name: "Safety Factor Check",
                description: "A tube passes when its safety factor reaches the target",
                formula_plain: "SF >= SF_target",
                reference: CodeReference::SizingAssumption,
                variables: vec![Variable::new("SF_target", "Target safety factor", "-")],
                assumptions: vec!["Smallest passing outer diameter is recommended"],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/section.rs",
                source_function: "evaluate",
            },
        }
    }

    /// Get all equations in a specific category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories that contain at least one equation, in sort order
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut categories: Vec<EquationCategory> = Vec::new();
        for eq in ALL_EQUATIONS {
            let category = eq.metadata().category;
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories.sort_by_key(|c| c.sort_order());
        categories
    }
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the equations reference as markdown.
///
/// ```rust
/// use spar_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Spar Sizer Equations Reference"));
/// assert!(markdown.contains("Section Properties"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Spar Sizer Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `spar equations > EQUATIONS.md`

Every formula used to size a tubular wing spar, in the order it is applied.
Inputs are SI: mass in kg, span in m, diameters in mm, strength in MPa.

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_equation_has_metadata() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty());
            assert!(!meta.formula_plain.is_empty());
            assert!(!meta.source_function.is_empty());
        }
    }

    #[test]
    fn test_categories_sorted() {
        let categories = Equation::all_categories();
        assert_eq!(categories.first(), Some(&EquationCategory::Loads));
        assert_eq!(categories.last(), Some(&EquationCategory::DesignChecks));
        assert_eq!(categories.len(), 4);
    }

    #[test]
    fn test_in_category() {
        let loads = Equation::in_category(EquationCategory::Loads);
        assert_eq!(
            loads,
            vec![Equation::Weight, Equation::LimitLoad, Equation::UniformLiftRootMoment]
        );
    }

    #[test]
    fn test_markdown_lists_every_equation() {
        let markdown = generate_equations_markdown();
        for eq in ALL_EQUATIONS {
            assert!(markdown.contains(eq.metadata().name), "missing {:?}", eq);
        }
        assert!(markdown.contains("**Total Equations:** 9"));
    }

    #[test]
    fn test_citation() {
        assert_eq!(
            CodeReference::Roarks { edition: 8, table: "Table A.1" }.citation(),
            "Roark's 8ed, Table A.1"
        );
    }
}
