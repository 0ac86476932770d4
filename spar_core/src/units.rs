//! # Unit Types
//!
//! Type-safe wrappers for the SI units used by the sizing engine. These are
//! plain `f64` newtypes that serialize as bare numbers.
//!
//! ## Unit System
//!
//! - Mass: kilograms (kg)
//! - Length: metres (m) for span, millimetres (mm) for tube diameters
//! - Force: newtons (N)
//! - Moment: newton-metres (N·m), newton-millimetres (N·mm)
//! - Stress: megapascals (MPa = N/mm²)
//! - Section properties: mm³, mm⁴
//!
//! Stress comes out in MPa only because the moment is taken in N·mm and the
//! section modulus in mm³. The [`NewtonMeters`] → [`NewtonMillimeters`]
//! conversion is the one place that factor of 1000 lives.
//!
//! ## Example
//!
//! ```rust
//! use spar_core::units::{NewtonMeters, NewtonMillimeters};
//!
//! let root_moment = NewtonMeters(36.7875);
//! let moment_nmm: NewtonMillimeters = root_moment.into();
//! assert_eq!(moment_nmm.0, 36_787.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Mass and Length
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

// ============================================================================
// Force and Moment
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Moment in newton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

impl From<NewtonMeters> for NewtonMillimeters {
    fn from(nm: NewtonMeters) -> Self {
        NewtonMillimeters(nm.0 * 1000.0)
    }
}

impl From<NewtonMillimeters> for NewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        NewtonMeters(nmm.0 / 1000.0)
    }
}

// ============================================================================
// Stress
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

// ============================================================================
// Section Properties
// ============================================================================

/// Area in mm²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm2(pub f64);

/// Section modulus in mm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm3(pub f64);

/// Moment of inertia in mm⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm4(pub f64);

/// Bending stress from a moment and a section modulus: σ = M / S.
impl Div<Mm3> for NewtonMillimeters {
    type Output = Megapascals;
    fn div(self, rhs: Mm3) -> Self::Output {
        Megapascals(self.0 / rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Kilograms);
impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Newtons);
impl_arithmetic!(NewtonMeters);
impl_arithmetic!(NewtonMillimeters);
impl_arithmetic!(Megapascals);
impl_arithmetic!(Mm2);
impl_arithmetic!(Mm3);
impl_arithmetic!(Mm4);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_moment_conversion() {
        let nmm: NewtonMillimeters = NewtonMeters(36.7875).into();
        assert_relative_eq!(nmm.0, 36_787.5, max_relative = 1e-12);
        let back: NewtonMeters = nmm.into();
        assert_relative_eq!(back.0, 36.7875, max_relative = 1e-12);
    }

    #[test]
    fn test_stress_from_moment_and_modulus() {
        let stress = NewtonMillimeters(36_787.5) / Mm3(136.135_681_655_557_7);
        assert_relative_eq!(stress.0, 270.226_729_338_143, max_relative = 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Newtons(10.0);
        let b = Newtons(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let stress = Megapascals(600.0);
        let json = serde_json::to_string(&stress).unwrap();
        assert_eq!(json, "600.0");

        let roundtrip: Megapascals = serde_json::from_str(&json).unwrap();
        assert_eq!(stress, roundtrip);
    }
}
