//! Neonatal intensive care calculator
//!
//! Looks up treatment guidelines by diagnosis and computes weight-scaled drug
//! doses, nutritional requirements, glucose infusion rate, urine output and
//! electrolyte volumes for a single patient.
//!
//! Every function here is pure: it depends only on its explicit arguments and
//! holds no shared mutable state. The built-in catalog is loaded once and is
//! read-only afterwards.
//!
//! ```rust
//! use neocalc::{compute_gir, compute_nutrition, get_guideline, GirStatus};
//!
//! let needs = compute_nutrition(34, 1.8);
//! assert!((needs.calories - 216.0).abs() < 1e-9);
//!
//! let gir = compute_gir(10.0, 120.0, 1.8);
//! assert_eq!(gir.status, GirStatus::Normal);
//!
//! assert!(get_guideline("Apnea del prematuro").is_ok());
//! assert!(get_guideline("Unknown").is_err());
//! ```

pub mod assessment;
pub mod catalog;
pub mod dosing;
pub mod error;
pub mod formulas;
pub mod growth;
pub mod patient;

pub use crate::assessment::{assess, Assessment, AssessmentOptions};
pub use crate::catalog::{
    builtin_catalog, get_guideline, list_diagnoses, Catalog, DiagnosisGuideline,
    DoseDescription, GuidelineCategory, MedicationEntry,
};
pub use crate::dosing::{
    compute_dose, compute_next_doses, extract_hours, extract_mg_per_kg, CalcStatus, ComputedDose,
    NextDoses,
};
pub use crate::formulas::{
    compute_electrolytes, compute_fluid_balance, compute_gir, compute_nutrition,
    compute_urinary_flow, ElectrolyteDoses, ElectrolyteOutcome, GirResult, GirStatus,
    NutritionNeeds, Severity, UrinaryFlowResult, UrinaryFlowStatus,
};
pub use crate::growth::{growth_series, GrowthSeries};
pub use crate::patient::{FluidInputs, PatientParameters};
pub use error::NeoError;

pub mod prelude {
    pub use crate::assessment::{assess, Alert, Assessment, AssessmentOptions};
    pub use crate::catalog::{builtin_catalog, Catalog};
    pub use crate::dosing::{compute_dose, compute_next_doses, CalcStatus};
    pub use crate::formulas::*;
    pub use crate::patient::{FluidInputs, PatientParameters};
    pub use crate::NeoError;
}
