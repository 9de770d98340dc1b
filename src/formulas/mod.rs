//! Formula bank
//!
//! Stateless scalar formulas for nutrition, fluid balance, glucose infusion,
//! urine output and electrolyte dosing. Each is a closed-form expression over
//! its explicit arguments and can be tested on its own.
//!
//! Any weight or concentration denominator that is zero or negative yields `0`
//! instead of a division by zero: those inputs are user-editable and can be
//! transiently invalid before the presentation layer clamps them.
//!
//! # Key Quantities
//!
//! | Quantity | Formula | Unit |
//! |----------|---------|------|
//! | Calories | 120·w if GA < 37 else 100·w | kcal/day |
//! | Protein | 3.5·w if GA < 37 else 2.5·w | g/day |
//! | Lipids | 3.0·w | g/day |
//! | I/E balance | (oral + iv) − (urine + stool) | mL |
//! | GIR | dextrose% · volume / (144 · w) | mg/kg/min |
//! | Urinary flow | urine₂₄ / w / 24 | mL/kg/h |
//! | Na⁺ | 3.0·w mEq; mEq / (NaCl% · 0.171) | mL/day |
//! | K⁺ | 2.0·w mEq; mEq / (KCl% · 0.134) | mL/day |

mod electrolytes;
mod fluids;
mod nutrition;

pub use electrolytes::{
    compute_electrolytes, ElectrolyteDoses, ElectrolyteOutcome, ELECTROLYTE_MIN_POSTNATAL_DAYS,
    KCL_MEQ_PER_ML_PER_PCT, K_MEQ_PER_KG, NACL_MEQ_PER_ML_PER_PCT, NA_MEQ_PER_KG,
};
pub use fluids::{
    compute_fluid_balance, compute_gir, compute_urinary_flow, gir, urinary_flow, GirResult,
    GirStatus, UrinaryFlowResult, UrinaryFlowStatus, ANURIA_THRESHOLD, GIR_HIGH, GIR_LOW,
    POLYURIA_THRESHOLD,
};
pub use nutrition::{compute_nutrition, NutritionNeeds, LIPID_G_PER_KG, PRETERM_WEEKS};

use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgently a status should be surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}
