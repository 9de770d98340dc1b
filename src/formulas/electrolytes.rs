//! Sodium and potassium maintenance, expressed in mL for nursing

use serde::{Deserialize, Serialize};

/// Electrolytes are withheld before this postnatal day
pub const ELECTROLYTE_MIN_POSTNATAL_DAYS: u32 = 2;

/// Sodium maintenance (mEq/kg/day)
pub const NA_MEQ_PER_KG: f64 = 3.0;
/// Potassium maintenance (mEq/kg/day)
pub const K_MEQ_PER_KG: f64 = 2.0;

/// mEq of Na⁺ per mL of NaCl solution, per percent concentration
pub const NACL_MEQ_PER_ML_PER_PCT: f64 = 0.171;
/// mEq of K⁺ per mL of KCl solution, per percent concentration
pub const KCL_MEQ_PER_ML_PER_PCT: f64 = 0.134;

const WITHHELD_ADVISORY: &str = "Do not give electrolytes in the first 48 hours";

/// Daily sodium and potassium, in mEq and in mL of the chosen solutions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectrolyteDoses {
    pub na_meq: f64,
    pub na_ml: f64,
    pub k_meq: f64,
    pub k_ml: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElectrolyteOutcome {
    Given(ElectrolyteDoses),
    /// Too early after birth; carries the advisory to display
    Withheld { advisory: String },
}

impl ElectrolyteOutcome {
    pub fn doses(&self) -> Option<&ElectrolyteDoses> {
        match self {
            Self::Given(doses) => Some(doses),
            Self::Withheld { .. } => None,
        }
    }

    pub fn is_withheld(&self) -> bool {
        matches!(self, Self::Withheld { .. })
    }
}

/// mL of solution delivering `meq`; `0` for a non-positive concentration
#[inline]
fn meq_to_ml(meq: f64, concentration_pct: f64, meq_per_ml_per_pct: f64) -> f64 {
    if concentration_pct <= 0.0 {
        return 0.0;
    }
    meq / (concentration_pct * meq_per_ml_per_pct)
}

/// Daily Na⁺/K⁺ requirement, gated on postnatal age
pub fn compute_electrolytes(
    weight_kg: f64,
    postnatal_age_days: u32,
    na_pct: f64,
    k_pct: f64,
) -> ElectrolyteOutcome {
    if postnatal_age_days < ELECTROLYTE_MIN_POSTNATAL_DAYS {
        tracing::debug!(postnatal_age_days, "electrolytes withheld");
        return ElectrolyteOutcome::Withheld {
            advisory: WITHHELD_ADVISORY.to_string(),
        };
    }

    let na_meq = NA_MEQ_PER_KG * weight_kg;
    let k_meq = K_MEQ_PER_KG * weight_kg;

    ElectrolyteOutcome::Given(ElectrolyteDoses {
        na_meq,
        na_ml: meq_to_ml(na_meq, na_pct, NACL_MEQ_PER_ML_PER_PCT),
        k_meq,
        k_ml: meq_to_ml(k_meq, k_pct, KCL_MEQ_PER_ML_PER_PCT),
    })
}
