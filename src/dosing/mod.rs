//! Weight-scaled dosing and next-dose projection
//!
//! Each medication is evaluated on its own: an unparseable dose or interval is
//! reported through [`CalcStatus`] and never prevents the remaining medications
//! from being computed.
//!
//! ```rust
//! use neocalc::catalog::{DoseDescription, MedicationEntry};
//! use neocalc::dosing::{compute_dose, CalcStatus};
//!
//! let ampicillin = MedicationEntry::new(
//!     "Ampicilina",
//!     DoseDescription::free_text("50 mg/kg"),
//!     "Cada 12h",
//!     "IV",
//! );
//! let dose = compute_dose(&ampicillin, 1.8);
//! assert_eq!(dose.status, CalcStatus::Ok);
//! assert_eq!(dose.value_mg, 90.0);
//! ```

mod extract;
mod schedule;

pub use extract::{
    extract_hours, extract_mg_per_kg, DoseParseError, IntervalParseError, EVERY, MG_PER_KG,
};
pub use schedule::{format_next_doses, project_next_doses, TIME_FORMAT};

use crate::catalog::{DoseDescription, MedicationEntry};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single per-medication computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalcStatus {
    Ok,
    /// The text carries no quantity of the expected kind; show it verbatim
    NotApplicable,
    /// The text should carry a quantity but it could not be read
    Unparseable(String),
}

impl CalcStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for CalcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::NotApplicable => write!(f, "not applicable"),
            Self::Unparseable(reason) => write!(f, "unparseable: {}", reason),
        }
    }
}

/// Total dose for one medication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedDose {
    /// Total dose, rounded to one decimal; `0.0` unless `status` is `Ok`
    pub value_mg: f64,
    /// Per-kilogram quantity the total was scaled from
    pub per_kg: Option<f64>,
    pub status: CalcStatus,
}

impl ComputedDose {
    fn not_computed(status: CalcStatus) -> Self {
        Self {
            value_mg: 0.0,
            per_kg: None,
            status,
        }
    }
}

/// Unit of every computed total
pub const MG_UNIT: &str = "mg";

/// Round to one decimal place
#[inline]
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scale a medication's per-kilogram dose by patient weight
///
/// Structured doses are used directly when their unit is mg; other units are
/// not applicable. Free-text doses go through [`extract_mg_per_kg`], which only
/// ever reads the first quantity.
pub fn compute_dose(medication: &MedicationEntry, weight_kg: f64) -> ComputedDose {
    let per_kg = match &medication.dose {
        DoseDescription::PerKg {
            quantity_per_kg,
            unit,
            ..
        } => {
            // only mg/kg is scaled into a total in mg
            if unit != MG_UNIT {
                return ComputedDose::not_computed(CalcStatus::NotApplicable);
            }
            *quantity_per_kg
        }
        DoseDescription::FreeText(text) => match extract_mg_per_kg(text) {
            Ok(Some(value)) => value,
            Ok(None) => return ComputedDose::not_computed(CalcStatus::NotApplicable),
            Err(e) => {
                tracing::warn!(medication = %medication.name, "{}", e);
                return ComputedDose::not_computed(CalcStatus::Unparseable(e.to_string()));
            }
        },
    };

    ComputedDose {
        value_mg: round1(per_kg * weight_kg),
        per_kg: Some(per_kg),
        status: CalcStatus::Ok,
    }
}

/// Projected administration times for one medication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextDoses {
    /// `[now, now + interval]` as `HH:MM`, present only when `status` is `Ok`
    pub timestamps: Option<[String; 2]>,
    pub interval_hours: Option<u32>,
    pub status: CalcStatus,
}

/// Project the next administration times from an interval text
pub fn compute_next_doses(interval_text: &str, now: NaiveDateTime) -> NextDoses {
    match extract_hours(interval_text) {
        Ok(Some(hours)) => match format_next_doses(now, hours) {
            Some(timestamps) => NextDoses {
                timestamps: Some(timestamps),
                interval_hours: Some(hours),
                status: CalcStatus::Ok,
            },
            None => {
                let reason = format!("{} h interval is out of range", hours);
                tracing::warn!("{}", reason);
                NextDoses {
                    timestamps: None,
                    interval_hours: Some(hours),
                    status: CalcStatus::Unparseable(reason),
                }
            }
        },
        Ok(None) => NextDoses {
            timestamps: None,
            interval_hours: None,
            status: CalcStatus::NotApplicable,
        },
        Err(e) => {
            tracing::warn!("{}", e);
            NextDoses {
                timestamps: None,
                interval_hours: None,
                status: CalcStatus::Unparseable(e.to_string()),
            }
        }
    }
}
