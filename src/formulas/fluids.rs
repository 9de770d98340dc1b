//! Fluid balance, glucose infusion rate and urine output

use super::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// GIR below this is low (mg/kg/min)
pub const GIR_LOW: f64 = 4.0;
/// GIR above this is high (mg/kg/min)
pub const GIR_HIGH: f64 = 6.0;
/// Urinary flow below this is anuria (mL/kg/h)
pub const ANURIA_THRESHOLD: f64 = 0.5;
/// Urinary flow above this is polyuria (mL/kg/h)
pub const POLYURIA_THRESHOLD: f64 = 5.0;

/// Converts dextrose % × mL/kg/day into mg/kg/min (1000 mg/g · 1/100 · 1/1440 min)
const GIR_DIVISOR: f64 = 144.0;
const HOURS_PER_DAY: f64 = 24.0;

// ============================================================================
// Intake / excretion
// ============================================================================

/// Net intake minus excretion (mL), saturating at the `i32` bounds
#[inline]
pub fn compute_fluid_balance(oral: i32, iv: i32, urine: i32, stool: i32) -> i32 {
    oral.saturating_add(iv).saturating_sub(urine.saturating_add(stool))
}

// ============================================================================
// Glucose infusion rate
// ============================================================================

/// Glucose infusion rate in mg/kg/min; `0` for a non-positive weight
#[inline]
pub fn gir(dextrose_pct: f64, volume_ml_per_kg_day: f64, weight_kg: f64) -> f64 {
    if weight_kg <= 0.0 {
        return 0.0;
    }
    (dextrose_pct * volume_ml_per_kg_day) / (GIR_DIVISOR * weight_kg)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GirStatus {
    Low,
    Normal,
    High,
}

impl GirStatus {
    pub fn classify(gir: f64) -> Self {
        if gir < GIR_LOW {
            Self::Low
        } else if gir > GIR_HIGH {
            Self::High
        } else {
            Self::Normal
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Normal => Severity::Info,
            Self::Low | Self::High => Severity::Warning,
        }
    }

    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            Self::Low => Some("Low GIR: increase dextrose concentration or volume"),
            Self::High => Some("High GIR: consider reducing dextrose to avoid hyperglycemia"),
            Self::Normal => None,
        }
    }
}

impl fmt::Display for GirStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Normal => write!(f, "normal"),
            Self::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GirResult {
    /// mg/kg/min
    pub value: f64,
    pub status: GirStatus,
}

pub fn compute_gir(dextrose_pct: f64, volume_ml_per_kg_day: f64, weight_kg: f64) -> GirResult {
    let value = gir(dextrose_pct, volume_ml_per_kg_day, weight_kg);
    GirResult {
        value,
        status: GirStatus::classify(value),
    }
}

// ============================================================================
// Urine output
// ============================================================================

/// Urinary flow in mL/kg/h; `0` for a non-positive weight
#[inline]
pub fn urinary_flow(urine_volume_24h_ml: f64, weight_kg: f64) -> f64 {
    if weight_kg <= 0.0 {
        return 0.0;
    }
    (urine_volume_24h_ml / weight_kg) / HOURS_PER_DAY
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrinaryFlowStatus {
    Anuria,
    Normal,
    Polyuria,
}

impl UrinaryFlowStatus {
    pub fn classify(flow: f64) -> Self {
        if flow < ANURIA_THRESHOLD {
            Self::Anuria
        } else if flow > POLYURIA_THRESHOLD {
            Self::Polyuria
        } else {
            Self::Normal
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Anuria => Severity::Critical,
            Self::Polyuria => Severity::Warning,
            Self::Normal => Severity::Info,
        }
    }

    pub fn advisory(&self) -> &'static str {
        match self {
            Self::Anuria => "Anuria: urinary flow < 0.5 mL/kg/h, evaluate renal function",
            Self::Polyuria => "Polyuria: urinary flow > 5 mL/kg/h, monitor fluid balance",
            Self::Normal => "Urinary flow within normal range (0.5 - 5 mL/kg/h)",
        }
    }
}

impl fmt::Display for UrinaryFlowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anuria => write!(f, "anuria"),
            Self::Normal => write!(f, "normal"),
            Self::Polyuria => write!(f, "polyuria"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UrinaryFlowResult {
    /// mL/kg/h
    pub value: f64,
    pub status: UrinaryFlowStatus,
}

pub fn compute_urinary_flow(urine_volume_24h_ml: f64, weight_kg: f64) -> UrinaryFlowResult {
    let value = urinary_flow(urine_volume_24h_ml, weight_kg);
    UrinaryFlowResult {
        value,
        status: UrinaryFlowStatus::classify(value),
    }
}
