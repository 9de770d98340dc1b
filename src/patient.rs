//! Patient and fluid inputs
//!
//! Inputs are supplied fresh for every evaluation; nothing here is persisted.
//! The presentation layer is expected to clamp values into range before
//! calling the formulas, using [`PatientParameters::clamped`] and
//! [`FluidInputs::clamped`]. `validate()` reports the first out-of-range field
//! instead.

use crate::error::NeoError;
use serde::{Deserialize, Serialize};

/// Accepted input ranges, inclusive
pub mod limits {
    pub const GESTATIONAL_AGE_WEEKS: (u32, u32) = (22, 42);
    pub const WEIGHT_KG: (f64, f64) = (0.5, 5.0);
    pub const POSTNATAL_AGE_DAYS: (u32, u32) = (0, 90);

    /// Oral, IV, urine and stool volumes for the I/E balance (mL)
    pub const BALANCE_ML: (i32, i32) = (0, 500);
    pub const DEXTROSE_PCT: (f64, f64) = (5.0, 20.0);
    pub const IV_VOLUME_ML_PER_KG_DAY: (f64, f64) = (60.0, 200.0);
    pub const URINE_VOLUME_24H_ML: (f64, f64) = (0.0, 1000.0);
    pub const SODIUM_PCT: (f64, f64) = (0.9, 10.0);
    pub const POTASSIUM_PCT: (f64, f64) = (5.0, 15.0);
}

// NaN is out of every range
fn check<T: Into<f64>>(param: &str, value: T, (min, max): (T, T)) -> Result<(), NeoError> {
    let (value, min, max) = (value.into(), min.into(), max.into());
    if value.is_nan() || value < min || value > max {
        return Err(NeoError::invalid_input(param, value, min, max));
    }
    Ok(())
}

// NaN clamps to the lower bound
fn clamp_f64(value: f64, (min, max): (f64, f64)) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Per-invocation patient description
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientParameters {
    pub gestational_age_weeks: u32,
    pub weight_kg: f64,
    pub postnatal_age_days: u32,
}

impl Default for PatientParameters {
    fn default() -> Self {
        Self {
            gestational_age_weeks: 34,
            weight_kg: 1.8,
            postnatal_age_days: 3,
        }
    }
}

impl PatientParameters {
    /// Validated constructor
    pub fn new(
        gestational_age_weeks: u32,
        weight_kg: f64,
        postnatal_age_days: u32,
    ) -> Result<Self, NeoError> {
        let params = Self {
            gestational_age_weeks,
            weight_kg,
            postnatal_age_days,
        };
        params.validate()?;
        Ok(params)
    }

    /// Constructor that pulls every field into its accepted range
    pub fn clamped(gestational_age_weeks: u32, weight_kg: f64, postnatal_age_days: u32) -> Self {
        let (ga_min, ga_max) = limits::GESTATIONAL_AGE_WEEKS;
        let (_, pna_max) = limits::POSTNATAL_AGE_DAYS;
        Self {
            gestational_age_weeks: gestational_age_weeks.clamp(ga_min, ga_max),
            weight_kg: clamp_f64(weight_kg, limits::WEIGHT_KG),
            postnatal_age_days: postnatal_age_days.min(pna_max),
        }
    }

    pub fn validate(&self) -> Result<(), NeoError> {
        check(
            "gestational_age_weeks",
            self.gestational_age_weeks,
            limits::GESTATIONAL_AGE_WEEKS,
        )?;
        check("weight_kg", self.weight_kg, limits::WEIGHT_KG)?;
        check(
            "postnatal_age_days",
            self.postnatal_age_days,
            limits::POSTNATAL_AGE_DAYS,
        )
    }

    pub fn is_preterm(&self) -> bool {
        self.gestational_age_weeks < crate::formulas::PRETERM_WEEKS
    }
}

/// Fluid, infusion and electrolyte inputs for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidInputs {
    pub oral_ml: i32,
    pub iv_ml: i32,
    pub urine_ml: i32,
    pub stool_ml: i32,
    pub dextrose_pct: f64,
    pub iv_volume_ml_per_kg_day: f64,
    pub urine_volume_24h_ml: f64,
    /// NaCl concentration (%)
    pub sodium_pct: f64,
    /// KCl concentration (%)
    pub potassium_pct: f64,
}

impl Default for FluidInputs {
    fn default() -> Self {
        Self {
            oral_ml: 0,
            iv_ml: 120,
            urine_ml: 80,
            stool_ml: 10,
            dextrose_pct: 10.0,
            iv_volume_ml_per_kg_day: 120.0,
            urine_volume_24h_ml: 200.0,
            sodium_pct: 3.0,
            potassium_pct: 10.0,
        }
    }
}

impl FluidInputs {
    pub fn with_balance(mut self, oral_ml: i32, iv_ml: i32, urine_ml: i32, stool_ml: i32) -> Self {
        self.oral_ml = oral_ml;
        self.iv_ml = iv_ml;
        self.urine_ml = urine_ml;
        self.stool_ml = stool_ml;
        self
    }

    pub fn with_infusion(mut self, dextrose_pct: f64, iv_volume_ml_per_kg_day: f64) -> Self {
        self.dextrose_pct = dextrose_pct;
        self.iv_volume_ml_per_kg_day = iv_volume_ml_per_kg_day;
        self
    }

    pub fn with_urine_volume_24h(mut self, urine_volume_24h_ml: f64) -> Self {
        self.urine_volume_24h_ml = urine_volume_24h_ml;
        self
    }

    pub fn with_concentrations(mut self, sodium_pct: f64, potassium_pct: f64) -> Self {
        self.sodium_pct = sodium_pct;
        self.potassium_pct = potassium_pct;
        self
    }

    /// Copy with every field pulled into its accepted range
    pub fn clamped(&self) -> Self {
        let (lo, hi) = limits::BALANCE_ML;
        Self {
            oral_ml: self.oral_ml.clamp(lo, hi),
            iv_ml: self.iv_ml.clamp(lo, hi),
            urine_ml: self.urine_ml.clamp(lo, hi),
            stool_ml: self.stool_ml.clamp(lo, hi),
            dextrose_pct: clamp_f64(self.dextrose_pct, limits::DEXTROSE_PCT),
            iv_volume_ml_per_kg_day: clamp_f64(
                self.iv_volume_ml_per_kg_day,
                limits::IV_VOLUME_ML_PER_KG_DAY,
            ),
            urine_volume_24h_ml: clamp_f64(self.urine_volume_24h_ml, limits::URINE_VOLUME_24H_ML),
            sodium_pct: clamp_f64(self.sodium_pct, limits::SODIUM_PCT),
            potassium_pct: clamp_f64(self.potassium_pct, limits::POTASSIUM_PCT),
        }
    }

    pub fn validate(&self) -> Result<(), NeoError> {
        check("oral_ml", self.oral_ml, limits::BALANCE_ML)?;
        check("iv_ml", self.iv_ml, limits::BALANCE_ML)?;
        check("urine_ml", self.urine_ml, limits::BALANCE_ML)?;
        check("stool_ml", self.stool_ml, limits::BALANCE_ML)?;
        check("dextrose_pct", self.dextrose_pct, limits::DEXTROSE_PCT)?;
        check(
            "iv_volume_ml_per_kg_day",
            self.iv_volume_ml_per_kg_day,
            limits::IV_VOLUME_ML_PER_KG_DAY,
        )?;
        check(
            "urine_volume_24h_ml",
            self.urine_volume_24h_ml,
            limits::URINE_VOLUME_24H_ML,
        )?;
        check("sodium_pct", self.sodium_pct, limits::SODIUM_PCT)?;
        check("potassium_pct", self.potassium_pct, limits::POTASSIUM_PCT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PatientParameters::default().validate().is_ok());
        assert!(PatientParameters::default().is_preterm());
        assert!(FluidInputs::default().validate().is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let err = PatientParameters::new(20, 1.8, 3).unwrap_err();
        assert!(matches!(
            err,
            NeoError::InvalidInput { ref param, min, max, .. }
                if param == "gestational_age_weeks" && min == 22.0 && max == 42.0
        ));
        assert!(PatientParameters::new(34, 0.0, 3).is_err());
        assert!(PatientParameters::new(34, f64::NAN, 3).is_err());
        assert!(PatientParameters::new(34, 1.8, 91).is_err());
    }

    #[test]
    fn test_clamped() {
        let params = PatientParameters::clamped(45, 0.1, 120);
        assert_eq!(params.gestational_age_weeks, 42);
        assert_eq!(params.weight_kg, 0.5);
        assert_eq!(params.postnatal_age_days, 90);
        assert!(params.validate().is_ok());

        let fluids = FluidInputs::default()
            .with_balance(-5, 600, 80, 10)
            .with_concentrations(0.0, 20.0)
            .clamped();
        assert_eq!(fluids.oral_ml, 0);
        assert_eq!(fluids.iv_ml, 500);
        assert_eq!(fluids.sodium_pct, 0.9);
        assert_eq!(fluids.potassium_pct, 15.0);
        assert!(fluids.validate().is_ok());
    }

    #[test]
    fn test_fluid_validation() {
        let fluids = FluidInputs::default().with_infusion(25.0, 120.0);
        assert!(matches!(
            fluids.validate(),
            Err(NeoError::InvalidInput { ref param, .. }) if param == "dextrose_pct"
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let fluids: FluidInputs = serde_json::from_str(r#"{"oral_ml": 15}"#).unwrap();
        assert_eq!(fluids.oral_ml, 15);
        assert_eq!(fluids.iv_ml, 120);
        assert_eq!(fluids.sodium_pct, 3.0);
    }
}
