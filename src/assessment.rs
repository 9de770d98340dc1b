//! Full evaluation pass
//!
//! [`assess`] runs every calculation for one patient and returns plain values
//! for a renderer. Sections are independent: an unknown diagnosis, an
//! unparseable dose or an invalid weight is recorded where it happens and the
//! rest of the pass carries on.
//!
//! ```rust
//! use neocalc::assessment::{assess, AssessmentOptions};
//! use neocalc::catalog::builtin_catalog;
//! use neocalc::patient::{FluidInputs, PatientParameters};
//!
//! let patient = PatientParameters::new(34, 1.8, 3).unwrap();
//! let result = assess(
//!     builtin_catalog(),
//!     &patient,
//!     &["Sepsis neonatal temprana"],
//!     &FluidInputs::default(),
//!     &AssessmentOptions::default(),
//! );
//! println!("{}", result);
//! ```

use crate::catalog::{Catalog, DiagnosisGuideline, MedicationEntry};
use crate::dosing::{compute_dose, compute_next_doses, CalcStatus, ComputedDose, NextDoses};
use crate::formulas::{
    compute_electrolytes, compute_fluid_balance, compute_gir, compute_nutrition,
    compute_urinary_flow, ElectrolyteOutcome, GirResult, NutritionNeeds, Severity,
    UrinaryFlowResult,
};
use crate::growth::{growth_series, GrowthSeries, DEFAULT_DAILY_GAIN_KG};
use crate::patient::{FluidInputs, PatientParameters};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Options
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentOptions {
    /// Reference time for dose projection (None = local clock)
    pub now: Option<NaiveDateTime>,
    /// Daily gain used for the growth series (kg/day)
    pub daily_gain_kg: f64,
}

impl Default for AssessmentOptions {
    fn default() -> Self {
        Self {
            now: None,
            daily_gain_kg: DEFAULT_DAILY_GAIN_KG,
        }
    }
}

impl AssessmentOptions {
    /// Pin the reference time, e.g. for reproducible output
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }

    pub fn with_daily_gain(mut self, daily_gain_kg: f64) -> Self {
        self.daily_gain_kg = daily_gain_kg;
        self
    }

    fn reference_time(&self) -> NaiveDateTime {
        self.now
            .unwrap_or_else(|| chrono::Local::now().naive_local())
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Everything computed for one medication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationReport {
    pub name: String,
    /// Verbatim dose text, shown alongside (or instead of) the computed dose
    pub dose_text: String,
    pub dose: ComputedDose,
    pub interval_text: String,
    pub next_doses: NextDoses,
    pub route: String,
    pub duration: Option<String>,
    pub notes: Option<String>,
}

impl MedicationReport {
    fn new(medication: &MedicationEntry, weight_kg: f64, now: NaiveDateTime) -> Self {
        Self {
            name: medication.name.clone(),
            dose_text: medication.dose.text().to_string(),
            dose: compute_dose(medication, weight_kg),
            interval_text: medication.interval_text.clone(),
            next_doses: compute_next_doses(&medication.interval_text, now),
            route: medication.route.clone(),
            duration: medication.duration.clone(),
            notes: medication.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreatmentSection {
    Found {
        diagnosis: String,
        source: String,
        medications: Vec<MedicationReport>,
    },
    NotFound {
        diagnosis: String,
    },
}

impl TreatmentSection {
    fn from_guideline(guideline: &DiagnosisGuideline, weight_kg: f64, now: NaiveDateTime) -> Self {
        Self::Found {
            diagnosis: guideline.diagnosis_name.clone(),
            source: guideline.source_citation.clone(),
            medications: guideline
                .medications
                .iter()
                .map(|m| MedicationReport::new(m, weight_kg, now))
                .collect(),
        }
    }

    pub fn diagnosis(&self) -> &str {
        match self {
            Self::Found { diagnosis, .. } | Self::NotFound { diagnosis } => diagnosis,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NutritionSection {
    Computed(NutritionNeeds),
    /// Weight is zero or negative
    InvalidWeight,
}

/// An advisory collected from any section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: Severity,
    pub message: String,
}

impl Alert {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Result of one evaluation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub patient: PatientParameters,
    pub evaluated_at: NaiveDateTime,
    /// One entry per requested diagnosis, in request order
    pub treatments: Vec<TreatmentSection>,
    pub nutrition: NutritionSection,
    /// I/E balance (mL)
    pub fluid_balance_ml: i32,
    pub gir: GirResult,
    pub urinary_flow: UrinaryFlowResult,
    pub electrolytes: ElectrolyteOutcome,
    pub growth: GrowthSeries,
}

impl Assessment {
    /// Every advisory in the assessment, most severe first
    pub fn alerts(&self) -> Vec<Alert> {
        let mut alerts = Vec::new();

        if self.treatments.is_empty() {
            alerts.push(Alert::new(
                Severity::Warning,
                "Select at least one diagnosis",
            ));
        }
        for section in &self.treatments {
            match section {
                TreatmentSection::NotFound { diagnosis } => alerts.push(Alert::new(
                    Severity::Warning,
                    format!("'{}' is not in the catalog", diagnosis),
                )),
                TreatmentSection::Found { medications, .. } => {
                    for med in medications {
                        if let CalcStatus::Unparseable(reason) = &med.dose.status {
                            alerts.push(Alert::new(
                                Severity::Warning,
                                format!("Dose format error for {}: {}", med.name, reason),
                            ));
                        }
                        if let CalcStatus::Unparseable(reason) = &med.next_doses.status {
                            alerts.push(Alert::new(
                                Severity::Warning,
                                format!("Interval format error for {}: {}", med.name, reason),
                            ));
                        }
                    }
                }
            }
        }

        if self.nutrition == NutritionSection::InvalidWeight {
            alerts.push(Alert::new(Severity::Warning, "Invalid weight"));
        }
        if let Some(advisory) = self.gir.status.advisory() {
            alerts.push(Alert::new(self.gir.status.severity(), advisory));
        }
        alerts.push(Alert::new(
            self.urinary_flow.status.severity(),
            self.urinary_flow.status.advisory(),
        ));
        if let ElectrolyteOutcome::Withheld { advisory } = &self.electrolytes {
            alerts.push(Alert::new(Severity::Warning, advisory.clone()));
        }

        alerts.sort_by(|a, b| b.severity.cmp(&a.severity));
        alerts
    }
}

/// Evaluate every section for one patient
pub fn assess<S: AsRef<str>>(
    catalog: &Catalog,
    patient: &PatientParameters,
    diagnoses: &[S],
    fluids: &FluidInputs,
    options: &AssessmentOptions,
) -> Assessment {
    let now = options.reference_time();
    let weight = patient.weight_kg;

    let treatments = diagnoses
        .iter()
        .map(|dx| {
            let dx = dx.as_ref();
            match catalog.lookup(dx) {
                Ok(guideline) => TreatmentSection::from_guideline(guideline, weight, now),
                Err(e) => {
                    tracing::warn!("{}", e);
                    TreatmentSection::NotFound {
                        diagnosis: dx.to_string(),
                    }
                }
            }
        })
        .collect();

    let nutrition = if weight <= 0.0 {
        NutritionSection::InvalidWeight
    } else {
        NutritionSection::Computed(compute_nutrition(patient.gestational_age_weeks, weight))
    };

    let assessment = Assessment {
        patient: *patient,
        evaluated_at: now,
        treatments,
        nutrition,
        fluid_balance_ml: compute_fluid_balance(
            fluids.oral_ml,
            fluids.iv_ml,
            fluids.urine_ml,
            fluids.stool_ml,
        ),
        gir: compute_gir(fluids.dextrose_pct, fluids.iv_volume_ml_per_kg_day, weight),
        urinary_flow: compute_urinary_flow(fluids.urine_volume_24h_ml, weight),
        electrolytes: compute_electrolytes(
            weight,
            patient.postnatal_age_days,
            fluids.sodium_pct,
            fluids.potassium_pct,
        ),
        growth: growth_series(weight, patient.postnatal_age_days, options.daily_gain_kg),
    };

    tracing::debug!(
        diagnoses = assessment.treatments.len(),
        gir = assessment.gir.value,
        urinary_flow = assessment.urinary_flow.value,
        "assessment complete"
    );

    assessment
}

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("--")
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Patient: GA {} wk | {:.2} kg | day {}",
            self.patient.gestational_age_weeks,
            self.patient.weight_kg,
            self.patient.postnatal_age_days
        )?;
        writeln!(f)?;

        writeln!(f, "Treatments")?;
        if self.treatments.is_empty() {
            writeln!(f, "  Select at least one diagnosis")?;
        }
        for section in &self.treatments {
            match section {
                TreatmentSection::NotFound { diagnosis } => {
                    writeln!(f, "  {}: not in catalog", diagnosis)?;
                }
                TreatmentSection::Found {
                    diagnosis,
                    source,
                    medications,
                } => {
                    writeln!(f, "  {}", diagnosis)?;
                    for med in medications {
                        writeln!(f, "    {}", med.name)?;
                        match &med.dose.status {
                            CalcStatus::Ok => {
                                writeln!(f, "      Dose: {:.1} mg", med.dose.value_mg)?;
                                writeln!(f, "      Basis: {}", med.dose_text)?;
                            }
                            CalcStatus::NotApplicable => {
                                writeln!(f, "      Dose: {}", med.dose_text)?;
                            }
                            CalcStatus::Unparseable(reason) => {
                                writeln!(f, "      Dose: error ({})", reason)?;
                            }
                        }
                        writeln!(f, "      Interval: {}", med.interval_text)?;
                        writeln!(f, "      Route: {}", med.route)?;
                        writeln!(f, "      Duration: {}", or_dash(&med.duration))?;
                        if let Some(notes) = &med.notes {
                            writeln!(f, "      Notes: {}", notes)?;
                        }
                        if let Some([first, second]) = &med.next_doses.timestamps {
                            writeln!(f, "      Next doses: {}, {}", first, second)?;
                        }
                    }
                    writeln!(f, "    Source: {}", source)?;
                }
            }
        }
        writeln!(f)?;

        writeln!(f, "Nutrition")?;
        match &self.nutrition {
            NutritionSection::Computed(n) => {
                writeln!(
                    f,
                    "  Calories: {:.1} kcal/day ({} kcal/kg)",
                    n.calories, n.kcal_per_kg
                )?;
                writeln!(f, "  Protein:  {:.1} g/day", n.protein)?;
                writeln!(f, "  Lipids:   {:.1} g/day", n.lipids)?;
            }
            NutritionSection::InvalidWeight => writeln!(f, "  Invalid weight")?,
        }
        writeln!(f)?;

        writeln!(f, "Fluids")?;
        writeln!(f, "  I/E balance:   {} mL", self.fluid_balance_ml)?;
        writeln!(
            f,
            "  GIR:           {:.2} mg/kg/min ({})",
            self.gir.value, self.gir.status
        )?;
        writeln!(
            f,
            "  Urinary flow:  {:.2} mL/kg/h ({})",
            self.urinary_flow.value, self.urinary_flow.status
        )?;
        match &self.electrolytes {
            ElectrolyteOutcome::Given(e) => {
                writeln!(f, "  Sodium:        {:.1} mEq/day -> {:.1} mL/day", e.na_meq, e.na_ml)?;
                writeln!(f, "  Potassium:     {:.1} mEq/day -> {:.1} mL/day", e.k_meq, e.k_ml)?;
            }
            ElectrolyteOutcome::Withheld { advisory } => {
                writeln!(f, "  Electrolytes:  {}", advisory)?;
            }
        }
        Ok(())
    }
}
