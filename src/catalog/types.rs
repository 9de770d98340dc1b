//! Catalog record types
//!
//! These mirror the JSON catalog format one-to-one: a guideline per diagnosis,
//! each holding an ordered list of medication entries.

use serde::{Deserialize, Serialize};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════════
// Dose description
// ═══════════════════════════════════════════════════════════════════════════════

/// How a medication's dose is described
///
/// Newly authored entries carry the per-kilogram quantity directly. Legacy
/// entries keep their original prose and are resolved by the fallback
/// extractor in [`crate::dosing::extract_mg_per_kg`].
///
/// In JSON, a plain string deserializes to [`DoseDescription::FreeText`] and an
/// object `{"per_kg": .., "unit": .., "text": ..}` to [`DoseDescription::PerKg`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DoseDescription {
    /// Structured per-kilogram quantity
    PerKg {
        #[serde(rename = "per_kg")]
        quantity_per_kg: f64,
        unit: String,
        /// Verbatim text shown next to the computed dose
        text: String,
    },
    /// Free-form dose text
    FreeText(String),
}

impl DoseDescription {
    /// Structured dose in mg/kg
    pub fn mg_per_kg(quantity_per_kg: f64, text: impl Into<String>) -> Self {
        Self::PerKg {
            quantity_per_kg,
            unit: "mg".to_string(),
            text: text.into(),
        }
    }

    /// Free-text dose
    pub fn free_text(text: impl Into<String>) -> Self {
        Self::FreeText(text.into())
    }

    /// The text to display for this dose
    pub fn text(&self) -> &str {
        match self {
            Self::PerKg { text, .. } => text,
            Self::FreeText(text) => text,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Self::PerKg { .. })
    }
}

impl fmt::Display for DoseDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Medication entry
// ═══════════════════════════════════════════════════════════════════════════════

/// One medication (or non-drug intervention) recommended for a diagnosis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub name: String,
    pub dose: DoseDescription,
    /// Free-form interval, e.g. "Cada 12h"
    #[serde(rename = "interval")]
    pub interval_text: String,
    pub route: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MedicationEntry {
    pub fn new(
        name: impl Into<String>,
        dose: DoseDescription,
        interval_text: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dose,
            interval_text: interval_text.into(),
            route: route.into(),
            duration: None,
            notes: None,
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Diagnosis guideline
// ═══════════════════════════════════════════════════════════════════════════════

/// Clinical area a diagnosis belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuidelineCategory {
    Infectious,
    Metabolic,
    Cardiovascular,
    Hematologic,
    Neurologic,
    Respiratory,
}

impl fmt::Display for GuidelineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infectious => write!(f, "infectious"),
            Self::Metabolic => write!(f, "metabolic"),
            Self::Cardiovascular => write!(f, "cardiovascular"),
            Self::Hematologic => write!(f, "hematologic"),
            Self::Neurologic => write!(f, "neurologic"),
            Self::Respiratory => write!(f, "respiratory"),
        }
    }
}

/// Treatment guideline for a single diagnosis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisGuideline {
    /// Unique catalog key
    #[serde(rename = "diagnosis")]
    pub diagnosis_name: String,
    pub category: GuidelineCategory,
    pub medications: Vec<MedicationEntry>,
    #[serde(rename = "source")]
    pub source_citation: String,
}
