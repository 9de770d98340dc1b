//! Guideline Catalog
//!
//! A read-only mapping from diagnosis name to its [`DiagnosisGuideline`].
//! Diagnoses keep the order in which they were defined, so selection lists
//! render the way the catalog author wrote them.
//!
//! # Example
//!
//! ```rust
//! use neocalc::catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//!
//! for name in catalog.list_diagnoses() {
//!     println!("Available: {}", name);
//! }
//!
//! let sepsis = catalog.lookup("Sepsis neonatal temprana").unwrap();
//! assert_eq!(sepsis.source_citation, "SEN 2023");
//! ```

mod types;

pub use types::{DiagnosisGuideline, DoseDescription, GuidelineCategory, MedicationEntry};

use crate::error::NeoError;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::path::Path;

// Embedded at compile time
const BUILTIN_GUIDELINES: &str = include_str!("guidelines.json");

lazy_static! {
    static ref BUILTIN: Catalog = Catalog::builtin();
}

/// The process-wide built-in catalog
pub fn builtin_catalog() -> &'static Catalog {
    &*BUILTIN
}

/// Ordered, immutable collection of diagnosis guidelines
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    guidelines: Vec<DiagnosisGuideline>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from guidelines, rejecting duplicate diagnosis keys
    pub fn new(guidelines: Vec<DiagnosisGuideline>) -> Result<Self, NeoError> {
        let mut index = HashMap::with_capacity(guidelines.len());
        for (i, guideline) in guidelines.iter().enumerate() {
            if index.insert(guideline.diagnosis_name.clone(), i).is_some() {
                return Err(NeoError::DuplicateDiagnosis(
                    guideline.diagnosis_name.clone(),
                ));
            }
            if guideline.medications.is_empty() {
                tracing::warn!(
                    diagnosis = %guideline.diagnosis_name,
                    "guideline has no medications"
                );
            }
        }
        Ok(Self { guidelines, index })
    }

    /// The catalog shipped with the crate
    ///
    /// Falls back to an empty catalog if the embedded data is malformed.
    pub fn builtin() -> Self {
        match Self::from_json_str(BUILTIN_GUIDELINES) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!("failed to load built-in catalog: {}", e);
                Self::default()
            }
        }
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self, NeoError> {
        let guidelines: Vec<DiagnosisGuideline> = serde_json::from_str(json)?;
        let catalog = Self::new(guidelines)?;
        tracing::debug!(diagnoses = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NeoError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(NeoError::Catalog(format!(
                "File not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialize the catalog back to pretty JSON
    pub fn to_json(&self) -> Result<String, NeoError> {
        Ok(serde_json::to_string_pretty(&self.guidelines)?)
    }

    /// Get the guideline for a diagnosis
    pub fn lookup(&self, diagnosis: &str) -> Result<&DiagnosisGuideline, NeoError> {
        self.index
            .get(diagnosis)
            .map(|&i| &self.guidelines[i])
            .ok_or_else(|| NeoError::NotFound(diagnosis.to_string()))
    }

    pub fn contains(&self, diagnosis: &str) -> bool {
        self.index.contains_key(diagnosis)
    }

    /// All diagnosis names, in definition order
    pub fn list_diagnoses(&self) -> Vec<&str> {
        self.guidelines
            .iter()
            .map(|g| g.diagnosis_name.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosisGuideline> {
        self.guidelines.iter()
    }

    pub fn len(&self) -> usize {
        self.guidelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guidelines.is_empty()
    }

    /// Case-insensitive match on diagnosis or medication names
    pub fn search(&self, query: &str) -> Vec<&DiagnosisGuideline> {
        let query_lower = query.to_lowercase();
        self.guidelines
            .iter()
            .filter(|g| {
                g.diagnosis_name.to_lowercase().contains(&query_lower)
                    || g
                        .medications
                        .iter()
                        .any(|m| m.name.to_lowercase().contains(&query_lower))
            })
            .collect()
    }

    pub fn filter_by_category(&self, category: GuidelineCategory) -> Vec<&DiagnosisGuideline> {
        self.guidelines
            .iter()
            .filter(|g| g.category == category)
            .collect()
    }
}

/// All diagnosis names in the built-in catalog
pub fn list_diagnoses() -> Vec<&'static str> {
    builtin_catalog().list_diagnoses()
}

/// Look up a diagnosis in the built-in catalog
pub fn get_guideline(name: &str) -> Result<&'static DiagnosisGuideline, NeoError> {
    builtin_catalog().lookup(name)
}
