use thiserror::Error;

/// Crate-level errors
///
/// Per-medication and per-section problems (an unparseable dose, withheld
/// electrolytes) are reported as status values instead; these errors are for
/// lookups, input validation and catalog loading.
#[derive(Error, Debug)]
pub enum NeoError {
    /// Diagnosis key absent from the catalog
    #[error("Diagnosis '{0}' not found in catalog")]
    NotFound(String),

    /// Patient or fluid parameter outside its accepted range
    #[error("Invalid input: {param} = {value} (expected {min} to {max})")]
    InvalidInput {
        param: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Catalog contains the same diagnosis twice
    #[error("Duplicate diagnosis '{0}' in catalog")]
    DuplicateDiagnosis(String),

    /// General catalog error (missing file, empty medication list, etc.)
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NeoError {
    /// Create an invalid input error
    pub fn invalid_input(param: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::InvalidInput {
            param: param.into(),
            value,
            min,
            max,
        }
    }
}
