//! Best-effort extraction of numbers from guideline prose
//!
//! Guideline text mixes prose and numbers, e.g.
//! `"Carga: 20 mg/kg | Mantenimiento: 5 mg/kg/día"`. These helpers pull out the
//! *first* numeric quantity they can find and nothing more. They are not a
//! general parser.

use thiserror::Error;

/// Marker that makes a dose text eligible for per-kg scaling
pub const MG_PER_KG: &str = "mg/kg";

/// Marker that makes an interval text eligible for scheduling ("every")
pub const EVERY: &str = "Cada";

/// Dose text contains "mg/kg" but no usable number
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DoseParseError {
    #[error("no dose quantity found in '{text}'")]
    MissingQuantity { text: String },

    #[error("'{token}' is not a number (dose text '{text}')")]
    InvalidNumber { token: String, text: String },
}

/// Interval text contains "Cada" but no usable hour count
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntervalParseError {
    #[error("no hour count found in '{text}'")]
    MissingHours { text: String },

    #[error("'{token}' is not a whole number of hours (interval text '{text}')")]
    InvalidHours { token: String, text: String },
}

/// Extract the per-kilogram quantity from a dose text
///
/// Returns `Ok(None)` when the text has no `mg/kg` component at all; the caller
/// should then display the text verbatim.
///
/// With a colon present, the quantity is read between the first colon and the
/// next `"mg"`. Otherwise it is the first whitespace-delimited token, so
/// leading whitespace is skipped (`" 50 mg/kg"` reads as 50).
///
/// ```rust
/// use neocalc::dosing::extract_mg_per_kg;
///
/// assert_eq!(extract_mg_per_kg("50 mg/kg"), Ok(Some(50.0)));
/// assert_eq!(extract_mg_per_kg("Carga: 20 mg/kg | Mantenimiento: 5 mg/kg/día"), Ok(Some(20.0)));
/// assert_eq!(extract_mg_per_kg("5-20 mcg/kg/min"), Ok(None));
/// ```
pub fn extract_mg_per_kg(dose_text: &str) -> Result<Option<f64>, DoseParseError> {
    if !dose_text.contains(MG_PER_KG) {
        return Ok(None);
    }

    let token = match dose_text.split_once(':') {
        Some((_, after_colon)) => {
            let before_mg = after_colon.split("mg").next().unwrap_or(after_colon);
            before_mg.trim()
        }
        None => dose_text.split_whitespace().next().unwrap_or(""),
    };

    if token.is_empty() {
        return Err(DoseParseError::MissingQuantity {
            text: dose_text.to_string(),
        });
    }

    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(DoseParseError::InvalidNumber {
            token: token.to_string(),
            text: dose_text.to_string(),
        }),
    }
}

/// Extract the hour count from an interval text such as `"Cada 12h"`
///
/// Returns `Ok(None)` when the text does not contain `"Cada"`.
pub fn extract_hours(interval_text: &str) -> Result<Option<u32>, IntervalParseError> {
    if !interval_text.contains(EVERY) {
        return Ok(None);
    }

    let Some(token) = interval_text.split_whitespace().nth(1) else {
        return Err(IntervalParseError::MissingHours {
            text: interval_text.to_string(),
        });
    };

    token
        .strip_suffix('h')
        .unwrap_or(token)
        .parse::<u32>()
        .map(Some)
        .map_err(|_| IntervalParseError::InvalidHours {
            token: token.to_string(),
            text: interval_text.to_string(),
        })
}
