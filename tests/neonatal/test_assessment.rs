//! End-to-end evaluation pass

use chrono::NaiveDate;
use neocalc::assessment::{NutritionSection, TreatmentSection};
use neocalc::prelude::*;

fn options() -> AssessmentOptions {
    let now = NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    AssessmentOptions::default().with_now(now)
}

#[test]
fn test_full_pass() {
    let patient = PatientParameters::new(34, 1.8, 3).unwrap();
    let result = assess(
        builtin_catalog(),
        &patient,
        &["Sepsis neonatal temprana", "Shock séptico"],
        &FluidInputs::default(),
        &options(),
    );

    let TreatmentSection::Found { medications, .. } = &result.treatments[0] else {
        panic!("sepsis should be in the catalog");
    };
    assert_eq!(medications[0].dose.value_mg, 90.0);
    assert_eq!(
        medications[0].next_doses.timestamps,
        Some(["09:30".to_string(), "21:30".to_string()])
    );

    let TreatmentSection::Found { medications, .. } = &result.treatments[1] else {
        panic!("shock should be in the catalog");
    };
    assert_eq!(medications[0].dose.status, CalcStatus::NotApplicable);
    assert_eq!(medications[0].dose_text, "20 mL/kg en 10-20 min");

    assert!(matches!(result.nutrition, NutritionSection::Computed(_)));
    assert_eq!(result.fluid_balance_ml, 30);
    assert_eq!(result.gir.status, GirStatus::Normal);
    assert_eq!(result.urinary_flow.status, UrinaryFlowStatus::Normal);
    assert!(!result.electrolytes.is_withheld());
    assert_eq!(result.growth.len(), 3);
}

#[test]
fn test_first_day_withholds_electrolytes() {
    let patient = PatientParameters::new(39, 3.2, 1).unwrap();
    let result = assess(
        builtin_catalog(),
        &patient,
        &["Ictericia neonatal"],
        &FluidInputs::default(),
        &options(),
    );
    assert!(result.electrolytes.is_withheld());
    assert!(result
        .alerts()
        .iter()
        .any(|a| a.message.contains("48 hours")));
}

#[test]
fn test_low_gir_alert() {
    let patient = PatientParameters::new(30, 4.0, 10).unwrap();
    let fluids = FluidInputs::default().with_infusion(5.0, 60.0);
    let result = assess::<&str>(builtin_catalog(), &patient, &[], &fluids, &options());
    assert_eq!(result.gir.status, GirStatus::Low);
    assert!(result
        .alerts()
        .iter()
        .any(|a| a.severity == Severity::Warning && a.message.starts_with("Low GIR")));
}

#[test]
fn test_assessment_serializes() {
    let result = assess(
        builtin_catalog(),
        &PatientParameters::default(),
        &["Apnea del prematuro"],
        &FluidInputs::default(),
        &options(),
    );
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("Citrato de cafeína"));
}
