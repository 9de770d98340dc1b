//! Dose and interval extraction through the public API

use chrono::{NaiveDate, NaiveDateTime};
use neocalc::{
    compute_dose, compute_next_doses, extract_mg_per_kg, get_guideline, CalcStatus,
    DoseDescription, MedicationEntry,
};

fn free_text(dose: &str) -> MedicationEntry {
    MedicationEntry::new("Test", DoseDescription::free_text(dose), "Cada 24h", "IV")
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(14, 20, 0)
        .unwrap()
}

#[test]
fn test_fifty_mg_per_kg() {
    assert_eq!(extract_mg_per_kg("50 mg/kg"), Ok(Some(50.0)));
    let dose = compute_dose(&free_text("50 mg/kg"), 1.8);
    assert_eq!(dose.status, CalcStatus::Ok);
    assert_eq!(dose.value_mg, 90.0);
}

#[test]
fn test_leading_token_times_weight() {
    for (value, weight) in [(4.0, 0.5), (12.5, 2.2), (0.15, 3.4), (20.0, 5.0)] {
        let text = format!("{} mg/kg", value);
        assert_eq!(extract_mg_per_kg(&text), Ok(Some(value)));
        let dose = compute_dose(&free_text(&text), weight);
        assert_eq!(dose.value_mg, (value * weight * 10.0).round() / 10.0);
    }
}

#[test]
fn test_without_mg_per_kg_is_not_applicable() {
    for text in [
        "20 mL/kg en 10-20 min",
        "5-20 mcg/kg/min",
        "50,000 U/kg IM",
        "33.5°C durante 72h",
        "",
        "mg/k g",
    ] {
        let dose = compute_dose(&free_text(text), 1.8);
        assert_eq!(dose.status, CalcStatus::NotApplicable, "text: {}", text);
    }
}

#[test]
fn test_caffeine_loading_dose() {
    let apnea = get_guideline("Apnea del prematuro").unwrap();
    let dose = compute_dose(&apnea.medications[0], 1.8);
    assert_eq!(dose.per_kg, Some(20.0));
    assert_eq!(dose.value_mg, 36.0);
}

#[test]
fn test_catalog_doses() {
    let expected = [
        ("Sepsis neonatal temprana", 0, CalcStatus::Ok, 90.0),
        ("Sepsis neonatal temprana", 1, CalcStatus::Ok, 7.2),
        ("Shock séptico", 1, CalcStatus::NotApplicable, 0.0),
        ("Ductus arterioso persistente", 0, CalcStatus::Ok, 18.0),
        ("Convulsiones neonatales", 0, CalcStatus::Ok, 36.0),
        ("Hipoglucemia neonatal", 0, CalcStatus::Ok, 3.6),
        ("Displasia broncopulmonar", 0, CalcStatus::Ok, 0.3),
    ];
    for (dx, idx, status, value) in expected {
        let med = &get_guideline(dx).unwrap().medications[idx];
        let dose = compute_dose(med, 1.8);
        assert_eq!(dose.status, status, "{} / {}", dx, med.name);
        assert_eq!(dose.value_mg, value, "{} / {}", dx, med.name);
    }
}

#[test]
fn test_unparseable_does_not_stop_other_medications() {
    let meds = [
        free_text("about 5 mg/kg"),
        free_text("10 mg/kg"),
        free_text("Según protocolo"),
    ];
    let doses: Vec<_> = meds.iter().map(|m| compute_dose(m, 2.0)).collect();
    assert!(matches!(doses[0].status, CalcStatus::Unparseable(_)));
    assert_eq!(doses[1].value_mg, 20.0);
    assert_eq!(doses[2].status, CalcStatus::NotApplicable);
}

#[test]
fn test_next_doses() {
    let next = compute_next_doses("Cada 24h", now());
    assert_eq!(
        next.timestamps,
        Some(["14:20".to_string(), "14:20".to_string()])
    );
    assert_eq!(next.interval_hours, Some(24));

    let dexa = compute_next_doses("Cada 12h x3 días", now());
    assert_eq!(dexa.timestamps.unwrap()[1], "02:20");
}

#[test]
fn test_interval_past_calendar_range_is_unparseable() {
    let next = compute_next_doses("Cada 4294967295h", now());
    assert!(matches!(next.status, CalcStatus::Unparseable(_)));
    assert_eq!(next.interval_hours, Some(u32::MAX));
    assert!(next.timestamps.is_none());
}

#[test]
fn test_interval_without_every_is_not_applicable() {
    for text in [
        "Dosis única",
        "Infusión continua",
        "3 veces/semana",
        "Mantenimiento: 3-5 mg/kg/día",
        "cada 12h",
    ] {
        let next = compute_next_doses(text, now());
        assert_eq!(next.status, CalcStatus::NotApplicable, "text: {}", text);
    }
}
