//! Catalog lookup, listing and file loading

use neocalc::catalog::{Catalog, GuidelineCategory};
use neocalc::{get_guideline, list_diagnoses, NeoError};
use std::io::Write;

#[test]
fn test_list_diagnoses_in_definition_order() {
    let names = list_diagnoses();
    assert_eq!(names.len(), 12);
    assert_eq!(names[0], "Sepsis neonatal temprana");
    assert_eq!(names[1], "Shock séptico");
    assert_eq!(names[2], "Lúes congénita");
    assert_eq!(names[11], "Displasia broncopulmonar");
}

#[test]
fn test_every_listed_diagnosis_resolves() {
    for name in list_diagnoses() {
        let guideline = get_guideline(name).unwrap();
        assert_eq!(guideline.diagnosis_name, name);
        assert!(!guideline.medications.is_empty());
        assert!(!guideline.source_citation.is_empty());
    }
}

#[test]
fn test_missing_diagnosis_is_not_found() {
    match get_guideline("Hernia diafragmática") {
        Err(NeoError::NotFound(name)) => assert_eq!(name, "Hernia diafragmática"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_categories_cover_catalog() {
    let catalog = Catalog::builtin();
    let total: usize = [
        GuidelineCategory::Infectious,
        GuidelineCategory::Metabolic,
        GuidelineCategory::Cardiovascular,
        GuidelineCategory::Hematologic,
        GuidelineCategory::Neurologic,
        GuidelineCategory::Respiratory,
    ]
    .into_iter()
    .map(|c| catalog.filter_by_category(c).len())
    .sum();
    assert_eq!(total, catalog.len());
}

#[test]
fn test_load_from_path() {
    let json = r#"[
        {
            "diagnosis": "Enterocolitis necrotizante",
            "category": "infectious",
            "source": "Local protocol",
            "medications": [
                {"name": "Metronidazol", "dose": {"per_kg": 7.5, "unit": "mg", "text": "7.5 mg/kg"},
                 "interval": "Cada 12h", "route": "IV"}
            ]
        }
    ]"#;
    let path = std::env::temp_dir().join(format!("neocalc_catalog_{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    drop(file);

    let catalog = Catalog::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(catalog.list_diagnoses(), vec!["Enterocolitis necrotizante"]);
    let guideline = catalog.lookup("Enterocolitis necrotizante").unwrap();
    assert!(guideline.medications[0].dose.is_structured());
}

#[test]
fn test_load_errors() {
    assert!(matches!(
        Catalog::from_path("/nonexistent/catalog.json"),
        Err(NeoError::Catalog(_))
    ));
    assert!(matches!(
        Catalog::from_json_str("{not json"),
        Err(NeoError::Json(_))
    ));
}
