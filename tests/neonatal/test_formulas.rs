//! Formula bank: worked examples and guards

use approx::assert_relative_eq;
use neocalc::formulas::*;

#[test]
fn test_nutrition_example() {
    let needs = compute_nutrition(34, 1.8);
    assert_relative_eq!(needs.calories, 216.0, epsilon = 1e-9);
    assert_relative_eq!(needs.protein, 6.3, epsilon = 1e-9);
    assert_relative_eq!(needs.lipids, 5.4, epsilon = 1e-9);
}

#[test]
fn test_fluid_balance_is_linear() {
    for oral in (0..=500).step_by(125) {
        for iv in (0..=500).step_by(100) {
            for urine in (0..=500).step_by(250) {
                for stool in [0, 10, 500] {
                    assert_eq!(
                        compute_fluid_balance(oral, iv, urine, stool),
                        oral + iv - urine - stool
                    );
                }
            }
        }
    }
}

#[test]
fn test_gir_example() {
    let gir = compute_gir(10.0, 120.0, 1.8);
    // (10 * 120) / (144 * 1.8)
    assert_relative_eq!(gir.value, 4.63, epsilon = 0.005);
    assert_eq!(gir.status, GirStatus::Normal);
}

#[test]
fn test_gir_zero_inputs() {
    for (volume, weight) in [(60.0, 0.5), (120.0, 1.8), (200.0, 5.0)] {
        assert_eq!(compute_gir(0.0, volume, weight).value, 0.0);
    }
    assert_eq!(compute_gir(10.0, 120.0, 0.0).value, 0.0);
}

#[test]
fn test_urinary_flow_examples() {
    let normal = compute_urinary_flow(200.0, 1.8);
    assert_relative_eq!(normal.value, 4.63, epsilon = 0.005);
    assert_eq!(normal.status, UrinaryFlowStatus::Normal);

    let anuria = compute_urinary_flow(20.0, 1.8);
    assert_relative_eq!(anuria.value, 0.46, epsilon = 0.005);
    assert_eq!(anuria.status, UrinaryFlowStatus::Anuria);
    assert_eq!(anuria.status.severity(), Severity::Critical);
}

#[test]
fn test_electrolyte_examples() {
    assert!(matches!(
        compute_electrolytes(1.8, 1, 3.0, 10.0),
        ElectrolyteOutcome::Withheld { .. }
    ));

    let ElectrolyteOutcome::Given(doses) = compute_electrolytes(1.8, 3, 3.0, 10.0) else {
        panic!("electrolytes should be given on day 3");
    };
    assert_relative_eq!(doses.na_meq, 5.4, epsilon = 1e-9);
    assert_relative_eq!(doses.na_ml, 10.53, epsilon = 0.005);
}
