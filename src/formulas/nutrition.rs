use serde::{Deserialize, Serialize};

/// Gestational age (weeks) below which a neonate is treated as preterm
pub const PRETERM_WEEKS: u32 = 37;

/// Lipid requirement, independent of gestational age (g/kg/day)
pub const LIPID_G_PER_KG: f64 = 3.0;

const PRETERM_KCAL_PER_KG: f64 = 120.0;
const TERM_KCAL_PER_KG: f64 = 100.0;
const PRETERM_PROTEIN_G_PER_KG: f64 = 3.5;
const TERM_PROTEIN_G_PER_KG: f64 = 2.5;

/// Daily nutritional requirements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionNeeds {
    /// Caloric rate used (kcal/kg/day)
    pub kcal_per_kg: f64,
    /// kcal/day
    pub calories: f64,
    /// g/day
    pub protein: f64,
    /// g/day
    pub lipids: f64,
}

/// Daily caloric, protein and lipid needs for a neonate
pub fn compute_nutrition(gestational_age_weeks: u32, weight_kg: f64) -> NutritionNeeds {
    let preterm = gestational_age_weeks < PRETERM_WEEKS;
    let (kcal_per_kg, protein_per_kg) = if preterm {
        (PRETERM_KCAL_PER_KG, PRETERM_PROTEIN_G_PER_KG)
    } else {
        (TERM_KCAL_PER_KG, TERM_PROTEIN_G_PER_KG)
    };

    NutritionNeeds {
        kcal_per_kg,
        calories: kcal_per_kg * weight_kg,
        protein: protein_per_kg * weight_kg,
        lipids: LIPID_G_PER_KG * weight_kg,
    }
}
