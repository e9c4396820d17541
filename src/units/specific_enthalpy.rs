use serde::{Deserialize, Serialize};

/// 비엔탈피 단위. 내부 기준은 kJ/kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificEnthalpyUnit {
    KjPerKg,
    KcalPerKg,
    BtuPerPound,
}

impl SpecificEnthalpyUnit {
    /// 표시용 기호.
    pub fn label(&self) -> &'static str {
        match self {
            SpecificEnthalpyUnit::KjPerKg => "kJ/kg",
            SpecificEnthalpyUnit::KcalPerKg => "kcal/kg",
            SpecificEnthalpyUnit::BtuPerPound => "Btu/lb",
        }
    }
}

fn to_kj_per_kg(value: f64, unit: SpecificEnthalpyUnit) -> f64 {
    match unit {
        SpecificEnthalpyUnit::KjPerKg => value,
        SpecificEnthalpyUnit::KcalPerKg => value * 4.184,
        SpecificEnthalpyUnit::BtuPerPound => value * 2.326,
    }
}

fn from_kj_per_kg(value: f64, unit: SpecificEnthalpyUnit) -> f64 {
    match unit {
        SpecificEnthalpyUnit::KjPerKg => value,
        SpecificEnthalpyUnit::KcalPerKg => value / 4.184,
        SpecificEnthalpyUnit::BtuPerPound => value / 2.326,
    }
}

/// 비엔탈피를 변환한다.
pub fn convert_specific_enthalpy(
    value: f64,
    from: SpecificEnthalpyUnit,
    to: SpecificEnthalpyUnit,
) -> f64 {
    let base = to_kj_per_kg(value, from);
    from_kj_per_kg(base, to)
}
