use serde::{Deserialize, Serialize};

/// 습도비 단위. 내부 기준은 kg수증기/kg건공기이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumidityUnit {
    KilogramPerKilogram,
    GramPerKilogram,
    GrainPerPound,
}

/// 1 kg/kg = 7000 gr/lb (grain은 1/7000 lb)
const GRAIN_PER_POUND_PER_UNIT: f64 = 7000.0;

impl HumidityUnit {
    /// 표시용 기호.
    pub fn label(&self) -> &'static str {
        match self {
            HumidityUnit::KilogramPerKilogram => "kg/kg",
            HumidityUnit::GramPerKilogram => "g/kg",
            HumidityUnit::GrainPerPound => "gr/lb",
        }
    }
}

fn to_kg_per_kg(value: f64, unit: HumidityUnit) -> f64 {
    match unit {
        HumidityUnit::KilogramPerKilogram => value,
        HumidityUnit::GramPerKilogram => value / 1000.0,
        HumidityUnit::GrainPerPound => value / GRAIN_PER_POUND_PER_UNIT,
    }
}

fn from_kg_per_kg(value: f64, unit: HumidityUnit) -> f64 {
    match unit {
        HumidityUnit::KilogramPerKilogram => value,
        HumidityUnit::GramPerKilogram => value * 1000.0,
        HumidityUnit::GrainPerPound => value * GRAIN_PER_POUND_PER_UNIT,
    }
}

/// 습도비를 변환한다.
pub fn convert_humidity(value: f64, from: HumidityUnit, to: HumidityUnit) -> f64 {
    let base = to_kg_per_kg(value, from);
    from_kg_per_kg(base, to)
}
