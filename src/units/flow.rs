use serde::{Deserialize, Serialize};

/// 질량 유량 단위. 내부 기준은 kg/s이다.
/// m³/h는 물(ρ=1000 kg/m³) 기준 체적 유량을 질량 유량으로 환산해 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    KilogramPerSecond,
    KilogramPerHour,
    TonnePerHour,
    WaterCubicMeterPerHour,
}

impl FlowUnit {
    /// 표시용 기호.
    pub fn label(&self) -> &'static str {
        match self {
            FlowUnit::KilogramPerSecond => "kg/s",
            FlowUnit::KilogramPerHour => "kg/h",
            FlowUnit::TonnePerHour => "t/h",
            FlowUnit::WaterCubicMeterPerHour => "m³/h(물)",
        }
    }
}

fn to_kg_per_s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::KilogramPerSecond => value,
        FlowUnit::KilogramPerHour => value / 3600.0,
        FlowUnit::TonnePerHour => value * 1000.0 / 3600.0,
        FlowUnit::WaterCubicMeterPerHour => value * 1000.0 / 3600.0,
    }
}

fn from_kg_per_s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::KilogramPerSecond => value,
        FlowUnit::KilogramPerHour => value * 3600.0,
        FlowUnit::TonnePerHour => value * 3600.0 / 1000.0,
        FlowUnit::WaterCubicMeterPerHour => value * 3600.0 / 1000.0,
    }
}

/// 질량 유량을 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    let base = to_kg_per_s(value, from);
    from_kg_per_s(base, to)
}
