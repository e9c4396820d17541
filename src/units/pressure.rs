use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 kPa(절대)이다.
/// 대기압 입력이 주 용도라 게이지 척도는 다루지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    KiloPascal,
    Pascal,
    Bar,
    MilliBar,
    Atm,
    Psi,
    MmHg,
}

const KPA_PER_ATM: f64 = 101.325;
const KPA_PER_PSI: f64 = 6.89476;
const MMHG_PER_KPA: f64 = 7.50062;

impl PressureUnit {
    /// 표시용 기호.
    pub fn label(&self) -> &'static str {
        match self {
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Pascal => "Pa",
            PressureUnit::Bar => "bar",
            PressureUnit::MilliBar => "mbar",
            PressureUnit::Atm => "atm",
            PressureUnit::Psi => "psi",
            PressureUnit::MmHg => "mmHg",
        }
    }
}

/// 주어진 압력을 kPa(절대)로 변환한다.
pub fn to_kpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::KiloPascal => value,
        PressureUnit::Pascal => value / 1000.0,
        PressureUnit::Bar => value * 100.0,
        PressureUnit::MilliBar => value / 10.0,
        PressureUnit::Atm => value * KPA_PER_ATM,
        PressureUnit::Psi => value * KPA_PER_PSI,
        PressureUnit::MmHg => value / MMHG_PER_KPA,
    }
}

/// kPa(절대) 값을 원하는 단위로 변환한다.
pub fn from_kpa(value_kpa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::KiloPascal => value_kpa,
        PressureUnit::Pascal => value_kpa * 1000.0,
        PressureUnit::Bar => value_kpa / 100.0,
        PressureUnit::MilliBar => value_kpa * 10.0,
        PressureUnit::Atm => value_kpa / KPA_PER_ATM,
        PressureUnit::Psi => value_kpa / KPA_PER_PSI,
        PressureUnit::MmHg => value_kpa * MMHG_PER_KPA,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let kpa = to_kpa(value, from);
    from_kpa(kpa, to)
}
