use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `C`, `kPa`, `kg/s`, `g/kg`, `kJ/kg` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::TemperatureDifference => {
            let from = parse_temperature_diff_unit(from_unit_str)?;
            let to = parse_temperature_diff_unit(to_unit_str)?;
            Ok(convert_temperature_diff(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::MassFlow => {
            let from = parse_flow_unit(from_unit_str)?;
            let to = parse_flow_unit(to_unit_str)?;
            Ok(convert_flow(value, from, to))
        }
        QuantityKind::HumidityRatio => {
            let from = parse_humidity_unit(from_unit_str)?;
            let to = parse_humidity_unit(to_unit_str)?;
            Ok(convert_humidity(value, from, to))
        }
        QuantityKind::SpecificEnthalpy => {
            let from = parse_specific_enthalpy_unit(from_unit_str)?;
            let to = parse_specific_enthalpy_unit(to_unit_str)?;
            Ok(convert_specific_enthalpy(value, from, to))
        }
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_temperature_diff_unit(s: &str) -> Result<TemperatureDiffUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureDiffUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureDiffUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureDiffUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "bar" => Ok(PressureUnit::Bar),
        "mbar" | "millibar" => Ok(PressureUnit::MilliBar),
        "atm" => Ok(PressureUnit::Atm),
        "psi" => Ok(PressureUnit::Psi),
        "mmhg" | "torr" => Ok(PressureUnit::MmHg),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_flow_unit(s: &str) -> Result<FlowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg/s" => Ok(FlowUnit::KilogramPerSecond),
        "kg/h" => Ok(FlowUnit::KilogramPerHour),
        "t/h" | "ton/h" => Ok(FlowUnit::TonnePerHour),
        "m3/h" | "m^3/h" | "m³/h" => Ok(FlowUnit::WaterCubicMeterPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_humidity_unit(s: &str) -> Result<HumidityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg/kg" => Ok(HumidityUnit::KilogramPerKilogram),
        "g/kg" => Ok(HumidityUnit::GramPerKilogram),
        "gr/lb" | "grain/lb" => Ok(HumidityUnit::GrainPerPound),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_specific_enthalpy_unit(s: &str) -> Result<SpecificEnthalpyUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kj/kg" => Ok(SpecificEnthalpyUnit::KjPerKg),
        "kcal/kg" => Ok(SpecificEnthalpyUnit::KcalPerKg),
        "btu/lb" | "btu/lbm" => Ok(SpecificEnthalpyUnit::BtuPerPound),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
