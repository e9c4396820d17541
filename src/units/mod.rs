//! 단위 정의 및 변환 모듈 모음.

pub mod flow;
pub mod humidity;
pub mod pressure;
pub mod specific_enthalpy;
pub mod temperature;

pub use flow::{convert_flow, FlowUnit};
pub use humidity::{convert_humidity, HumidityUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use specific_enthalpy::{convert_specific_enthalpy, SpecificEnthalpyUnit};
pub use temperature::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};
