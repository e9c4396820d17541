use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::cooling::{
    evaporation_rate, solve_cold_water_temp, CoolingTowerInput, EvaporationInput,
    EvaporationResult, TowerCharacteristic, DEFAULT_CHARACTERISTIC_EXPONENT,
};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::units::{
    convert_flow, convert_humidity, convert_pressure, convert_specific_enthalpy,
    convert_temperature, FlowUnit, HumidityUnit, PressureUnit, SpecificEnthalpyUnit,
    TemperatureUnit,
};
use crate::water::WaterStream;
use crate::{air, air::MoistAir};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Psychro,
    Tower,
    Evaporation,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_PSYCHRO));
    println!("{}", tr.t(keys::MAIN_MENU_TOWER));
    println!("{}", tr.t(keys::MAIN_MENU_EVAPORATION));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Psychro),
            "2" => return Ok(MenuChoice::Tower),
            "3" => return Ok(MenuChoice::Evaporation),
            "4" => return Ok(MenuChoice::UnitConversion),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 습공기 상태 메뉴를 처리한다.
pub fn handle_psychro(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PSYCHRO_HEADING));
    let dry_bulb = read_f64(tr, tr.t(keys::PROMPT_DRY_BULB))?;
    let rh = read_f64(tr, tr.t(keys::PROMPT_RELATIVE_HUMIDITY))?;
    let pressure = read_f64_or(tr, tr.t(keys::PROMPT_PRESSURE_DEFAULT), air::ATMOSPHERIC_PRESSURE_KPA)?;

    let state = MoistAir::new(dry_bulb, rh, pressure)?;
    let ps = air::saturation_pressure_kpa(dry_bulb);
    let w = state.humidity_ratio()?;
    let h = state.enthalpy()?;
    let wb = state.wet_bulb_temperature()?;
    let wb_precise = state.wet_bulb_temperature_precise()?;

    let units = &cfg.default_units;
    println!(
        "{} {:.4} {}",
        tr.t(keys::RESULT_SATURATION_PRESSURE),
        convert_pressure(ps, PressureUnit::KiloPascal, units.pressure),
        units.pressure.label()
    );
    println!(
        "{} {:.3} {}",
        tr.t(keys::RESULT_HUMIDITY_RATIO),
        convert_humidity(w, HumidityUnit::KilogramPerKilogram, units.humidity),
        units.humidity.label()
    );
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_ENTHALPY),
        convert_specific_enthalpy(h, SpecificEnthalpyUnit::KjPerKg, units.specific_enthalpy),
        units.specific_enthalpy.label()
    );
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_WET_BULB_STULL),
        convert_temperature(wb, TemperatureUnit::Celsius, units.temperature),
        units.temperature.label()
    );
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_WET_BULB_PRECISE),
        convert_temperature(wb_precise, TemperatureUnit::Celsius, units.temperature),
        units.temperature.label()
    );
    Ok(())
}

/// 냉수 출구온도 메뉴를 처리한다. 수렴하면 증발 손실까지 이어서 계산한다.
pub fn handle_tower(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TOWER_HEADING));
    let hot_temp = read_f64(tr, tr.t(keys::PROMPT_HOT_WATER_TEMP))?;
    let flow_kg_per_s = read_flow_kg_per_s(tr)?;
    let air_temp = read_f64(tr, tr.t(keys::PROMPT_DRY_BULB))?;
    let rh = read_f64(tr, tr.t(keys::PROMPT_RELATIVE_HUMIDITY))?;
    let pressure = read_f64_or(tr, tr.t(keys::PROMPT_PRESSURE_DEFAULT), air::ATMOSPHERIC_PRESSURE_KPA)?;
    let c = read_f64(tr, tr.t(keys::PROMPT_TOWER_C))?;
    let n = read_f64_or(tr, tr.t(keys::PROMPT_TOWER_N_DEFAULT), DEFAULT_CHARACTERISTIC_EXPONENT)?;
    let l_g_ratio = read_f64(tr, tr.t(keys::PROMPT_LG_RATIO))?;

    let input = CoolingTowerInput {
        hot_water: WaterStream::new(flow_kg_per_s, hot_temp),
        air: MoistAir::new(air_temp, rh, pressure)?,
        tower: TowerCharacteristic { c, n, l_g_ratio },
    };
    let solution = solve_cold_water_temp(&input, &cfg.solver)?;

    let units = &cfg.default_units;
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_COLD_WATER_TEMP),
        convert_temperature(solution.cold_water_temp_c, TemperatureUnit::Celsius, units.temperature),
        units.temperature.label()
    );
    println!("{} {:.2} °C", tr.t(keys::RESULT_RANGE), solution.range_c);
    println!("{} {:.2} °C", tr.t(keys::RESULT_APPROACH), solution.approach_c);
    println!("{} {:.1} kW", tr.t(keys::RESULT_HEAT_REJECTED), solution.heat_rejected_kw);
    println!(
        "{} {:.3} / {:.3}",
        tr.t(keys::RESULT_MERKEL),
        solution.achieved_merkel,
        solution.target_merkel
    );
    println!("{} {}", tr.t(keys::RESULT_ITERATIONS), solution.iterations);
    for warning in &solution.warnings {
        println!("* {warning}");
    }

    let outlet_rh = read_f64_or(tr, tr.t(keys::PROMPT_OUTLET_RH_DEFAULT), 100.0)?;
    let evap = evaporation_rate(
        &EvaporationInput {
            hot_water: input.hot_water,
            cold_water_temp_c: solution.cold_water_temp_c,
            air: input.air,
            l_g_ratio,
            outlet_rh_pct: outlet_rh,
        },
        &cfg.solver,
    )?;
    print_evaporation(tr, cfg, &evap);
    Ok(())
}

/// 증발 손실 메뉴를 처리한다. 냉수온도는 사용자가 직접 입력한다.
pub fn handle_evaporation(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EVAPORATION_HEADING));
    let hot_temp = read_f64(tr, tr.t(keys::PROMPT_HOT_WATER_TEMP))?;
    let cold_temp = read_f64(tr, tr.t(keys::PROMPT_COLD_WATER_TEMP))?;
    let flow_kg_per_s = read_flow_kg_per_s(tr)?;
    let air_temp = read_f64(tr, tr.t(keys::PROMPT_DRY_BULB))?;
    let rh = read_f64(tr, tr.t(keys::PROMPT_RELATIVE_HUMIDITY))?;
    let pressure = read_f64_or(tr, tr.t(keys::PROMPT_PRESSURE_DEFAULT), air::ATMOSPHERIC_PRESSURE_KPA)?;
    let l_g_ratio = read_f64(tr, tr.t(keys::PROMPT_LG_RATIO))?;
    let outlet_rh = read_f64_or(tr, tr.t(keys::PROMPT_OUTLET_RH_DEFAULT), 100.0)?;

    let evap = evaporation_rate(
        &EvaporationInput {
            hot_water: WaterStream::new(flow_kg_per_s, hot_temp),
            cold_water_temp_c: cold_temp,
            air: MoistAir::new(air_temp, rh, pressure)?,
            l_g_ratio,
            outlet_rh_pct: outlet_rh,
        },
        &cfg.solver,
    )?;
    print_evaporation(tr, cfg, &evap);
    Ok(())
}

fn print_evaporation(tr: &Translator, cfg: &Config, evap: &EvaporationResult) {
    let units = &cfg.default_units;
    println!(
        "{} {:.3} {}",
        tr.t(keys::RESULT_EVAPORATION_RATE),
        convert_flow(evap.evaporation_kg_per_s, FlowUnit::KilogramPerSecond, units.flow),
        units.flow.label()
    );
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_AIR_OUT_TEMP),
        convert_temperature(evap.air_out_temp_c, TemperatureUnit::Celsius, units.temperature),
        units.temperature.label()
    );
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_AIR_FLOW),
        convert_flow(evap.air_flow_kg_per_s, FlowUnit::KilogramPerSecond, units.flow),
        units.flow.label()
    );
    println!(
        "{} {:.3} / {:.3} {}",
        tr.t(keys::RESULT_HUMIDITY_IN_OUT),
        convert_humidity(evap.humidity_ratio_in, HumidityUnit::KilogramPerKilogram, units.humidity),
        convert_humidity(evap.humidity_ratio_out, HumidityUnit::KilogramPerKilogram, units.humidity),
        units.humidity.label()
    );
    println!("{} {}", tr.t(keys::RESULT_ITERATIONS), evap.iterations);
    for warning in &evap.warnings {
        println!("* {warning}");
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("{} {result} {}", tr.t(keys::UNIT_CONVERSION_RESULT), to_unit.trim());
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Temperature),
        2 => Some(QuantityKind::TemperatureDifference),
        3 => Some(QuantityKind::Pressure),
        4 => Some(QuantityKind::MassFlow),
        5 => Some(QuantityKind::HumidityRatio),
        6 => Some(QuantityKind::SpecificEnthalpy),
        _ => None,
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} lang={}, temp={}, tol={}, max_iter={}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language.as_deref().unwrap_or("auto"),
        cfg.default_units.temperature.label(),
        cfg.solver.tolerance,
        cfg.solver.max_iterations
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
            let lang = read_line(tr.t(keys::PROMPT_SELECT))?;
            match lang.trim() {
                "1" => cfg.language = Some("ko".into()),
                "2" => cfg.language = Some("en".into()),
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "2" => {
            println!("{}", tr.t(keys::TEMPERATURE_UNIT_OPTIONS));
            let unit = read_line(tr.t(keys::PROMPT_SELECT))?;
            cfg.default_units.temperature = match unit.trim() {
                "1" => TemperatureUnit::Celsius,
                "2" => TemperatureUnit::Kelvin,
                "3" => TemperatureUnit::Fahrenheit,
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            };
        }
        "3" => {
            let tol = read_f64(tr, tr.t(keys::SETTINGS_PROMPT_TOLERANCE))?;
            if tol <= 0.0 {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
            cfg.solver.tolerance = tol;
        }
        "4" => {
            let iters = read_f64(tr, tr.t(keys::SETTINGS_PROMPT_MAX_ITERATIONS))?;
            if iters < 1.0 {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
            cfg.solver.max_iterations = iters as u32;
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력을 기본값으로 해석하는 숫자 입력.
fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 유량 값과 단위를 받아 kg/s로 환산한다.
fn read_flow_kg_per_s(tr: &Translator) -> Result<f64, AppError> {
    let value = read_f64(tr, tr.t(keys::PROMPT_WATER_FLOW_VALUE))?;
    println!("{}", tr.t(keys::FLOW_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "2" => FlowUnit::KilogramPerHour,
        "3" => FlowUnit::TonnePerHour,
        "4" => FlowUnit::WaterCubicMeterPerHour,
        _ => FlowUnit::KilogramPerSecond,
    };
    Ok(convert_flow(value, unit, FlowUnit::KilogramPerSecond))
}
