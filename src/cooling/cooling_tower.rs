use serde::{Deserialize, Serialize};

use super::merkel::merkel_number;
use crate::air::{self, MoistAir, PsychroError};
use crate::water::{WaterStream, CP_WATER};

/// 냉각탑 특성 곡선 계수. 요구 Merkel 수는 C·(L/G)^N 으로 주어진다.
#[derive(Debug, Clone, Copy)]
pub struct TowerCharacteristic {
    /// 특성 계수 C (양수)
    pub c: f64,
    /// 특성 지수 N (보통 음수)
    pub n: f64,
    /// 액체/기체 질량유량비 L/G (양수)
    pub l_g_ratio: f64,
}

/// 특성 지수 N의 관례적 기본값.
pub const DEFAULT_CHARACTERISTIC_EXPONENT: f64 = -0.55;

impl TowerCharacteristic {
    /// 기본 지수 N=-0.55 로 특성을 만든다.
    pub fn new(c: f64, l_g_ratio: f64) -> Self {
        Self {
            c,
            n: DEFAULT_CHARACTERISTIC_EXPONENT,
            l_g_ratio,
        }
    }

    /// 특성 곡선이 요구하는 Merkel 수. 측정 적분값이 아니라 곡선 관계식이다.
    pub fn required_merkel_number(&self) -> f64 {
        self.c * self.l_g_ratio.powf(self.n)
    }
}

/// 냉각탑 계산 오류.
#[derive(Debug, Clone)]
pub enum TowerError {
    /// 물리적으로 유효하지 않은 입력
    InvalidInput(&'static str),
    /// 적분 중 음의 구동력이 발생해 운전점이 성립하지 않음
    Infeasible { temp_c: f64 },
    /// 반복 계산이 허용 횟수 내에 수렴하지 않음
    NonConvergence { iterations: u32, last_error: f64 },
    /// 습공기 물성 계산 오류
    Psychro(PsychroError),
}

impl std::fmt::Display for TowerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TowerError::InvalidInput(msg) => write!(f, "유효하지 않은 입력: {msg}"),
            TowerError::Infeasible { temp_c } => {
                write!(f, "T={temp_c:.1}°C에서 음의 구동력이 발생했습니다")
            }
            TowerError::NonConvergence { iterations, last_error } => write!(
                f,
                "{iterations}회 반복에도 수렴하지 못했습니다 (상대 오차 {last_error:.4})"
            ),
            TowerError::Psychro(e) => write!(f, "습공기 물성 오류: {e}"),
        }
    }
}

impl std::error::Error for TowerError {}

impl From<PsychroError> for TowerError {
    fn from(value: PsychroError) -> Self {
        TowerError::Psychro(value)
    }
}

/// 냉수 출구온도 탐색과 증발량 계산에 쓰는 반복 설정.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverSettings {
    /// 요구 Merkel 수 대비 상대 허용 오차
    pub tolerance: f64,
    /// 냉수온도 이분법 최대 반복 횟수
    pub max_iterations: u32,
    /// 출구 공기온도 이분법 상대 허용 오차
    pub evaporation_tolerance: f64,
    /// 출구 공기온도 이분법 최대 반복 횟수
    pub evaporation_max_iterations: u32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            max_iterations: 50,
            evaporation_tolerance: 0.001,
            evaporation_max_iterations: 100,
        }
    }
}

/// 냉수 출구온도 계산 입력.
#[derive(Debug, Clone)]
pub struct CoolingTowerInput {
    /// 온수(입구) 흐름
    pub hot_water: WaterStream,
    /// 주변 공기 상태
    pub air: MoistAir,
    /// 탑 특성 곡선
    pub tower: TowerCharacteristic,
}

/// 냉수 출구온도 계산 결과.
#[derive(Debug, Clone)]
pub struct ColdWaterSolution {
    /// 수렴한 냉수 출구온도(°C)
    pub cold_water_temp_c: f64,
    /// Range = 온수 - 냉수 (°C)
    pub range_c: f64,
    /// Approach = 냉수 - 습구온도 (°C)
    pub approach_c: f64,
    /// 방열량(kW)
    pub heat_rejected_kw: f64,
    /// 수렴 시점에 달성한 Merkel 수
    pub achieved_merkel: f64,
    /// 특성 곡선 요구 Merkel 수
    pub target_merkel: f64,
    /// 소요 반복 횟수
    pub iterations: u32,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

fn validate_tower(tower: &TowerCharacteristic, flow_kg_per_s: f64) -> Result<(), TowerError> {
    if tower.c <= 0.0 {
        return Err(TowerError::InvalidInput("특성 계수 C는 양수여야 합니다"));
    }
    if tower.l_g_ratio <= 0.0 {
        return Err(TowerError::InvalidInput("L/G 비는 양수여야 합니다"));
    }
    if flow_kg_per_s <= 0.0 {
        return Err(TowerError::InvalidInput("순환수 유량은 양수여야 합니다"));
    }
    Ok(())
}

/// 특성 곡선을 만족하는 냉수 출구온도를 이분법으로 탐색한다.
///
/// 하한은 습구온도 + 0.5°C(냉수는 습구온도 아래로 내려갈 수 없다),
/// 상한은 온수온도 - 0.5°C이다. 어떤 시도 온도에서 적분이 음의 구동력으로
/// 실패하면 그 온도를 "너무 낮음"으로 보고 하한만 끌어올린 뒤 계속한다.
/// 달성 Merkel 수가 요구값보다 크면 냉수온도를 올리고, 작으면 내린다.
pub fn solve_cold_water_temp(
    input: &CoolingTowerInput,
    settings: &SolverSettings,
) -> Result<ColdWaterSolution, TowerError> {
    validate_tower(&input.tower, input.hot_water.flow_kg_per_s)?;

    let t_wb = input.air.wet_bulb_temperature()?;
    let mut t_min = t_wb + 0.5;
    let mut t_max = input.hot_water.temp_c - 0.5;
    if t_min >= t_max {
        return Err(TowerError::InvalidInput(
            "온수온도가 습구온도에 비해 너무 낮아 탐색 구간이 없습니다",
        ));
    }

    let target = input.tower.required_merkel_number();
    let mut last_error = f64::INFINITY;
    for iteration in 1..=settings.max_iterations {
        let t_cold = 0.5 * (t_min + t_max);
        let achieved = match merkel_number(
            input.hot_water.temp_c,
            t_cold,
            &input.air,
            input.tower.l_g_ratio,
        ) {
            Ok(value) => value,
            Err(TowerError::Infeasible { .. }) => {
                t_min = t_cold;
                continue;
            }
            Err(e) => return Err(e),
        };
        let error = achieved - target;
        last_error = (error / target).abs();
        if error.abs() < settings.tolerance * target {
            return Ok(build_solution(input, t_cold, t_wb, achieved, target, iteration));
        }
        if achieved > target {
            t_min = t_cold;
        } else {
            t_max = t_cold;
        }
    }
    Err(TowerError::NonConvergence {
        iterations: settings.max_iterations,
        last_error,
    })
}

fn build_solution(
    input: &CoolingTowerInput,
    cold_water_temp_c: f64,
    wet_bulb_c: f64,
    achieved_merkel: f64,
    target_merkel: f64,
    iterations: u32,
) -> ColdWaterSolution {
    let range_c = input.hot_water.temp_c - cold_water_temp_c;
    let approach_c = cold_water_temp_c - wet_bulb_c;
    let heat_rejected_kw = input.hot_water.flow_kg_per_s * CP_WATER * range_c;

    let mut warnings = Vec::new();
    if approach_c < 2.0 {
        warnings.push(format!(
            "접근(Approach) {approach_c:.1}°C가 2°C 미만입니다. 실제 운전에서 달성하기 어려울 수 있습니다."
        ));
    }
    ColdWaterSolution {
        cold_water_temp_c,
        range_c,
        approach_c,
        heat_rejected_kw,
        achieved_merkel,
        target_merkel,
        iterations,
        warnings,
    }
}

/// 증발 손실 계산 입력. 특성 곡선(C, N)은 쓰지 않으므로 L/G 비만 받는다.
#[derive(Debug, Clone)]
pub struct EvaporationInput {
    /// 온수(입구) 흐름
    pub hot_water: WaterStream,
    /// 냉수 출구온도(°C)
    pub cold_water_temp_c: f64,
    /// 주변 공기 상태
    pub air: MoistAir,
    /// 액체/기체 질량유량비 L/G (양수)
    pub l_g_ratio: f64,
    /// 출구 공기 상대습도(%) 가정. 보통 100(포화)을 쓴다.
    pub outlet_rh_pct: f64,
}

/// 증발 손실 계산 결과.
#[derive(Debug, Clone)]
pub struct EvaporationResult {
    /// 증발 수량(kg/s)
    pub evaporation_kg_per_s: f64,
    /// 출구 공기온도(°C)
    pub air_out_temp_c: f64,
    /// 공기 질량유량(kg/s)
    pub air_flow_kg_per_s: f64,
    /// 입구 공기 습도비(kg/kg)
    pub humidity_ratio_in: f64,
    /// 출구 공기 습도비(kg/kg)
    pub humidity_ratio_out: f64,
    /// 소요 반복 횟수
    pub iterations: u32,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

/// 출구 공기온도 이분법의 반복 상태. 트레이스 훅으로 전달된다.
#[derive(Debug, Clone, Copy)]
pub struct EvaporationIteration {
    /// 반복 횟수(1부터)
    pub iteration: u32,
    /// 시도한 출구 공기온도(°C)
    pub air_out_temp_c: f64,
    /// 시도 온도의 출구 공기 비엔탈피(kJ/kg)
    pub enthalpy_kj_per_kg: f64,
    /// 에너지 수지가 요구하는 출구 비엔탈피(kJ/kg)
    pub target_enthalpy_kj_per_kg: f64,
    /// 상대 오차
    pub relative_error: f64,
}

/// 증발 수량(kg/s)을 계산한다. 반복 과정 관찰이 필요 없으면 이쪽을 쓴다.
pub fn evaporation_rate(
    input: &EvaporationInput,
    settings: &SolverSettings,
) -> Result<EvaporationResult, TowerError> {
    evaporation_rate_with_trace(input, settings, None)
}

/// 전체 에너지 수지를 만족하는 출구 공기온도를 이분법으로 찾은 뒤
/// 습도비 증가분으로 증발 수량을 구한다.
///
/// `trace`에 훅을 넘기면 매 반복의 상태를 받아볼 수 있다.
/// 탐색 구간은 [min(냉수, 습구), max(온수, 건구)]이며, 허용 횟수 내에
/// 수렴하지 않으면 마지막 상대 오차와 함께 실패를 돌려준다.
pub fn evaporation_rate_with_trace(
    input: &EvaporationInput,
    settings: &SolverSettings,
    mut trace: Option<&mut dyn FnMut(&EvaporationIteration)>,
) -> Result<EvaporationResult, TowerError> {
    if input.l_g_ratio <= 0.0 {
        return Err(TowerError::InvalidInput("L/G 비는 양수여야 합니다"));
    }
    if input.hot_water.flow_kg_per_s <= 0.0 {
        return Err(TowerError::InvalidInput("순환수 유량은 양수여야 합니다"));
    }
    if input.outlet_rh_pct <= 0.0 || input.outlet_rh_pct > 100.0 {
        return Err(TowerError::InvalidInput(
            "출구 상대습도는 0 초과 100 이하여야 합니다",
        ));
    }
    if input.cold_water_temp_c >= input.hot_water.temp_c {
        return Err(TowerError::InvalidInput("냉수온도는 온수온도보다 낮아야 합니다"));
    }

    let air = &input.air;
    let w_in = air.humidity_ratio()?;
    let h_in = air::enthalpy_kj_per_kg(air.dry_bulb_c, w_in);
    let air_flow_kg_per_s = input.hot_water.flow_kg_per_s / input.l_g_ratio;
    let range_c = input.hot_water.temp_c - input.cold_water_temp_c;
    let h_out = h_in + CP_WATER * range_c * input.l_g_ratio;

    let t_wb = air.wet_bulb_temperature()?;
    let mut t_out_min = input.cold_water_temp_c.min(t_wb);
    let mut t_out_max = input.hot_water.temp_c.max(air.dry_bulb_c);

    // 수렴 시점의 값으로 바로 결과를 만든다. 루프 밖으로 새는 변수는 없다.
    let mut last_error = f64::INFINITY;
    for iteration in 1..=settings.evaporation_max_iterations {
        let t_out = 0.5 * (t_out_min + t_out_max);
        let w_trial = air::humidity_ratio(t_out, input.outlet_rh_pct, air.pressure_kpa)?;
        let h_trial = air::enthalpy_kj_per_kg(t_out, w_trial);
        let error = ((h_trial - h_out) / h_out).abs();
        last_error = error;
        if let Some(hook) = trace.as_deref_mut() {
            hook(&EvaporationIteration {
                iteration,
                air_out_temp_c: t_out,
                enthalpy_kj_per_kg: h_trial,
                target_enthalpy_kj_per_kg: h_out,
                relative_error: error,
            });
        }
        if error < settings.evaporation_tolerance {
            let evaporation_kg_per_s = air_flow_kg_per_s * (w_trial - w_in);
            let mut warnings = Vec::new();
            let loss_fraction = evaporation_kg_per_s / input.hot_water.flow_kg_per_s;
            if loss_fraction > 0.03 {
                warnings.push(format!(
                    "증발 손실이 순환수량의 {:.1}%입니다. 보충수 계획을 확인하세요.",
                    loss_fraction * 100.0
                ));
            }
            return Ok(EvaporationResult {
                evaporation_kg_per_s,
                air_out_temp_c: t_out,
                air_flow_kg_per_s,
                humidity_ratio_in: w_in,
                humidity_ratio_out: w_trial,
                iterations: iteration,
                warnings,
            });
        }
        if h_trial < h_out {
            t_out_min = t_out;
        } else {
            t_out_max = t_out;
        }
    }
    Err(TowerError::NonConvergence {
        iterations: settings.evaporation_max_iterations,
        last_error,
    })
}
