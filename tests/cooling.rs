//! 냉각탑 솔버와 증발량 계산의 회귀 테스트.
use cooling_tower_toolbox::air::MoistAir;
use cooling_tower_toolbox::cooling::{
    evaporation_rate, evaporation_rate_with_trace, merkel_number, solve_cold_water_temp,
    CoolingTowerInput, EvaporationInput, EvaporationIteration, SolverSettings,
    TowerCharacteristic, TowerError,
};
use cooling_tower_toolbox::water::{WaterStream, CP_WATER};

fn reference_input() -> CoolingTowerInput {
    // 온수 40°C, 순환수 1000 kg/s, 공기 30°C/50%, C=0.95, L/G=0.5
    CoolingTowerInput {
        hot_water: WaterStream::new(1000.0, 40.0),
        air: MoistAir::at_atmospheric(30.0, 50.0).expect("air"),
        tower: TowerCharacteristic::new(0.95, 0.5),
    }
}

#[test]
fn reference_scenario_converges_between_wet_bulb_and_hot_water() {
    let input = reference_input();
    let settings = SolverSettings::default();
    let solution = solve_cold_water_temp(&input, &settings).expect("converged");

    let wet_bulb = input.air.wet_bulb_temperature().expect("wb");
    assert!(
        solution.cold_water_temp_c > wet_bulb + 0.5,
        "cold={} wb={wet_bulb}",
        solution.cold_water_temp_c
    );
    assert!(solution.cold_water_temp_c < input.hot_water.temp_c - 0.5);
    // 이 운전점의 해는 27°C 부근이다.
    assert!(
        solution.cold_water_temp_c > 25.0 && solution.cold_water_temp_c < 30.0,
        "cold={}",
        solution.cold_water_temp_c
    );
    assert!(solution.iterations <= settings.max_iterations);

    // 수렴 온도로 다시 적분하면 요구 Merkel 수와 1% 이내로 맞아야 한다.
    let achieved = merkel_number(
        input.hot_water.temp_c,
        solution.cold_water_temp_c,
        &input.air,
        input.tower.l_g_ratio,
    )
    .expect("merkel");
    let target = input.tower.required_merkel_number();
    assert!(
        ((achieved - target) / target).abs() < 0.01,
        "achieved={achieved} target={target}"
    );
}

#[test]
fn water_stream_sensible_enthalpy_is_linear() {
    let stream = WaterStream::new(10.0, 40.0);
    assert!((stream.enthalpy_kj_per_kg() - CP_WATER * 40.0).abs() < 1e-12);
    assert!((WaterStream::new(10.0, 0.0).enthalpy_kj_per_kg()).abs() < 1e-12);
}

#[test]
fn solution_reports_range_approach_and_heat_duty() {
    let input = reference_input();
    let solution = solve_cold_water_temp(&input, &SolverSettings::default()).expect("converged");
    let wet_bulb = input.air.wet_bulb_temperature().expect("wb");

    let expected_range = input.hot_water.temp_c - solution.cold_water_temp_c;
    assert!((solution.range_c - expected_range).abs() < 1e-9);
    assert!((solution.approach_c - (solution.cold_water_temp_c - wet_bulb)).abs() < 1e-9);

    let expected_heat = input.hot_water.flow_kg_per_s * CP_WATER * solution.range_c;
    assert!((solution.heat_rejected_kw - expected_heat).abs() < 1e-6);
}

#[test]
fn negative_driving_force_is_surfaced_not_clamped() {
    // 고온다습한 공기(30°C/90%)의 입구 엔탈피가 냉수 측 포화 엔탈피를 넘는 운전점.
    let air = MoistAir::at_atmospheric(30.0, 90.0).expect("air");
    let result = merkel_number(40.0, 25.0, &air, 0.5);
    match result {
        Err(TowerError::Infeasible { temp_c }) => {
            // 온수 쪽 끝은 구동력이 충분하므로 실패 지점은 구간 내부여야 한다.
            assert!(temp_c >= 25.0 && temp_c < 40.0, "temp_c={temp_c}");
        }
        other => panic!("expected Infeasible, got {other:?}"),
    }
}

#[test]
fn solver_rejects_hot_water_near_wet_bulb() {
    // 습구온도(약 28.6°C)보다 낮은 온수는 탐색 구간 자체가 없다.
    let input = CoolingTowerInput {
        hot_water: WaterStream::new(100.0, 20.0),
        air: MoistAir::at_atmospheric(30.0, 90.0).expect("air"),
        tower: TowerCharacteristic::new(1.0, 1.0),
    };
    assert!(matches!(
        solve_cold_water_temp(&input, &SolverSettings::default()),
        Err(TowerError::InvalidInput(_))
    ));
}

#[test]
fn invalid_tower_parameters_are_rejected() {
    let mut input = reference_input();
    input.tower.c = 0.0;
    assert!(matches!(
        solve_cold_water_temp(&input, &SolverSettings::default()),
        Err(TowerError::InvalidInput(_))
    ));

    let mut input = reference_input();
    input.tower.l_g_ratio = -0.5;
    assert!(matches!(
        solve_cold_water_temp(&input, &SolverSettings::default()),
        Err(TowerError::InvalidInput(_))
    ));

    let mut input = reference_input();
    input.hot_water.flow_kg_per_s = 0.0;
    assert!(matches!(
        solve_cold_water_temp(&input, &SolverSettings::default()),
        Err(TowerError::InvalidInput(_))
    ));
}

fn reference_evaporation_input() -> EvaporationInput {
    EvaporationInput {
        hot_water: WaterStream::new(1000.0, 40.0),
        cold_water_temp_c: 27.0,
        air: MoistAir::at_atmospheric(30.0, 50.0).expect("air"),
        l_g_ratio: 0.5,
        outlet_rh_pct: 100.0,
    }
}

#[test]
fn evaporation_balances_energy_and_increases_humidity() {
    let input = reference_evaporation_input();
    let settings = SolverSettings::default();
    let result = evaporation_rate(&input, &settings).expect("evaporation");

    assert!((result.air_flow_kg_per_s - 2000.0).abs() < 1e-9);
    assert!(result.humidity_ratio_out > result.humidity_ratio_in);
    assert!(result.evaporation_kg_per_s > 0.0);

    // 증발 손실은 통상 순환수량의 수 % 수준이다.
    let fraction = result.evaporation_kg_per_s / input.hot_water.flow_kg_per_s;
    assert!(fraction > 0.005 && fraction < 0.04, "fraction={fraction}");

    // 출구 공기온도는 냉수온도와 온수온도 사이에서 수렴해야 한다.
    assert!(
        result.air_out_temp_c > input.cold_water_temp_c
            && result.air_out_temp_c < input.hot_water.temp_c,
        "t_out={}",
        result.air_out_temp_c
    );

    // 수렴 온도의 출구 엔탈피는 에너지 수지 목표와 허용 오차 안에서 일치한다.
    let w_out = cooling_tower_toolbox::air::humidity_ratio(
        result.air_out_temp_c,
        input.outlet_rh_pct,
        input.air.pressure_kpa,
    )
    .expect("w_out");
    let h_out = cooling_tower_toolbox::air::enthalpy_kj_per_kg(result.air_out_temp_c, w_out);
    let h_in = input.air.enthalpy().expect("h_in");
    let h_target =
        h_in + CP_WATER * (input.hot_water.temp_c - input.cold_water_temp_c) * input.l_g_ratio;
    assert!(
        ((h_out - h_target) / h_target).abs() < 2.0 * settings.evaporation_tolerance,
        "h_out={h_out} target={h_target}"
    );
}

#[test]
fn evaporation_trace_hook_sees_every_iteration() {
    let input = reference_evaporation_input();
    let mut calls = 0u32;
    let mut last_iteration = 0u32;
    let mut hook = |it: &EvaporationIteration| {
        calls += 1;
        last_iteration = it.iteration;
        assert!(it.relative_error.is_finite());
    };
    let result = evaporation_rate_with_trace(&input, &SolverSettings::default(), Some(&mut hook))
        .expect("evaporation");
    assert!(calls >= 1);
    assert_eq!(calls, result.iterations);
    assert_eq!(last_iteration, result.iterations);
}

#[test]
fn evaporation_rejects_invalid_inputs() {
    let mut input = reference_evaporation_input();
    input.cold_water_temp_c = 45.0;
    assert!(matches!(
        evaporation_rate(&input, &SolverSettings::default()),
        Err(TowerError::InvalidInput(_))
    ));

    let mut input = reference_evaporation_input();
    input.outlet_rh_pct = 0.0;
    assert!(matches!(
        evaporation_rate(&input, &SolverSettings::default()),
        Err(TowerError::InvalidInput(_))
    ));
}
