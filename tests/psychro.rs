//! 습공기 물성 함수의 성질 회귀 테스트.
use cooling_tower_toolbox::air::{
    enthalpy_kj_per_kg, humidity_ratio, saturation_humidity_ratio, saturation_pressure_kpa,
    wet_bulb_temperature, wet_bulb_temperature_precise, MoistAir, PsychroError,
    ATMOSPHERIC_PRESSURE_KPA,
};

#[test]
fn humidity_ratio_nonnegative_and_bounded_by_saturation() {
    for t10 in -2..=5 {
        let t = (t10 * 10) as f64;
        let w_sat = saturation_humidity_ratio(t, ATMOSPHERIC_PRESSURE_KPA).expect("w_sat");
        assert!(w_sat >= 0.0, "w_sat<0 at T={t}");
        for rh in [0.0, 25.0, 50.0, 75.0, 99.0] {
            let w = humidity_ratio(t, rh, ATMOSPHERIC_PRESSURE_KPA).expect("w");
            assert!(w >= 0.0, "w<0 at T={t} RH={rh}");
            assert!(w_sat >= w, "w_sat<w at T={t} RH={rh}: {w_sat} vs {w}");
        }
    }
}

#[test]
fn enthalpy_monotonic_in_temperature_and_humidity() {
    let w = 0.010;
    let mut prev = enthalpy_kj_per_kg(-20.0, w);
    for t5 in -3..=10 {
        let t = (t5 * 5) as f64;
        let h = enthalpy_kj_per_kg(t, w);
        if t > -20.0 {
            assert!(h > prev, "enthalpy not increasing in T at {t}");
        }
        prev = h;
    }

    let t = 30.0;
    let mut prev = enthalpy_kj_per_kg(t, 0.0);
    for i in 1..=10 {
        let h = enthalpy_kj_per_kg(t, i as f64 * 0.005);
        assert!(h > prev, "enthalpy not increasing in w at step {i}");
        prev = h;
    }
}

#[test]
fn saturated_air_wet_bulb_equals_dry_bulb() {
    // 포화 공기는 증발 냉각 여지가 없으므로 습구온도가 건구온도와 같아야 한다.
    for t in [0.0, 10.0, 20.0, 30.0, 40.0] {
        let wb = wet_bulb_temperature_precise(t, 100.0, ATMOSPHERIC_PRESSURE_KPA).expect("wb");
        assert!((wb - t).abs() < 0.1, "T={t}: wb={wb}");
    }
}

#[test]
fn stull_and_bisection_wet_bulbs_agree() {
    // 근사식과 엔탈피 일치 해는 통상 운전 범위에서 1°C 안팎으로 맞아야 한다.
    for t in [10.0, 20.0, 30.0, 40.0] {
        for rh in [20.0, 30.0, 50.0, 70.0, 90.0] {
            let approx = wet_bulb_temperature(t, rh, ATMOSPHERIC_PRESSURE_KPA).expect("stull");
            let precise =
                wet_bulb_temperature_precise(t, rh, ATMOSPHERIC_PRESSURE_KPA).expect("precise");
            let diff = (approx - precise).abs();
            assert!(diff < 1.2, "T={t} RH={rh}: stull={approx} precise={precise}");
        }
    }
}

#[test]
fn saturation_pressure_is_pure() {
    let first = saturation_pressure_kpa(23.4);
    let second = saturation_pressure_kpa(23.4);
    assert_eq!(first, second);
}

#[test]
fn humidity_ratio_rejects_out_of_range_inputs() {
    assert!(matches!(
        humidity_ratio(30.0, -1.0, ATMOSPHERIC_PRESSURE_KPA),
        Err(PsychroError::InvalidRelativeHumidity(_))
    ));
    assert!(matches!(
        humidity_ratio(30.0, 100.5, ATMOSPHERIC_PRESSURE_KPA),
        Err(PsychroError::InvalidRelativeHumidity(_))
    ));
    assert!(matches!(
        humidity_ratio(30.0, 50.0, 0.0),
        Err(PsychroError::InvalidPressure(_))
    ));
}

#[test]
fn humidity_ratio_reports_saturation_singularity() {
    // 60°C 포화 수증기압(약 20 kPa)이 전압 15 kPa를 넘는 조합.
    assert!(matches!(
        saturation_humidity_ratio(60.0, 15.0),
        Err(PsychroError::Saturated { .. })
    ));
    assert!(matches!(
        humidity_ratio(60.0, 100.0, 15.0),
        Err(PsychroError::Saturated { .. })
    ));
}

#[test]
fn wet_bulb_rejects_invalid_inputs() {
    assert!(wet_bulb_temperature(30.0, 150.0, ATMOSPHERIC_PRESSURE_KPA).is_err());
    assert!(wet_bulb_temperature(30.0, 50.0, -5.0).is_err());
    assert!(MoistAir::new(30.0, 120.0, ATMOSPHERIC_PRESSURE_KPA).is_err());
    assert!(MoistAir::new(30.0, 50.0, 0.0).is_err());
}

#[test]
fn moist_air_state_matches_free_functions() {
    let state = MoistAir::at_atmospheric(30.0, 50.0).expect("state");
    let w = humidity_ratio(30.0, 50.0, ATMOSPHERIC_PRESSURE_KPA).expect("w");
    assert_eq!(state.humidity_ratio().expect("state w"), w);
    assert_eq!(
        state.enthalpy().expect("state h"),
        enthalpy_kj_per_kg(30.0, w)
    );
}
