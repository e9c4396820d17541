//! 유량/압력/습도비 단위 변환 회귀 테스트.
use cooling_tower_toolbox::conversion::convert;
use cooling_tower_toolbox::quantity::QuantityKind;
use cooling_tower_toolbox::units::{convert_flow, FlowUnit};

#[test]
fn water_volumetric_flow_to_mass_flow() {
    // 3600 m³/h(물, ρ=1000 kg/m³) => 1000 kg/s
    let kg_per_s = convert_flow(
        3600.0,
        FlowUnit::WaterCubicMeterPerHour,
        FlowUnit::KilogramPerSecond,
    );
    assert!((kg_per_s - 1000.0).abs() < 1e-9);
}

#[test]
fn tonne_per_hour_roundtrip() {
    let kg_per_h = convert_flow(2.5, FlowUnit::TonnePerHour, FlowUnit::KilogramPerHour);
    assert!((kg_per_h - 2500.0).abs() < 1e-9);
    let back = convert_flow(kg_per_h, FlowUnit::KilogramPerHour, FlowUnit::TonnePerHour);
    assert!((back - 2.5).abs() < 1e-12);
}

#[test]
fn string_keyed_conversions() {
    let kpa = convert(QuantityKind::Pressure, 760.0, "mmHg", "kPa").expect("pressure");
    assert!((kpa - 101.325).abs() < 0.01, "kpa={kpa}");

    let celsius = convert(QuantityKind::Temperature, 212.0, "F", "C").expect("temperature");
    assert!((celsius - 100.0).abs() < 1e-9);

    let g_per_kg = convert(QuantityKind::HumidityRatio, 0.01, "kg/kg", "g/kg").expect("humidity");
    assert!((g_per_kg - 10.0).abs() < 1e-9);

    let grain = convert(QuantityKind::HumidityRatio, 0.01, "kg/kg", "gr/lb").expect("humidity");
    assert!((grain - 70.0).abs() < 1e-9);
}

#[test]
fn unknown_unit_is_rejected() {
    assert!(convert(QuantityKind::Pressure, 1.0, "furlong", "kPa").is_err());
}
