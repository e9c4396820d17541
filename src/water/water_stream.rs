/// 물의 정압비열 [kJ/kg·K]
pub const CP_WATER: f64 = 4.186;

/// 순환수 흐름. 질량 유량과 온도만 다룬다.
#[derive(Debug, Clone, Copy)]
pub struct WaterStream {
    /// 질량 유량(kg/s)
    pub flow_kg_per_s: f64,
    /// 온도(°C)
    pub temp_c: f64,
}

impl WaterStream {
    pub fn new(flow_kg_per_s: f64, temp_c: f64) -> Self {
        Self {
            flow_kg_per_s,
            temp_c,
        }
    }

    /// 0°C 기준 현열 비엔탈피(kJ/kg).
    pub fn enthalpy_kj_per_kg(&self) -> f64 {
        CP_WATER * self.temp_c
    }
}
