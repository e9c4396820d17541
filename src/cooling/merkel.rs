use super::cooling_tower::TowerError;
use crate::air::{self, MoistAir};
use crate::water::CP_WATER;

/// Simpson 합성 공식의 분할 수.
const SIMPSON_STEPS: usize = 100;

/// 주어진 운전점(온수·냉수·공기)이 실제로 달성하는 Merkel 수(NTU)를 구한다.
///
/// 물 온도 구간 [냉수, 온수]를 100 등분해 온수 쪽부터 내려가며,
/// 각 지점의 포화 공기 엔탈피와 벌크 공기 엔탈피(입구 엔탈피에
/// L/G·Cp_w·(T-T_냉수)를 더한 선형 상승 가정)의 차이를 구동력으로 삼아
/// ∫ Cp_w/(h_s - h_a) dT 를 Simpson 공식으로 근사한다.
///
/// 어느 지점에서든 구동력이 0 이하이면 열·물질 전달이 성립하지 않는
/// 운전점이므로 즉시 오류를 돌려준다. 절삭하거나 건너뛰지 않는다.
pub fn merkel_number(
    hot_temp_c: f64,
    cold_temp_c: f64,
    air: &MoistAir,
    l_g_ratio: f64,
) -> Result<f64, TowerError> {
    let h_in = air.enthalpy()?;
    let n = SIMPSON_STEPS;
    let dt = (hot_temp_c - cold_temp_c) / n as f64;
    let mut integral = 0.0;
    for i in 0..=n {
        let t_w = hot_temp_c - i as f64 * dt;
        let w_s = air::saturation_humidity_ratio(t_w, air.pressure_kpa)?;
        let h_s = air::enthalpy_kj_per_kg(t_w, w_s);
        let h_a = h_in + l_g_ratio * CP_WATER * (t_w - cold_temp_c);
        let driving_force = h_s - h_a;
        if driving_force <= 0.0 {
            return Err(TowerError::Infeasible { temp_c: t_w });
        }
        let integrand = CP_WATER / driving_force;
        let coef = if i == 0 || i == n {
            1.0
        } else if i % 2 == 1 {
            4.0
        } else {
            2.0
        };
        integral += coef * integrand;
    }
    Ok(integral * dt / 3.0)
}
