//! 증발식 냉각탑 성능 계산 모듈을 모아둔다.
//! Merkel 적분, 냉수 출구온도 탐색, 증발 손실 계산으로 구성한다.

pub mod cooling_tower;
pub mod merkel;

pub use cooling_tower::*;
pub use merkel::*;
