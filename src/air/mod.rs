//! 습공기(psychrometric) 물성 계산 모듈 모음.

pub mod moist_air;

pub use moist_air::*;
