//! 순환수 흐름 관련 모듈 모음.

pub mod water_stream;

pub use water_stream::*;
