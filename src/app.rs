use crate::air::PsychroError;
use crate::config::Config;
use crate::conversion;
use crate::cooling::TowerError;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 습공기 물성 계산 오류
    Psychro(PsychroError),
    /// 냉각탑 계산 오류
    Tower(TowerError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Psychro(e) => write!(f, "습공기 계산 오류: {e}"),
            AppError::Tower(e) => write!(f, "냉각탑 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<PsychroError> for AppError {
    fn from(value: PsychroError) -> Self {
        AppError::Psychro(value)
    }
}

impl From<TowerError> for AppError {
    fn from(value: TowerError) -> Self {
        AppError::Tower(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 개별 계산의 실패(수렴 실패, 유효하지 않은 입력 등)는 메뉴를 끝내지 않고
/// 오류 메시지만 출력한 뒤 메인 메뉴로 돌아간다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        let choice = ui_cli::main_menu(tr)?;
        let outcome = match choice {
            MenuChoice::Psychro => ui_cli::handle_psychro(tr, config),
            MenuChoice::Tower => ui_cli::handle_tower(tr, config),
            MenuChoice::Evaporation => ui_cli::handle_evaporation(tr, config),
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr, config),
            MenuChoice::Settings => {
                let result = ui_cli::handle_settings(tr, config);
                if result.is_ok() {
                    config.save()?;
                }
                result
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        if let Err(err) = outcome {
            match err {
                AppError::Io(_) => return Err(err),
                other => println!("{}: {other}", tr.t(i18n::keys::ERROR_PREFIX)),
            }
        }
    }
    Ok(())
}
