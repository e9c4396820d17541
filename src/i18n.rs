use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PSYCHRO: &str = "main_menu.psychro";
    pub const MAIN_MENU_TOWER: &str = "main_menu.tower";
    pub const MAIN_MENU_EVAPORATION: &str = "main_menu.evaporation";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const PROMPT_DRY_BULB: &str = "prompt.dry_bulb";
    pub const PROMPT_RELATIVE_HUMIDITY: &str = "prompt.relative_humidity";
    pub const PROMPT_PRESSURE_DEFAULT: &str = "prompt.pressure_default";
    pub const PROMPT_HOT_WATER_TEMP: &str = "prompt.hot_water_temp";
    pub const PROMPT_COLD_WATER_TEMP: &str = "prompt.cold_water_temp";
    pub const PROMPT_WATER_FLOW_VALUE: &str = "prompt.water_flow_value";
    pub const FLOW_UNIT_OPTIONS: &str = "unit.flow_options";
    pub const PROMPT_TOWER_C: &str = "prompt.tower_c";
    pub const PROMPT_TOWER_N_DEFAULT: &str = "prompt.tower_n_default";
    pub const PROMPT_LG_RATIO: &str = "prompt.lg_ratio";
    pub const PROMPT_OUTLET_RH_DEFAULT: &str = "prompt.outlet_rh_default";

    pub const PSYCHRO_HEADING: &str = "psychro.heading";
    pub const RESULT_SATURATION_PRESSURE: &str = "psychro.saturation_pressure";
    pub const RESULT_HUMIDITY_RATIO: &str = "psychro.humidity_ratio";
    pub const RESULT_ENTHALPY: &str = "psychro.enthalpy";
    pub const RESULT_WET_BULB_STULL: &str = "psychro.wet_bulb_stull";
    pub const RESULT_WET_BULB_PRECISE: &str = "psychro.wet_bulb_precise";

    pub const TOWER_HEADING: &str = "tower.heading";
    pub const RESULT_COLD_WATER_TEMP: &str = "tower.cold_water_temp";
    pub const RESULT_RANGE: &str = "tower.range";
    pub const RESULT_APPROACH: &str = "tower.approach";
    pub const RESULT_HEAT_REJECTED: &str = "tower.heat_rejected";
    pub const RESULT_MERKEL: &str = "tower.merkel";
    pub const RESULT_ITERATIONS: &str = "tower.iterations";

    pub const EVAPORATION_HEADING: &str = "evaporation.heading";
    pub const RESULT_EVAPORATION_RATE: &str = "evaporation.rate";
    pub const RESULT_AIR_OUT_TEMP: &str = "evaporation.air_out_temp";
    pub const RESULT_AIR_FLOW: &str = "evaporation.air_flow";
    pub const RESULT_HUMIDITY_IN_OUT: &str = "evaporation.humidity_in_out";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const TEMPERATURE_UNIT_OPTIONS: &str = "unit.temperature_options";
    pub const SETTINGS_PROMPT_TOLERANCE: &str = "settings.prompt_tolerance";
    pub const SETTINGS_PROMPT_MAX_ITERATIONS: &str = "settings.prompt_max_iterations";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., ko-kr)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., ko)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "ko" | "ko-kr" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        "en" | "en-us" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Cooling Tower Toolbox ===",
        MAIN_MENU_PSYCHRO => "1) 습공기 상태 계산",
        MAIN_MENU_TOWER => "2) 냉수 출구온도 (Merkel)",
        MAIN_MENU_EVAPORATION => "3) 증발 손실 계산",
        MAIN_MENU_UNIT_CONVERSION => "4) 단위 변환기",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PROMPT_SELECT => "선택: ",
        PROMPT_DRY_BULB => "건구온도 [°C]: ",
        PROMPT_RELATIVE_HUMIDITY => "상대습도 [%]: ",
        PROMPT_PRESSURE_DEFAULT => "전압 [kPa] (엔터=101.325): ",
        PROMPT_HOT_WATER_TEMP => "온수(입구) 온도 [°C]: ",
        PROMPT_COLD_WATER_TEMP => "냉수(출구) 온도 [°C]: ",
        PROMPT_WATER_FLOW_VALUE => "순환수 유량 값: ",
        FLOW_UNIT_OPTIONS => "유량 단위: 1=kg/s 2=kg/h 3=t/h 4=m³/h(물)",
        PROMPT_TOWER_C => "특성 계수 C: ",
        PROMPT_TOWER_N_DEFAULT => "특성 지수 N (엔터=-0.55): ",
        PROMPT_LG_RATIO => "L/G 비: ",
        PROMPT_OUTLET_RH_DEFAULT => "출구 공기 상대습도 [%] (엔터=100): ",
        PSYCHRO_HEADING => "\n-- 습공기 상태 --",
        RESULT_SATURATION_PRESSURE => "포화 수증기압:",
        RESULT_HUMIDITY_RATIO => "습도비:",
        RESULT_ENTHALPY => "비엔탈피:",
        RESULT_WET_BULB_STULL => "습구온도(Stull 근사):",
        RESULT_WET_BULB_PRECISE => "습구온도(엔탈피 이분법):",
        TOWER_HEADING => "\n-- 냉수 출구온도 (Merkel) --",
        RESULT_COLD_WATER_TEMP => "냉수 출구온도:",
        RESULT_RANGE => "Range:",
        RESULT_APPROACH => "Approach:",
        RESULT_HEAT_REJECTED => "방열량:",
        RESULT_MERKEL => "Merkel 수 (달성/요구):",
        RESULT_ITERATIONS => "반복 횟수:",
        EVAPORATION_HEADING => "\n-- 증발 손실 --",
        RESULT_EVAPORATION_RATE => "증발 수량:",
        RESULT_AIR_OUT_TEMP => "출구 공기온도:",
        RESULT_AIR_FLOW => "공기 질량유량:",
        RESULT_HUMIDITY_IN_OUT => "습도비 (입구/출구):",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 온도  2) 온도차  3) 압력  4) 질량유량  5) 습도비  6) 비엔탈피",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: C, kPa, kg/s): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: F, psi, t/h): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 언어  2) 온도 표시 단위  3) Merkel 허용 오차  4) 최대 반복 횟수",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_LANGUAGE_OPTIONS => "언어: 1=한국어 2=English",
        TEMPERATURE_UNIT_OPTIONS => "온도 단위: 1=°C 2=K 3=°F",
        SETTINGS_PROMPT_TOLERANCE => "Merkel 상대 허용 오차 (ex: 0.01): ",
        SETTINGS_PROMPT_MAX_ITERATIONS => "냉수온도 탐색 최대 반복 횟수 (ex: 50): ",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Cooling Tower Toolbox ===",
        MAIN_MENU_PSYCHRO => "1) Moist-air state",
        MAIN_MENU_TOWER => "2) Cold-water temperature (Merkel)",
        MAIN_MENU_EVAPORATION => "3) Evaporation loss",
        MAIN_MENU_UNIT_CONVERSION => "4) Unit converter",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PROMPT_SELECT => "Select: ",
        PROMPT_DRY_BULB => "Dry-bulb temperature [°C]: ",
        PROMPT_RELATIVE_HUMIDITY => "Relative humidity [%]: ",
        PROMPT_PRESSURE_DEFAULT => "Total pressure [kPa] (enter=101.325): ",
        PROMPT_HOT_WATER_TEMP => "Hot-water (inlet) temperature [°C]: ",
        PROMPT_COLD_WATER_TEMP => "Cold-water (outlet) temperature [°C]: ",
        PROMPT_WATER_FLOW_VALUE => "Circulating water flow value: ",
        FLOW_UNIT_OPTIONS => "Flow units: 1=kg/s 2=kg/h 3=t/h 4=m³/h(water)",
        PROMPT_TOWER_C => "Characteristic coefficient C: ",
        PROMPT_TOWER_N_DEFAULT => "Characteristic exponent N (enter=-0.55): ",
        PROMPT_LG_RATIO => "L/G ratio: ",
        PROMPT_OUTLET_RH_DEFAULT => "Outlet air relative humidity [%] (enter=100): ",
        PSYCHRO_HEADING => "\n-- Moist-air state --",
        RESULT_SATURATION_PRESSURE => "Saturation vapor pressure:",
        RESULT_HUMIDITY_RATIO => "Humidity ratio:",
        RESULT_ENTHALPY => "Specific enthalpy:",
        RESULT_WET_BULB_STULL => "Wet-bulb (Stull approx.):",
        RESULT_WET_BULB_PRECISE => "Wet-bulb (enthalpy bisection):",
        TOWER_HEADING => "\n-- Cold-water temperature (Merkel) --",
        RESULT_COLD_WATER_TEMP => "Cold-water outlet temperature:",
        RESULT_RANGE => "Range:",
        RESULT_APPROACH => "Approach:",
        RESULT_HEAT_REJECTED => "Heat rejected:",
        RESULT_MERKEL => "Merkel number (achieved/required):",
        RESULT_ITERATIONS => "Iterations:",
        EVAPORATION_HEADING => "\n-- Evaporation loss --",
        RESULT_EVAPORATION_RATE => "Evaporation rate:",
        RESULT_AIR_OUT_TEMP => "Outlet air temperature:",
        RESULT_AIR_FLOW => "Air mass flow:",
        RESULT_HUMIDITY_IN_OUT => "Humidity ratio (in/out):",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Temperature  2) ΔTemperature  3) Pressure  4) Mass flow  5) Humidity ratio  6) Specific enthalpy",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: C, kPa, kg/s): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: F, psi, t/h): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Language  2) Temperature display unit  3) Merkel tolerance  4) Max iterations",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_LANGUAGE_OPTIONS => "Language: 1=한국어 2=English",
        TEMPERATURE_UNIT_OPTIONS => "Temperature units: 1=°C 2=K 3=°F",
        SETTINGS_PROMPT_TOLERANCE => "Merkel relative tolerance (ex: 0.01): ",
        SETTINGS_PROMPT_MAX_ITERATIONS => "Max iterations for cold-water search (ex: 50): ",
        _ => return None,
    })
}
