//! # carstats-core
//!
//! Car Stats Viewer 설정 화면의 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (serde Serialize/Deserialize)
//! - [`ports`] — Hexagonal Architecture 포트 인터페이스
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests {
    use crate::models::preferences::{DistanceUnit, PreferenceKey, PreferenceSet, PreferenceValue};

    #[test]
    fn preference_set_serde_roundtrip() {
        let mut prefs = PreferenceSet::default();
        prefs
            .set(PreferenceKey::DistanceUnit, PreferenceValue::DistanceUnit(DistanceUnit::Miles))
            .unwrap();
        prefs.set(PreferenceKey::AltLayout, PreferenceValue::Bool(true)).unwrap();

        let json = serde_json::to_string(&prefs).unwrap();
        let deserialized: PreferenceSet = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, prefs);
        assert!(json.contains("\"distance_unit\":\"MILES\""));
    }

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.simulation.sample_interval_ms, 1_000);
        assert!(!config.screen.emulator_mode);
        assert!(config.preferences.path.is_none());
    }
}
