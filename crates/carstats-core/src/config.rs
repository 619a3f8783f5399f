//! 애플리케이션 설정 구조체.
//!
//! 설정 파일 경로, 화면 동작, 속도 시뮬레이션 등 런타임 설정을 정의한다.
//! 사용자 설정값(`PreferenceSet`)과는 별개이며 `ConfigManager`가 JSON으로 로드/저장한다.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 설정값 저장소
    #[serde(default)]
    pub preferences: PreferencesConfig,
    /// 설정 화면 동작
    #[serde(default)]
    pub screen: ScreenConfig,
    /// 속도 피드 시뮬레이션
    #[serde(default)]
    pub simulation: SimulationConfig,
}

// ============================================================
// 설정값 저장소
// ============================================================

/// 설정값 파일 위치
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// 설정값 JSON 경로 (None이면 플랫폼 데이터 디렉토리)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

// ============================================================
// 화면 설정
// ============================================================

/// 설정 화면 동작
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// 에뮬레이터 모드 (거리 단위 스위치 노출)
    #[serde(default)]
    pub emulator_mode: bool,
    /// 버전 텍스트에 표시할 애플리케이션 ID
    #[serde(default = "default_application_id")]
    pub application_id: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            emulator_mode: false,
            application_id: default_application_id(),
        }
    }
}

// ============================================================
// 시뮬레이션 설정
// ============================================================

/// 속도 피드 시뮬레이션 — 차량 없이 게이트 동작 확인용
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// 샘플 발행 주기 (밀리초)
    #[serde(default = "default_sample_interval_ms")]
    pub sample_interval_ms: u64,
    /// 순서대로 발행할 속도 값 (m/s)
    #[serde(default)]
    pub speeds: Vec<f32>,
    /// 브로드캐스트 채널 용량
    #[serde(default = "default_feed_capacity")]
    pub feed_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: default_sample_interval_ms(),
            speeds: Vec::new(),
            feed_capacity: default_feed_capacity(),
        }
    }
}

fn default_application_id() -> String {
    "com.ixam97.carStatsViewer".to_string()
}

fn default_sample_interval_ms() -> u64 {
    1_000
}

fn default_feed_capacity() -> usize {
    64
}

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self {
            preferences: PreferencesConfig::default(),
            screen: ScreenConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }

    /// 샘플 발행 주기
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.simulation.sample_interval_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
