//! 사용자 설정 모델.
//!
//! 설정 화면의 스위치와 1:1로 대응하는 설정값 집합.
//! 앱 프로세스 수명 동안 유지되며, 화면 초기화 시 한 번 읽혀 컨트롤 상태를 결정한다.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// 거리 단위
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistanceUnit {
    #[default]
    Km,
    Miles,
}

/// 설정 키
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    /// 알림 표시
    Notifications,
    /// 소비량 단위 전환
    ConsumptionUnit,
    /// 위치 정보 사용
    UseLocation,
    /// 부팅 시 자동 시작
    Autostart,
    /// 거리 단위
    DistanceUnit,
    /// 대체 레이아웃
    AltLayout,
    /// 주행 중 주의 분산 최적화 (게이트 초기값)
    DoDistractionOptimization,
}

impl PreferenceKey {
    /// 모든 키 (선언 순서)
    pub const ALL: [PreferenceKey; 7] = [
        PreferenceKey::Notifications,
        PreferenceKey::ConsumptionUnit,
        PreferenceKey::UseLocation,
        PreferenceKey::Autostart,
        PreferenceKey::DistanceUnit,
        PreferenceKey::AltLayout,
        PreferenceKey::DoDistractionOptimization,
    ];

    /// 영속화에 쓰는 키 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::Notifications => "notifications",
            PreferenceKey::ConsumptionUnit => "consumption_unit",
            PreferenceKey::UseLocation => "use_location",
            PreferenceKey::Autostart => "autostart",
            PreferenceKey::DistanceUnit => "distance_unit",
            PreferenceKey::AltLayout => "alt_layout",
            PreferenceKey::DoDistractionOptimization => "do_distraction_optimization",
        }
    }

    /// 값의 타입이 이 키에 맞는지 검증
    pub fn check(&self, value: &PreferenceValue) -> Result<(), CoreError> {
        let expects_unit = *self == PreferenceKey::DistanceUnit;
        match value {
            PreferenceValue::DistanceUnit(_) if expects_unit => Ok(()),
            PreferenceValue::Bool(_) if !expects_unit => Ok(()),
            _ => Err(CoreError::Validation {
                field: self.as_str().to_string(),
                message: format!("타입이 맞지 않는 값: {value:?}"),
            }),
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 설정값
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceValue {
    Bool(bool),
    DistanceUnit(DistanceUnit),
}

impl PreferenceValue {
    /// bool 값이면 반환
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PreferenceValue::Bool(v) => Some(*v),
            PreferenceValue::DistanceUnit(_) => None,
        }
    }

    /// 거리 단위 값이면 반환
    pub fn as_distance_unit(&self) -> Option<DistanceUnit> {
        match self {
            PreferenceValue::DistanceUnit(u) => Some(*u),
            PreferenceValue::Bool(_) => None,
        }
    }
}

/// 설정값 집합 (JSON 파일로 영속화)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default)]
    pub consumption_unit: bool,
    #[serde(default)]
    pub use_location: bool,
    #[serde(default)]
    pub autostart: bool,
    #[serde(default)]
    pub distance_unit: DistanceUnit,
    #[serde(default)]
    pub alt_layout: bool,
    /// 누락 시 false — 제한 없음으로 시작 (fail-open)
    #[serde(default)]
    pub do_distraction_optimization: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            notifications: true,
            consumption_unit: false,
            use_location: false,
            autostart: false,
            distance_unit: DistanceUnit::Km,
            alt_layout: false,
            do_distraction_optimization: false,
        }
    }
}

impl PreferenceSet {
    /// 키에 해당하는 현재 값
    pub fn get(&self, key: PreferenceKey) -> PreferenceValue {
        match key {
            PreferenceKey::Notifications => PreferenceValue::Bool(self.notifications),
            PreferenceKey::ConsumptionUnit => PreferenceValue::Bool(self.consumption_unit),
            PreferenceKey::UseLocation => PreferenceValue::Bool(self.use_location),
            PreferenceKey::Autostart => PreferenceValue::Bool(self.autostart),
            PreferenceKey::DistanceUnit => PreferenceValue::DistanceUnit(self.distance_unit),
            PreferenceKey::AltLayout => PreferenceValue::Bool(self.alt_layout),
            PreferenceKey::DoDistractionOptimization => {
                PreferenceValue::Bool(self.do_distraction_optimization)
            }
        }
    }

    /// 키에 값을 기록한다.
    ///
    /// 키와 값의 타입이 맞지 않으면 아무것도 바꾸지 않고 `CoreError::Validation` 반환.
    pub fn set(&mut self, key: PreferenceKey, value: PreferenceValue) -> Result<(), CoreError> {
        key.check(&value)?;
        match (key, value) {
            (PreferenceKey::Notifications, PreferenceValue::Bool(v)) => self.notifications = v,
            (PreferenceKey::ConsumptionUnit, PreferenceValue::Bool(v)) => self.consumption_unit = v,
            (PreferenceKey::UseLocation, PreferenceValue::Bool(v)) => self.use_location = v,
            (PreferenceKey::Autostart, PreferenceValue::Bool(v)) => self.autostart = v,
            (PreferenceKey::DistanceUnit, PreferenceValue::DistanceUnit(u)) => {
                self.distance_unit = u
            }
            (PreferenceKey::AltLayout, PreferenceValue::Bool(v)) => self.alt_layout = v,
            (PreferenceKey::DoDistractionOptimization, PreferenceValue::Bool(v)) => {
                self.do_distraction_optimization = v
            }
            // check()에서 걸러짐
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let prefs = PreferenceSet::default();
        assert!(prefs.notifications);
        assert!(!prefs.do_distraction_optimization);
        assert_eq!(prefs.distance_unit, DistanceUnit::Km);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let prefs: PreferenceSet = serde_json::from_str(r#"{"alt_layout": true}"#).unwrap();
        assert!(prefs.alt_layout);
        assert!(prefs.notifications);
        assert!(!prefs.do_distraction_optimization);
    }

    #[test]
    fn set_rejects_mismatched_value() {
        let mut prefs = PreferenceSet::default();
        let err = prefs
            .set(PreferenceKey::DistanceUnit, PreferenceValue::Bool(true))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "distance_unit"));
        assert!(prefs
            .set(
                PreferenceKey::Autostart,
                PreferenceValue::DistanceUnit(DistanceUnit::Miles)
            )
            .is_err());
        assert_eq!(prefs, PreferenceSet::default());
    }

    #[test]
    fn get_reflects_set() {
        let mut prefs = PreferenceSet::default();
        for key in PreferenceKey::ALL {
            if key == PreferenceKey::DistanceUnit {
                continue;
            }
            prefs.set(key, PreferenceValue::Bool(false)).unwrap();
            assert_eq!(prefs.get(key).as_bool(), Some(false));
        }
    }

    #[test]
    fn key_names() {
        assert_eq!(
            PreferenceKey::DoDistractionOptimization.to_string(),
            "do_distraction_optimization"
        );
        assert_eq!(PreferenceKey::DistanceUnit.as_str(), "distance_unit");
    }
}
