//! 설정 저장소 포트.
//!
//! 구현: `carstats-storage` crate (`JsonPreferenceStore`, `InMemoryPreferenceStore`)

use crate::models::preferences::{DistanceUnit, PreferenceKey, PreferenceValue};

/// 영속 설정 저장소
///
/// 읽기는 동기, 쓰기는 fire-and-forget.
/// 영속화 실패는 구현체가 로깅하고 호출자에게 전파하지 않는다.
pub trait PreferenceStore: Send + Sync {
    /// 현재 저장된 값 조회 (없으면 None)
    fn read(&self, key: PreferenceKey) -> Option<PreferenceValue>;

    /// 새 값 기록
    fn write(&self, key: PreferenceKey, value: PreferenceValue);

    /// bool 설정 조회 (없거나 타입이 다르면 None)
    fn read_bool(&self, key: PreferenceKey) -> Option<bool> {
        self.read(key).and_then(|v| v.as_bool())
    }

    /// 거리 단위 조회
    fn distance_unit(&self) -> Option<DistanceUnit> {
        self.read(PreferenceKey::DistanceUnit)
            .and_then(|v| v.as_distance_unit())
    }
}
