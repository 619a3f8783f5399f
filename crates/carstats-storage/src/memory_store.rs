//! 인메모리 설정 저장소.

use carstats_core::models::preferences::{PreferenceKey, PreferenceSet, PreferenceValue};
use carstats_core::ports::preference_store::PreferenceStore;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::warn;

/// 프로세스 메모리에만 유지되는 설정 저장소
///
/// 기록되지 않은 키는 `None`을 반환한다.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    values: RwLock<HashMap<PreferenceKey, PreferenceValue>>,
}

impl InMemoryPreferenceStore {
    /// 빈 저장소 (모든 키 미정의)
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정값 집합으로 채운 저장소
    pub fn from_set(prefs: &PreferenceSet) -> Self {
        let values = PreferenceKey::ALL
            .iter()
            .map(|key| (*key, prefs.get(*key)))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }

    /// 키 하나만 지정한 저장소
    pub fn with(key: PreferenceKey, value: PreferenceValue) -> Self {
        let store = Self::new();
        store.write(key, value);
        store
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn read(&self, key: PreferenceKey) -> Option<PreferenceValue> {
        self.values.read().get(&key).copied()
    }

    fn write(&self, key: PreferenceKey, value: PreferenceValue) {
        if let Err(e) = key.check(&value) {
            warn!("설정값 무시: {e}");
            return;
        }
        self.values.write().insert(key, value);
    }
}
