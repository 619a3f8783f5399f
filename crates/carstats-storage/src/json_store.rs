//! JSON 파일 설정 저장소.
//!
//! 전체 `PreferenceSet`을 메모리에 두고, 쓰기마다 파일 전체를 다시 저장한다.

use carstats_core::error::CoreError;
use carstats_core::models::preferences::{PreferenceKey, PreferenceSet, PreferenceValue};
use carstats_core::ports::preference_store::PreferenceStore;
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// JSON 파일 기반 설정 저장소
#[derive(Debug)]
pub struct JsonPreferenceStore {
    prefs: RwLock<PreferenceSet>,
    path: PathBuf,
}

impl JsonPreferenceStore {
    /// 파일에서 설정값 로드
    ///
    /// 파일이 없으면 기본값으로 시작하고, 첫 쓰기 때 파일을 만든다.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let prefs = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let prefs: PreferenceSet = serde_json::from_str(&content)?;
            debug!("설정값 로드 완료: {}", path.display());
            prefs
        } else {
            info!("설정값 파일 없음, 기본값 사용: {}", path.display());
            PreferenceSet::default()
        };

        Ok(Self {
            prefs: RwLock::new(prefs),
            path,
        })
    }

    /// 파일 경로
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 현재 설정값 복제본
    pub fn snapshot(&self) -> PreferenceSet {
        self.prefs.read().clone()
    }

    /// 현재 설정값을 파일에 저장
    pub fn flush(&self) -> Result<(), CoreError> {
        let content = serde_json::to_string_pretty(&*self.prefs.read())?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn read(&self, key: PreferenceKey) -> Option<PreferenceValue> {
        Some(self.prefs.read().get(key))
    }

    fn write(&self, key: PreferenceKey, value: PreferenceValue) {
        if let Err(e) = self.prefs.write().set(key, value) {
            warn!("설정값 무시: {e}");
            return;
        }
        debug!("설정값 변경: {key} = {value:?}");

        if let Err(e) = self.flush() {
            warn!("설정값 저장 실패: {}: {e}", self.path.display());
        }
    }
}
