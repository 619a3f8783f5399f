//! 콘솔 어댑터.
//!
//! 실제 UI 없이 설정 화면을 구동할 때 쓰는 포트 구현. 모든 동작은 tracing 로그로 남는다.

use carstats_core::models::preferences::DistanceUnit;
use carstats_core::models::screen::{MenuEntry, ScreenId, VisualTreatment};
use carstats_core::ports::control::MenuControl;
use carstats_core::ports::dialog::{ConfirmDialog, DialogCallback};
use carstats_core::ports::navigator::Navigator;
use carstats_core::ports::unit_listener::DistanceUnitListener;
use parking_lot::Mutex;
use tracing::info;

/// 메뉴 항목 — 상태가 바뀔 때만 로그
pub struct ConsoleMenuControl {
    entry: MenuEntry,
    enabled: Mutex<Option<bool>>,
}

impl ConsoleMenuControl {
    pub fn new(entry: MenuEntry) -> Self {
        Self {
            entry,
            enabled: Mutex::new(None),
        }
    }
}

impl MenuControl for ConsoleMenuControl {
    fn set_enabled(&self, enabled: bool) {
        let previous = self.enabled.lock().replace(enabled);
        if previous != Some(enabled) {
            info!("메뉴 {:?}: {}", self.entry, if enabled { "활성" } else { "비활성" });
        }
    }

    fn set_visual_treatment(&self, treatment: VisualTreatment) {
        tracing::trace!("메뉴 {:?} 틴트 {}", self.entry, treatment.tint());
    }
}

/// 화면 전환 로그
#[derive(Debug, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn open(&self, screen: ScreenId) {
        info!("화면 열기: {screen}");
    }

    fn back(&self) {
        info!("이전 화면으로");
    }
}

/// 미리 정한 답으로 즉시 닫히는 확인 다이얼로그
#[derive(Debug)]
pub struct AutoAnswerDialog {
    confirm: bool,
}

impl AutoAnswerDialog {
    pub fn new(confirm: bool) -> Self {
        Self { confirm }
    }
}

impl ConfirmDialog for AutoAnswerDialog {
    fn show(&self, title: &str, message: &str, on_confirm: DialogCallback, on_cancel: DialogCallback) {
        info!("[{title}] {message} → {}", if self.confirm { "확인" } else { "취소" });
        if self.confirm {
            on_confirm();
        } else {
            on_cancel();
        }
    }
}

/// 거리 단위 변경 로그
#[derive(Debug, Default)]
pub struct ConsoleUnitListener;

impl DistanceUnitListener for ConsoleUnitListener {
    fn on_distance_unit_changed(&self, unit: DistanceUnit) {
        info!("그래프 거리 단위 변경: {unit:?}");
    }
}
