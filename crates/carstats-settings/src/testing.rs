//! 테스트용 포트 구현.

use carstats_core::models::preferences::DistanceUnit;
use carstats_core::models::screen::{ScreenId, VisualTreatment};
use carstats_core::models::vehicle::SpeedSample;
use carstats_core::ports::app_exit::AppExit;
use carstats_core::ports::control::MenuControl;
use carstats_core::ports::dialog::{ConfirmDialog, DialogCallback};
use carstats_core::ports::navigator::Navigator;
use carstats_core::ports::speed_feed::{SpeedFeed, SpeedReceiver};
use carstats_core::ports::unit_listener::DistanceUnitListener;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

use crate::gate::ControlGroup;

/// 마지막 적용 상태를 기록하는 컨트롤
#[derive(Debug, Default)]
pub struct RecordingControl {
    enabled: Mutex<Option<bool>>,
    treatment: Mutex<Option<VisualTreatment>>,
    applies: Mutex<usize>,
}

impl RecordingControl {
    pub fn enabled(&self) -> Option<bool> {
        *self.enabled.lock()
    }

    pub fn treatment(&self) -> Option<VisualTreatment> {
        *self.treatment.lock()
    }

    /// set_enabled 호출 횟수
    pub fn apply_count(&self) -> usize {
        *self.applies.lock()
    }
}

impl MenuControl for RecordingControl {
    fn set_enabled(&self, enabled: bool) {
        *self.enabled.lock() = Some(enabled);
        *self.applies.lock() += 1;
    }

    fn set_visual_treatment(&self, treatment: VisualTreatment) {
        *self.treatment.lock() = Some(treatment);
    }
}

/// 전체 메뉴 항목에 대한 기록용 컨트롤 그룹
pub fn recording_group() -> (ControlGroup, Vec<Arc<RecordingControl>>) {
    let mut controls = Vec::new();
    let group = ControlGroup::from_fn(|_| {
        let control = Arc::new(RecordingControl::default());
        controls.push(control.clone());
        let control: Arc<dyn MenuControl> = control;
        control
    });
    (group, controls)
}

/// 모든 컨트롤의 활성 상태와 시각 처리가 `enabled`와 일치하는지 확인
pub fn assert_all_enabled(controls: &[Arc<RecordingControl>], enabled: bool) {
    for (i, control) in controls.iter().enumerate() {
        assert_eq!(control.enabled(), Some(enabled), "컨트롤 {i} 활성 상태");
        assert_eq!(
            control.treatment(),
            Some(VisualTreatment::from_enabled(enabled)),
            "컨트롤 {i} 시각 처리"
        );
    }
}

/// 수동으로 샘플을 발행하는 피드
pub struct TestFeed {
    tx: Mutex<Option<broadcast::Sender<SpeedSample>>>,
}

impl TestFeed {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self {
            tx: Mutex::new(Some(tx)),
        }
    }

    pub fn publish(&self, sample: SpeedSample) {
        if let Some(tx) = self.tx.lock().as_ref() {
            let _ = tx.send(sample);
        }
    }

    /// 송신측 drop — 구독자는 Closed를 받는다
    pub fn close(&self) {
        self.tx.lock().take();
    }

    fn receiver_count(&self) -> usize {
        self.tx.lock().as_ref().map_or(0, |tx| tx.receiver_count())
    }

    pub async fn wait_for_subscriber(&self) {
        self.wait_until(|count| count > 0).await;
    }

    pub async fn wait_for_no_subscriber(&self) {
        self.wait_until(|count| count == 0).await;
    }

    async fn wait_until(&self, cond: impl Fn(usize) -> bool) {
        let poll = async {
            while !cond(self.receiver_count()) {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        };
        tokio::time::timeout(Duration::from_secs(1), poll)
            .await
            .expect("구독자 수 대기 시간 초과");
    }
}

impl SpeedFeed for TestFeed {
    fn subscribe(&self) -> SpeedReceiver {
        match self.tx.lock().as_ref() {
            Some(tx) => tx.subscribe(),
            None => broadcast::channel(1).1,
        }
    }
}

/// 열린 화면을 기록하는 내비게이터
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub opened: Mutex<Vec<ScreenId>>,
    pub backs: Mutex<usize>,
}

impl Navigator for RecordingNavigator {
    fn open(&self, screen: ScreenId) {
        self.opened.lock().push(screen);
    }

    fn back(&self) {
        *self.backs.lock() += 1;
    }
}

/// 미리 정한 버튼을 즉시 누르는 다이얼로그
#[derive(Debug)]
pub struct ScriptedDialog {
    confirm: bool,
    pub shown: Mutex<Vec<(String, String)>>,
}

impl ScriptedDialog {
    pub fn confirming() -> Self {
        Self {
            confirm: true,
            shown: Mutex::new(Vec::new()),
        }
    }

    pub fn cancelling() -> Self {
        Self {
            confirm: false,
            shown: Mutex::new(Vec::new()),
        }
    }
}

impl ConfirmDialog for ScriptedDialog {
    fn show(&self, title: &str, message: &str, on_confirm: DialogCallback, on_cancel: DialogCallback) {
        self.shown.lock().push((title.to_string(), message.to_string()));
        if self.confirm {
            on_confirm();
        } else {
            on_cancel();
        }
    }
}

/// 종료 코드를 기록
#[derive(Debug, Default)]
pub struct RecordingExit {
    pub codes: Mutex<Vec<i32>>,
}

impl AppExit for RecordingExit {
    fn exit(&self, code: i32) {
        self.codes.lock().push(code);
    }
}

#[derive(Debug, Default)]
pub struct RecordingUnitListener {
    pub units: Mutex<Vec<DistanceUnit>>,
}

impl DistanceUnitListener for RecordingUnitListener {
    fn on_distance_unit_changed(&self, unit: DistanceUnit) {
        self.units.lock().push(unit);
    }
}
