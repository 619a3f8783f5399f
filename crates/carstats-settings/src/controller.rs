//! 설정 화면 컨트롤러.
//!
//! 스위치 ↔ 설정값 바인딩, 메뉴 클릭 → 화면 전환, 앱 종료 확인 다이얼로그.
//! 협력자는 모두 생성자로 주입받는다.

use carstats_core::config::ScreenConfig;
use carstats_core::models::preferences::{
    DistanceUnit, PreferenceKey, PreferenceSet, PreferenceValue,
};
use carstats_core::models::screen::{MenuEntry, ScreenId, SettingSwitch};
use carstats_core::ports::app_exit::AppExit;
use carstats_core::ports::dialog::ConfirmDialog;
use carstats_core::ports::navigator::Navigator;
use carstats_core::ports::preference_store::PreferenceStore;
use carstats_core::ports::unit_listener::DistanceUnitListener;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::gate::DistractionGate;

/// 종료 다이얼로그 제목
pub const QUIT_DIALOG_TITLE: &str = "앱 종료";

/// 종료 다이얼로그 본문
pub const QUIT_DIALOG_MESSAGE: &str = "Car Stats Viewer를 완전히 종료할까요?";

/// 화면 초기 표시 상태 (설정값에서 한 번 읽음)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub notifications: bool,
    pub consumption_unit: bool,
    pub use_location: bool,
    pub autostart: bool,
    /// 체크 = 마일
    pub distance_unit_miles: bool,
    pub alt_layout: bool,
    /// 거리 단위 스위치는 에뮬레이터에서만 노출
    pub distance_unit_switch_visible: bool,
    pub version_text: String,
}

impl SettingsView {
    /// 스위치의 체크 상태
    pub fn is_checked(&self, switch: SettingSwitch) -> bool {
        match switch {
            SettingSwitch::Notifications => self.notifications,
            SettingSwitch::ConsumptionUnit => self.consumption_unit,
            SettingSwitch::UseLocation => self.use_location,
            SettingSwitch::Autostart => self.autostart,
            SettingSwitch::DistanceUnit => self.distance_unit_miles,
            SettingSwitch::AltLayout => self.alt_layout,
        }
    }
}

/// 설정 화면 컨트롤러
pub struct SettingsController {
    store: Arc<dyn PreferenceStore>,
    navigator: Arc<dyn Navigator>,
    dialog: Arc<dyn ConfirmDialog>,
    exit: Arc<dyn AppExit>,
    gate: Arc<DistractionGate>,
    screen: ScreenConfig,
    unit_listener: Option<Arc<dyn DistanceUnitListener>>,
}

impl SettingsController {
    /// 컨트롤러 생성
    ///
    /// 저장된 최적화 플래그로 게이트 초기 상태를 바로 적용한다.
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        navigator: Arc<dyn Navigator>,
        dialog: Arc<dyn ConfirmDialog>,
        exit: Arc<dyn AppExit>,
        gate: Arc<DistractionGate>,
        screen: ScreenConfig,
    ) -> Self {
        gate.seed_from(store.as_ref());
        Self {
            store,
            navigator,
            dialog,
            exit,
            gate,
            screen,
            unit_listener: None,
        }
    }

    /// 거리 단위 변경 구독자 등록
    pub fn with_unit_listener(mut self, listener: Arc<dyn DistanceUnitListener>) -> Self {
        self.unit_listener = Some(listener);
        self
    }

    pub fn gate(&self) -> &Arc<DistractionGate> {
        &self.gate
    }

    /// 현재 설정값으로 화면 표시 상태 구성
    ///
    /// 저장되지 않은 키는 `PreferenceSet` 기본값으로 표시한다.
    pub fn view(&self) -> SettingsView {
        let defaults = PreferenceSet::default();
        let flag = |key| {
            self.store
                .read_bool(key)
                .or_else(|| defaults.get(key).as_bool())
                .unwrap_or(false)
        };
        let unit = self
            .store
            .distance_unit()
            .unwrap_or(defaults.distance_unit);
        SettingsView {
            notifications: flag(PreferenceKey::Notifications),
            consumption_unit: flag(PreferenceKey::ConsumptionUnit),
            use_location: flag(PreferenceKey::UseLocation),
            autostart: flag(PreferenceKey::Autostart),
            distance_unit_miles: unit == DistanceUnit::Miles,
            alt_layout: flag(PreferenceKey::AltLayout),
            distance_unit_switch_visible: self.screen.emulator_mode,
            version_text: self.version_text(),
        }
    }

    /// 버전 표시 텍스트
    pub fn version_text(&self) -> String {
        format!(
            "Car Stats Viewer Version {} ({})",
            env!("CARGO_PKG_VERSION"),
            self.screen.application_id
        )
    }

    /// 스위치 토글 → 설정값 기록
    ///
    /// 스위치는 주행 중에도 게이트 대상이 아니다.
    pub fn on_switch_toggled(&self, switch: SettingSwitch, checked: bool) {
        let key = switch_key(switch);
        let value = match switch {
            SettingSwitch::DistanceUnit if checked => PreferenceValue::DistanceUnit(DistanceUnit::Miles),
            SettingSwitch::DistanceUnit => PreferenceValue::DistanceUnit(DistanceUnit::Km),
            _ => PreferenceValue::Bool(checked),
        };
        debug!("스위치 {switch:?} → {key} = {value:?}");
        self.store.write(key, value);

        if let (Some(listener), PreferenceValue::DistanceUnit(unit)) = (&self.unit_listener, value) {
            listener.on_distance_unit_changed(unit);
        }
    }

    /// 메뉴 항목 클릭
    ///
    /// 주행 중(게이트 제한)에는 무시하고 `false` 반환.
    pub fn on_entry_clicked(&self, entry: MenuEntry) -> bool {
        if self.gate.is_restricted() {
            info!("주행 중 메뉴 이동 차단: {entry:?}");
            return false;
        }
        self.navigator.open(entry.target());
        true
    }

    /// 버전 텍스트 클릭 → 로그 화면 (게이트 대상 아님)
    pub fn on_version_clicked(&self) {
        self.navigator.open(ScreenId::Log);
    }

    /// 뒤로 가기
    pub fn on_back(&self) {
        self.navigator.back();
    }

    /// 종료 버튼 → 확인 다이얼로그
    pub fn on_kill_clicked(&self) {
        let exit = self.exit.clone();
        self.dialog.show(
            QUIT_DIALOG_TITLE,
            QUIT_DIALOG_MESSAGE,
            Box::new(move || {
                warn!("설정 화면에서 앱 종료");
                exit.exit(0);
            }),
            Box::new(|| debug!("종료 다이얼로그 닫힘")),
        );
    }
}

fn switch_key(switch: SettingSwitch) -> PreferenceKey {
    match switch {
        SettingSwitch::Notifications => PreferenceKey::Notifications,
        SettingSwitch::ConsumptionUnit => PreferenceKey::ConsumptionUnit,
        SettingSwitch::UseLocation => PreferenceKey::UseLocation,
        SettingSwitch::Autostart => PreferenceKey::Autostart,
        SettingSwitch::DistanceUnit => PreferenceKey::DistanceUnit,
        SettingSwitch::AltLayout => PreferenceKey::AltLayout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateState;
    use crate::testing::{
        assert_all_enabled, recording_group, RecordingControl, RecordingExit, RecordingNavigator,
        RecordingUnitListener, ScriptedDialog,
    };
    use carstats_core::models::vehicle::SpeedSample;
    use carstats_storage::InMemoryPreferenceStore;

    struct Fixture {
        controller: SettingsController,
        store: Arc<InMemoryPreferenceStore>,
        navigator: Arc<RecordingNavigator>,
        dialog: Arc<ScriptedDialog>,
        exit: Arc<RecordingExit>,
        controls: Vec<Arc<RecordingControl>>,
    }

    fn fixture(store: InMemoryPreferenceStore, dialog: ScriptedDialog, screen: ScreenConfig) -> Fixture {
        let (group, controls) = recording_group();
        let store = Arc::new(store);
        let navigator = Arc::new(RecordingNavigator::default());
        let dialog = Arc::new(dialog);
        let exit = Arc::new(RecordingExit::default());
        let controller = SettingsController::new(
            store.clone(),
            navigator.clone(),
            dialog.clone(),
            exit.clone(),
            Arc::new(DistractionGate::new(group)),
            screen,
        );
        Fixture {
            controller,
            store,
            navigator,
            dialog,
            exit,
            controls,
        }
    }

    fn default_fixture() -> Fixture {
        fixture(
            InMemoryPreferenceStore::from_set(&PreferenceSet::default()),
            ScriptedDialog::cancelling(),
            ScreenConfig::default(),
        )
    }

    #[test]
    fn construction_seeds_gate() {
        let mut prefs = PreferenceSet::default();
        prefs.do_distraction_optimization = true;
        let f = fixture(
            InMemoryPreferenceStore::from_set(&prefs),
            ScriptedDialog::cancelling(),
            ScreenConfig::default(),
        );

        assert_eq!(f.controller.gate().state(), GateState::Restricted);
        assert_all_enabled(&f.controls, false);
    }

    #[test]
    fn empty_store_fails_open() {
        let f = fixture(
            InMemoryPreferenceStore::new(),
            ScriptedDialog::cancelling(),
            ScreenConfig::default(),
        );

        assert_all_enabled(&f.controls, true);
    }

    #[test]
    fn empty_store_shows_default_switches() {
        let empty = fixture(
            InMemoryPreferenceStore::new(),
            ScriptedDialog::cancelling(),
            ScreenConfig::default(),
        );
        let defaults = default_fixture();

        let view = empty.controller.view();
        assert!(view.notifications);
        assert!(!view.autostart);
        assert!(!view.distance_unit_miles);
        assert_eq!(view, defaults.controller.view());
    }

    #[test]
    fn view_reflects_preferences() {
        let mut prefs = PreferenceSet::default();
        prefs.autostart = true;
        prefs.distance_unit = DistanceUnit::Miles;
        let f = fixture(
            InMemoryPreferenceStore::from_set(&prefs),
            ScriptedDialog::cancelling(),
            ScreenConfig {
                emulator_mode: true,
                ..ScreenConfig::default()
            },
        );

        let view = f.controller.view();
        assert!(view.notifications);
        assert!(view.autostart);
        assert!(view.is_checked(SettingSwitch::DistanceUnit));
        assert!(!view.is_checked(SettingSwitch::AltLayout));
        assert!(view.distance_unit_switch_visible);
        assert_eq!(
            view.version_text,
            format!(
                "Car Stats Viewer Version {} (com.ixam97.carStatsViewer)",
                env!("CARGO_PKG_VERSION")
            )
        );
    }

    #[test]
    fn distance_switch_hidden_outside_emulator() {
        let f = default_fixture();
        assert!(!f.controller.view().distance_unit_switch_visible);
    }

    #[test]
    fn switches_write_preferences() {
        let f = default_fixture();

        f.controller.on_switch_toggled(SettingSwitch::Notifications, false);
        f.controller.on_switch_toggled(SettingSwitch::UseLocation, true);
        f.controller.on_switch_toggled(SettingSwitch::ConsumptionUnit, true);
        f.controller.on_switch_toggled(SettingSwitch::AltLayout, true);

        assert_eq!(f.store.read_bool(PreferenceKey::Notifications), Some(false));
        assert_eq!(f.store.read_bool(PreferenceKey::UseLocation), Some(true));
        assert_eq!(f.store.read_bool(PreferenceKey::ConsumptionUnit), Some(true));
        assert_eq!(f.store.read_bool(PreferenceKey::AltLayout), Some(true));
        assert!(f.controller.view().alt_layout);
    }

    #[test]
    fn distance_switch_maps_units_and_notifies() {
        let f = default_fixture();
        let listener = Arc::new(RecordingUnitListener::default());
        let controller = f.controller.with_unit_listener(listener.clone());

        controller.on_switch_toggled(SettingSwitch::DistanceUnit, true);
        assert_eq!(f.store.distance_unit(), Some(DistanceUnit::Miles));

        controller.on_switch_toggled(SettingSwitch::DistanceUnit, false);
        assert_eq!(f.store.distance_unit(), Some(DistanceUnit::Km));

        controller.on_switch_toggled(SettingSwitch::Autostart, true);
        assert_eq!(
            *listener.units.lock(),
            vec![DistanceUnit::Miles, DistanceUnit::Km]
        );
    }

    #[test]
    fn switches_stay_usable_while_restricted() {
        let f = default_fixture();
        f.controller.gate().observe(&SpeedSample::new(20.0));

        f.controller.on_switch_toggled(SettingSwitch::Autostart, true);
        assert_eq!(f.store.read_bool(PreferenceKey::Autostart), Some(true));
    }

    #[test]
    fn entries_navigate_when_unrestricted() {
        let f = default_fixture();

        for entry in MenuEntry::ALL {
            assert!(f.controller.on_entry_clicked(entry));
        }
        assert_eq!(
            *f.navigator.opened.lock(),
            vec![
                ScreenId::MainView,
                ScreenId::Vehicle,
                ScreenId::Apis,
                ScreenId::About
            ]
        );
    }

    #[test]
    fn entries_blocked_while_moving() {
        let f = default_fixture();
        f.controller.gate().observe(&SpeedSample::new(12.5));

        assert!(!f.controller.on_entry_clicked(MenuEntry::Vehicle));
        assert!(f.navigator.opened.lock().is_empty());

        f.controller.gate().observe(&SpeedSample::new(0.0));
        assert!(f.controller.on_entry_clicked(MenuEntry::Vehicle));
        assert_eq!(*f.navigator.opened.lock(), vec![ScreenId::Vehicle]);
    }

    #[test]
    fn version_and_back_are_not_gated() {
        let f = default_fixture();
        f.controller.gate().observe(&SpeedSample::new(12.5));

        f.controller.on_version_clicked();
        f.controller.on_back();

        assert_eq!(*f.navigator.opened.lock(), vec![ScreenId::Log]);
        assert_eq!(*f.navigator.backs.lock(), 1);
    }

    #[test]
    fn kill_confirmed_exits() {
        let f = fixture(
            InMemoryPreferenceStore::from_set(&PreferenceSet::default()),
            ScriptedDialog::confirming(),
            ScreenConfig::default(),
        );

        f.controller.on_kill_clicked();

        assert_eq!(
            *f.dialog.shown.lock(),
            vec![(QUIT_DIALOG_TITLE.to_string(), QUIT_DIALOG_MESSAGE.to_string())]
        );
        assert_eq!(*f.exit.codes.lock(), vec![0]);
    }

    #[test]
    fn kill_cancelled_keeps_running() {
        let f = default_fixture();

        f.controller.on_kill_clicked();

        assert_eq!(f.dialog.shown.lock().len(), 1);
        assert!(f.exit.codes.lock().is_empty());
    }
}
