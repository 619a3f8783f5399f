//! 주의 분산 게이트.
//!
//! 차량이 움직이는 동안 메뉴 항목(하위 화면 이동)을 비활성화한다.
//! 상태는 가장 최근 속도 샘플의 부호만으로 결정되며 (엣지 트리거 아님),
//! 같은 부호의 샘플이 연속으로 와도 매번 같은 상태를 다시 적용한다.

use carstats_core::models::preferences::PreferenceKey;
use carstats_core::models::screen::{MenuEntry, VisualTreatment};
use carstats_core::models::vehicle::SpeedSample;
use carstats_core::ports::control::MenuControl;
use carstats_core::ports::preference_store::PreferenceStore;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// 게이트 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// 정차 — 모든 메뉴 사용 가능
    Unrestricted,
    /// 주행 중 — 메뉴 비활성
    Restricted,
}

impl GateState {
    /// 최적화 플래그 → 상태. 값이 없으면 제한 없음 (fail-open).
    pub fn from_optimization(do_optimize: Option<bool>) -> Self {
        match do_optimize {
            Some(true) => GateState::Restricted,
            _ => GateState::Unrestricted,
        }
    }

    /// 속도 샘플 → 상태 (speed > 0 이면 제한)
    pub fn from_sample(sample: &SpeedSample) -> Self {
        if sample.is_moving() {
            GateState::Restricted
        } else {
            GateState::Unrestricted
        }
    }

    /// 이 상태에서 메뉴가 활성인지
    pub fn controls_enabled(&self) -> bool {
        matches!(self, GateState::Unrestricted)
    }
}

/// 게이트 대상 컨트롤 집합. 구성 후 멤버는 바뀌지 않는다.
#[derive(Clone, Default)]
pub struct ControlGroup {
    members: Vec<(MenuEntry, Arc<dyn MenuControl>)>,
}

impl ControlGroup {
    pub fn new(members: Vec<(MenuEntry, Arc<dyn MenuControl>)>) -> Self {
        Self { members }
    }

    /// 모든 메뉴 항목(표시 순서)에 대해 컨트롤 생성
    pub fn from_fn<F>(mut make: F) -> Self
    where
        F: FnMut(MenuEntry) -> Arc<dyn MenuControl>,
    {
        Self::new(MenuEntry::ALL.iter().map(|e| (*e, make(*e))).collect())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// 멤버 항목 (구성 순서)
    pub fn entries(&self) -> impl Iterator<Item = MenuEntry> + '_ {
        self.members.iter().map(|(entry, _)| *entry)
    }

    fn apply(&self, state: GateState) {
        let enabled = state.controls_enabled();
        let treatment = VisualTreatment::from_enabled(enabled);
        for (_, control) in &self.members {
            control.set_enabled(enabled);
            control.set_visual_treatment(treatment);
        }
    }
}

impl std::fmt::Debug for ControlGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries()).finish()
    }
}

/// 주의 분산 게이트
///
/// 상태 변경과 컨트롤 적용은 하나의 락 안에서 끝나므로
/// 두 샘플의 적용이 섞이지 않는다.
pub struct DistractionGate {
    controls: ControlGroup,
    state: Mutex<GateState>,
    state_tx: watch::Sender<GateState>,
    processed_tx: watch::Sender<u64>,
}

impl DistractionGate {
    /// 새 게이트 생성 (컨트롤에는 아직 아무것도 적용하지 않음)
    pub fn new(controls: ControlGroup) -> Self {
        let (state_tx, _) = watch::channel(GateState::Unrestricted);
        let (processed_tx, _) = watch::channel(0);
        Self {
            controls,
            state: Mutex::new(GateState::Unrestricted),
            state_tx,
            processed_tx,
        }
    }

    /// 저장된 최적화 플래그로 초기 상태 결정 및 적용
    pub fn seed(&self, do_optimize: Option<bool>) -> GateState {
        let state = GateState::from_optimization(do_optimize);
        info!("게이트 초기화: {state:?} (do_distraction_optimization={do_optimize:?})");
        self.transition(state);
        state
    }

    /// 설정 저장소에서 플래그를 읽어 초기화
    pub fn seed_from(&self, store: &dyn PreferenceStore) -> GateState {
        self.seed(store.read_bool(PreferenceKey::DoDistractionOptimization))
    }

    /// 속도 샘플 처리
    ///
    /// 잘못된 샘플(NaN/무한대)은 처리하지 않고 `None` 반환.
    /// 어느 쪽이든 처리 완료 카운터는 증가한다.
    pub fn observe(&self, sample: &SpeedSample) -> Option<GateState> {
        let applied = if sample.is_valid() {
            let state = GateState::from_sample(sample);
            debug!("속도 샘플 {:.2} → {state:?}", sample.speed);
            self.transition(state);
            Some(state)
        } else {
            warn!("잘못된 속도 샘플 무시: {}", sample.speed);
            None
        };
        self.processed_tx.send_modify(|n| *n += 1);
        applied
    }

    /// 현재 상태
    pub fn state(&self) -> GateState {
        *self.state.lock()
    }

    pub fn is_restricted(&self) -> bool {
        self.state() == GateState::Restricted
    }

    /// 상태 적용 알림 구독. 동일 상태 재적용에도 알림이 간다.
    pub fn watch(&self) -> watch::Receiver<GateState> {
        self.state_tx.subscribe()
    }

    /// 지금까지 처리를 끝낸 샘플 수 (무시된 샘플 포함, 초기화 제외)
    pub fn processed(&self) -> watch::Receiver<u64> {
        self.processed_tx.subscribe()
    }

    pub fn controls(&self) -> &ControlGroup {
        &self.controls
    }

    fn transition(&self, state: GateState) {
        let mut current = self.state.lock();
        *current = state;
        self.controls.apply(state);
        self.state_tx.send_replace(state);
    }
}

impl std::fmt::Debug for DistractionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistractionGate")
            .field("controls", &self.controls)
            .field("state", &self.state())
            .finish()
    }
}
