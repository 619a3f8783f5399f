//! 화면 라이프사이클.
//!
//! 화면 상태(생성/전면/백그라운드/파괴)를 `tokio::watch`로 발행한다.
//! 속도 구독은 `LifecycleScope`를 명시적으로 받아 전면 구간에만 유지된다.

use tokio::sync::watch;
use tracing::info;

/// 화면 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Created,
    /// 전면 표시 중
    Started,
    /// 백그라운드
    Stopped,
    Destroyed,
}

/// 상태 + 전면 진입 횟수
///
/// stop → start가 구독 루프가 깨어나기 전에 연달아 일어나도
/// 세대 번호로 재진입을 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Phase {
    state: ScreenState,
    generation: u64,
}

/// 라이프사이클 관리자 (화면 소유)
pub struct ScreenLifecycle {
    tx: watch::Sender<Phase>,
}

impl ScreenLifecycle {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Phase {
            state: ScreenState::Created,
            generation: 0,
        });
        Self { tx }
    }

    /// 구독 범위 생성
    pub fn scope(&self) -> LifecycleScope {
        LifecycleScope {
            rx: self.tx.subscribe(),
            generation: None,
        }
    }

    pub fn state(&self) -> ScreenState {
        self.tx.borrow().state
    }

    /// 전면 진입
    pub fn start(&self) {
        self.tx.send_modify(|phase| {
            if phase.state != ScreenState::Destroyed {
                phase.state = ScreenState::Started;
                phase.generation += 1;
            }
        });
        info!("화면 전면 진입");
    }

    /// 백그라운드 전환
    pub fn stop(&self) {
        self.tx.send_modify(|phase| {
            if phase.state == ScreenState::Started {
                phase.state = ScreenState::Stopped;
            }
        });
        info!("화면 백그라운드 전환");
    }

    /// 화면 파괴. 이후 상태는 바뀌지 않는다.
    pub fn destroy(&self) {
        self.tx.send_modify(|phase| phase.state = ScreenState::Destroyed);
        info!("화면 파괴");
    }
}

impl Default for ScreenLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// 라이프사이클 구독 범위
///
/// `ScreenLifecycle`이 drop되면 파괴된 것으로 본다.
#[derive(Debug)]
pub struct LifecycleScope {
    rx: watch::Receiver<Phase>,
    generation: Option<u64>,
}

impl LifecycleScope {
    pub fn current(&self) -> ScreenState {
        self.rx.borrow().state
    }

    /// 전면 진입까지 대기
    ///
    /// 진입하면 `true`, 화면이 파괴되면 `false`.
    pub async fn started(&mut self) -> bool {
        loop {
            let phase = *self.rx.borrow_and_update();
            match phase.state {
                ScreenState::Started => {
                    self.generation = Some(phase.generation);
                    return true;
                }
                ScreenState::Destroyed => return false,
                ScreenState::Created | ScreenState::Stopped => {}
            }
            if self.rx.changed().await.is_err() {
                return false;
            }
        }
    }

    /// 마지막 `started()` 이후의 전면 구간이 끝날 때까지 대기
    pub async fn left_started(&mut self) {
        loop {
            let phase = *self.rx.borrow_and_update();
            if phase.state != ScreenState::Started || Some(phase.generation) != self.generation {
                return;
            }
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }
}
