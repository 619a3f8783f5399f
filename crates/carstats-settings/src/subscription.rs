//! 화면 전면 구간에 묶인 속도 구독.
//!
//! 전면 진입마다 저장된 플래그로 게이트를 다시 초기화하고 피드를 구독한다.
//! 백그라운드로 가면 구독을 해제하며, 마지막으로 본 샘플은 이어받지 않는다.

use carstats_core::ports::preference_store::PreferenceStore;
use carstats_core::ports::speed_feed::SpeedFeed;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::gate::{DistractionGate, GateState};
use crate::lifecycle::LifecycleScope;

/// 구독 루프 (화면 파괴 시 반환)
///
/// 샘플은 한 번에 하나씩, 도착 순서대로 게이트에 끝까지 적용된 뒤 다음을 받는다.
pub async fn run_while_started(
    gate: Arc<DistractionGate>,
    feed: Arc<dyn SpeedFeed>,
    store: Arc<dyn PreferenceStore>,
    mut scope: LifecycleScope,
) {
    while scope.started().await {
        gate.seed_from(store.as_ref());
        let mut rx = feed.subscribe();
        info!("속도 구독 시작");

        let mut feed_closed = false;
        loop {
            tokio::select! {
                biased;
                _ = scope.left_started() => {
                    info!("속도 구독 해제");
                    break;
                }
                received = rx.recv() => match received {
                    Ok(sample) => {
                        gate.observe(&sample);
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!("속도 샘플 {skipped}개 유실, 버퍼에 남은 가장 오래된 샘플부터 처리");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        feed_closed = true;
                        break;
                    }
                },
            }
        }
        drop(rx);

        if feed_closed {
            info!("속도 피드 종료, 전면 구간 종료까지 대기");
            scope.left_started().await;
        }
    }
    debug!("구독 루프 종료");
}

/// 구독 루프 태스크 핸들
pub struct GateHandle {
    task: JoinHandle<()>,
    state: watch::Receiver<GateState>,
}

impl GateHandle {
    /// 게이트 상태 적용 알림 (재적용 포함)
    pub fn state(&self) -> watch::Receiver<GateState> {
        self.state.clone()
    }

    /// 구독 즉시 취소
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// 루프 종료 대기 (화면 파괴 또는 취소)
    pub async fn finished(self) {
        if let Err(e) = self.task.await {
            if !e.is_cancelled() {
                warn!("구독 루프 비정상 종료: {e}");
            }
        }
    }
}

/// 구독 루프를 tokio 태스크로 실행
pub fn spawn_gate(
    gate: Arc<DistractionGate>,
    feed: Arc<dyn SpeedFeed>,
    store: Arc<dyn PreferenceStore>,
    scope: LifecycleScope,
) -> GateHandle {
    let state = gate.watch();
    let task = tokio::spawn(run_while_started(gate, feed, store, scope));
    GateHandle { task, state }
}
