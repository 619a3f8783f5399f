//! 속도 피드 버스.
//!
//! `tokio::broadcast` 기반 속도 샘플 라우팅. 시뮬레이션 스크립트 재생 포함.

use carstats_core::models::vehicle::SpeedSample;
use carstats_core::ports::speed_feed::{SpeedFeed, SpeedReceiver};
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tracing::{debug, info};

/// 속도 샘플 버스
pub struct SpeedBus {
    tx: broadcast::Sender<SpeedSample>,
}

impl SpeedBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// 샘플 발행. 구독자가 없으면 버린다.
    pub fn publish(&self, sample: SpeedSample) {
        debug!("속도 발행: {:.2}", sample.speed);
        let _ = self.tx.send(sample);
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// 속도 목록을 주기적으로 발행
    ///
    /// 종료 신호가 오면 중단한다. 끝까지 재생하면 `true`.
    pub async fn replay(
        &self,
        speeds: &[f32],
        interval: Duration,
        mut shutdown: watch::Receiver<Option<i32>>,
    ) -> bool {
        info!("속도 시뮬레이션 시작: {}개 샘플, {:?} 간격", speeds.len(), interval);
        for speed in speeds {
            tokio::select! {
                _ = tokio::time::sleep(interval) => self.publish(SpeedSample::new(*speed)),
                _ = shutdown.wait_for(|code| code.is_some()) => {
                    info!("속도 시뮬레이션 중단");
                    return false;
                }
            }
        }
        info!("속도 시뮬레이션 완료");
        true
    }
}

impl Default for SpeedBus {
    fn default() -> Self {
        Self::new(64)
    }
}

impl SpeedFeed for SpeedBus {
    fn subscribe(&self) -> SpeedReceiver {
        self.tx.subscribe()
    }
}
