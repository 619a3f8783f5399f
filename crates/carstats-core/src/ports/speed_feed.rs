//! 차량 속도 스트림 포트.
//!
//! 구현: `carstats-app` crate (`SpeedBus` — tokio broadcast)

use tokio::sync::broadcast;

use crate::models::vehicle::SpeedSample;

/// 구독 핸들. drop하면 구독이 해제된다.
pub type SpeedReceiver = broadcast::Receiver<SpeedSample>;

/// 실시간 속도 피드
pub trait SpeedFeed: Send + Sync {
    /// 구독 등록. 이후 도착 순서대로 한 번에 하나씩 전달된다.
    fn subscribe(&self) -> SpeedReceiver;
}
