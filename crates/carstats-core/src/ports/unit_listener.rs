//! 거리 단위 변경 알림 포트.

use crate::models::preferences::DistanceUnit;

/// 거리 단위 변경 구독자 (그래프 축 단위 갱신 등)
pub trait DistanceUnitListener: Send + Sync {
    fn on_distance_unit_changed(&self, unit: DistanceUnit);
}
