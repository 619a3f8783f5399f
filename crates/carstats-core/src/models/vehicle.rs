//! 차량 실시간 데이터 모델.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 순간 차량 속도 측정값
///
/// 게이트는 0과의 대소 관계만 본다 (주행 중 / 정차).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedSample {
    /// 속도 (m/s). 센서 오류로 음수가 올 수 있다.
    pub speed: f32,
    /// 측정 시각
    pub timestamp: DateTime<Utc>,
}

impl SpeedSample {
    /// 현재 시각으로 샘플 생성
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            timestamp: Utc::now(),
        }
    }

    /// 주행 중 여부 (speed > 0)
    pub fn is_moving(&self) -> bool {
        self.speed > 0.0
    }

    /// 처리 가능한 값인지 (NaN/무한대는 잘못된 샘플)
    pub fn is_valid(&self) -> bool {
        self.speed.is_finite()
    }
}
