//! 화면 전환 포트.

use crate::models::screen::ScreenId;

/// 화면 전환 요청 (fire-and-forget)
pub trait Navigator: Send + Sync {
    /// 하위 화면 열기
    fn open(&self, screen: ScreenId);

    /// 현재 화면 닫고 이전 화면으로
    fn back(&self);
}
