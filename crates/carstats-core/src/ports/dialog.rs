//! 확인 다이얼로그 포트.

/// 다이얼로그 버튼 콜백. 최대 한 번만 호출된다.
pub type DialogCallback = Box<dyn FnOnce() + Send + 'static>;

/// 두 버튼(확인/취소) 확인 다이얼로그
pub trait ConfirmDialog: Send + Sync {
    /// 다이얼로그 표시
    ///
    /// 구현체는 `on_confirm`, `on_cancel` 중 최대 하나만 호출해야 한다.
    fn show(&self, title: &str, message: &str, on_confirm: DialogCallback, on_cancel: DialogCallback);
}
