//! 앱 종료 포트.
//!
//! 구현: `carstats-app` crate (라이프사이클 종료 신호)

/// 프로세스 종료 요청
pub trait AppExit: Send + Sync {
    fn exit(&self, code: i32);
}
