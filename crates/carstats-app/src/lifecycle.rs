//! 앱 라이프사이클 관리.
//!
//! 종료 신호(종료 코드 포함), OS 시그널 핸들링.

use carstats_core::ports::app_exit::AppExit;
use tokio::sync::watch;
use tracing::{info, warn};

/// 라이프사이클 관리자
pub struct LifecycleManager {
    shutdown_tx: watch::Sender<Option<i32>>,
}

impl LifecycleManager {
    pub fn new() -> Self {
        let (shutdown_tx, _) = watch::channel(None);
        Self { shutdown_tx }
    }

    /// 종료 수신기 (값이 Some이면 종료 코드)
    pub fn subscribe(&self) -> watch::Receiver<Option<i32>> {
        self.shutdown_tx.subscribe()
    }

    /// 종료 신호 발송. 먼저 요청된 종료 코드가 유지된다.
    pub fn shutdown(&self, code: i32) {
        info!("종료 신호 발송 (code={code})");
        self.shutdown_tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(code);
            true
        });
    }

    pub fn exit_code(&self) -> Option<i32> {
        *self.shutdown_tx.borrow()
    }

    /// OS 시그널 대기 (SIGINT, SIGTERM)
    pub async fn wait_for_signal(&self) {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let (mut sigint, mut sigterm) =
                match (signal(SignalKind::interrupt()), signal(SignalKind::terminate())) {
                    (Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
                    (Err(e), _) | (_, Err(e)) => {
                        warn!("시그널 핸들러 등록 실패: {e}");
                        return;
                    }
                };

            tokio::select! {
                _ = sigint.recv() => info!("SIGINT 수신"),
                _ = sigterm.recv() => info!("SIGTERM 수신"),
            }
        }

        #[cfg(not(unix))]
        {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Ctrl+C 핸들러 등록 실패: {e}");
                return;
            }
            info!("Ctrl+C 수신");
        }

        self.shutdown(0);
    }
}

impl Default for LifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AppExit for LifecycleManager {
    fn exit(&self, code: i32) {
        self.shutdown(code);
    }
}
