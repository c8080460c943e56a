//! 호스트 취소 처리.
//!
//! Ctrl+C를 호스트의 세션 취소로 간주한다.

use std::sync::Arc;
use thermovox_session::lifecycle::{Deferral, SessionLifecycle};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// 취소 신호와 완료 지연을 함께 쥐고 있는 호스트 측 핸들
pub struct HostLifecycle {
    session: SessionLifecycle,
    deferral: Deferral,
}

impl HostLifecycle {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            session: SessionLifecycle::new(),
            deferral: Deferral::new(),
        })
    }

    pub fn session(&self) -> &SessionLifecycle {
        &self.session
    }

    pub fn deferral(&self) -> &Deferral {
        &self.deferral
    }

    /// 호스트 취소: 세션을 취소하고 완료 지연을 해제한다
    pub fn cancel(&self) {
        self.session.cancel();
        self.deferral.complete();
    }

    /// Ctrl+C 대기 태스크 시작
    pub fn spawn_signal_handler(self: &Arc<Self>) -> JoinHandle<()> {
        let lifecycle = Arc::clone(self);
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Ctrl+C 수신");
                    lifecycle.cancel();
                }
                Err(e) => warn!("Ctrl+C 핸들러 등록 실패: {e}"),
            }
        })
    }
}
