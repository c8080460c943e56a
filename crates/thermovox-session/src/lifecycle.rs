//! 세션 라이프사이클.
//!
//! 호스트 취소 신호와 멱등 완료 지연(deferral).

use std::future::Future;
use tokio::sync::watch;
use tracing::{debug, info};

/// 세션 취소 신호 관리자
///
/// 호스트가 시간 초과나 포커스 상실로 세션을 끝낼 때 `cancel()`을 호출한다.
pub struct SessionLifecycle {
    cancel_tx: watch::Sender<bool>,
    cancel_rx: watch::Receiver<bool>,
}

impl SessionLifecycle {
    /// 새 라이프사이클 생성
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            cancel_tx: tx,
            cancel_rx: rx,
        }
    }

    /// 취소 수신기 복제
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.cancel_rx.clone()
    }

    /// 취소 신호 발송
    pub fn cancel(&self) {
        info!("세션 취소 신호 발송");
        let _ = self.cancel_tx.send(true);
    }
}

impl Default for SessionLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// 취소될 때까지 대기
///
/// 송신자가 사라지면 취소는 더 이상 일어날 수 없으므로 영원히 대기한다.
pub async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    if cancel.wait_for(|cancelled| *cancelled).await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// 취소와 경합 — 취소되면 `None`
///
/// 이미 취소된 상태면 `fut`를 폴링하지 않는다.
pub async fn until_cancelled<F: Future>(
    fut: F,
    cancel: &mut watch::Receiver<bool>,
) -> Option<F::Output> {
    if *cancel.borrow() {
        return None;
    }
    tokio::select! {
        biased;
        _ = cancelled(cancel) => None,
        output = fut => Some(output),
    }
}

/// 완료 지연 — 백그라운드 작업 종료를 호스트에 한 번 알린다
///
/// `complete()`는 여러 번 호출해도 첫 호출만 효과가 있다.
pub struct Deferral {
    done_tx: watch::Sender<bool>,
}

impl Deferral {
    /// 새 지연 객체 생성
    pub fn new() -> Self {
        let (done_tx, _) = watch::channel(false);
        Self { done_tx }
    }

    /// 완료 알림. 처음 완료시킨 호출이면 true
    pub fn complete(&self) -> bool {
        let first = self.done_tx.send_if_modified(|done| {
            if *done {
                false
            } else {
                *done = true;
                true
            }
        });
        if first {
            debug!("완료 지연 해제");
        }
        first
    }

    /// 완료 여부
    pub fn is_completed(&self) -> bool {
        *self.done_tx.borrow()
    }
}

impl Default for Deferral {
    fn default() -> Self {
        Self::new()
    }
}
