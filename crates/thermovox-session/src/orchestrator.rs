//! 음성 명령 세션 상태 머신.
//!
//! `Started → AwaitingReading → (Normal | ThresholdBreach) →
//! [AwaitingConfirmation] → (Actuating) → Terminated`
//!
//! 모든 외부 호출은 취소 신호와 경합하는 중단 지점이다. 취소되면 더 이상
//! 외부 호출을 하지 않고 결과도 보고하지 않는다. 그 외의 모든 경로는
//! 정확히 한 번 최종 결과를 보고한다.

use std::sync::Arc;
use std::time::{Duration, Instant};
use thermovox_core::config::{AppConfig, DeviceConfig};
use thermovox_core::error::{CoreError, ParseError, TransportError};
use thermovox_core::models::command::DeviceCommand;
use thermovox_core::models::outcome::{SessionEnd, SessionOutcome};
use thermovox_core::models::reading::ThresholdDecision;
use thermovox_core::models::response::VoiceResponse;
use thermovox_core::parser::parse_reading;
use thermovox_core::ports::device_client::DeviceClient;
use thermovox_core::ports::voice_connection::VoiceConnection;
use thermovox_core::threshold::ThresholdPolicy;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::lifecycle::{cancelled, until_cancelled};
use crate::presenter::{failed_outcome, ResponsePresenter};

/// 세션 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Started,
    AwaitingReading,
    Normal,
    ThresholdBreach,
    AwaitingConfirmation,
    Actuating,
    Terminated,
}

/// 세션 오케스트레이터
///
/// 세션마다 새로 만들며 세션 간에 공유하는 상태는 없다.
pub struct SessionOrchestrator {
    device: Arc<dyn DeviceClient>,
    connection: Arc<dyn VoiceConnection>,
    presenter: ResponsePresenter,
    policy: ThresholdPolicy,
    device_config: DeviceConfig,
    progress_interval: Duration,
    initial_response_budget: Duration,
    session_id: Uuid,
    state: SessionState,
}

impl SessionOrchestrator {
    /// 새 오케스트레이터 생성
    pub fn new(
        config: &AppConfig,
        device: Arc<dyn DeviceClient>,
        connection: Arc<dyn VoiceConnection>,
    ) -> Self {
        Self {
            device,
            connection,
            presenter: ResponsePresenter::new(config.messages.clone()),
            policy: ThresholdPolicy::new(config.session.threshold_celsius),
            device_config: config.device.clone(),
            progress_interval: config.session.progress_interval(),
            initial_response_budget: config.session.initial_response_budget(),
            session_id: Uuid::new_v4(),
            state: SessionState::Started,
        }
    }

    /// 현재 상태
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// 세션 실행
    ///
    /// `condition`은 사용자가 말한 조건 구절이며 진행 메시지에 들어간다.
    pub async fn run(&mut self, condition: &str, mut cancel: watch::Receiver<bool>) -> SessionEnd {
        let started = Instant::now();
        info!("세션 시작: {} (condition={condition:?})", self.session_id);

        let end = self.drive(condition, &mut cancel).await;
        self.transition(SessionState::Terminated);

        match &end {
            SessionEnd::Reported(outcome) => info!(
                "세션 종료: {} → {} ({}ms)",
                self.session_id,
                outcome_label(outcome),
                started.elapsed().as_millis()
            ),
            SessionEnd::Cancelled => info!("세션 취소: {}", self.session_id),
        }
        end
    }

    /// 외부에서 만든 결과를 이 세션의 최종 결과로 보고
    pub async fn report_outcome(
        &mut self,
        outcome: SessionOutcome,
        cancel: &mut watch::Receiver<bool>,
    ) -> SessionEnd {
        let end = self.finish(outcome, cancel).await;
        self.transition(SessionState::Terminated);
        end
    }

    async fn drive(&mut self, condition: &str, cancel: &mut watch::Receiver<bool>) -> SessionEnd {
        // 첫 응답 예산 안에 진행 메시지를 먼저 보낸다
        let started = Instant::now();
        let progress = self.presenter.loading_progress(condition);
        let reported = until_cancelled(self.connection.report_progress(&progress), cancel).await;
        match reported {
            None => return SessionEnd::Cancelled,
            Some(Err(e)) => return self.collaborator_failure(e, cancel).await,
            Some(Ok(())) => {}
        }
        if started.elapsed() > self.initial_response_budget {
            warn!(
                "첫 진행 메시지가 응답 예산을 초과: {}ms",
                started.elapsed().as_millis()
            );
        }
        self.transition(SessionState::AwaitingReading);

        let command = DeviceCommand::read(&self.device_config);
        let fetched = self.fetch_with_progress(&command, &progress, cancel).await;
        let raw = match fetched {
            None => return SessionEnd::Cancelled,
            Some(Err(e)) => {
                warn!("센서 판독 실패: {e}");
                return self.finish(failed_outcome(e.to_string()), cancel).await;
            }
            Some(Ok(raw)) => raw,
        };

        let reading = match parse_reading(&raw) {
            Ok(reading) => reading,
            Err(ParseError::DeviceReported { message }) => {
                info!("장치 보고 메시지: {message}");
                let outcome = self.presenter.device_reported_outcome(&message);
                return self.finish(outcome, cancel).await;
            }
            Err(e) => {
                warn!("판독값 파싱 실패: {e}");
                return self.finish(failed_outcome(e.to_string()), cancel).await;
            }
        };
        debug!("판독값: {:?}", reading.fields);

        match self.policy.decide(&reading) {
            ThresholdDecision::Normal => {
                self.transition(SessionState::Normal);
                let outcome = self.presenter.normal_outcome(&reading);
                self.finish(outcome, cancel).await
            }
            ThresholdDecision::NeedsConfirmation => {
                self.transition(SessionState::ThresholdBreach);
                self.confirm_and_actuate(cancel).await
            }
        }
    }

    async fn confirm_and_actuate(&mut self, cancel: &mut watch::Receiver<bool>) -> SessionEnd {
        let prompt = self.presenter.breach_prompt(self.policy.threshold_celsius());
        self.transition(SessionState::AwaitingConfirmation);

        let replied = until_cancelled(self.connection.request_confirmation(&prompt), cancel).await;
        let decision = match replied {
            None => return SessionEnd::Cancelled,
            Some(Err(e)) => return self.collaborator_failure(e, cancel).await,
            Some(Ok(decision)) => decision,
        };

        match decision {
            None => {
                warn!("확인 응답 없음");
                let outcome = self.presenter.no_confirmation_outcome();
                self.finish(outcome, cancel).await
            }
            Some(false) => {
                info!("팬 작동 거절");
                let outcome = self.presenter.declined_outcome();
                self.finish(outcome, cancel).await
            }
            Some(true) => self.actuate(cancel).await,
        }
    }

    async fn actuate(&mut self, cancel: &mut watch::Receiver<bool>) -> SessionEnd {
        self.transition(SessionState::Actuating);

        let progress = self.presenter.opening_fan_progress();
        let reported = until_cancelled(self.connection.report_progress(&progress), cancel).await;
        match reported {
            None => return SessionEnd::Cancelled,
            Some(Err(e)) => return self.collaborator_failure(e, cancel).await,
            Some(Ok(())) => {}
        }

        let command = DeviceCommand::actuate(&self.device_config);
        let fetched = self.fetch_with_progress(&command, &progress, cancel).await;
        let outcome = match fetched {
            None => return SessionEnd::Cancelled,
            Some(Ok(body)) if !body.is_empty() => {
                info!("팬 작동 응답: {body:?}");
                self.presenter.fan_opened_outcome()
            }
            Some(Ok(_)) => {
                warn!("팬 작동 응답이 비어 있음");
                self.presenter.fan_failed_outcome()
            }
            Some(Err(e)) => {
                warn!("팬 작동 요청 실패: {e}");
                self.presenter.fan_failed_outcome()
            }
        };
        self.finish(outcome, cancel).await
    }

    /// 장치 호출 — 완료될 때까지 주기적으로 진행 메시지를 다시 보낸다
    ///
    /// 취소되면 `None`. 진행 메시지 재전송 실패는 세션을 끝내지 않는다.
    async fn fetch_with_progress(
        &self,
        command: &DeviceCommand,
        progress: &VoiceResponse,
        cancel: &mut watch::Receiver<bool>,
    ) -> Option<Result<String, TransportError>> {
        let fetch = self.device.fetch(command);
        tokio::pin!(fetch);

        let start = tokio::time::Instant::now() + self.progress_interval;
        let mut ticker = tokio::time::interval_at(start, self.progress_interval);

        loop {
            if *cancel.borrow() {
                return None;
            }
            tokio::select! {
                biased;
                _ = cancelled(cancel) => return None,
                result = &mut fetch => return Some(result),
                _ = ticker.tick() => {
                    debug!("진행 메시지 재전송: {command}");
                    let reposted =
                        until_cancelled(self.connection.report_progress(progress), cancel).await;
                    match reposted {
                        None => return None,
                        Some(Err(e)) => warn!("진행 메시지 재전송 실패: {e}"),
                        Some(Ok(())) => {}
                    }
                }
            }
        }
    }

    /// 외부 협력자 호출 실패 → 실패 결과
    async fn collaborator_failure(
        &mut self,
        e: CoreError,
        cancel: &mut watch::Receiver<bool>,
    ) -> SessionEnd {
        error!("세션 {} 처리 실패 ({:?}): {e}", self.session_id, self.state);
        self.finish(failed_outcome(e.to_string()), cancel).await
    }

    /// 최종 결과 보고
    ///
    /// 호스트의 최종 응답 메서드는 정확히 한 번만 호출한다. 보고가 실패하면
    /// 기록만 하고 실패 결과로 종료한다.
    async fn finish(
        &mut self,
        outcome: SessionOutcome,
        cancel: &mut watch::Receiver<bool>,
    ) -> SessionEnd {
        let response = outcome.to_response();
        let result = if outcome.is_success_shaped() {
            until_cancelled(self.connection.report_success(&response), cancel).await
        } else {
            until_cancelled(self.connection.report_failure(&response), cancel).await
        };

        match result {
            None => SessionEnd::Cancelled,
            Some(Ok(())) => SessionEnd::Reported(outcome),
            Some(Err(e)) => {
                error!("최종 응답 보고 실패 ({}): {e}", outcome_label(&outcome));
                match outcome {
                    SessionOutcome::Failed { .. } => SessionEnd::Reported(outcome),
                    _ => SessionEnd::Reported(failed_outcome(e.to_string())),
                }
            }
        }
    }

    fn transition(&mut self, next: SessionState) {
        debug!("세션 {}: {:?} → {:?}", self.session_id, self.state, next);
        self.state = next;
    }
}

fn outcome_label(outcome: &SessionOutcome) -> &'static str {
    match outcome {
        SessionOutcome::Success { .. } => "success",
        SessionOutcome::Declined { .. } => "declined",
        SessionOutcome::Failed { .. } => "failed",
    }
}
