//! 음성 명령 서비스 진입점.
//!
//! 호스트가 백그라운드 서비스를 깨우면 트리거 이름을 확인하고 음성 명령을
//! 받아 세션을 실행하거나 앱 전면 실행으로 넘긴다. 어느 경로든 끝나면
//! 완료 지연을 해제한다.

use std::sync::Arc;
use thermovox_core::config::AppConfig;
use thermovox_core::models::outcome::{SessionEnd, SessionOutcome};
use thermovox_core::ports::device_client::DeviceClient;
use thermovox_core::ports::voice_connection::VoiceConnection;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::lifecycle::{until_cancelled, Deferral};
use crate::orchestrator::SessionOrchestrator;
use crate::presenter::{failed_outcome, ResponsePresenter};

/// 활성화 처리 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// 다른 서비스 이름으로 깨워져 아무 작업도 하지 않음
    Ignored,
    /// 최종 결과를 호스트에 보고함
    Completed(SessionOutcome),
    /// 알 수 없는 명령 → 앱 전면 실행 요청
    AppLaunched,
    /// 호스트가 취소함 (보고 없음)
    Cancelled,
}

impl From<SessionEnd> for Activation {
    fn from(end: SessionEnd) -> Self {
        match end {
            SessionEnd::Reported(outcome) => Self::Completed(outcome),
            SessionEnd::Cancelled => Self::Cancelled,
        }
    }
}

/// 음성 명령 서비스
pub struct VoiceCommandService {
    config: AppConfig,
    device: Arc<dyn DeviceClient>,
    connection: Arc<dyn VoiceConnection>,
}

impl VoiceCommandService {
    pub fn new(
        config: AppConfig,
        device: Arc<dyn DeviceClient>,
        connection: Arc<dyn VoiceConnection>,
    ) -> Self {
        Self {
            config,
            device,
            connection,
        }
    }

    /// 호스트 활성화 처리
    ///
    /// 결과와 관계없이 반환 전에 `deferral`을 완료한다.
    pub async fn activate(
        &self,
        trigger_name: &str,
        mut cancel: watch::Receiver<bool>,
        deferral: &Deferral,
    ) -> Activation {
        let activation = self.dispatch(trigger_name, &mut cancel).await;
        deferral.complete();
        activation
    }

    async fn dispatch(&self, trigger_name: &str, cancel: &mut watch::Receiver<bool>) -> Activation {
        let session = &self.config.session;
        if trigger_name != session.service_name {
            warn!("알 수 없는 트리거: {trigger_name:?}");
            return Activation::Ignored;
        }

        let mut orchestrator = SessionOrchestrator::new(
            &self.config,
            self.device.clone(),
            self.connection.clone(),
        );

        let fetched = until_cancelled(self.connection.get_voice_command(), cancel).await;
        let command = match fetched {
            None => return Activation::Cancelled,
            Some(Err(e)) => {
                error!("음성 명령 조회 실패: {e}");
                return orchestrator
                    .report_outcome(failed_outcome(e.to_string()), cancel)
                    .await
                    .into();
            }
            Some(Ok(command)) => command,
        };
        info!("음성 명령 수신: {}", command.command_name);

        if command.command_name == session.command_name {
            let condition = command
                .first_property(&session.condition_property)
                .unwrap_or_default()
                .to_string();
            return orchestrator.run(&condition, cancel.clone()).await.into();
        }

        // 처리할 수 없는 명령은 앱으로 넘긴다
        let response = ResponsePresenter::new(self.config.messages.clone()).launching_app_response();
        let launched = until_cancelled(self.connection.request_app_launch(&response), cancel).await;
        match launched {
            None => Activation::Cancelled,
            Some(Ok(())) => Activation::AppLaunched,
            Some(Err(e)) => {
                error!("앱 실행 요청 실패: {e}");
                orchestrator
                    .report_outcome(failed_outcome(e.to_string()), cancel)
                    .await
                    .into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::SessionLifecycle;
    use crate::testing::{FakeConnection, FakeDevice, HostCall};
    use thermovox_core::models::command::VoiceCommand;

    const TRIGGER: &str = "ThermovoxVoiceCommandService";

    fn service(device: Arc<FakeDevice>, connection: Arc<FakeConnection>) -> VoiceCommandService {
        VoiceCommandService::new(AppConfig::default(), device, connection)
    }

    #[tokio::test]
    async fn unknown_trigger_is_ignored_and_completes() {
        let device = Arc::new(FakeDevice::replying(vec![]));
        let connection = Arc::new(FakeConnection::default());
        let lifecycle = SessionLifecycle::new();
        let deferral = Deferral::new();

        let activation = service(device.clone(), connection.clone())
            .activate("SomethingElse", lifecycle.subscribe(), &deferral)
            .await;

        assert_eq!(activation, Activation::Ignored);
        assert!(deferral.is_completed());
        assert!(connection.calls().is_empty());
        assert!(device.commands().is_empty());
    }

    #[tokio::test]
    async fn temperature_command_runs_session_with_condition() {
        let device = Arc::new(FakeDevice::replying(vec![Ok("25.0;77.0;40".to_string())]));
        let connection = Arc::new(FakeConnection::default().with_command(
            VoiceCommand::new("Temperature").with_property("condition", "greenhouse"),
        ));
        let lifecycle = SessionLifecycle::new();
        let deferral = Deferral::new();

        let activation = service(device, connection.clone())
            .activate(TRIGGER, lifecycle.subscribe(), &deferral)
            .await;

        assert!(matches!(activation, Activation::Completed(SessionOutcome::Success { .. })));
        assert!(deferral.is_completed());
        assert!(matches!(
            &connection.calls()[0],
            HostCall::Progress(text) if text == "Loading current greenhouse condition"
        ));
    }

    #[tokio::test]
    async fn missing_condition_uses_empty_phrase() {
        let device = Arc::new(FakeDevice::replying(vec![Ok("25.0;77.0;40".to_string())]));
        let connection =
            Arc::new(FakeConnection::default().with_command(VoiceCommand::new("Temperature")));
        let deferral = Deferral::new();

        service(device, connection.clone())
            .activate(TRIGGER, SessionLifecycle::new().subscribe(), &deferral)
            .await;

        assert!(matches!(
            &connection.calls()[0],
            HostCall::Progress(text) if text == "Loading current condition"
        ));
    }

    #[tokio::test]
    async fn unknown_command_launches_app() {
        let device = Arc::new(FakeDevice::replying(vec![]));
        let connection =
            Arc::new(FakeConnection::default().with_command(VoiceCommand::new("Weather")));
        let deferral = Deferral::new();

        let activation = service(device.clone(), connection.clone())
            .activate(TRIGGER, SessionLifecycle::new().subscribe(), &deferral)
            .await;

        assert_eq!(activation, Activation::AppLaunched);
        assert!(device.commands().is_empty());
        let calls = connection.calls();
        assert_eq!(calls.len(), 1);
        let HostCall::AppLaunch(response) = &calls[0] else {
            panic!("expected app launch");
        };
        assert_eq!(response.message.display, "Launching Thermovox");
        assert_eq!(response.app_launch_argument.as_deref(), Some(""));
        assert!(deferral.is_completed());
    }

    #[tokio::test]
    async fn cancelled_activation_still_completes_deferral() {
        let device = Arc::new(FakeDevice::replying(vec![]));
        let connection = Arc::new(FakeConnection::default());
        let lifecycle = SessionLifecycle::new();
        let deferral = Deferral::new();
        lifecycle.cancel();
        // 호스트 취소 처리기도 완료를 호출한다
        assert!(deferral.complete());

        let activation = service(device, connection.clone())
            .activate(TRIGGER, lifecycle.subscribe(), &deferral)
            .await;

        assert_eq!(activation, Activation::Cancelled);
        assert!(deferral.is_completed());
        assert!(connection.calls().is_empty());
    }
}
