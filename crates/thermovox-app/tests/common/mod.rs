//! 통합 테스트 공용 헬퍼.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use thermovox_core::config::{AppConfig, DEVICE_HOST_KEY};
use thermovox_core::error::CoreError;
use thermovox_core::models::command::VoiceCommand;
use thermovox_core::models::response::{VoicePrompt, VoiceResponse};
use thermovox_core::ports::config_provider::ConfigProvider;
use thermovox_core::ports::voice_connection::VoiceConnection;
use thermovox_network::device_client::HttpDeviceClient;

/// 호스트 호출 기록
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Progress(VoiceResponse),
    Success(VoiceResponse),
    Failure(VoiceResponse),
    Prompt(VoicePrompt),
    AppLaunch(VoiceResponse),
}

/// 호출을 메모리에 기록하는 호스트 연결
pub struct RecordingConnection {
    command: VoiceCommand,
    answer: Option<bool>,
    log: Mutex<Vec<Recorded>>,
}

impl RecordingConnection {
    pub fn new(command: VoiceCommand, answer: Option<bool>) -> Arc<Self> {
        Arc::new(Self {
            command,
            answer,
            log: Mutex::new(Vec::new()),
        })
    }

    pub fn temperature(answer: Option<bool>) -> Arc<Self> {
        Self::new(
            VoiceCommand::new("Temperature").with_property("condition", "storeroom"),
            answer,
        )
    }

    pub fn log(&self) -> Vec<Recorded> {
        self.log.lock().clone()
    }

    /// 최종 보고 (성공/실패)만
    pub fn finals(&self) -> Vec<Recorded> {
        self.log()
            .into_iter()
            .filter(|r| matches!(r, Recorded::Success(_) | Recorded::Failure(_)))
            .collect()
    }
}

#[async_trait]
impl VoiceConnection for RecordingConnection {
    async fn get_voice_command(&self) -> Result<VoiceCommand, CoreError> {
        Ok(self.command.clone())
    }

    async fn report_progress(&self, response: &VoiceResponse) -> Result<(), CoreError> {
        self.log.lock().push(Recorded::Progress(response.clone()));
        Ok(())
    }

    async fn report_success(&self, response: &VoiceResponse) -> Result<(), CoreError> {
        self.log.lock().push(Recorded::Success(response.clone()));
        Ok(())
    }

    async fn report_failure(&self, response: &VoiceResponse) -> Result<(), CoreError> {
        self.log.lock().push(Recorded::Failure(response.clone()));
        Ok(())
    }

    async fn request_confirmation(
        &self,
        prompt: &VoicePrompt,
    ) -> Result<Option<bool>, CoreError> {
        self.log.lock().push(Recorded::Prompt(prompt.clone()));
        Ok(self.answer)
    }

    async fn request_app_launch(&self, response: &VoiceResponse) -> Result<(), CoreError> {
        self.log.lock().push(Recorded::AppLaunch(response.clone()));
        Ok(())
    }
}

/// 고정 호스트 값을 돌려주는 설정 제공자
pub struct StaticHost(pub Option<String>);

impl ConfigProvider for StaticHost {
    fn get(&self, key: &str) -> Option<String> {
        (key == DEVICE_HOST_KEY).then(|| self.0.clone()).flatten()
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), CoreError> {
        Err(CoreError::Internal("read-only provider".to_string()))
    }
}

/// mockito 서버를 가리키는 장치 클라이언트
pub fn device_for(server: &mockito::ServerGuard) -> Arc<HttpDeviceClient> {
    let config = AppConfig::default_config();
    Arc::new(
        HttpDeviceClient::new(
            &format!("{}/", server.url()),
            &config.device.form_field,
            config.device.request_timeout(),
        )
        .unwrap(),
    )
}
