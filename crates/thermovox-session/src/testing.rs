//! 단위 테스트용 가짜 장치/호스트 연결.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;
use thermovox_core::error::{CoreError, TransportError};
use thermovox_core::models::command::{DeviceCommand, VoiceCommand};
use thermovox_core::models::response::{VoicePrompt, VoiceResponse};
use thermovox_core::ports::device_client::DeviceClient;
use thermovox_core::ports::voice_connection::VoiceConnection;
use tokio::sync::Notify;

/// 미리 정한 응답을 순서대로 돌려주는 장치
pub struct FakeDevice {
    replies: Mutex<VecDeque<Result<String, TransportError>>>,
    commands: Mutex<Vec<String>>,
    delay: Duration,
}

impl FakeDevice {
    pub fn replying(replies: Vec<Result<String, TransportError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            commands: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().clone()
    }
}

#[async_trait]
impl DeviceClient for FakeDevice {
    async fn fetch(&self, command: &DeviceCommand) -> Result<String, TransportError> {
        self.commands.lock().push(command.as_str().to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_string())))
    }
}

/// 호스트가 받은 호출 기록
#[derive(Debug, Clone)]
pub enum HostCall {
    Progress(String),
    Success(VoiceResponse),
    Failure(VoiceResponse),
    Prompt(VoicePrompt),
    AppLaunch(VoiceResponse),
}

#[derive(Debug, Clone, Copy)]
enum ConfirmBehavior {
    Reply(Option<bool>),
    Fail,
    Never,
}

#[derive(Debug, Clone, Copy)]
enum ProgressBehavior {
    Accept,
    /// n번째 진행 메시지(1부터)를 거부
    FailAt(usize),
    /// 처음 n개 이후로는 응답하지 않음
    HangAfter(usize),
}

/// 호출을 기록하는 호스트 연결
///
/// 거부된 호출도 시도로 기록한다.
pub struct FakeConnection {
    command: VoiceCommand,
    confirm: ConfirmBehavior,
    progress: ProgressBehavior,
    reject_success: bool,
    calls: Mutex<Vec<HostCall>>,
    prompted: Notify,
}

impl Default for FakeConnection {
    fn default() -> Self {
        Self::confirming(Some(false))
    }
}

impl FakeConnection {
    pub fn confirming(reply: Option<bool>) -> Self {
        Self {
            command: VoiceCommand::new("Temperature").with_property("condition", "storeroom"),
            confirm: ConfirmBehavior::Reply(reply),
            progress: ProgressBehavior::Accept,
            reject_success: false,
            calls: Mutex::new(Vec::new()),
            prompted: Notify::new(),
        }
    }

    pub fn failing_confirmation() -> Self {
        Self {
            confirm: ConfirmBehavior::Fail,
            ..Self::default()
        }
    }

    pub fn never_confirming() -> Self {
        Self {
            confirm: ConfirmBehavior::Never,
            ..Self::default()
        }
    }

    pub fn rejecting_success() -> Self {
        Self {
            reject_success: true,
            ..Self::default()
        }
    }

    /// `nth`번째 진행 메시지 보고를 실패시킨다 (1부터)
    pub fn failing_progress_at(mut self, nth: usize) -> Self {
        self.progress = ProgressBehavior::FailAt(nth);
        self
    }

    /// 처음 `accepted`개 이후의 진행 메시지 보고는 끝나지 않는다
    pub fn hanging_progress_after(mut self, accepted: usize) -> Self {
        self.progress = ProgressBehavior::HangAfter(accepted);
        self
    }

    pub fn with_command(mut self, command: VoiceCommand) -> Self {
        self.command = command;
        self
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().clone()
    }

    pub fn final_reports(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, HostCall::Success(_) | HostCall::Failure(_)))
            .count()
    }

    pub fn progress_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, HostCall::Progress(_)))
            .count()
    }

    pub fn prompts(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, HostCall::Prompt(_)))
            .count()
    }

    pub async fn wait_for_prompt(&self) {
        self.prompted.notified().await;
    }
}

#[async_trait]
impl VoiceConnection for FakeConnection {
    async fn get_voice_command(&self) -> Result<VoiceCommand, CoreError> {
        Ok(self.command.clone())
    }

    async fn report_progress(&self, response: &VoiceResponse) -> Result<(), CoreError> {
        let nth = {
            let mut calls = self.calls.lock();
            calls.push(HostCall::Progress(response.message.display.clone()));
            calls
                .iter()
                .filter(|c| matches!(c, HostCall::Progress(_)))
                .count()
        };
        match self.progress {
            ProgressBehavior::FailAt(at) if at == nth => {
                Err(CoreError::Connection("progress rejected".to_string()))
            }
            ProgressBehavior::HangAfter(accepted) if nth > accepted => {
                std::future::pending().await
            }
            _ => Ok(()),
        }
    }

    async fn report_success(&self, response: &VoiceResponse) -> Result<(), CoreError> {
        self.calls.lock().push(HostCall::Success(response.clone()));
        if self.reject_success {
            return Err(CoreError::Connection("success channel closed".to_string()));
        }
        Ok(())
    }

    async fn report_failure(&self, response: &VoiceResponse) -> Result<(), CoreError> {
        self.calls.lock().push(HostCall::Failure(response.clone()));
        Ok(())
    }

    async fn request_confirmation(
        &self,
        prompt: &VoicePrompt,
    ) -> Result<Option<bool>, CoreError> {
        self.calls.lock().push(HostCall::Prompt(prompt.clone()));
        self.prompted.notify_one();
        match self.confirm {
            ConfirmBehavior::Reply(reply) => Ok(reply),
            ConfirmBehavior::Fail => Err(CoreError::Connection("host dropped the prompt".to_string())),
            ConfirmBehavior::Never => std::future::pending().await,
        }
    }

    async fn request_app_launch(&self, response: &VoiceResponse) -> Result<(), CoreError> {
        self.calls.lock().push(HostCall::AppLaunch(response.clone()));
        Ok(())
    }
}
