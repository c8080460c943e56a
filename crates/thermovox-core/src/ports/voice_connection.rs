//! 음성 호스트 연결 포트.
//!
//! 호스트 음성 어시스턴트와의 세션 전송/싱크. 진행 메시지, 최종 응답,
//! 확인 프롬프트, 앱 실행 요청을 전달한다.
//!
//! 구현: `thermovox-app` crate (콘솔 호스트)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::command::VoiceCommand;
use crate::models::response::{VoicePrompt, VoiceResponse};

/// 호스트 음성 세션 연결
///
/// 한 세션의 호출은 순차적으로 이루어지며 호스트는 받은 순서대로 표시한다.
/// 어떤 메서드든 `Err`를 반환하면 세션은 실패 결과로 종료된다.
#[async_trait]
pub trait VoiceConnection: Send + Sync {
    /// 호스트가 인식한 음성 명령 조회
    async fn get_voice_command(&self) -> Result<VoiceCommand, CoreError>;

    /// 진행 메시지 표시
    async fn report_progress(&self, response: &VoiceResponse) -> Result<(), CoreError>;

    /// 최종 성공 응답
    async fn report_success(&self, response: &VoiceResponse) -> Result<(), CoreError>;

    /// 최종 실패 응답
    async fn report_failure(&self, response: &VoiceResponse) -> Result<(), CoreError>;

    /// 확인/거부 질문 후 사용자 응답 대기
    ///
    /// 호스트가 결과 없이 끝내면 `Ok(None)`. 이 계층은 타임아웃을 두지 않는다.
    async fn request_confirmation(&self, prompt: &VoicePrompt)
        -> Result<Option<bool>, CoreError>;

    /// 앱 전체를 전면으로 실행 요청
    async fn request_app_launch(&self, response: &VoiceResponse) -> Result<(), CoreError>;
}
