//! 세션 결과 모델.

use serde::{Deserialize, Serialize};

use super::response::{ContentTile, UserMessage, VoiceResponse};

/// 세션당 정확히 한 번 생성되는 최종 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionOutcome {
    /// 성공 응답 (판독값, 팬 작동 결과, 장치 보고 에러 포함)
    Success {
        message: UserMessage,
        tiles: Vec<ContentTile>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        app_launch_argument: Option<String>,
    },
    /// 사용자가 팬 작동을 거절
    Declined {
        message: UserMessage,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        app_launch_argument: Option<String>,
    },
    /// 실패 (사용자에게 보여줄 사유)
    Failed { reason: String },
}

impl SessionOutcome {
    /// 호스트의 성공 채널로 전달되는 결과인지
    ///
    /// 거절도 호스트에는 성공 응답으로 보고된다.
    pub fn is_success_shaped(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }

    /// 사용자 메시지 (실패는 사유를 표시/음성 모두에 사용)
    pub fn message(&self) -> UserMessage {
        match self {
            Self::Success { message, .. } | Self::Declined { message, .. } => message.clone(),
            Self::Failed { reason } => UserMessage::same(reason.clone()),
        }
    }

    /// 호스트에 전달할 응답으로 변환
    pub fn to_response(&self) -> VoiceResponse {
        match self {
            Self::Success {
                message,
                tiles,
                app_launch_argument,
            } => VoiceResponse {
                message: message.clone(),
                tiles: tiles.clone(),
                app_launch_argument: app_launch_argument.clone(),
            },
            Self::Declined {
                message,
                app_launch_argument,
            } => VoiceResponse {
                message: message.clone(),
                tiles: Vec::new(),
                app_launch_argument: app_launch_argument.clone(),
            },
            Self::Failed { reason } => VoiceResponse::message(UserMessage::same(reason.clone())),
        }
    }
}

/// 세션 종료 방식
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// 결과를 호스트에 보고함
    Reported(SessionOutcome),
    /// 호스트가 취소함 — 결과를 보고하지 않음
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declined_is_success_shaped() {
        let outcome = SessionOutcome::Declined {
            message: UserMessage::same("leaving it"),
            app_launch_argument: Some("cancel".to_string()),
        };
        assert!(outcome.is_success_shaped());
        let response = outcome.to_response();
        assert!(response.tiles.is_empty());
        assert_eq!(response.app_launch_argument.as_deref(), Some("cancel"));
    }

    #[test]
    fn failed_reason_becomes_both_strings() {
        let outcome = SessionOutcome::Failed {
            reason: "connection failed, status code: 500".to_string(),
        };
        assert!(!outcome.is_success_shaped());
        let message = outcome.message();
        assert_eq!(message.display, message.spoken);
        assert_eq!(message.display, "connection failed, status code: 500");
    }

    #[test]
    fn outcome_serializes_with_kind_tag() {
        let outcome = SessionOutcome::Failed {
            reason: "x".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "failed");
    }
}
