//! 호스트 응답 모델.
//!
//! 진행/최종 응답과 확인 프롬프트에 실리는 메시지와 타일.

use serde::{Deserialize, Serialize};

/// 표시 문자열과 음성 문자열 쌍
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMessage {
    /// 화면 표시 문자열
    pub display: String,
    /// 음성 발화 문자열
    pub spoken: String,
}

impl UserMessage {
    /// 표시/음성이 같은 메시지
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            display: text.clone(),
            spoken: text,
        }
    }

    /// 표시/음성이 다른 메시지
    pub fn new(display: impl Into<String>, spoken: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            spoken: spoken.into(),
        }
    }
}

/// 타일 레이아웃 유형
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileType {
    /// 제목 + 아이콘 + 텍스트 한 줄
    #[default]
    TitleWithIconAndText,
}

/// 응답에 첨부되는 시각 타일
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTile {
    /// 타일 제목
    pub title: String,
    /// 본문 첫 줄
    pub text: String,
    /// 레이아웃 유형
    #[serde(default)]
    pub tile_type: TileType,
    /// 아이콘 경로 (패키지 상대 경로)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// 진행/성공/실패 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceResponse {
    /// 사용자 메시지
    pub message: UserMessage,
    /// 첨부 타일 (최대 3개)
    #[serde(default)]
    pub tiles: Vec<ContentTile>,
    /// 사용자가 응답을 눌러 앱을 열 때 전달할 인자
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_launch_argument: Option<String>,
}

impl VoiceResponse {
    /// 타일 없는 응답
    pub fn message(message: UserMessage) -> Self {
        Self {
            message,
            tiles: Vec::new(),
            app_launch_argument: None,
        }
    }

    /// 타일 포함 응답
    pub fn with_tiles(message: UserMessage, tiles: Vec<ContentTile>) -> Self {
        Self {
            message,
            tiles,
            app_launch_argument: None,
        }
    }

    /// 앱 실행 인자 지정
    pub fn launch_argument(mut self, argument: impl Into<String>) -> Self {
        self.app_launch_argument = Some(argument.into());
        self
    }
}

/// 확인/거부 프롬프트
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoicePrompt {
    /// 최초 질문
    pub prompt: UserMessage,
    /// 응답을 알아듣지 못했을 때의 재질문
    pub reprompt: UserMessage,
    /// 첨부 타일
    #[serde(default)]
    pub tiles: Vec<ContentTile>,
}
