//! 응답 프레젠터.
//!
//! 판독값/판정 → 호스트 표시용 메시지와 타일 변환. I/O 없음.

use thermovox_core::config::MessagesConfig;
use thermovox_core::models::outcome::SessionOutcome;
use thermovox_core::models::reading::SensorReading;
use thermovox_core::models::response::{
    ContentTile, TileType, UserMessage, VoicePrompt, VoiceResponse,
};

/// 타일 아이콘 경로
pub const TILE_IMAGE: &str = "Images/weather.png";

const CELSIUS_SUFFIX: &str = "℃";
const SECONDARY_SUFFIX: &str = "℉";
const HUMIDITY_SUFFIX: &str = "%RH";

/// 세션 각 단계의 응답을 만드는 프레젠터
#[derive(Debug, Clone, Default)]
pub struct ResponsePresenter {
    messages: MessagesConfig,
}

impl ResponsePresenter {
    /// 메시지 설정으로 생성
    pub fn new(messages: MessagesConfig) -> Self {
        Self { messages }
    }

    /// "현재 상태 조회 중" 진행 메시지
    pub fn loading_progress(&self, condition: &str) -> VoiceResponse {
        let text = fill(&self.messages.loading_condition, condition, None);
        VoiceResponse::message(UserMessage::same(text))
    }

    /// 판독값 타일 (섭씨, 보조 지표, 습도 순, 최대 3개)
    pub fn reading_tiles(&self, reading: &SensorReading) -> Vec<ContentTile> {
        let layout = [
            (&self.messages.celsius_title, CELSIUS_SUFFIX),
            (&self.messages.secondary_title, SECONDARY_SUFFIX),
            (&self.messages.humidity_title, HUMIDITY_SUFFIX),
        ];

        reading
            .fields
            .iter()
            .zip(layout)
            .map(|(field, (title, suffix))| tile(title, format!("{field}{suffix}")))
            .collect()
    }

    /// 정상 범위 결과
    pub fn normal_outcome(&self, reading: &SensorReading) -> SessionOutcome {
        SessionOutcome::Success {
            message: UserMessage::new(&self.messages.normal_display, &self.messages.normal_spoken),
            tiles: self.reading_tiles(reading),
            app_launch_argument: None,
        }
    }

    /// 장치가 보낸 에러 문자열을 정보성 응답으로 표시
    pub fn device_reported_outcome(&self, message: &str) -> SessionOutcome {
        SessionOutcome::Success {
            message: UserMessage::same(message),
            tiles: vec![tile(&self.messages.error_title, message.to_string())],
            app_launch_argument: None,
        }
    }

    /// 임계값 초과 확인 프롬프트 (최초 질문/재질문)
    pub fn breach_prompt(&self, threshold_celsius: f64) -> VoicePrompt {
        VoicePrompt {
            prompt: UserMessage::same(fill(
                &self.messages.breach_prompt,
                "",
                Some(threshold_celsius),
            )),
            reprompt: UserMessage::same(fill(
                &self.messages.breach_reprompt,
                "",
                Some(threshold_celsius),
            )),
            tiles: Vec::new(),
        }
    }

    /// "팬 여는 중" 진행 메시지
    pub fn opening_fan_progress(&self) -> VoiceResponse {
        VoiceResponse::message(UserMessage::same(&self.messages.opening_fan))
    }

    /// 팬 작동 성공
    pub fn fan_opened_outcome(&self) -> SessionOutcome {
        self.fan_outcome(&self.messages.fan_opened)
    }

    /// 팬 작동 실패 추정 — 성공 응답 형태로 재시도 안내
    pub fn fan_failed_outcome(&self) -> SessionOutcome {
        self.fan_outcome(&self.messages.fan_failed)
    }

    /// 사용자가 팬 작동을 거절
    pub fn declined_outcome(&self) -> SessionOutcome {
        SessionOutcome::Declined {
            message: UserMessage::same(&self.messages.declined),
            app_launch_argument: Some(self.messages.declined_launch_argument.clone()),
        }
    }

    /// 확인 응답 없이 끝난 경우
    pub fn no_confirmation_outcome(&self) -> SessionOutcome {
        failed_outcome(&self.messages.no_confirmation)
    }

    /// 앱 전면 실행 안내
    pub fn launching_app_response(&self) -> VoiceResponse {
        VoiceResponse::message(UserMessage::same(&self.messages.launching_app))
            .launch_argument(String::new())
    }

    fn fan_outcome(&self, text: &str) -> SessionOutcome {
        SessionOutcome::Success {
            message: UserMessage::same(text),
            tiles: Vec::new(),
            app_launch_argument: Some(self.messages.fan_launch_argument.clone()),
        }
    }
}

/// 실패 결과 — 사유를 그대로 사용자 메시지로 사용
pub fn failed_outcome(reason: impl Into<String>) -> SessionOutcome {
    SessionOutcome::Failed {
        reason: reason.into(),
    }
}

fn tile(title: &str, text: String) -> ContentTile {
    ContentTile {
        title: title.to_string(),
        text,
        tile_type: TileType::TitleWithIconAndText,
        image: Some(TILE_IMAGE.to_string()),
    }
}

/// 자리표시자 치환
///
/// 조건 구절이 비어 있으면 자리표시자와 앞쪽 공백 하나만 지운다.
/// 템플릿의 나머지 공백은 그대로 둔다.
fn fill(template: &str, condition: &str, threshold: Option<f64>) -> String {
    let condition = condition.trim();
    let mut text = if condition.is_empty() {
        template
            .replace(" {condition}", "")
            .replace("{condition} ", "")
            .replace("{condition}", "")
    } else {
        template.replace("{condition}", condition)
    };
    if let Some(threshold) = threshold {
        text = text.replace("{threshold}", &threshold.to_string());
    }
    text
}
