//! 센서 판독값 모델.

use serde::{Deserialize, Serialize};

/// 판독값에서 유지하는 최대 필드 수 (섭씨, 보조 지표, 습도)
pub const MAX_READING_FIELDS: usize = 3;

/// 장치 페이로드에서 파싱한 센서 판독값
///
/// `temperature_c`는 첫 필드의 수치값이며, `fields`는 표시용 원문
/// 필드(최대 3개)를 순서대로 담는다. 두 번째/세 번째 필드는
/// 숫자가 아니어도 그대로 보존한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// 섭씨 온도 (유한값)
    pub temperature_c: f64,
    /// 표시용 필드 원문 (1~3개)
    pub fields: Vec<String>,
}

/// 임계값 정책 판정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThresholdDecision {
    /// 정상 범위
    Normal,
    /// 임계값 이상 — 사용자 확인 후 팬 작동
    NeedsConfirmation,
}
