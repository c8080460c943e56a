//! 센서 판독값 파서.
//!
//! 장치 응답 `"<섭씨>;<보조 지표>;<습도>"`를 [`SensorReading`]으로 변환한다.
//! 구분자가 없는 응답은 장치가 보낸 에러 메시지로 간주한다.

use crate::error::ParseError;
use crate::models::reading::{SensorReading, MAX_READING_FIELDS};

/// 필드 구분자
pub const FIELD_DELIMITER: char = ';';

/// 장치 응답 파싱
///
/// - 필드가 하나뿐이면 원문 전체를 [`ParseError::DeviceReported`]로 반환
/// - 첫 필드가 유한한 실수가 아니면 [`ParseError::NonNumeric`]
/// - 네 번째 이후 필드는 무시하고, 두 번째/세 번째 필드는 표시용 원문으로 보존
pub fn parse_reading(raw: &str) -> Result<SensorReading, ParseError> {
    let parts: Vec<&str> = raw.split(FIELD_DELIMITER).collect();
    if parts.len() == 1 {
        return Err(ParseError::DeviceReported {
            message: raw.to_string(),
        });
    }

    let fields: Vec<String> = parts
        .iter()
        .take(MAX_READING_FIELDS)
        .map(|field| field.trim().to_string())
        .collect();

    let temperature_c = fields[0]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::NonNumeric {
            field: fields[0].clone(),
        })?;

    Ok(SensorReading {
        temperature_c,
        fields,
    })
}
