//! THERMOVOX 핵심 에러 타입.
//!
//! 장치 전송 에러([`TransportError`]), 판독값 파싱 에러([`ParseError`]),
//! 그리고 모든 어댑터 crate가 공유하는 [`CoreError`]를 정의한다.

use thiserror::Error;

/// 장치 HTTP 호출 실패.
///
/// 비정상 상태 코드와 네트워크 계층 실패를 명시적으로 구분한다.
/// 호출자는 응답 텍스트의 형태가 아니라 이 variant로 분기해야 한다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// 장치가 200 이외의 상태 코드를 반환
    #[error("connection failed, status code: {status_code}")]
    Status {
        /// 수신한 HTTP 상태 코드
        status_code: u16,
    },

    /// 연결 실패, DNS 실패, 타임아웃
    #[error("{0}")]
    Network(String),
}

/// 장치 페이로드 파싱 실패.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// 구분자가 없는 페이로드 — 장치가 보낸 에러 문자열 그대로
    #[error("{message}")]
    DeviceReported {
        /// 장치 원문 메시지
        message: String,
    },

    /// 첫 번째 필드(온도)가 유한한 실수가 아님
    #[error("invalid temperature reading: {field:?}")]
    NonNumeric {
        /// 파싱에 실패한 필드 원문
        field: String,
    },
}

/// 코어 레이어 에러.
///
/// 어댑터 crate는 이 타입으로 실패를 보고한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 장치 전송 에러
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// 판독값 파싱 에러
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 호스트 음성 연결(전송/싱크) 호출 실패
    #[error("음성 연결 에러: {0}")]
    Connection(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),
}
