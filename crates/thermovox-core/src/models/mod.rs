//! THERMOVOX 도메인 모델.
//!
//! 장치 명령, 센서 판독값, 호스트에 전달하는 응답/프롬프트,
//! 세션 결과를 정의한다.

pub mod command;
pub mod outcome;
pub mod reading;
pub mod response;
