//! # thermovox-session
//!
//! 음성 명령 세션 파이프라인.
//!
//! 진행 메시지 → 장치 판독 → 파싱 → 임계값 판정 → (확인 → 팬 작동) → 최종 응답.
//!
//! - [`presenter`] — 도메인 데이터 → 표시/음성 문자열과 타일
//! - [`lifecycle`] — 취소 신호와 멱등 완료 지연
//! - [`orchestrator`] — 세션 상태 머신
//! - [`service`] — 호스트 활성화 진입점, 음성 명령 분기

pub mod lifecycle;
pub mod orchestrator;
pub mod presenter;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;
