//! # thermovox-core
//!
//! THERMOVOX 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 장치 명령, 센서 판독값, 응답, 세션 결과
//! - [`ports`] — Hexagonal Architecture 포트 인터페이스 (async_trait)
//! - [`error`] — 전송/파싱/코어 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장, 로컬 키/값)
//! - [`parser`] — 장치 페이로드 → 센서 판독값
//! - [`threshold`] — 팬 작동 확인 임계값 정책

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod parser;
pub mod ports;
pub mod threshold;
