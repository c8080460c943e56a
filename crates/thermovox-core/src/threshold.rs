//! 임계값 정책.
//!
//! 첫 필드(섭씨 온도)만으로 팬 작동 확인 여부를 판정하는 순수 함수.

use crate::models::reading::{SensorReading, ThresholdDecision};

/// 기본 임계값 (섭씨)
pub const DEFAULT_THRESHOLD_CELSIUS: f64 = 28.0;

/// 온도 임계값 정책
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPolicy {
    threshold_celsius: f64,
}

impl ThresholdPolicy {
    /// 임계값 지정 생성
    pub fn new(threshold_celsius: f64) -> Self {
        Self { threshold_celsius }
    }

    /// 설정된 임계값
    pub fn threshold_celsius(&self) -> f64 {
        self.threshold_celsius
    }

    /// 판독값 판정 — 임계값 이상이면 확인 필요
    pub fn decide(&self, reading: &SensorReading) -> ThresholdDecision {
        self.decide_celsius(reading.temperature_c)
    }

    /// 섭씨 값 판정
    pub fn decide_celsius(&self, temperature_c: f64) -> ThresholdDecision {
        if temperature_c >= self.threshold_celsius {
            ThresholdDecision::NeedsConfirmation
        } else {
            ThresholdDecision::Normal
        }
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_CELSIUS)
    }
}
