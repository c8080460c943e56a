//! 명령 모델.
//!
//! 장치로 보내는 명령 토큰과 호스트가 전달하는 음성 명령.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::config::DeviceConfig;

/// 원격 장치 연산을 식별하는 불투명 토큰
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCommand(String);

impl DeviceCommand {
    /// 임의 토큰으로 명령 생성
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// 센서 판독 명령
    pub fn read(config: &DeviceConfig) -> Self {
        Self::new(config.read_command.clone())
    }

    /// 팬 작동 명령
    pub fn actuate(config: &DeviceConfig) -> Self {
        Self::new(config.actuate_command.clone())
    }

    /// 토큰 문자열
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 호스트가 인식한 음성 명령
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoiceCommand {
    /// 명령 이름 (예: "Temperature")
    pub command_name: String,
    /// 인식된 구절 속성 (속성 이름 → 후보 값 목록)
    #[serde(default)]
    pub properties: HashMap<String, Vec<String>>,
}

impl VoiceCommand {
    /// 속성 값 없이 명령 생성
    pub fn new(command_name: impl Into<String>) -> Self {
        Self {
            command_name: command_name.into(),
            properties: HashMap::new(),
        }
    }

    /// 속성 값 추가
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// 속성의 첫 번째 값
    pub fn first_property(&self, name: &str) -> Option<&str> {
        self.properties
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
