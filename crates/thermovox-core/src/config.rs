//! 애플리케이션 설정 구조체.
//!
//! 장치 엔드포인트, 세션 타이밍/임계값, 사용자 메시지(현지화 문자열),
//! 로컬 키/값 설정을 정의한다. [`crate::config_manager::ConfigManager`]가
//! JSON 파일로 로드/저장한다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// 장치 호스트 주소를 담는 로컬 설정 키
pub const DEVICE_HOST_KEY: &str = "device_host";

/// 장치 호스트 주소 기본값
pub const DEFAULT_DEVICE_HOST: &str = "192.168.1.100";

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 원격 장치 설정
    #[serde(default)]
    pub device: DeviceConfig,
    /// 음성 세션 설정
    #[serde(default)]
    pub session: SessionConfig,
    /// 사용자 메시지 (표시/음성 문자열)
    #[serde(default)]
    pub messages: MessagesConfig,
    /// 로컬 키/값 설정 (설정 화면이 기록, 코어는 읽기만)
    #[serde(default)]
    pub local_settings: BTreeMap<String, String>,
}

// ============================================================
// 장치 설정
// ============================================================

/// 원격 장치 HTTP 엔드포인트 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// 장치 포트 (URL에는 4자리 0 패딩으로 표기: `0808`)
    #[serde(default = "default_device_port")]
    pub port: u16,
    /// 센서 판독 명령 토큰
    #[serde(default = "default_read_command")]
    pub read_command: String,
    /// 팬 작동 명령 토큰
    #[serde(default = "default_actuate_command")]
    pub actuate_command: String,
    /// 명령 토큰을 싣는 폼 필드 이름
    #[serde(default = "default_form_field")]
    pub form_field: String,
    /// 요청 타임아웃 (밀리초)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            port: default_device_port(),
            read_command: default_read_command(),
            actuate_command: default_actuate_command(),
            form_field: default_form_field(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl DeviceConfig {
    /// 호스트 주소로 장치 엔드포인트 URL 생성
    pub fn endpoint(&self, host: &str) -> String {
        format!("http://{}:{:04}/", host.trim(), self.port)
    }

    /// 요청 타임아웃을 Duration으로 반환
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

// ============================================================
// 세션 설정
// ============================================================

/// 음성 명령 세션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// 호스트가 이 서비스를 깨울 때 사용하는 트리거 이름
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// 온습도 조회 음성 명령 이름
    #[serde(default = "default_command_name")]
    pub command_name: String,
    /// 음성 명령에서 조건 구절을 담는 속성 이름
    #[serde(default = "default_condition_property")]
    pub condition_property: String,
    /// 팬 작동 확인을 요구하는 온도 (섭씨, 이상)
    #[serde(default = "default_threshold_celsius")]
    pub threshold_celsius: f64,
    /// 장기 작업 중 진행 메시지 재전송 주기 (밀리초)
    #[serde(default = "default_progress_interval_ms")]
    pub progress_interval_ms: u64,
    /// 호스트 초기 응답 예산 (밀리초)
    #[serde(default = "default_initial_response_budget_ms")]
    pub initial_response_budget_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            command_name: default_command_name(),
            condition_property: default_condition_property(),
            threshold_celsius: default_threshold_celsius(),
            progress_interval_ms: default_progress_interval_ms(),
            initial_response_budget_ms: default_initial_response_budget_ms(),
        }
    }
}

impl SessionConfig {
    /// 진행 메시지 재전송 주기를 Duration으로 반환
    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }

    /// 초기 응답 예산을 Duration으로 반환
    pub fn initial_response_budget(&self) -> Duration {
        Duration::from_millis(self.initial_response_budget_ms)
    }
}

// ============================================================
// 사용자 메시지
// ============================================================

/// 사용자에게 표시/발화되는 문자열 모음
///
/// `{condition}`, `{threshold}` 자리표시자를 지원한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub loading_condition: String,
    pub normal_display: String,
    pub normal_spoken: String,
    pub breach_prompt: String,
    pub breach_reprompt: String,
    pub opening_fan: String,
    pub fan_opened: String,
    pub fan_failed: String,
    pub declined: String,
    pub no_confirmation: String,
    pub launching_app: String,
    pub fan_launch_argument: String,
    pub declined_launch_argument: String,
    pub celsius_title: String,
    pub secondary_title: String,
    pub humidity_title: String,
    pub error_title: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            loading_condition: "Loading current {condition} condition".to_string(),
            normal_display: "Storeroom status is normal".to_string(),
            normal_spoken: "Storeroom temperature and humidity are normal".to_string(),
            breach_prompt: "Temperature is above {threshold} degrees. Open the fan?".to_string(),
            breach_reprompt: "Above {threshold} degrees. Open the fan?".to_string(),
            opening_fan: "Opening the fan".to_string(),
            fan_opened: "The fan is open, don't worry.".to_string(),
            fan_failed: "The fan seems to have a problem, please try again later.".to_string(),
            declined: "All right, leaving it as is!".to_string(),
            no_confirmation: "No answer was received, the fan was left as is.".to_string(),
            launching_app: "Launching Thermovox".to_string(),
            fan_launch_argument: "open fan".to_string(),
            declined_launch_argument: "cancel".to_string(),
            celsius_title: "Celsius".to_string(),
            secondary_title: "Fahrenheit".to_string(),
            humidity_title: "Humidity".to_string(),
            error_title: "Error".to_string(),
        }
    }
}

// ============================================================
// AppConfig impl
// ============================================================

impl AppConfig {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self::default()
    }
}

// ============================================================
// 기본값 함수
// ============================================================

fn default_device_port() -> u16 {
    808
}
fn default_read_command() -> String {
    "hello".to_string()
}
fn default_actuate_command() -> String {
    "fanopen".to_string()
}
fn default_form_field() -> String {
    "param1".to_string()
}
fn default_request_timeout_ms() -> u64 {
    10_000
}
fn default_service_name() -> String {
    "ThermovoxVoiceCommandService".to_string()
}
fn default_command_name() -> String {
    "Temperature".to_string()
}
fn default_condition_property() -> String {
    "condition".to_string()
}
fn default_threshold_celsius() -> f64 {
    28.0
}
fn default_progress_interval_ms() -> u64 {
    5_000
}
fn default_initial_response_budget_ms() -> u64 {
    500
}
