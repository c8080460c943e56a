//! 설정 제공자 포트.
//!
//! 구현: [`crate::config_manager::ConfigManager`] (JSON 파일)

use crate::config::{DEFAULT_DEVICE_HOST, DEVICE_HOST_KEY};
use crate::error::CoreError;

/// 키/값 설정 저장소
pub trait ConfigProvider: Send + Sync {
    /// 키에 해당하는 값 (없으면 None)
    fn get(&self, key: &str) -> Option<String>;

    /// 값 저장
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// 장치 호스트 주소 조회 (없거나 비어 있으면 기본값)
///
/// 세션 시작 시 한 번만 읽으며 저장소에 쓰지 않는다.
pub fn device_host(provider: &dyn ConfigProvider) -> String {
    provider
        .get(DEVICE_HOST_KEY)
        .map(|host| host.trim().to_string())
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| DEFAULT_DEVICE_HOST.to_string())
}
