//! 설정 CLI.
//!
//! 장치 호스트 주소를 보고 바꾸는 유일한 쓰기 경로.

use std::io::Write;
use thermovox_core::config::DEVICE_HOST_KEY;
use thermovox_core::config_manager::ConfigManager;
use thermovox_core::error::CoreError;
use thermovox_core::ports::config_provider::ConfigProvider;
use tracing::info;

/// 현재 설정 출력
///
/// 호스트 주소가 없으면 기본값을 먼저 저장한다.
pub fn show(manager: &ConfigManager, out: &mut impl Write) -> Result<(), CoreError> {
    let host = manager.device_host_or_init()?;
    let config = manager.get();

    writeln!(out, "config file : {}", manager.config_path().display())?;
    writeln!(out, "device host : {host}")?;
    writeln!(out, "endpoint    : {}", config.device.endpoint(&host))?;
    writeln!(out, "threshold   : {}℃", config.session.threshold_celsius)?;
    Ok(())
}

/// 장치 호스트 주소 변경
pub fn set_host(manager: &ConfigManager, addr: &str, out: &mut impl Write) -> Result<(), CoreError> {
    let addr = addr.trim();
    if addr.is_empty() {
        return Err(CoreError::Config("device host must not be empty".to_string()));
    }
    ConfigProvider::set(manager, DEVICE_HOST_KEY, addr)?;
    info!("장치 호스트 변경: {addr}");
    writeln!(out, "device host set to {addr}")?;
    Ok(())
}
