//! 장치 클라이언트 포트.
//!
//! 구현: `thermovox-network` crate (reqwest)

use async_trait::async_trait;

use crate::error::TransportError;
use crate::models::command::DeviceCommand;

/// 원격 임베디드 장치 호출
#[async_trait]
pub trait DeviceClient: Send + Sync {
    /// 명령 토큰을 보내고 응답 본문을 반환
    ///
    /// 200이 아닌 상태 코드는 [`TransportError::Status`],
    /// 연결/DNS/타임아웃 실패는 [`TransportError::Network`].
    async fn fetch(&self, command: &DeviceCommand) -> Result<String, TransportError>;
}
