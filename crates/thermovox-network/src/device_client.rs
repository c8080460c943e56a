//! 장치 HTTP 클라이언트.
//!
//! `DeviceClient` 포트 구현. 재시도 없이 한 번만 요청하며,
//! 연결은 호출 단위로만 유지된다 (유휴 커넥션 풀 비활성화).

use async_trait::async_trait;
use std::time::Duration;
use thermovox_core::config::DeviceConfig;
use thermovox_core::error::{CoreError, TransportError};
use thermovox_core::models::command::DeviceCommand;
use thermovox_core::ports::config_provider::{device_host, ConfigProvider};
use thermovox_core::ports::device_client::DeviceClient;
use tracing::{debug, warn};

/// 장치 HTTP 클라이언트 — `DeviceClient` 포트 구현
pub struct HttpDeviceClient {
    client: reqwest::Client,
    endpoint: String,
    form_field: String,
}

impl HttpDeviceClient {
    /// 새 장치 클라이언트 생성
    pub fn new(endpoint: &str, form_field: &str, timeout: Duration) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| CoreError::Internal(format!("HTTP 클라이언트 빌드 실패: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            form_field: form_field.to_string(),
        })
    }

    /// 설정 제공자에서 호스트 주소를 읽어 생성
    ///
    /// 세션 시작 시 한 번 호출한다. 제공자에는 쓰지 않는다.
    pub fn from_provider(
        provider: &dyn ConfigProvider,
        config: &DeviceConfig,
    ) -> Result<Self, CoreError> {
        let host = device_host(provider);
        let endpoint = config.endpoint(&host);
        debug!("장치 엔드포인트: {endpoint}");
        Self::new(&endpoint, &config.form_field, config.request_timeout())
    }

    /// 요청 대상 URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// reqwest 에러 → 네트워크 전송 에러
fn network_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Network(format!("device request timed out: {e}"))
    } else if e.is_connect() {
        TransportError::Network(format!("could not connect to device: {e}"))
    } else {
        TransportError::Network(e.to_string())
    }
}

#[async_trait]
impl DeviceClient for HttpDeviceClient {
    async fn fetch(&self, command: &DeviceCommand) -> Result<String, TransportError> {
        debug!("장치 요청: {} ({}={command})", self.endpoint, self.form_field);

        let resp = self
            .client
            .post(&self.endpoint)
            .form(&[(self.form_field.as_str(), command.as_str())])
            .send()
            .await
            .map_err(|e| {
                warn!("장치 요청 실패: {e}");
                network_error(e)
            })?;

        let status_code = resp.status().as_u16();
        if status_code != 200 {
            warn!("장치 응답 상태 코드: {status_code}");
            return Err(TransportError::Status { status_code });
        }

        let body = resp.text().await.map_err(network_error)?;
        debug!("장치 응답: {body:?}");
        Ok(body)
    }
}
