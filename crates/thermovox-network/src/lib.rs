//! # thermovox-network
//!
//! 원격 임베디드 장치와의 HTTP 통신 어댑터.
//! 명령 토큰을 form-urlencoded POST로 보내고 응답 본문을 텍스트로 받는다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use thermovox_network::device_client::HttpDeviceClient;
//!
//! let client = HttpDeviceClient::from_provider(&config_manager, &config.device)?;
//! let body = client.fetch(&DeviceCommand::read(&config.device)).await?;
//! ```

pub mod device_client;
