//! # thermovox-app
//!
//! THERMOVOX 바이너리 진입점.
//! DI 컨테이너 역할, 콘솔 호스트 세션 실행, 설정 CLI.

mod console;
mod lifecycle;
mod settings;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use thermovox_core::config_manager::ConfigManager;
use thermovox_core::models::command::VoiceCommand;
use thermovox_network::device_client::HttpDeviceClient;
use thermovox_session::service::{Activation, VoiceCommandService};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::console::ConsoleConnection;
use crate::lifecycle::HostLifecycle;

/// THERMOVOX 음성 명령 서비스
///
/// 창고 온습도를 조회하고 필요하면 팬을 켠다
#[derive(Parser, Debug)]
#[command(name = "thermovox")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "warn", global = true)]
    log_level: String,

    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 콘솔 호스트로 음성 명령 세션 한 번 실행
    Ask {
        /// 사용자가 말한 조건 구절
        #[arg(long, default_value = "")]
        condition: String,

        /// 음성 명령 이름
        #[arg(long, default_value = "Temperature")]
        command: String,

        /// 팬 작동 확인에 자동으로 "예"
        #[arg(long, conflicts_with = "no")]
        yes: bool,

        /// 팬 작동 확인에 자동으로 "아니오"
        #[arg(long)]
        no: bool,
    },
    /// 장치 설정
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// 현재 설정 출력
    Show,
    /// 장치 호스트 주소 변경
    SetHost {
        /// IP 주소 또는 호스트 이름
        addr: String,
    },
}

fn open_config(path: Option<PathBuf>) -> Result<ConfigManager> {
    let manager = match path {
        Some(path) => ConfigManager::with_path(path)?,
        None => ConfigManager::new()?,
    };
    Ok(manager)
}

/// 세션 한 번 실행
async fn ask(
    manager: &ConfigManager,
    condition: String,
    command_name: String,
    preset_answer: Option<bool>,
) -> Result<Activation> {
    let config = manager.get();

    // 호스트 주소는 세션 시작 시 한 번만 읽는다
    let device = Arc::new(HttpDeviceClient::from_provider(manager, &config.device)?);
    info!("장치 엔드포인트: {}", device.endpoint());

    let mut voice_command = VoiceCommand::new(command_name);
    if !condition.trim().is_empty() {
        voice_command = voice_command.with_property(&config.session.condition_property, condition);
    }
    let connection = Arc::new(ConsoleConnection::stdio(voice_command, preset_answer));

    let lifecycle = HostLifecycle::new();
    let signal_task = lifecycle.spawn_signal_handler();

    let trigger = config.session.service_name.clone();
    let service = VoiceCommandService::new(config, device, connection);
    let activation = service
        .activate(&trigger, lifecycle.session().subscribe(), lifecycle.deferral())
        .await;

    signal_task.abort();
    Ok(activation)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_filter = format!(
        "thermovox={},thermovox_app={},thermovox_core={},thermovox_network={},thermovox_session={}",
        args.log_level, args.log_level, args.log_level, args.log_level, args.log_level
    );
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    let manager = open_config(args.config)?;
    let mut out = std::io::stdout();

    match args.command {
        Command::Settings { action } => {
            match action {
                SettingsAction::Show => settings::show(&manager, &mut out)?,
                SettingsAction::SetHost { addr } => settings::set_host(&manager, &addr, &mut out)?,
            }
            Ok(())
        }
        Command::Ask {
            condition,
            command,
            yes,
            no,
        } => {
            let preset_answer = match (yes, no) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };

            match ask(&manager, condition, command, preset_answer).await? {
                Activation::Completed(outcome) if !outcome.is_success_shaped() => {
                    error!("세션 실패");
                    Err(anyhow!(outcome.message().display))
                }
                Activation::Completed(_) | Activation::AppLaunched => Ok(()),
                Activation::Ignored => Err(anyhow!("activation was ignored")),
                Activation::Cancelled => {
                    info!("세션 취소됨");
                    // 표준 입력 읽기 스레드를 기다리지 않고 종료
                    std::process::exit(130);
                }
            }
        }
    }
}
