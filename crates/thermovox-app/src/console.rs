//! 콘솔 음성 호스트.
//!
//! 표준 입출력으로 호스트 음성 세션을 흉내 낸다. 진행/최종 응답은
//! 타임스탬프와 함께 출력하고 확인 프롬프트는 y/n 입력을 받는다.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::io::Write;
use thermovox_core::error::CoreError;
use thermovox_core::models::command::VoiceCommand;
use thermovox_core::models::response::{UserMessage, VoicePrompt, VoiceResponse};
use thermovox_core::ports::voice_connection::VoiceConnection;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

type Input = Box<dyn AsyncBufRead + Send + Unpin>;
type Output = Box<dyn Write + Send>;

/// 콘솔 호스트 연결
pub struct ConsoleConnection {
    command: VoiceCommand,
    preset_answer: Option<bool>,
    input: tokio::sync::Mutex<Input>,
    output: Mutex<Output>,
}

impl ConsoleConnection {
    /// 표준 입출력 연결
    pub fn stdio(command: VoiceCommand, preset_answer: Option<bool>) -> Self {
        Self::new(
            command,
            preset_answer,
            Box::new(tokio::io::BufReader::new(tokio::io::stdin())),
            Box::new(std::io::stdout()),
        )
    }

    pub fn new(
        command: VoiceCommand,
        preset_answer: Option<bool>,
        input: Input,
        output: Output,
    ) -> Self {
        Self {
            command,
            preset_answer,
            input: tokio::sync::Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    fn emit(&self, tag: &str, response: &VoiceResponse) -> Result<(), CoreError> {
        let mut out = self.output.lock();
        let ts = chrono::Local::now().format("%H:%M:%S");
        writeln!(out, "[{ts}] {tag}: {}", render_message(&response.message))?;
        for tile in &response.tiles {
            writeln!(out, "    {:<12} {}", tile.title, tile.text)?;
        }
        if let Some(argument) = &response.app_launch_argument {
            writeln!(out, "    (launch argument: {argument:?})")?;
        }
        out.flush()?;
        Ok(())
    }

    fn ask(&self, message: &UserMessage) -> Result<(), CoreError> {
        let mut out = self.output.lock();
        write!(out, "{} [y/n] ", render_message(message))?;
        out.flush()?;
        Ok(())
    }

    /// 한 줄 읽기. EOF면 `None`
    async fn read_line(&self) -> Result<Option<String>, CoreError> {
        let mut line = String::new();
        let read = self.input.lock().await.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// 표시 문자열과 음성 문자열이 다르면 둘 다 보여준다
fn render_message(message: &UserMessage) -> String {
    if message.display == message.spoken {
        message.display.clone()
    } else {
        format!("{} (spoken: {})", message.display, message.spoken)
    }
}

/// y/n 응답 해석
fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[async_trait]
impl VoiceConnection for ConsoleConnection {
    async fn get_voice_command(&self) -> Result<VoiceCommand, CoreError> {
        Ok(self.command.clone())
    }

    async fn report_progress(&self, response: &VoiceResponse) -> Result<(), CoreError> {
        self.emit("progress", response)
    }

    async fn report_success(&self, response: &VoiceResponse) -> Result<(), CoreError> {
        self.emit("success", response)
    }

    async fn report_failure(&self, response: &VoiceResponse) -> Result<(), CoreError> {
        self.emit("failure", response)
    }

    async fn request_confirmation(
        &self,
        prompt: &VoicePrompt,
    ) -> Result<Option<bool>, CoreError> {
        self.ask(&prompt.prompt)?;
        if let Some(answer) = self.preset_answer {
            let mut out = self.output.lock();
            writeln!(out, "{}", if answer { "y" } else { "n" })?;
            return Ok(Some(answer));
        }

        let Some(line) = self.read_line().await? else {
            return Ok(None);
        };
        if let Some(answer) = parse_answer(&line) {
            return Ok(Some(answer));
        }

        debug!("알 수 없는 응답: {:?}", line.trim());
        self.ask(&prompt.reprompt)?;
        Ok(self.read_line().await?.as_deref().and_then(parse_answer))
    }

    async fn request_app_launch(&self, response: &VoiceResponse) -> Result<(), CoreError> {
        self.emit("launch", response)
    }
}
