//! Command Sender - 명령어 호출자

use parking_lot::Mutex;

/// 명령어를 호출한 주체 (콘솔, 플레이어 등)
pub trait CommandSender: Send + Sync {
    /// 호출자 이름
    fn name(&self) -> &str;

    /// 호출자에게 메시지 전송
    fn send_message(&self, message: &str);

    fn is_console(&self) -> bool {
        false
    }
}

/// 서버 콘솔 (stdout으로 출력)
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSender;

impl ConsoleSender {
    pub fn new() -> Self {
        Self
    }
}

impl CommandSender for ConsoleSender {
    fn name(&self) -> &str {
        "CONSOLE"
    }

    fn send_message(&self, message: &str) {
        println!("{}", message);
    }

    fn is_console(&self) -> bool {
        true
    }
}

/// 받은 메시지를 기록하는 호출자 (원격 콘솔, 테스트 등)
#[derive(Debug, Default)]
pub struct RecordingSender {
    name: String,
    messages: Mutex<Vec<String>>,
}

impl RecordingSender {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Mutex::new(Vec::new()),
        }
    }

    /// 지금까지 받은 메시지
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl CommandSender for RecordingSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn send_message(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
