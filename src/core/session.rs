use tracing::{debug, warn};
use crate::core::chat::{Interpreter, StatementExecutor};
use crate::core::error::ChatError;
use crate::core::storage::TableStore;

/// 一次对话：每提交一行调用一次 `respond`，命令之间不保留状态
pub struct ChatSession {
    store: Box<dyn TableStore>,
}

impl ChatSession {
    pub fn new(store: Box<dyn TableStore>) -> Self {
        ChatSession { store }
    }

    pub fn is_exit(line: &str) -> bool {
        line.trim().eq_ignore_ascii_case("exit")
    }

    // 解析并执行，保留具体的错误类型
    pub fn try_respond(&mut self, line: &str) -> Result<String, ChatError> {
        let command = Interpreter::parse(line)?;
        debug!(intent = %command.intent(), "parsed command");
        StatementExecutor::new(&mut *self.store).execute(command)
    }

    /// 所有错误都在这里变成 `Error: <消息>`
    pub fn respond(&mut self, line: &str) -> String {
        match self.try_respond(line) {
            Ok(response) => response,
            Err(e) => {
                warn!(kind = ?e.kind(), error = %e, "command failed");
                e.brief_message()
            }
        }
    }
}
