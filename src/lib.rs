pub mod core;
pub mod cli;

pub use crate::core::chat::{Interpreter, StatementExecutor, TableFormatter};
pub use crate::core::command::{Command, Intent};
pub use crate::core::error::{ChatError, ErrorKind};
pub use crate::core::session::ChatSession;
pub use crate::core::storage::{memory::MemoryStore, sqlite::SqliteStore, TableStore};
use std::path::PathBuf;

/// 对一行输入给出回复的统一接口
///
/// # 参数
/// * `sentence` - 用户输入的一行英文句子
/// * `data_dir` - 表文件所在目录，不提供时使用内存存储
///
/// # 返回值
/// * `String` - 回复文本，失败时为 `Error: <消息>`
pub fn process_input(sentence: &str, data_dir: Option<PathBuf>) -> String {
    let store: Box<dyn TableStore> = match data_dir {
        Some(path) => match SqliteStore::new(path) {
            Ok(store) => Box::new(store),
            Err(e) => return e.brief_message(),
        },
        None => Box::new(MemoryStore::new()),
    };

    ChatSession::new(store).respond(sentence)
}

