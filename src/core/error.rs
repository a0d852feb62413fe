use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Storage(#[from] rusqlite::Error),

    #[error("{0}")]
    Io(#[from] io::Error),
}

/// 错误类别，调用方据此区分解析失败和存储失败
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Storage,
    Io,
}

impl ChatError {
    pub fn parse(msg: impl Into<String>) -> Self {
        ChatError::Parse(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::Parse(_) => ErrorKind::Parse,
            ChatError::Storage(_) => ErrorKind::Storage,
            ChatError::Io(_) => ErrorKind::Io,
        }
    }

    // 对话框里显示的错误文本
    pub fn brief_message(&self) -> String {
        format!("Error: {}", self)
    }
}
