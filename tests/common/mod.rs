use tempfile::TempDir;
use sql_chatbot::{ChatSession, SqliteStore};

// 临时目录需要和会话活得一样久
pub fn setup_session() -> (TempDir, ChatSession) {
    let tmpdir = TempDir::new().expect("create temp dir");
    let store = SqliteStore::new(tmpdir.path().to_path_buf()).expect("open store");
    (tmpdir, ChatSession::new(Box::new(store)))
}

pub fn reopen(tmpdir: &TempDir) -> ChatSession {
    let store = SqliteStore::new(tmpdir.path().to_path_buf()).expect("open store");
    ChatSession::new(Box::new(store))
}
