use std::fs;
use std::path::{Path, PathBuf};
use rusqlite::Connection;
use tracing::trace;
use crate::core::error::ChatError;
use super::{create_table, delete_rows, insert_row, select_rows, update_rows, TableStore};

/// 每张表一个 SQLite 文件：`<base_dir>/<表名>.db`
///
/// 每次操作都新开连接，执行一条语句后关闭，不保留任何连接状态
pub struct SqliteStore {
    base_dir: PathBuf,
}

impl SqliteStore {
    pub fn new(base_dir: PathBuf) -> Result<Self, ChatError> {
        // 确保数据目录存在
        if !base_dir.exists() {
            fs::create_dir_all(&base_dir)?;
        }
        Ok(SqliteStore { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    // 表名直接拼接成文件名，不做任何规范化
    pub fn table_path(&self, table_name: &str) -> PathBuf {
        self.base_dir.join(format!("{}.db", table_name))
    }

    fn open(&self, table_name: &str) -> Result<Connection, ChatError> {
        let path = self.table_path(table_name);
        trace!(path = %path.display(), "opening table file");
        Ok(Connection::open(path)?)
    }

    fn close(conn: Connection) -> Result<(), ChatError> {
        conn.close().map_err(|(_, e)| ChatError::Storage(e))
    }
}

impl TableStore for SqliteStore {
    fn create(&mut self, table: &str, columns: &[String]) -> Result<(), ChatError> {
        let conn = self.open(table)?;
        create_table(&conn, table, columns)?;
        Self::close(conn)
    }

    fn insert(&mut self, table: &str, values: &[String]) -> Result<(), ChatError> {
        let conn = self.open(table)?;
        insert_row(&conn, table, values)?;
        Self::close(conn)
    }

    fn update(&mut self, table: &str, updates: &[String], condition: &str) -> Result<usize, ChatError> {
        let conn = self.open(table)?;
        let changed = update_rows(&conn, table, updates, condition)?;
        Self::close(conn)?;
        Ok(changed)
    }

    fn delete(&mut self, table: &str, condition: &str) -> Result<usize, ChatError> {
        let conn = self.open(table)?;
        let removed = delete_rows(&conn, table, condition)?;
        Self::close(conn)?;
        Ok(removed)
    }

    fn select(&mut self, table: &str, columns: &[String], condition: &str) -> Result<Vec<Vec<String>>, ChatError> {
        let conn = self.open(table)?;
        let rows = select_rows(&conn, table, columns, condition)?;
        Self::close(conn)?;
        Ok(rows)
    }
}
