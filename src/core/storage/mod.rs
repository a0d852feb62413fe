pub mod sqlite;
pub mod memory;

use rusqlite::types::ValueRef;
use rusqlite::{params_from_iter, Connection};
use tracing::debug;
use crate::core::error::ChatError;

/// 存储访问的窄接口，解释器和前端只依赖它
///
/// 表名、列名、SET 子句和条件都原样拼进 SQL，只有插入的值走参数绑定
pub trait TableStore {
    fn create(&mut self, table: &str, columns: &[String]) -> Result<(), ChatError>;
    fn insert(&mut self, table: &str, values: &[String]) -> Result<(), ChatError>;
    fn update(&mut self, table: &str, updates: &[String], condition: &str) -> Result<usize, ChatError>;
    fn delete(&mut self, table: &str, condition: &str) -> Result<usize, ChatError>;
    fn select(&mut self, table: &str, columns: &[String], condition: &str) -> Result<Vec<Vec<String>>, ChatError>;
}

// 下面的函数每次只执行一条语句，由调用方负责打开和关闭连接

pub(crate) fn create_table(conn: &Connection, table: &str, columns: &[String]) -> Result<(), ChatError> {
    let definitions = columns
        .iter()
        .map(|col| format!("{} TEXT", col))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("CREATE TABLE IF NOT EXISTS {} ({})", table, definitions);
    debug!(%sql, "executing");
    conn.execute(&sql, [])?;
    Ok(())
}

pub(crate) fn insert_row(conn: &Connection, table: &str, values: &[String]) -> Result<(), ChatError> {
    let placeholders = vec!["?"; values.len()].join(", ");
    let sql = format!("INSERT INTO {} VALUES ({})", table, placeholders);
    debug!(%sql, values = values.len(), "executing");
    conn.execute(&sql, params_from_iter(values.iter()))?;
    Ok(())
}

pub(crate) fn update_rows(conn: &Connection, table: &str, updates: &[String], condition: &str) -> Result<usize, ChatError> {
    let sql = format!("UPDATE {} SET {} WHERE {}", table, updates.join(", "), condition);
    debug!(%sql, "executing");
    Ok(conn.execute(&sql, [])?)
}

pub(crate) fn delete_rows(conn: &Connection, table: &str, condition: &str) -> Result<usize, ChatError> {
    let sql = format!("DELETE FROM {} WHERE {}", table, condition);
    debug!(%sql, "executing");
    Ok(conn.execute(&sql, [])?)
}

pub(crate) fn select_rows(conn: &Connection, table: &str, columns: &[String], condition: &str) -> Result<Vec<Vec<String>>, ChatError> {
    let sql = format!("SELECT {} FROM {} WHERE {}", columns.join(", "), table, condition);
    debug!(%sql, "executing");
    let mut stmt = conn.prepare(&sql)?;
    let width = stmt.column_count();
    let rows = stmt
        .query_map([], |row| {
            (0..width)
                .map(|i| row.get_ref(i).map(render_value))
                .collect::<Result<Vec<_>, _>>()
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(n) => n.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => b.iter().map(|byte| format!("{:02x}", byte)).collect(),
    }
}
