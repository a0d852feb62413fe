use tracing::debug;
use crate::core::command::Command;
use crate::core::error::ChatError;
use crate::core::storage::TableStore;
use super::phrases::NOT_UNDERSTOOD;
use super::TableFormatter;

pub struct StatementExecutor<'a> {
    store: &'a mut dyn TableStore,
}

impl<'a> StatementExecutor<'a> {
    pub fn new(store: &'a mut dyn TableStore) -> Self {
        StatementExecutor { store }
    }

    /// 执行一条命令并生成回复文本，存储层的错误原样向上传递
    pub fn execute(&mut self, command: Command) -> Result<String, ChatError> {
        match command {
            Command::Create { table, columns } => {
                self.store.create(&table, &columns)?;
                Ok(format!("Table '{}' created with columns {}", table, quoted_list(&columns)))
            }
            Command::Insert { table, values } => {
                self.store.insert(&table, &values)?;
                Ok(format!("Inserted values {} into '{}'", quoted_list(&values), table))
            }
            Command::Update { table, updates, condition } => {
                let changed = self.store.update(&table, &updates, &condition)?;
                debug!(%table, changed, "rows updated");
                Ok(format!(
                    "Updated table '{}' with {} where {}",
                    table,
                    quoted_list(&updates),
                    condition
                ))
            }
            Command::Delete { table, condition } => {
                let removed = self.store.delete(&table, &condition)?;
                debug!(%table, removed, "rows deleted");
                Ok(format!("Deleted from '{}' where {}", table, condition))
            }
            Command::Select { table, columns, condition } => {
                let rows = self.store.select(&table, &columns, &condition)?;
                if rows.is_empty() {
                    Ok(format!("No matching rows found in '{}'", table))
                } else {
                    // 表头用用户给出的列名，而不是引擎返回的列名
                    let grid = TableFormatter::format_grid(&columns, &rows);
                    Ok(format!("Selected rows:\n{}", grid))
                }
            }
            Command::Unknown => Ok(NOT_UNDERSTOOD.to_string()),
        }
    }
}

/// 列表显示成 `['a', 'b']`
pub fn quoted_list(items: &[String]) -> String {
    let quoted = items.iter().map(|item| quote(item)).collect::<Vec<_>>().join(", ");
    format!("[{}]", quoted)
}

// 含单引号而不含双引号时改用双引号，其余情况转义单引号
fn quote(item: &str) -> String {
    let escaped = item.replace('\\', "\\\\");
    if escaped.contains('\'') && !escaped.contains('"') {
        format!("\"{}\"", escaped)
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::memory::MemoryStore;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn run(store: &mut MemoryStore, command: Command) -> Result<String, ChatError> {
        StatementExecutor::new(store).execute(command)
    }

    #[test]
    fn quotes_like_a_list_literal() {
        assert_eq!(quoted_list(&strings(&["a", "b"])), "['a', 'b']");
        assert_eq!(quoted_list(&strings(&["name = 'Al'"])), "[\"name = 'Al'\"]");
        assert_eq!(quoted_list(&[]), "[]");
    }

    #[test]
    fn create_insert_select_responses() {
        let mut store = MemoryStore::new();
        let created = run(
            &mut store,
            Command::Create { table: "t".into(), columns: strings(&["a", "b"]) },
        )
        .unwrap();
        assert_eq!(created, "Table 't' created with columns ['a', 'b']");

        let inserted = run(
            &mut store,
            Command::Insert { table: "t".into(), values: strings(&["x", "y"]) },
        )
        .unwrap();
        assert_eq!(inserted, "Inserted values ['x', 'y'] into 't'");

        let selected = run(
            &mut store,
            Command::Select {
                table: "t".into(),
                columns: strings(&["a", "b"]),
                condition: "1=1".into(),
            },
        )
        .unwrap();
        assert_eq!(selected, "Selected rows:\n+-----+-----+\n| a   | b   |\n+=====+=====+\n| x   | y   |\n+-----+-----+");
    }

    #[test]
    fn update_and_delete_echo_their_clauses() {
        let mut store = MemoryStore::new();
        run(&mut store, Command::Create { table: "t".into(), columns: strings(&["a"]) }).unwrap();
        run(&mut store, Command::Insert { table: "t".into(), values: strings(&["1"]) }).unwrap();

        let updated = run(
            &mut store,
            Command::Update {
                table: "t".into(),
                updates: strings(&["a = '2'"]),
                condition: "a = '1'".into(),
            },
        )
        .unwrap();
        assert_eq!(updated, "Updated table 't' with [\"a = '2'\"] where a = '1'");

        let deleted = run(
            &mut store,
            Command::Delete { table: "t".into(), condition: "a = '2'".into() },
        )
        .unwrap();
        assert_eq!(deleted, "Deleted from 't' where a = '2'");

        let empty = run(
            &mut store,
            Command::Select { table: "t".into(), columns: strings(&["a"]), condition: "1=1".into() },
        )
        .unwrap();
        assert_eq!(empty, "No matching rows found in 't'");
    }

    #[test]
    fn missing_table_is_a_storage_error() {
        let mut store = MemoryStore::new();
        let err = run(
            &mut store,
            Command::Delete { table: "ghost".into(), condition: "1=1".into() },
        )
        .unwrap_err();
        assert_eq!(err.kind(), crate::core::error::ErrorKind::Storage);
        assert!(err.to_string().contains("no such table"), "{}", err);
    }

    #[test]
    fn unknown_command_gets_fixed_reply() {
        let mut store = MemoryStore::new();
        assert_eq!(run(&mut store, Command::Unknown).unwrap(), NOT_UNDERSTOOD);
    }
}
