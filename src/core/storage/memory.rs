use std::collections::hash_map::Entry;
use std::collections::HashMap;
use rusqlite::Connection;
use crate::core::error::ChatError;
use super::{create_table, delete_rows, insert_row, select_rows, update_rows, TableStore};

/// 内存中的 SQLite，每个表名对应一个独立的内存库，用于测试
pub struct MemoryStore {
    stores: HashMap<String, Connection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            stores: HashMap::new(),
        }
    }

    // 第一次访问某个表名时建库，和打开一个新文件的效果一样
    fn connection(&mut self, table_name: &str) -> Result<&Connection, ChatError> {
        match self.stores.entry(table_name.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(Connection::open_in_memory()?)),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TableStore for MemoryStore {
    fn create(&mut self, table: &str, columns: &[String]) -> Result<(), ChatError> {
        create_table(self.connection(table)?, table, columns)
    }

    fn insert(&mut self, table: &str, values: &[String]) -> Result<(), ChatError> {
        insert_row(self.connection(table)?, table, values)
    }

    fn update(&mut self, table: &str, updates: &[String], condition: &str) -> Result<usize, ChatError> {
        update_rows(self.connection(table)?, table, updates, condition)
    }

    fn delete(&mut self, table: &str, condition: &str) -> Result<usize, ChatError> {
        delete_rows(self.connection(table)?, table, condition)
    }

    fn select(&mut self, table: &str, columns: &[String], condition: &str) -> Result<Vec<Vec<String>>, ChatError> {
        select_rows(self.connection(table)?, table, columns, condition)
    }
}
