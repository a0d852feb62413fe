use std::fmt;

/// 输入句子被识别出的操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Create,
    Insert,
    Update,
    Delete,
    Select,
    Unknown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Create => "create",
            Intent::Insert => "insert",
            Intent::Update => "update",
            Intent::Delete => "delete",
            Intent::Select => "select",
            Intent::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// 一条输入解析后的命令，只在本次请求内存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create {
        table: String,
        columns: Vec<String>,
    },
    Insert {
        table: String,
        values: Vec<String>,
    },
    Update {
        table: String,
        updates: Vec<String>,
        condition: String,
    },
    Delete {
        table: String,
        condition: String,
    },
    Select {
        table: String,
        columns: Vec<String>,
        condition: String,
    },
    Unknown,
}

impl Command {
    pub fn intent(&self) -> Intent {
        match self {
            Command::Create { .. } => Intent::Create,
            Command::Insert { .. } => Intent::Insert,
            Command::Update { .. } => Intent::Update,
            Command::Delete { .. } => Intent::Delete,
            Command::Select { .. } => Intent::Select,
            Command::Unknown => Intent::Unknown,
        }
    }

    pub fn table_name(&self) -> Option<&str> {
        match self {
            Command::Create { table, .. }
            | Command::Insert { table, .. }
            | Command::Update { table, .. }
            | Command::Delete { table, .. }
            | Command::Select { table, .. } => Some(table),
            Command::Unknown => None,
        }
    }

    /// 按位置排列的参数：列表参数在前，条件在最后
    pub fn arguments(&self) -> Vec<String> {
        match self {
            Command::Create { columns, .. } => columns.clone(),
            Command::Insert { values, .. } => values.clone(),
            Command::Update { updates, condition, .. } => {
                let mut args = updates.clone();
                args.push(condition.clone());
                args
            }
            Command::Delete { condition, .. } => vec![condition.clone()],
            Command::Select { columns, condition, .. } => {
                let mut args = columns.clone();
                args.push(condition.clone());
                args
            }
            Command::Unknown => Vec::new(),
        }
    }
}
