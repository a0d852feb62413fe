use crate::core::command::Intent;

/// 每种操作的三种同义说法，按顺序检查，第一个匹配的获胜
pub const PHRASEBOOK: [(Intent, [&str; 3]); 5] = [
    (Intent::Create, ["Create a table named", "Build a new table called", "Make a table with name"]),
    (Intent::Insert, ["Insert values", "Add records", "Put data"]),
    (Intent::Update, ["Update", "Modify table", "Change records in"]),
    (Intent::Delete, ["Delete from", "Remove records from", "Erase from"]),
    (Intent::Select, ["Select", "Retrieve data", "Fetch"]),
];

// 提取参数前要从句子里去掉的前导词（带尾随空格）
pub const INSERT_LEADS: [&str; 3] = ["Insert values ", "Add records ", "Put data "];
pub const DELETE_LEADS: [&str; 3] = ["Delete from ", "Remove records from ", "Erase from "];
pub const SELECT_LEADS: [&str; 3] = ["Select ", "Retrieve data ", "Fetch "];

pub const WITH_COLUMNS: &str = " with columns ";
pub const INTO: &str = " into ";
pub const SET: &str = " set ";
pub const WHERE: &str = " where ";
pub const FROM: &str = " from ";
pub const LIST_SEPARATOR: &str = ", ";

pub const NOT_UNDERSTOOD: &str = "Sorry, I couldn't understand your command.";
