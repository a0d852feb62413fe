use sql_chatbot::{ChatSession, SqliteStore};
use std::path::PathBuf;

fn main() {
    // 表文件放在临时目录，可以用第一个参数指定
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("sql_chatbot_walkthrough"));

    let store = match SqliteStore::new(data_dir.clone()) {
        Ok(store) => store,
        Err(e) => {
            println!("无法打开数据目录 {}: {}", data_dir.display(), e);
            return;
        }
    };
    let mut session = ChatSession::new(Box::new(store));

    // 第一组：每种说法都走一遍
    let basic = vec![
        "Create a table named pets with columns name, kind, age",
        "Build a new table called pets with columns name, kind, age",
        "Make a table with name owners with columns name, city",
        "Insert values Rex, dog, 3 into pets",
        "Add records Tom, cat, 5 into pets",
        "Put data Nemo, fish, 1 into pets",
        "Put data Alice, Paris into owners",
        "Select name, kind, age from pets where 1=1",
        "Update pets set age = '4' where name = 'Rex'",
        "Modify table pets set kind = 'kitten' where name = 'Tom'",
        "Change records in owners set city = 'Rome' where name = 'Alice'",
        "Retrieve data name, age from pets where age > 2",
        "Fetch name, city from owners where 1=1",
        "Delete from pets where name = 'Nemo'",
        "Remove records from pets where kind = 'kitten'",
        "Erase from owners where city = 'Rome'",
        "Select name, kind, age from pets where 1=1",
        "Fetch name, city from owners where 1=1",
    ];

    // 第二组：错误输入
    let errors = vec![
        "Hello, bot",
        "Create a table named broken",
        "Select name from nowhere where 1=1",
        "Insert values a, b, c, d into pets",
        "Delete from pets where",
        "Insert values walk into bar into pets",
    ];

    for (title, lines) in [("基本功能", basic), ("错误处理", errors)] {
        println!("\n=== {} ===", title);
        for (i, line) in lines.iter().enumerate() {
            println!("\n#{} You: {}", i + 1, line);
            println!("Bot: {}", session.respond(line));
        }
    }
}
