use crate::core::command::{Command, Intent};
use crate::core::error::ChatError;
use super::phrases::{
    DELETE_LEADS, FROM, INSERT_LEADS, INTO, LIST_SEPARATOR, PHRASEBOOK, SELECT_LEADS, SET, WHERE,
    WITH_COLUMNS,
};

/// 把一行英文句子翻译成命令
///
/// 参数提取只是按固定子串切分，值里面出现分隔符（比如值中含有 " where "）
/// 会切错，这里不做检测
pub struct Interpreter;

impl Interpreter {
    /// 按短语表顺序检查前缀，都不匹配时返回 Unknown
    pub fn classify(sentence: &str) -> Intent {
        PHRASEBOOK
            .iter()
            .find(|(_, prefixes)| prefixes.iter().any(|p| sentence.starts_with(p)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Unknown)
    }

    pub fn parse(sentence: &str) -> Result<Command, ChatError> {
        match Self::classify(sentence) {
            Intent::Create => Self::parse_create(sentence),
            Intent::Insert => Self::parse_insert(sentence),
            Intent::Update => Self::parse_update(sentence),
            Intent::Delete => Self::parse_delete(sentence),
            Intent::Select => Self::parse_select(sentence),
            Intent::Unknown => Ok(Command::Unknown),
        }
    }

    fn parse_create(sentence: &str) -> Result<Command, ChatError> {
        let parts: Vec<&str> = sentence.split(WITH_COLUMNS).collect();
        let table = last_word(piece(&parts, 0, WITH_COLUMNS)?);
        let columns = split_list(piece(&parts, 1, WITH_COLUMNS)?);
        Ok(Command::Create { table, columns })
    }

    fn parse_insert(sentence: &str) -> Result<Command, ChatError> {
        let parts: Vec<&str> = sentence.split(INTO).collect();
        let values = split_list(&strip_leads(piece(&parts, 0, INTO)?, &INSERT_LEADS));
        let table = piece(&parts, 1, INTO)?.to_string();
        Ok(Command::Insert { table, values })
    }

    fn parse_update(sentence: &str) -> Result<Command, ChatError> {
        let parts: Vec<&str> = sentence.split(SET).collect();
        let table = last_word(piece(&parts, 0, SET)?);
        let set_part: Vec<&str> = piece(&parts, 1, SET)?.split(WHERE).collect();
        let updates = split_list(piece(&set_part, 0, WHERE)?);
        let condition = piece(&set_part, 1, WHERE)?.to_string();
        Ok(Command::Update { table, updates, condition })
    }

    fn parse_delete(sentence: &str) -> Result<Command, ChatError> {
        let parts: Vec<&str> = sentence.split(WHERE).collect();
        let table = strip_leads(piece(&parts, 0, WHERE)?, &DELETE_LEADS);
        let condition = piece(&parts, 1, WHERE)?.to_string();
        Ok(Command::Delete { table, condition })
    }

    fn parse_select(sentence: &str) -> Result<Command, ChatError> {
        let parts: Vec<&str> = sentence.split(FROM).collect();
        let columns = split_list(&strip_leads(piece(&parts, 0, FROM)?, &SELECT_LEADS));
        let condition_part: Vec<&str> = piece(&parts, 1, FROM)?.split(WHERE).collect();
        let table = piece(&condition_part, 0, WHERE)?.to_string();
        let condition = piece(&condition_part, 1, WHERE)?.to_string();
        Ok(Command::Select { table, columns, condition })
    }
}

fn piece<'a>(parts: &[&'a str], index: usize, delimiter: &str) -> Result<&'a str, ChatError> {
    parts.get(index).copied().ok_or_else(|| {
        ChatError::parse(format!("expected '{}' in command", delimiter.trim()))
    })
}

fn last_word(text: &str) -> String {
    text.rsplit(' ').next().unwrap_or_default().to_string()
}

// 句子中任意位置出现的前导词都会被去掉
fn strip_leads(text: &str, leads: &[&str]) -> String {
    leads.iter().fold(text.to_string(), |acc, lead| acc.replace(lead, ""))
}

fn split_list(text: &str) -> Vec<String> {
    text.split(LIST_SEPARATOR).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn create_phrasings_agree() {
        for sentence in [
            "Create a table named users with columns name, age",
            "Build a new table called users with columns name, age",
            "Make a table with name users with columns name, age",
        ] {
            let cmd = Interpreter::parse(sentence).unwrap();
            assert_eq!(
                cmd,
                Command::Create { table: "users".into(), columns: strings(&["name", "age"]) },
                "{}",
                sentence
            );
        }
    }

    #[test]
    fn insert_phrasings_agree() {
        for sentence in [
            "Insert values Alice, 30 into users",
            "Add records Alice, 30 into users",
            "Put data Alice, 30 into users",
        ] {
            let cmd = Interpreter::parse(sentence).unwrap();
            assert_eq!(cmd.intent(), Intent::Insert);
            assert_eq!(cmd.table_name(), Some("users"));
            assert_eq!(cmd.arguments(), strings(&["Alice", "30"]));
        }
    }

    #[test]
    fn update_phrasings_agree() {
        for sentence in [
            "Update users set age = 31, name = 'Al' where name = 'Alice'",
            "Modify table users set age = 31, name = 'Al' where name = 'Alice'",
            "Change records in users set age = 31, name = 'Al' where name = 'Alice'",
        ] {
            let cmd = Interpreter::parse(sentence).unwrap();
            assert_eq!(
                cmd,
                Command::Update {
                    table: "users".into(),
                    updates: strings(&["age = 31", "name = 'Al'"]),
                    condition: "name = 'Alice'".into(),
                }
            );
        }
    }

    #[test]
    fn delete_phrasings_agree() {
        for sentence in [
            "Delete from users where age > 40",
            "Remove records from users where age > 40",
            "Erase from users where age > 40",
        ] {
            let cmd = Interpreter::parse(sentence).unwrap();
            assert_eq!(
                cmd,
                Command::Delete { table: "users".into(), condition: "age > 40".into() }
            );
        }
    }

    #[test]
    fn select_phrasings_agree() {
        for sentence in [
            "Select name, age from users where 1=1",
            "Retrieve data name, age from users where 1=1",
            "Fetch name, age from users where 1=1",
        ] {
            let cmd = Interpreter::parse(sentence).unwrap();
            assert_eq!(
                cmd,
                Command::Select {
                    table: "users".into(),
                    columns: strings(&["name", "age"]),
                    condition: "1=1".into(),
                }
            );
        }
    }

    #[test]
    fn first_matching_intent_wins() {
        // "Updated" 以 "Update" 开头
        assert_eq!(Interpreter::classify("Updated everything"), Intent::Update);
        assert_eq!(Interpreter::classify("Selecting things"), Intent::Select);
        assert_eq!(Interpreter::classify("create a table named t"), Intent::Unknown);
    }

    #[test]
    fn unknown_sentence_is_not_an_error() {
        assert_eq!(Interpreter::parse("Hello there").unwrap(), Command::Unknown);
        assert_eq!(Interpreter::parse("").unwrap(), Command::Unknown);
    }

    #[test]
    fn missing_delimiter_is_a_parse_error() {
        let err = Interpreter::parse("Create a table named users").unwrap_err();
        assert_eq!(err.kind(), crate::core::error::ErrorKind::Parse);
        assert_eq!(err.to_string(), "expected 'with columns' in command");

        assert!(Interpreter::parse("Delete from users").is_err());
        assert!(Interpreter::parse("Update users set a = 1").is_err());
        assert!(Interpreter::parse("Select a from users").is_err());
        assert!(Interpreter::parse("Insert values a, b").is_err());
    }

    #[test]
    fn delimiter_inside_value_splits_wrongly() {
        let cmd = Interpreter::parse("Insert values walk into bar into users").unwrap();
        assert_eq!(cmd.table_name(), Some("bar"));
        assert_eq!(cmd.arguments(), strings(&["walk"]));
    }
}
