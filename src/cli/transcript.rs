use std::io::Write;

const USER_STYLE: &str = "\x1b[1;34m"; // 粗体蓝色
const BOT_STYLE: &str = "\x1b[3;32m"; // 斜体绿色
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    fn label(self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Bot",
        }
    }

    fn style(self) -> &'static str {
        match self {
            Sender::User => USER_STYLE,
            Sender::Bot => BOT_STYLE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

/// 对话记录，只追加不修改
///
/// `styled` 为真时按发送者上色并显示输入提示符，一般只在终端上打开
pub struct Transcript<W: Write> {
    out: W,
    styled: bool,
    messages: Vec<Message>,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Transcript {
            out,
            styled,
            messages: Vec::new(),
        }
    }

    pub fn banner(&mut self) -> std::io::Result<()> {
        if self.styled {
            writeln!(self.out, "SQL Chatbot - talk to your SQLite tables in plain English")?;
            writeln!(self.out, "Type 'exit' to quit")?;
        }
        Ok(())
    }

    pub fn prompt(&mut self) -> std::io::Result<()> {
        if self.styled {
            write!(self.out, "> ")?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn append(&mut self, sender: Sender, text: &str) -> std::io::Result<()> {
        if self.styled {
            writeln!(self.out, "{}{}: {}{}", sender.style(), sender.label(), text, RESET)?;
        } else {
            writeln!(self.out, "{}: {}", sender.label(), text)?;
        }
        self.out.flush()?;
        self.messages.push(Message {
            sender,
            text: text.to_string(),
        });
        Ok(())
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
