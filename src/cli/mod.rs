pub mod transcript;

use clap::Parser;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use crate::core::error::ChatError;
use crate::core::session::ChatSession;
use crate::core::storage::sqlite::SqliteStore;
use transcript::{Sender, Transcript};

#[derive(Parser, Debug)]
#[command(author, version, about = "Translate plain English sentences into SQLite table operations", long_about = None)]
pub struct Cli {
    /// Directory holding one <table>.db file per table
    #[arg(short, long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Disable colored transcript output
    #[arg(long)]
    pub plain: bool,

    /// Log filter for stderr output (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn run(&self) -> Result<(), ChatError> {
        let store = SqliteStore::new(self.data_dir.clone())?;
        let mut session = ChatSession::new(Box::new(store));

        let stdout = std::io::stdout();
        let styled = !self.plain && stdout.is_terminal();
        let mut transcript = Transcript::new(stdout.lock(), styled);

        let stdin = std::io::stdin();
        run_session(&mut session, stdin.lock(), &mut transcript)
    }
}

/// 逐行读取输入，直到 exit 或输入结束
pub fn run_session<R: BufRead, W: Write>(
    session: &mut ChatSession,
    mut input: R,
    transcript: &mut Transcript<W>,
) -> Result<(), ChatError> {
    transcript.banner()?;

    loop {
        transcript.prompt()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if ChatSession::is_exit(line) {
            break;
        }

        transcript.append(Sender::User, line)?;
        let response = session.respond(line);
        transcript.append(Sender::Bot, &response)?;
    }

    Ok(())
}
