mod phrases;
mod interpreter;
mod executor;
mod formatter;

pub use phrases::{NOT_UNDERSTOOD, PHRASEBOOK};
pub use interpreter::Interpreter;
pub use executor::{quoted_list, StatementExecutor};
pub use formatter::TableFormatter;
