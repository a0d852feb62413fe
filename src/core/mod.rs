pub mod chat;
pub mod command;
pub mod error;
pub mod session;
pub mod storage;
