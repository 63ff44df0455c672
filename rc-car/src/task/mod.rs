//! Task implementations
pub mod command_receive;
pub mod drive;
