pub mod commands;
pub mod generate;
pub mod init;
pub mod task;

pub use commands::*;
