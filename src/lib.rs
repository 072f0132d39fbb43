pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod generate;
pub mod models;
pub mod output;
pub mod parse;
pub mod validate;
