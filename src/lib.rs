pub mod cli;
pub mod cli_handlers;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod notify;
pub mod persistence;
pub mod rank;
pub mod render;
pub mod shell;
pub mod storage;

pub use error::{Result, TodoError};
pub use models::*;
