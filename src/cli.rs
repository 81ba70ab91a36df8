use crate::models::{Priority, parse_date_arg, parse_priority};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Ranked to-do list with due dates and priorities")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Path to the task database
    #[arg(long, global = true, env = "TODO_DB")]
    pub db: Option<PathBuf>,

    /// Seconds a status message stays visible in the shell
    #[arg(long, global = true, env = "TODO_BANNER_SECS")]
    pub banner_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Fields of the add/edit form
#[derive(Args, Debug, Clone)]
pub struct TaskFields {
    /// Task description
    pub task: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub due: Option<NaiveDate>,
    /// Priority: low, medium or high
    #[arg(long, value_parser = parse_priority, default_value = "low")]
    pub priority: Priority,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(TaskFields),

    /// Edit an existing task
    Edit {
        /// Task ID
        id: i64,
        #[command(flatten)]
        fields: TaskFields,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task ID
        id: i64,
    },

    /// Mark a task completed, or pending again
    Toggle {
        /// Task ID
        id: i64,
    },

    /// Delete every task
    Clear,

    /// List tasks, most urgent first
    List {
        /// Rank relative to this date instead of today
        #[arg(long, value_parser = parse_date_arg)]
        today: Option<NaiveDate>,
        /// Print the tasks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive session
    Shell,
}

/// Commands accepted inside the shell, one per line
#[derive(Parser, Debug)]
#[command(name = "todo", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    #[command(flatten)]
    Task(Commands),

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}
