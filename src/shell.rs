//! Interactive line-oriented session.
//!
//! Every line is parsed with the same definitions as the one-shot
//! subcommands. A store subscriber redraws the ranked table after each
//! committed change, with the transient banner above it.

use crate::cli::{Commands, ShellCommand, ShellLine};
use crate::cli_handlers::{handle_command, open_store, today_local};
use crate::config::Config;
use crate::core::TodoState;
use crate::notify::Banner;
use crate::render;
use anyhow::Context;
use clap::Parser;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

const PROMPT: &str = "todo> ";

/// Run the shell until `quit` or end of input
pub async fn run_shell(config: &Config) -> anyhow::Result<()> {
    let mut store = open_store(config)
        .with_context(|| format!("opening task store at {}", config.db_path.display()))?;
    let banner = Rc::new(RefCell::new(Banner::new(config.banner_duration)));

    let view_banner = Rc::clone(&banner);
    store.subscribe(move |state, event| {
        if let Some(message) = event.message() {
            view_banner.borrow_mut().show(message);
        }
        draw(state, view_banner.borrow().current().as_deref());
    });

    draw(store.state(), None);
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading input")? {
        let args = split_args(&line);
        if args.is_empty() {
            prompt()?;
            continue;
        }

        match ShellLine::try_parse_from(&args) {
            Ok(ShellLine {
                command: ShellCommand::Quit,
            }) => break,
            Ok(ShellLine {
                command: ShellCommand::Task(command),
            }) => {
                if matches!(command, Commands::List { .. }) {
                    if let Some(message) = banner.borrow().current() {
                        println!("{}", render::banner(&message));
                    }
                }
                debug!(?command, "shell command");
                if let Err(e) = handle_command(&mut store, command) {
                    eprintln!("Error: {e}");
                }
            }
            Err(e) => {
                // clap renders help and usage errors itself
                let _ = e.print();
            }
        }
        prompt()?;
    }

    banner.borrow_mut().dismiss();
    Ok(())
}

fn draw(state: &TodoState, message: Option<&str>) {
    println!();
    if let Some(message) = message {
        println!("{}", render::banner(message));
    }
    println!("{}", render::table(&state.ranked(today_local())));
}

fn prompt() -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()?;
    Ok(())
}

/// Split a line into words, keeping quoted sections together.
pub fn split_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_word = false;

    for c in line.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    args.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        args.push(current);
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_words() {
        assert_eq!(split_args("  delete   3 "), vec!["delete", "3"]);
        assert!(split_args("   ").is_empty());
    }

    #[test]
    fn test_split_quoted() {
        assert_eq!(
            split_args(r#"add "Buy oat milk" --priority high"#),
            vec!["add", "Buy oat milk", "--priority", "high"]
        );
        assert_eq!(split_args("add 'it''s'"), vec!["add", "its"]);
        assert_eq!(split_args(r#"add """#), vec!["add", ""]);
    }

    #[test]
    fn test_shell_line_parses_task_commands() {
        let line = ShellLine::try_parse_from(split_args("toggle 4")).unwrap();
        assert!(matches!(
            line.command,
            ShellCommand::Task(Commands::Toggle { id: 4 })
        ));

        let line = ShellLine::try_parse_from(split_args("exit")).unwrap();
        assert!(matches!(line.command, ShellCommand::Quit));
    }
}
