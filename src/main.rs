use clap::Parser;
use std::process;
use todo::cli::{Cli, Commands};
use todo::cli_handlers;
use todo::config::Config;
use todo::render;
use todo::shell::run_shell;

#[tokio::main]
async fn main() {
    // Logs go to stderr so table output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_args(cli.db, cli.banner_secs);

    if let Commands::Shell = cli.command {
        if let Err(e) = run_shell(&config).await {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
        return;
    }

    let result = cli_handlers::open_store(&config)
        .and_then(|mut store| cli_handlers::handle_command(&mut store, cli.command));

    match result {
        Ok(Some(event)) => {
            if let Some(message) = event.message() {
                println!("{}", render::banner(message));
            }
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
