use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use navtrail::config::Config;
use navtrail::error::{AppError, AppResult};
use navtrail::session::Session;

/// Replays caret movements and history commands against files on disk.
#[derive(Debug, Parser)]
#[command(name = "navtrail", version)]
struct Cli {
    /// Session script; reads stdin when omitted.
    script: Option<PathBuf>,

    /// Config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory relative locators resolve against.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Key of the persisted per-workspace history.
    #[arg(long)]
    workspace: Option<String>,

    /// Neither restore nor save history.
    #[arg(long)]
    no_persist: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "navtrail=debug" } else { "navtrail=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if cli.no_persist {
        config.persistence.enabled = false;
    }
    if cli.workspace.is_some() {
        config.persistence.workspace = cli.workspace.clone();
    }

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()
            .map_err(|source| AppError::io_with_context(source, "failed to resolve cwd"))?,
    };

    let reader = open_script(cli.script).await?;
    let mut session = Session::from_config(&config, root);
    let mut lines = reader.lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|source| AppError::io_with_context(source, "failed to read script"))?
    {
        match session.run_line(&line) {
            Ok(Some(result)) => println!(
                "{:<16} {:<13} {}",
                result.id.as_str(),
                result.outcome.as_str(),
                result.message
            ),
            Ok(None) => {}
            Err(err) => println!("{:<16} {:<13} {err}", "error", "failed"),
        }
    }

    session.shutdown();
    Ok(())
}

async fn open_script(path: Option<PathBuf>) -> AppResult<Box<dyn AsyncBufRead + Unpin + Send>> {
    let Some(path) = path else {
        return Ok(Box::new(BufReader::new(tokio::io::stdin())));
    };
    let file = tokio::fs::File::open(&path).await.map_err(|source| {
        AppError::io_with_context(source, format!("failed to open script: {}", path.display()))
    })?;
    Ok(Box::new(BufReader::new(file)))
}
