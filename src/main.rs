use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::{info, warn};
use simplegit::areas::repository::Repository;
use simplegit::shell::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "simplegit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal in-memory version control shell",
    long_about = "Scans a working directory and starts an interactive shell to stage \
    files and record commits. Everything is kept in memory and discarded on exit.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The working directory, defaults to the current one")]
    path: Option<PathBuf>,
    #[arg(long, env = "SIMPLEGIT_AUTHOR", help = "Author recorded on commits")]
    author: Option<String>,
    #[arg(long, help = "Disable colored output")]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir().context("unable to read the current directory")?,
    };

    let mut repository = Repository::open(&path)
        .with_context(|| format!("unable to open working directory {}", path.display()))?;
    info!(
        "opened {} with {} known paths",
        repository.path().display(),
        repository.workspace().entries().count()
    );

    if let Some(author) = cli.author.as_deref()
        && let Err(err) = repository.set_credentials(author)
    {
        warn!("ignoring author from the command line: {err}");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(repository, stdin.lock(), stdout.lock());

    shell.run()
}
