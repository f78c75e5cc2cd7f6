use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wit::areas::repository::Repository;
use wit::artifacts::errors::WitError;

const LOG_ENV: &str = "WIT_LOG";

#[derive(Parser)]
#[command(
    name = "wit",
    version = "0.1.0",
    about = "A minimal local version control tool",
    long_about = "wit tracks snapshots of a working directory in a .wit folder. \
    It supports staging, commits, branches, checkout and merging two branches \
    through their common ancestor.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .wit folder in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(name = "add", about = "Stage a file or a directory")]
    Add {
        #[arg(index = 1, help = "The file or directory to stage")]
        file: Option<String>,
    },
    #[command(name = "commit", about = "Record the staging area as a new commit")]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: Option<String>,
    },
    #[command(name = "status", about = "Show staged, unstaged and untracked files")]
    Status,
    #[command(
        name = "checkout",
        about = "Switch to a branch or commit",
        long_about = "This command replaces the working tree and staging area with a commit's snapshot. \
        It refuses to run while there are staged or unstaged changes."
    )]
    Checkout {
        #[arg(index = 1, help = "A branch name, commit id or HEAD")]
        commit_id: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at HEAD, or list branches")]
    Branch {
        #[arg(index = 1, help = "The name of the new branch")]
        name: Option<String>,
    },
    #[command(name = "merge", about = "Merge a branch into the active branch")]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch_name: Option<String>,
    },
    #[command(name = "graph", about = "Print the commit graph reachable from HEAD")]
    Graph,
    #[command(name = "log", about = "Show commit history")]
    Log,
}

fn main() -> ExitCode {
    init_tracing();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let pwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { path } => {
            let path = path.map(PathBuf::from).unwrap_or_else(|| pwd.clone());
            let path = match path.is_absolute() {
                true => path,
                false => pwd.join(path),
            };

            Repository::new(&path, Box::new(std::io::stdout()))?.init()?
        }
        Commands::Add { file } => {
            let repository = open(&pwd)?;
            repository.add(&required(file, "add", "file")?)?
        }
        Commands::Commit { message } => {
            let repository = open(&pwd)?;
            repository.commit(&required(message, "commit", "message")?)?;
        }
        Commands::Status => {
            open(&pwd)?.query_status()?;
        }
        Commands::Checkout { commit_id } => {
            let repository = open(&pwd)?;
            repository.checkout(&required(commit_id, "checkout", "commit_id")?)?
        }
        Commands::Branch { name } => {
            let repository = open(&pwd)?;
            match name {
                Some(name) => {
                    repository.branch(&name)?;
                }
                None => {
                    repository.list_branches()?;
                }
            }
        }
        Commands::Merge { branch_name } => {
            let repository = open(&pwd)?;
            repository.merge(&required(branch_name, "merge", "branch_name")?)?;
        }
        Commands::Graph => open(&pwd)?.graph()?,
        Commands::Log => open(&pwd)?.log()?,
    }

    Ok(())
}

fn open(pwd: &Path) -> Result<Repository> {
    Repository::discover(pwd, Box::new(std::io::stdout()))
}

fn required(value: Option<String>, command: &'static str, argument: &'static str) -> Result<String> {
    value.ok_or_else(|| WitError::MissingArgument { command, argument }.into())
}
