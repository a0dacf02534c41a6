mod assign;
mod cli;
mod config;
mod git;
mod github;
mod http;
mod logger;
mod repository;

use anyhow::{Context, Result};
use assign::error::AssignError;
use clap::Parser;
use cli::{AssignArgs, AssignCommand};
use config::Config;
use git::GitContext;
use github::GithubClient;
use std::{env, process::ExitCode};

const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

#[tokio::main]
async fn main() -> ExitCode {
    let args = AssignArgs::parse();
    if let Err(err) = logger::init(args.log_level()) {
        eprintln!("Cannot initialize the logger: {:#}", err);
        return ExitCode::FAILURE;
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", describe(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &AssignArgs) -> Result<()> {
    let config = Config::load().await.context("Cannot load config file")?;
    let token = env::var(GITHUB_TOKEN_ENV).context("GITHUB_TOKEN must be set")?;

    let client = GithubClient::new(&config.api_url, token);
    let git = GitContext::new(".", &config.remote);
    let command = AssignCommand::new(client, git, config);

    let mut out = std::io::stdout();
    let assignment = command.run(args, &mut out).await?;
    log::debug!(
        "{} members assigned to pull request #{}",
        assignment.assigned.len(),
        assignment.pull_request.number
    );

    Ok(())
}

/// The single message printed for a failed run
fn describe(err: &anyhow::Error) -> String {
    match err.downcast_ref::<AssignError>() {
        Some(err) => err.report(),
        None => format!("{:#}", err),
    }
}
