use crate::{
    assign::{reference::BranchSelector, BranchContext},
    repository::Repository,
};
use anyhow::{anyhow, bail, Context, Result};
use git2::Repository as GitRepository;
use std::path::PathBuf;

pub const DEFAULT_REMOTE: &str = "origin";

/// Git checkout the command was started from. The repository is opened
/// lazily so commands given an explicit `--repo` and number work outside
/// of a checkout.
pub struct GitContext {
    path: PathBuf,
    remote: String,
}

impl GitContext {
    pub fn new(path: impl Into<PathBuf>, remote: impl Into<String>) -> Self {
        GitContext {
            path: path.into(),
            remote: remote.into(),
        }
    }

    fn open(&self) -> Result<GitRepository> {
        GitRepository::discover(&self.path)
            .with_context(|| format!("no git repository found at {}", self.path.display()))
    }
}

impl BranchContext for GitContext {
    fn default_repository(&self) -> Result<Repository> {
        let repo = self.open()?;
        remote_repository(&repo, &self.remote)?
            .ok_or_else(|| anyhow!("remote {} does not point at a GitHub repository", self.remote))
    }

    fn current_selector(&self, base: &Repository) -> Result<BranchSelector> {
        let repo = self.open()?;
        current_selector(&repo, base)
    }
}

fn remote_repository(repo: &GitRepository, name: &str) -> Result<Option<Repository>> {
    let remote = repo
        .find_remote(name)
        .with_context(|| format!("remote {} not found", name))?;

    Ok(remote.url().and_then(Repository::from_remote_url))
}

fn current_selector(repo: &GitRepository, base: &Repository) -> Result<BranchSelector> {
    let head = repo.head().context("could not read HEAD")?;
    if !head.is_branch() {
        bail!("HEAD is not on a branch");
    }
    let local_branch = head
        .shorthand()
        .ok_or_else(|| anyhow!("branch name is not valid utf-8"))?
        .to_owned();

    let config = repo.config()?.snapshot()?;
    let merge_ref = config
        .get_string(&format!("branch.{}.merge", local_branch))
        .ok();

    if let Some(number) = merge_ref.as_deref().and_then(pull_request_number) {
        log::debug!("branch {} tracks pull request #{}", local_branch, number);
        return Ok(BranchSelector {
            number: Some(number),
            qualifier: local_branch,
        });
    }

    let branch = merge_ref
        .as_deref()
        .and_then(|merge| merge.strip_prefix("refs/heads/"))
        .unwrap_or(&local_branch)
        .to_owned();

    let push_remote = config
        .get_string(&format!("branch.{}.pushRemote", local_branch))
        .or_else(|_| config.get_string(&format!("branch.{}.remote", local_branch)))
        .ok();

    let owner = match push_remote {
        Some(remote) => remote_repository(repo, &remote)
            .ok()
            .flatten()
            .map(|remote| remote.owner)
            .filter(|owner| owner != &base.owner),
        None => None,
    };

    let qualifier = match owner {
        Some(owner) => format!("{}:{}", owner, branch),
        None => branch,
    };

    Ok(BranchSelector {
        number: None,
        qualifier,
    })
}

/// `refs/pull/<n>/head` is what a checked out pull request tracks
fn pull_request_number(merge_ref: &str) -> Option<u64> {
    merge_ref
        .strip_prefix("refs/pull/")?
        .strip_suffix("/head")?
        .parse()
        .ok()
}
