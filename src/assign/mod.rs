pub mod commit;
pub mod error;
pub mod membership;
pub mod model;
pub mod reconcile;
pub mod reference;

use self::{
    error::AssignError,
    membership::MembershipIndex,
    model::{PullRequest, Roster},
    reconcile::Resolved,
    reference::{BranchSelector, Lookup, PullRequestRef},
};
use crate::repository::Repository;
use anyhow::Result;
use itertools::Itertools;
use std::{fmt::Display, io::Write};

pub trait PullRequestSource {
    async fn by_number(&self, repository: &Repository, number: u64) -> Result<PullRequest>;

    /// `qualifier` is `branch` or `owner:branch`
    async fn for_branch(&self, repository: &Repository, qualifier: &str) -> Result<PullRequest>;
}

pub trait TeamDirectory {
    async fn roster(&self, owner: &str, team: &str) -> Result<Roster>;
}

pub trait AssigneeWriter {
    async fn add_assignees(&self, pull_request_id: &str, member_ids: &[String]) -> Result<()>;
}

/// Local checkout the command runs in
pub trait BranchContext {
    fn default_repository(&self) -> Result<Repository>;

    fn current_selector(&self, repository: &Repository) -> Result<BranchSelector>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    ResolvingReference,
    FetchingPullRequest,
    FetchingRoster,
    Reconciling,
    Committing,
    Done,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::ResolvingReference => "resolving reference",
            Stage::FetchingPullRequest => "fetching pull request",
            Stage::FetchingRoster => "fetching roster",
            Stage::Reconciling => "reconciling",
            Stage::Committing => "committing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

fn enter(stage: Stage) {
    log::debug!("stage: {}", stage);
}

pub struct AssignRequest<'a> {
    pub reference: Option<&'a str>,
    pub logins: &'a [String],
    pub repository: Repository,
    pub team: &'a str,
}

#[derive(Debug)]
pub struct Assignment {
    pub pull_request: PullRequest,
    pub assigned: Vec<Resolved>,
}

/// Runs the whole pipeline: resolve, fetch the pull request, fetch the
/// roster of its head owner's team, reconcile, commit.
///
/// The first failing stage aborts everything after it. The error is returned
/// unreported; the caller prints it once.
pub async fn assign<C, B, W>(
    client: &C,
    branch: &B,
    request: AssignRequest<'_>,
    out: &mut W,
) -> Result<Assignment, AssignError>
where
    C: PullRequestSource + TeamDirectory + AssigneeWriter,
    B: BranchContext,
    W: Write,
{
    enter(Stage::ResolvingReference);
    let reference = reference::resolve(request.reference, request.repository, branch)?;
    log::debug!("resolved {}", reference);

    enter(Stage::FetchingPullRequest);
    let pull_request = fetch_pull_request(client, &reference).await?;
    log::info!("Found pull request {}", pull_request.url);

    enter(Stage::FetchingRoster);
    let roster = client
        .roster(&pull_request.head_owner_login, request.team)
        .await
        .map_err(|cause| AssignError::RosterFetchFailed {
            team: request.team.to_owned(),
            cause,
        })?;

    write_header(out, &pull_request)?;

    enter(Stage::Reconciling);
    let index = MembershipIndex::build(&roster.members);
    if index.is_empty() {
        log::warn!("team {} has no members", roster.team);
    } else {
        log::debug!("indexed {} logins of team {}", index.len(), roster.team);
    }
    let assignable = reconcile::reconcile(request.logins, &index).into_assignable(request.team)?;

    enter(Stage::Committing);
    commit::commit(client, &pull_request, &assignable).await?;

    writeln!(
        out,
        "Assigned {} to pull request #{}",
        assignable.iter().map(|member| &member.login).join(", "),
        pull_request.number
    )?;

    enter(Stage::Done);
    Ok(Assignment {
        pull_request,
        assigned: assignable,
    })
}

async fn fetch_pull_request<S: PullRequestSource>(
    source: &S,
    reference: &PullRequestRef,
) -> Result<PullRequest, AssignError> {
    let result = match &reference.lookup {
        Lookup::Number(number) => source.by_number(&reference.repository, *number).await,
        Lookup::Branch(qualifier) => source.for_branch(&reference.repository, qualifier).await,
    };

    result.map_err(|cause| AssignError::PullRequestLookupFailed { cause })
}

fn write_header<W: Write>(out: &mut W, pull_request: &PullRequest) -> std::io::Result<()> {
    writeln!(
        out,
        "Pull request #{}: {}",
        pull_request.number, pull_request.title
    )?;

    if pull_request.assignees.is_empty() {
        writeln!(out, "No reviewers currently assigned.")
    } else {
        writeln!(
            out,
            "Currently assigned: ({})",
            pull_request
                .assignees
                .iter()
                .map(|member| &member.login)
                .join(", ")
        )
    }
}
