use super::{
    queries,
    request::{
        AddAssigneesInput, AddAssigneesVariables, PullRequestByNumberVariables,
        PullRequestsForBranchVariables, TeamMembersVariables,
    },
    response::{
        AddAssigneesData, PullRequestByNumberData, PullRequestsForBranchData, TeamMembersData,
    },
};
use crate::{
    assign::{
        model::{Member, PullRequest, Roster},
        AssigneeWriter, PullRequestSource, TeamDirectory,
    },
    http::{request::GraphqlRequest, Client},
    repository::Repository,
};
use anyhow::{anyhow, bail, Context, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

/// GitHub GraphQL API client. Every call is a single request, retries are
/// left to the caller.
#[derive(Clone, Debug)]
pub struct GithubClient {
    http: Client,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        GithubClient {
            http: Client::new(api_url, token),
        }
    }
}

impl PullRequestSource for GithubClient {
    async fn by_number(&self, repository: &Repository, number: u64) -> Result<PullRequest> {
        log::debug!("fetching pull request {}#{}", repository, number);
        let request = GraphqlRequest::new(
            queries::pull_request_by_number(),
            PullRequestByNumberVariables {
                owner: &repository.owner,
                repo: &repository.name,
                number,
            },
        );

        let data: PullRequestByNumberData = self
            .http
            .send(&request)
            .await
            .with_context(|| format!("failed to query pull request #{}", number))?;

        let node = data
            .repository
            .ok_or_else(|| anyhow!("repository {} not found", repository))?
            .pull_request
            .ok_or_else(|| anyhow!("pull request #{} not found in {}", number, repository))?;

        Ok(node.into())
    }

    async fn for_branch(&self, repository: &Repository, qualifier: &str) -> Result<PullRequest> {
        log::debug!("fetching pull request of {} in {}", qualifier, repository);
        let branch = qualifier
            .split_once(':')
            .map(|(_, branch)| branch)
            .unwrap_or(qualifier);

        let request = GraphqlRequest::new(
            queries::pull_requests_for_branch(),
            PullRequestsForBranchVariables {
                owner: &repository.owner,
                repo: &repository.name,
                head_ref_name: branch,
            },
        );

        let data: PullRequestsForBranchData = self
            .http
            .send(&request)
            .await
            .with_context(|| format!("failed to query pull requests for branch {}", qualifier))?;

        let nodes = data
            .repository
            .ok_or_else(|| anyhow!("repository {} not found", repository))?
            .pull_requests
            .nodes;

        match nodes.into_iter().find(|node| node.head_label() == qualifier) {
            Some(node) => Ok(node.into()),
            None => bail!(
                "no open pull requests found for branch {:?} in {}",
                qualifier,
                repository
            ),
        }
    }
}

impl TeamDirectory for GithubClient {
    async fn roster(&self, owner: &str, team: &str) -> Result<Roster> {
        let mut members: Vec<Member> = Vec::new();
        let mut after: Option<String> = None;

        loop {
            log::debug!("fetching members of {}/{} after {:?}", owner, team, after);
            let request = GraphqlRequest::new(
                queries::TEAM_MEMBERS,
                TeamMembersVariables {
                    org: owner,
                    team,
                    after: after.clone(),
                },
            );

            let data: TeamMembersData = self
                .http
                .send(&request)
                .await
                .with_context(|| format!("failed to query members of team {}", team))?;

            let page = data
                .organization
                .ok_or_else(|| anyhow!("organization {} not found", owner))?
                .team
                .ok_or_else(|| anyhow!("team {} not found in organization {}", team, owner))?
                .members;

            members.extend(page.nodes.into_iter().map(Member::from));

            match page.page_info.end_cursor {
                // a repeated cursor would refetch the same page forever
                Some(cursor) if page.page_info.has_next_page && after.as_ref() != Some(&cursor) => {
                    after = Some(cursor)
                }
                _ => break,
            }
        }

        Ok(Roster::new(team, members))
    }
}

impl AssigneeWriter for GithubClient {
    async fn add_assignees(&self, pull_request_id: &str, member_ids: &[String]) -> Result<()> {
        let request = GraphqlRequest::new(
            queries::ADD_ASSIGNEES,
            AddAssigneesVariables {
                input: AddAssigneesInput {
                    assignable_id: pull_request_id,
                    assignee_ids: member_ids,
                },
            },
        );

        let data: AddAssigneesData = self
            .http
            .send(&request)
            .await
            .context("failed to add assignees")?;

        if data.add_assignees_to_assignable.is_none() {
            bail!("assignable {} was not updated", pull_request_id);
        }

        Ok(())
    }
}
