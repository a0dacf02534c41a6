use crate::assign::model::{Member, PullRequest};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Nodes<T> {
    pub nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Login {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct MemberNode {
    pub id: String,
    pub login: String,
}

impl From<MemberNode> for Member {
    fn from(node: MemberNode) -> Self {
        Member::new(node.login, node.id)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestNode {
    pub id: String,
    pub number: u64,
    pub title: String,
    pub url: String,
    pub head_ref_name: String,
    pub is_cross_repository: bool,
    pub head_repository_owner: Option<Login>,
    pub assignees: Nodes<MemberNode>,
}

impl PullRequestNode {
    /// `owner:branch` for pull requests coming from forks, `branch` otherwise
    pub fn head_label(&self) -> String {
        match (&self.head_repository_owner, self.is_cross_repository) {
            (Some(owner), true) => format!("{}:{}", owner.login, self.head_ref_name),
            _ => self.head_ref_name.to_owned(),
        }
    }
}

impl From<PullRequestNode> for PullRequest {
    fn from(node: PullRequestNode) -> Self {
        PullRequest {
            id: node.id,
            number: node.number,
            title: node.title,
            url: node.url,
            assignees: node.assignees.nodes.into_iter().map(Into::into).collect(),
            head_owner_login: node
                .head_repository_owner
                .map(|owner| owner.login)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PullRequestByNumberData {
    pub repository: Option<PullRequestByNumberRepository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestByNumberRepository {
    pub pull_request: Option<PullRequestNode>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestsForBranchData {
    pub repository: Option<PullRequestsForBranchRepository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestsForBranchRepository {
    pub pull_requests: Nodes<PullRequestNode>,
}

#[derive(Debug, Deserialize)]
pub struct TeamMembersData {
    pub organization: Option<Organization>,
}

#[derive(Debug, Deserialize)]
pub struct Organization {
    pub team: Option<Team>,
}

#[derive(Debug, Deserialize)]
pub struct Team {
    pub members: MembersPage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersPage {
    pub nodes: Vec<MemberNode>,
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAssigneesData {
    pub add_assignees_to_assignable: Option<serde::de::IgnoredAny>,
}
