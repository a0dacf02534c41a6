use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PullRequestByNumberVariables<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub number: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestsForBranchVariables<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub head_ref_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct TeamMembersVariables<'a> {
    pub org: &'a str,
    pub team: &'a str,
    pub after: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddAssigneesVariables<'a> {
    pub input: AddAssigneesInput<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAssigneesInput<'a> {
    pub assignable_id: &'a str,
    pub assignee_ids: &'a [String],
}
