const PULL_REQUEST_FIELDS: &str = "
    id
    number
    title
    url
    headRefName
    isCrossRepository
    headRepositoryOwner { login }
    assignees(first: 100) { nodes { id login } }
";

pub fn pull_request_by_number() -> String {
    format!(
        "query PullRequestByNumber($owner: String!, $repo: String!, $number: Int!) {{
            repository(owner: $owner, name: $repo) {{
                pullRequest(number: $number) {{ {} }}
            }}
        }}",
        PULL_REQUEST_FIELDS
    )
}

pub fn pull_requests_for_branch() -> String {
    format!(
        "query PullRequestsForBranch($owner: String!, $repo: String!, $headRefName: String!) {{
            repository(owner: $owner, name: $repo) {{
                pullRequests(headRefName: $headRefName, states: OPEN, first: 30) {{
                    nodes {{ {} }}
                }}
            }}
        }}",
        PULL_REQUEST_FIELDS
    )
}

pub const TEAM_MEMBERS: &str = "
query TeamMembers($org: String!, $team: String!, $after: String) {
    organization(login: $org) {
        team(slug: $team) {
            members(first: 100, after: $after) {
                nodes { id login }
                pageInfo { hasNextPage endCursor }
            }
        }
    }
}";

pub const ADD_ASSIGNEES: &str = "
mutation AddAssignees($input: AddAssigneesToAssignableInput!) {
    addAssigneesToAssignable(input: $input) {
        clientMutationId
    }
}";
