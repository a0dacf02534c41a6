/// Team member that can be attached to a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub login: String,
    pub id: String,
}

impl Member {
    pub fn new(login: impl Into<String>, id: impl Into<String>) -> Self {
        Member {
            login: login.into(),
            id: id.into(),
        }
    }
}

/// Snapshot of a pull request, fetched once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub id: String,
    pub number: u64,
    pub title: String,
    pub url: String,
    pub assignees: Vec<Member>,
    pub head_owner_login: String,
}

/// Current membership of a named team
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub team: String,
    pub members: Vec<Member>,
}

impl Roster {
    pub fn new(team: impl Into<String>, members: Vec<Member>) -> Self {
        Roster {
            team: team.into(),
            members,
        }
    }
}
