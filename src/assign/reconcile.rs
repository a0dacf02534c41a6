use super::{error::AssignError, membership::MembershipIndex};

/// Requested login matched to its assignable id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub login: String,
    pub id: String,
}

/// Every requested login ends up in exactly one of the two lists, in input order
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReconciliationResult {
    pub resolved: Vec<Resolved>,
    pub unresolved_logins: Vec<String>,
}

impl ReconciliationResult {
    /// All-or-nothing: a single unknown login rejects the whole request
    pub fn into_assignable(self, team: &str) -> Result<Vec<Resolved>, AssignError> {
        if !self.unresolved_logins.is_empty() {
            return Err(AssignError::UnknownAssignees {
                logins: self.unresolved_logins,
                team: team.to_owned(),
            });
        }

        Ok(self.resolved)
    }
}

pub fn reconcile<S: AsRef<str>>(logins: &[S], index: &MembershipIndex) -> ReconciliationResult {
    let mut result = ReconciliationResult::default();

    for login in logins {
        let login = login.as_ref();
        match index.get(login) {
            Some(id) => result.resolved.push(Resolved {
                login: login.to_owned(),
                id: id.to_owned(),
            }),
            None => result.unresolved_logins.push(login.to_owned()),
        }
    }

    result
}
