use super::model::Member;
use std::collections::HashMap;

/// Login to assignable id lookup built from a team roster
#[derive(Debug, Default)]
pub struct MembershipIndex {
    ids: HashMap<String, String>,
}

impl MembershipIndex {
    /// Duplicate logins keep the id of their last occurrence
    pub fn build(members: &[Member]) -> Self {
        let ids = members
            .iter()
            .map(|member| (member.login.to_owned(), member.id.to_owned()))
            .collect();

        MembershipIndex { ids }
    }

    pub fn get(&self, login: &str) -> Option<&str> {
        self.ids.get(login).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
