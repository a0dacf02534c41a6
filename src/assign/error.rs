use crate::repository::InvalidRepository;
use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssignError {
    #[error("need at least one username after --login")]
    MissingLogins,
    #[error(transparent)]
    InvalidRepository(#[from] InvalidRepository),
    #[error("could not determine the base repository")]
    BaseRepositoryUnknown {
        #[source]
        cause: anyhow::Error,
    },
    #[error("could not parse pull request argument {0:?}")]
    InvalidReferenceFormat(String),
    #[error("could not find pull request")]
    PullRequestLookupFailed {
        #[source]
        cause: anyhow::Error,
    },
    #[error("could not fetch the members of team {team}")]
    RosterFetchFailed {
        team: String,
        #[source]
        cause: anyhow::Error,
    },
    #[error("could not find logins ({}) in team {team}", .logins.iter().join(", "))]
    UnknownAssignees { logins: Vec<String>, team: String },
    #[error("could not assign members to pull request #{number}")]
    AssignmentCommitFailed {
        number: u64,
        #[source]
        cause: anyhow::Error,
    },
    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

impl AssignError {
    /// Short name of the failure, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            AssignError::MissingLogins => "MissingLogins",
            AssignError::InvalidRepository(_) => "InvalidRepository",
            AssignError::BaseRepositoryUnknown { .. } => "BaseRepositoryUnknown",
            AssignError::InvalidReferenceFormat(_) => "InvalidReferenceFormat",
            AssignError::PullRequestLookupFailed { .. } => "PullRequestLookupFailed",
            AssignError::RosterFetchFailed { .. } => "RosterFetchFailed",
            AssignError::UnknownAssignees { .. } => "UnknownAssignees",
            AssignError::AssignmentCommitFailed { .. } => "AssignmentCommitFailed",
            AssignError::Output(_) => "Output",
        }
    }

    /// One line message: the kind, then this error and each of its causes
    pub fn report(&self) -> String {
        let mut message = format!("{}: {}", self.kind(), self);
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
