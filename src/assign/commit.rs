use super::{error::AssignError, model::PullRequest, reconcile::Resolved, AssigneeWriter};

/// Attaches the resolved members to the pull request with a single mutation.
///
/// Nothing is deduplicated or retried here: calling it twice with the same
/// members issues two mutations, the remote side is the one treating the
/// second as a no-op.
pub async fn commit<W: AssigneeWriter>(
    writer: &W,
    pull_request: &PullRequest,
    resolved: &[Resolved],
) -> Result<(), AssignError> {
    if resolved.is_empty() {
        return Err(AssignError::MissingLogins);
    }

    for member in resolved {
        log::debug!(
            "Assigning user {} (ID {}) to assignable ID {}",
            member.login,
            member.id,
            pull_request.id
        );
    }

    let ids: Vec<String> = resolved.iter().map(|member| member.id.to_owned()).collect();

    writer
        .add_assignees(&pull_request.id, &ids)
        .await
        .map_err(|cause| AssignError::AssignmentCommitFailed {
            number: pull_request.number,
            cause,
        })
}
