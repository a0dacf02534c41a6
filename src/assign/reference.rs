use super::{error::AssignError, BranchContext};
use crate::repository::Repository;
use std::fmt::Display;

/// What the current branch tells us about its pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchSelector {
    /// Known only when the branch tracks `refs/pull/<n>/head`
    pub number: Option<u64>,
    /// `branch` or `owner:branch`
    pub qualifier: String,
}

/// How the pull request is going to be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Number(u64),
    Branch(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub repository: Repository,
    pub lookup: Lookup,
}

impl Display for PullRequestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.lookup {
            Lookup::Number(number) => write!(f, "{}#{}", self.repository, number),
            Lookup::Branch(qualifier) => write!(f, "{} branch {}", self.repository, qualifier),
        }
    }
}

/// Turns the optional command argument into a pull request reference.
///
/// No argument means "the pull request of the current branch"; a url
/// overrides `default_repository`; anything else must be a number,
/// optionally prefixed by `#`.
pub fn resolve<B: BranchContext>(
    argument: Option<&str>,
    default_repository: Repository,
    branch: &B,
) -> Result<PullRequestRef, AssignError> {
    let Some(argument) = argument else {
        let selector = branch
            .current_selector(&default_repository)
            .map_err(|cause| AssignError::PullRequestLookupFailed {
                cause: cause.context("could not query for pull request for current branch"),
            })?;
        log::debug!("current branch selector: {:?}", selector);

        let lookup = match selector.number {
            Some(number) if number > 0 => Lookup::Number(number),
            _ => Lookup::Branch(selector.qualifier),
        };

        return Ok(PullRequestRef {
            repository: default_repository,
            lookup,
        });
    };

    if let Some((repository, number)) = from_url(argument) {
        return Ok(PullRequestRef {
            repository,
            lookup: Lookup::Number(number),
        });
    }

    let number = parse_number(argument.strip_prefix('#').unwrap_or(argument))
        .ok_or_else(|| AssignError::InvalidReferenceFormat(argument.to_owned()))?;

    Ok(PullRequestRef {
        repository: default_repository,
        lookup: Lookup::Number(number),
    })
}

/// Extracts the repository and number out of
/// `https://github.com/OWNER/REPO/pull/NUMBER[/...]`. Only the leading
/// digits of the number segment count.
fn from_url(argument: &str) -> Option<(Repository, u64)> {
    let path = argument
        .strip_prefix("https://")
        .or_else(|| argument.strip_prefix("http://"))?
        .strip_prefix("github.com/")?;
    let path = path.split(['?', '#']).next().unwrap_or_default();

    let mut segments = path.split('/');
    match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(owner), Some(name), Some("pull"), Some(number))
            if !owner.is_empty() && !name.is_empty() =>
        {
            let digits = number
                .find(|c: char| !c.is_ascii_digit())
                .map_or(number, |end| &number[..end]);
            parse_number(digits).map(|number| (Repository::new(owner, name), number))
        }
        _ => None,
    }
}

fn parse_number(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    value.parse::<u64>().ok().filter(|number| *number > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{bail, Result};

    struct StubBranch(Option<BranchSelector>);

    impl BranchContext for StubBranch {
        fn default_repository(&self) -> Result<Repository> {
            Ok(Repository::new("octo", "widgets"))
        }

        fn current_selector(&self, _repository: &Repository) -> Result<BranchSelector> {
            match &self.0 {
                Some(selector) => Ok(selector.clone()),
                None => bail!("HEAD is detached"),
            }
        }
    }

    fn default_repository() -> Repository {
        Repository::new("octo", "widgets")
    }

    fn no_branch() -> StubBranch {
        StubBranch(None)
    }

    #[test]
    fn should_resolve_a_plain_number() -> Result<()> {
        let reference = resolve(Some("123"), default_repository(), &no_branch())?;

        assert_eq!(reference.lookup, Lookup::Number(123));
        assert_eq!(reference.repository, default_repository());

        Ok(())
    }

    #[test]
    fn should_strip_the_hash_prefix() -> Result<()> {
        let plain = resolve(Some("123"), default_repository(), &no_branch())?;
        let hashed = resolve(Some("#123"), default_repository(), &no_branch())?;

        assert_eq!(plain, hashed);

        Ok(())
    }

    #[test]
    fn should_take_repository_and_number_from_url() -> Result<()> {
        let reference = resolve(
            Some("https://github.com/cli/cli/pull/4567/files"),
            default_repository(),
            &no_branch(),
        )?;

        assert_eq!(reference.repository, Repository::new("cli", "cli"));
        assert_eq!(reference.lookup, Lookup::Number(4567));
        assert_eq!(reference.to_string(), "cli/cli#4567");

        Ok(())
    }

    #[test]
    fn should_take_the_leading_digits_of_the_url_number() -> Result<()> {
        let reference = resolve(
            Some("https://github.com/cli/cli/pull/12abc"),
            default_repository(),
            &no_branch(),
        )?;

        assert_eq!(reference.repository, Repository::new("cli", "cli"));
        assert_eq!(reference.lookup, Lookup::Number(12));

        Ok(())
    }

    #[test]
    fn should_reject_non_numeric_references() {
        for argument in [
            "abc",
            "#",
            "12a",
            "-3",
            "0",
            "https://github.com/cli/cli/issues/3",
            "https://github.com/cli/cli/pull/abc",
        ] {
            let result = resolve(Some(argument), default_repository(), &no_branch());

            assert!(
                matches!(result, Err(AssignError::InvalidReferenceFormat(ref value)) if value == argument),
                "{argument} should be rejected"
            );
        }
    }

    #[test]
    fn should_look_up_by_branch_when_no_argument_is_given() -> Result<()> {
        let branch = StubBranch(Some(BranchSelector {
            number: None,
            qualifier: "fork-owner:feature".to_owned(),
        }));

        let reference = resolve(None, default_repository(), &branch)?;

        assert_eq!(
            reference.lookup,
            Lookup::Branch("fork-owner:feature".to_owned())
        );
        assert_eq!(reference.repository, default_repository());

        Ok(())
    }

    #[test]
    fn should_look_up_by_number_when_the_branch_tracks_a_pull_request() -> Result<()> {
        let branch = StubBranch(Some(BranchSelector {
            number: Some(42),
            qualifier: "feature".to_owned(),
        }));

        let reference = resolve(None, default_repository(), &branch)?;

        assert_eq!(reference.lookup, Lookup::Number(42));

        Ok(())
    }

    #[test]
    fn should_fail_when_the_branch_cannot_be_inspected() {
        let result = resolve(None, default_repository(), &no_branch());

        assert!(matches!(
            result,
            Err(AssignError::PullRequestLookupFailed { .. })
        ));
    }
}
