use std::{fmt::Display, str::FromStr};
use thiserror::Error;

const GITHUB_HOST: &str = "github.com";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected the OWNER/REPO format, got {0:?}")]
pub struct InvalidRepository(pub String);

/// Repository coordinate, `owner/name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Repository {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Infer the coordinate from a git remote url. Accepts https, scp-like
    /// and ssh urls pointing at github.com.
    pub fn from_remote_url(url: &str) -> Option<Repository> {
        let url = url.trim();
        let path = if let Some(rest) = url.strip_prefix("git@") {
            rest.strip_prefix(GITHUB_HOST)?.strip_prefix(':')?
        } else {
            let without_scheme = url
                .strip_prefix("https://")
                .or_else(|| url.strip_prefix("http://"))
                .or_else(|| url.strip_prefix("ssh://"))?;
            let without_user = without_scheme
                .split_once('@')
                .map(|(_, host)| host)
                .unwrap_or(without_scheme);
            without_user.strip_prefix(GITHUB_HOST)?.strip_prefix('/')?
        };

        let path = path.trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);

        path.parse().ok()
    }
}

impl FromStr for Repository {
    type Err = InvalidRepository;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Repository::new(owner, name))
            }
            _ => Err(InvalidRepository(value.to_owned())),
        }
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
