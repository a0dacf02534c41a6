use crate::{
    assign::{
        self, error::AssignError, AssignRequest, AssigneeWriter, Assignment, BranchContext,
        PullRequestSource, TeamDirectory,
    },
    config::Config,
    repository::Repository,
};
use clap::Parser;
use std::io::Write;

#[derive(Debug, Parser)]
#[command(
    name = "prassign",
    version,
    about = "Assign reviewers to a pull request",
    long_about = "Assign reviewers to either a specified pull request or the pull request \
associated with the current branch.

Examples:

    prassign -l mattboran                 # assign mattboran to the current branch's pull request
    prassign -l mattboran -l veeamd       # assign mattboran and veeamd
    prassign 123 -l mattboran             # assign mattboran to pull request 123"
)]
pub struct AssignArgs {
    /// Pull request number, `#number` or url; defaults to the current branch
    #[arg(value_name = "NUMBER | URL")]
    pub reference: Option<String>,

    /// Login of a team member to assign, repeatable
    #[arg(short = 'l', long = "login", value_name = "LOGIN", required = true)]
    pub logins: Vec<String>,

    /// Repository as OWNER/REPO instead of the one of the git remote
    #[arg(short = 'R', long)]
    pub repo: Option<String>,

    /// Team whose members can be assigned
    #[arg(short, long)]
    pub team: Option<String>,

    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}

impl AssignArgs {
    pub fn log_level(&self) -> log::Level {
        if self.verbose {
            log::Level::Debug
        } else if self.quiet {
            log::Level::Warn
        } else {
            log::Level::Info
        }
    }
}

/// The `assign` command with its collaborators wired in
pub struct AssignCommand<C, B> {
    client: C,
    branch: B,
    config: Config,
}

impl<C, B> AssignCommand<C, B>
where
    C: PullRequestSource + TeamDirectory + AssigneeWriter,
    B: BranchContext,
{
    pub fn new(client: C, branch: B, config: Config) -> Self {
        AssignCommand {
            client,
            branch,
            config,
        }
    }

    pub async fn run<W: Write>(
        &self,
        args: &AssignArgs,
        out: &mut W,
    ) -> Result<Assignment, AssignError> {
        if args.logins.is_empty() {
            return Err(AssignError::MissingLogins);
        }

        let repository = self.base_repository(args)?;
        let team = args.team.as_deref().unwrap_or(&self.config.team);
        log::debug!("base repository {}, team {}", repository, team);

        let request = AssignRequest {
            reference: args.reference.as_deref(),
            logins: &args.logins,
            repository,
            team,
        };

        assign::assign(&self.client, &self.branch, request, out).await
    }

    fn base_repository(&self, args: &AssignArgs) -> Result<Repository, AssignError> {
        match args.repo.as_deref().or(self.config.repo.as_deref()) {
            Some(repo) => Ok(repo.parse()?),
            None => self
                .branch
                .default_repository()
                .map_err(|cause| AssignError::BaseRepositoryUnknown { cause }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::{
        model::{Member, PullRequest, Roster},
        reference::BranchSelector,
    };
    use anyhow::{anyhow, Result};
    use clap::error::ErrorKind;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeGithub {
        lookups: RefCell<Vec<String>>,
        commits: RefCell<Vec<Vec<String>>>,
    }

    impl PullRequestSource for FakeGithub {
        async fn by_number(&self, repository: &Repository, number: u64) -> Result<PullRequest> {
            self.lookups
                .borrow_mut()
                .push(format!("{}#{}", repository, number));
            Ok(PullRequest {
                id: "PR_1".to_owned(),
                number,
                title: "Add widgets".to_owned(),
                url: format!("https://github.com/{}/pull/{}", repository, number),
                assignees: vec![],
                head_owner_login: repository.owner.to_owned(),
            })
        }

        async fn for_branch(
            &self,
            _repository: &Repository,
            qualifier: &str,
        ) -> Result<PullRequest> {
            Err(anyhow!("no open pull requests found for branch {}", qualifier))
        }
    }

    impl TeamDirectory for FakeGithub {
        async fn roster(&self, _owner: &str, team: &str) -> Result<Roster> {
            Ok(Roster::new(
                team,
                vec![Member::new("alice", "A1"), Member::new("bob", "B1")],
            ))
        }
    }

    impl AssigneeWriter for FakeGithub {
        async fn add_assignees(
            &self,
            _pull_request_id: &str,
            member_ids: &[String],
        ) -> Result<()> {
            self.commits.borrow_mut().push(member_ids.to_vec());
            Ok(())
        }
    }

    struct NoCheckout;

    impl BranchContext for NoCheckout {
        fn default_repository(&self) -> Result<Repository> {
            Err(anyhow!("no git repository found at ."))
        }

        fn current_selector(&self, _repository: &Repository) -> Result<BranchSelector> {
            Err(anyhow!("no git repository found at ."))
        }
    }

    struct Checkout;

    impl BranchContext for Checkout {
        fn default_repository(&self) -> Result<Repository> {
            Ok(Repository::new("octo", "widgets"))
        }

        fn current_selector(&self, _repository: &Repository) -> Result<BranchSelector> {
            Ok(BranchSelector {
                number: Some(8),
                qualifier: "pr-8".to_owned(),
            })
        }
    }

    fn parse(args: &[&str]) -> AssignArgs {
        AssignArgs::parse_from(std::iter::once("prassign").chain(args.iter().copied()))
    }

    #[test]
    fn should_require_at_least_one_login() {
        let result = AssignArgs::try_parse_from(["prassign", "123"]);

        assert_eq!(
            result.map(|_| ()).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn should_collect_repeated_logins() {
        let args = parse(&["#12", "-l", "alice", "--login", "bob", "-R", "octo/widgets"]);

        assert_eq!(args.reference.as_deref(), Some("#12"));
        assert_eq!(args.logins, vec!["alice", "bob"]);
        assert_eq!(args.repo.as_deref(), Some("octo/widgets"));
        assert_eq!(args.log_level(), log::Level::Info);
    }

    #[test]
    fn should_map_verbosity_flags_to_log_levels() {
        assert_eq!(parse(&["-l", "a", "-v"]).log_level(), log::Level::Debug);
        assert_eq!(parse(&["-l", "a", "-q"]).log_level(), log::Level::Warn);
        assert!(AssignArgs::try_parse_from(["prassign", "-l", "a", "-v", "-q"]).is_err());
    }

    #[tokio::test]
    async fn should_prefer_the_repo_flag_over_the_config() -> Result<()> {
        let config = Config {
            repo: Some("octo/config".to_owned()),
            ..Config::default()
        };
        let command = AssignCommand::new(FakeGithub::default(), NoCheckout, config);
        let mut out = Vec::new();

        command
            .run(&parse(&["3", "-l", "alice", "-R", "octo/flag"]), &mut out)
            .await?;

        assert_eq!(*command.client.lookups.borrow(), vec!["octo/flag#3"]);

        Ok(())
    }

    #[tokio::test]
    async fn should_fall_back_to_the_configured_repo() -> Result<()> {
        let config = Config {
            repo: Some("octo/config".to_owned()),
            ..Config::default()
        };
        let command = AssignCommand::new(FakeGithub::default(), NoCheckout, config);

        command
            .run(&parse(&["3", "-l", "bob"]), &mut Vec::new())
            .await?;

        assert_eq!(*command.client.lookups.borrow(), vec!["octo/config#3"]);
        assert_eq!(*command.client.commits.borrow(), vec![vec!["B1"]]);

        Ok(())
    }

    #[tokio::test]
    async fn should_use_the_checkout_for_repository_and_branch() -> Result<()> {
        let command = AssignCommand::new(FakeGithub::default(), Checkout, Config::default());

        let assignment = command
            .run(&parse(&["-l", "alice", "-l", "bob"]), &mut Vec::new())
            .await?;

        assert_eq!(*command.client.lookups.borrow(), vec!["octo/widgets#8"]);
        assert_eq!(assignment.pull_request.number, 8);
        assert_eq!(*command.client.commits.borrow(), vec![vec!["A1", "B1"]]);

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_without_a_base_repository() {
        let command = AssignCommand::new(FakeGithub::default(), NoCheckout, Config::default());

        let result = command
            .run(&parse(&["3", "-l", "alice"]), &mut Vec::new())
            .await;

        assert!(matches!(
            result,
            Err(AssignError::BaseRepositoryUnknown { .. })
        ));
    }

    #[tokio::test]
    async fn should_reject_a_malformed_repo_flag() {
        let command = AssignCommand::new(FakeGithub::default(), Checkout, Config::default());

        let result = command
            .run(&parse(&["3", "-l", "alice", "-R", "widgets"]), &mut Vec::new())
            .await;

        assert!(matches!(result, Err(AssignError::InvalidRepository(_))));
        assert!(command.client.lookups.borrow().is_empty());
    }

    #[tokio::test]
    async fn should_reject_an_empty_login_list() {
        let command = AssignCommand::new(FakeGithub::default(), Checkout, Config::default());
        let args = AssignArgs {
            reference: None,
            logins: vec![],
            repo: None,
            team: None,
            verbose: false,
            quiet: false,
        };

        let result = command.run(&args, &mut Vec::new()).await;

        assert!(matches!(result, Err(AssignError::MissingLogins)));
    }

    #[tokio::test]
    async fn should_look_up_logins_in_the_requested_team() {
        let command = AssignCommand::new(FakeGithub::default(), Checkout, Config::default());

        let result = command
            .run(&parse(&["3", "-l", "carol", "-t", "ios"]), &mut Vec::new())
            .await;

        assert_eq!(
            result.map(|_| ()).unwrap_err().to_string(),
            "could not find logins (carol) in team ios"
        );
        assert!(command.client.commits.borrow().is_empty());
    }
}
