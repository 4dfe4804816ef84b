use crate::error::Result;
use crate::git::VersionControl;

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";

/// Where the rebuilt branch is pushed, and with which credential.
#[derive(Clone, PartialEq, Eq)]
pub struct PublishTarget {
    pub host: String,
    /// `owner/name`
    pub repository: String,
    pub token: String,
}

impl std::fmt::Debug for PublishTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishTarget")
            .field("host", &self.host)
            .field("repository", &self.repository)
            .field("token", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Pushed { repository: String, branch: String },
    Skipped { reason: String },
}

impl PublishTarget {
    /// Both values must be present and non-blank; otherwise there is nothing
    /// to publish to and the reason is returned instead.
    pub fn resolve(
        host: &str,
        repository: Option<&str>,
        token: Option<&str>,
    ) -> std::result::Result<Self, String> {
        let repository = repository.map(str::trim).filter(|s| !s.is_empty());
        let token = token.map(str::trim).filter(|s| !s.is_empty());

        match (repository, token) {
            (Some(repository), Some(token)) => Ok(Self {
                host: host.to_string(),
                repository: repository.to_string(),
                token: token.to_string(),
            }),
            (None, None) => Err(format!("{TOKEN_ENV} and {REPOSITORY_ENV} are not set")),
            (None, Some(_)) => Err(format!("{REPOSITORY_ENV} is not set")),
            (Some(_), None) => Err(format!("{TOKEN_ENV} is not set")),
        }
    }

    pub fn url(&self) -> String {
        format!(
            "https://x-access-token:{}@{}/{}.git",
            self.token, self.host, self.repository
        )
    }
}

/// Force-pushes `branch` to the target, or skips when none is configured.
///
/// The credentialed URL is handed to the push alone; no remote is created
/// or rewritten, so the token never lands in the repository configuration.
pub fn publish<V: VersionControl>(
    vcs: &mut V,
    target: std::result::Result<PublishTarget, String>,
    branch: &str,
) -> Result<PublishOutcome> {
    let target = match target {
        Ok(target) => target,
        Err(reason) => return Ok(PublishOutcome::Skipped { reason }),
    };

    vcs.push_force(&target.url(), branch)?;
    Ok(PublishOutcome::Pushed {
        repository: format!("{}/{}", target.host, target.repository),
        branch: branch.to_string(),
    })
}
