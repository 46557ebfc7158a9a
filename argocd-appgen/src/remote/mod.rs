//! Reading and normalizing the repository's remote URL.
//!
//! The remote lookup sits behind [`RemoteUrlSource`] so the rest of the
//! pipeline can run against a canned URL in tests. [`GitCli`] is the real
//! implementation and shells out to `git`.

mod error;
mod normalize;

pub use error::RemoteError;
pub use normalize::normalize_repo_url;

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Something that can report the URL configured for a named remote.
pub trait RemoteUrlSource {
    /// Returns the raw URL configured for `remote`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the lookup itself fails.
    fn remote_url(&self, remote: &str) -> Result<String, RemoteError>;
}

/// Reads remote URLs with `git config --get remote.<name>.url`.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Creates a source that runs git inside `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl RemoteUrlSource for GitCli {
    fn remote_url(&self, remote: &str) -> Result<String, RemoteError> {
        let key = format!("remote.{remote}.url");
        let args = ["config", "--get", key.as_str()];
        let command = format!("git {}", args.join(" "));
        debug!(workdir = %self.workdir.display(), %command, "Reading remote URL");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| RemoteError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(RemoteError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Looks up `remote` through `source`, trimming surrounding whitespace.
///
/// # Errors
///
/// Propagates the source's error, and returns [`RemoteError::EmptyUrl`]
/// when nothing but whitespace came back.
pub fn resolve_remote_url(
    source: &dyn RemoteUrlSource,
    remote: &str,
) -> Result<String, RemoteError> {
    let url = source.remote_url(remote)?.trim().to_string();
    if url.is_empty() {
        return Err(RemoteError::EmptyUrl {
            remote: remote.to_string(),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FixedRemote(&'static str);

    impl RemoteUrlSource for FixedRemote {
        fn remote_url(&self, _remote: &str) -> Result<String, RemoteError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingRemote;

    impl RemoteUrlSource for FailingRemote {
        fn remote_url(&self, remote: &str) -> Result<String, RemoteError> {
            Err(RemoteError::CommandFailed {
                command: format!("git config --get remote.{remote}.url"),
                status: "exit status: 1".to_string(),
                stderr: String::new(),
            })
        }
    }

    #[test]
    fn trims_resolved_url() {
        let url = resolve_remote_url(&FixedRemote("  git@github.com:org/repo.git\n"), "origin")
            .unwrap();
        assert_eq!(url, "git@github.com:org/repo.git");
    }

    #[test]
    fn rejects_blank_url() {
        let result = resolve_remote_url(&FixedRemote(" \n\t"), "origin");
        assert!(matches!(
            result,
            Err(RemoteError::EmptyUrl { remote }) if remote == "origin"
        ));
    }

    #[test]
    fn propagates_source_failure() {
        let result = resolve_remote_url(&FailingRemote, "origin");
        assert!(matches!(result, Err(RemoteError::CommandFailed { .. })));
    }

    #[test]
    fn git_cli_reports_missing_workdir_as_spawn_error() {
        let temp = TempDir::new().unwrap();
        let git = GitCli::new(temp.path().join("does-not-exist"));

        let result = git.remote_url("origin");
        assert!(matches!(result, Err(RemoteError::Spawn { .. })));
    }

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .unwrap();
        assert!(status.success(), "git {} failed", args.join(" "));
    }

    #[test]
    fn git_cli_reads_configured_origin() {
        let temp = TempDir::new().unwrap();
        git(temp.path(), &["init", "--quiet"]);
        git(
            temp.path(),
            &["remote", "add", "origin", "git@github.com:org/repo.git"],
        );

        let url = resolve_remote_url(&GitCli::new(temp.path()), "origin").unwrap();
        assert_eq!(url, "git@github.com:org/repo.git");
    }

    #[test]
    fn git_cli_fails_without_configured_remote() {
        let temp = TempDir::new().unwrap();
        git(temp.path(), &["init", "--quiet"]);

        let result = GitCli::new(temp.path()).remote_url("origin");
        assert!(matches!(result, Err(RemoteError::CommandFailed { .. })));
    }

    #[test]
    fn failure_message_names_command() {
        let err = resolve_remote_url(&FailingRemote, "upstream").unwrap_err();
        assert!(err
            .to_string()
            .contains("git config --get remote.upstream.url"));
    }
}
