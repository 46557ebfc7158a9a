//! Remote URL normalization.

/// SSH shorthand prefix for GitHub remotes.
const GITHUB_SSH_PREFIX: &str = "git@github.com:";

/// HTTPS base that GitHub SSH remotes are rewritten to.
const GITHUB_HTTPS_PREFIX: &str = "https://github.com/";

/// Rewrites a GitHub SSH shorthand remote into its HTTPS form.
///
/// `git@github.com:org/repo.git` and `git@github.com:org/repo` both become
/// `https://github.com/org/repo.git`. Any other input is returned unchanged.
#[must_use]
pub fn normalize_repo_url(repo_url: &str) -> String {
    match repo_url.strip_prefix(GITHUB_SSH_PREFIX) {
        Some(repo_path) => {
            let repo_path = repo_path.strip_suffix(".git").unwrap_or(repo_path);
            format!("{GITHUB_HTTPS_PREFIX}{repo_path}.git")
        }
        None => repo_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_github_ssh_remote() {
        assert_eq!(
            normalize_repo_url("git@github.com:org/repo.git"),
            "https://github.com/org/repo.git"
        );
    }

    #[test]
    fn adds_git_suffix_when_missing() {
        assert_eq!(
            normalize_repo_url("git@github.com:org/repo"),
            "https://github.com/org/repo.git"
        );
    }

    #[test]
    fn keeps_nested_paths() {
        assert_eq!(
            normalize_repo_url("git@github.com:org/group/repo.git"),
            "https://github.com/org/group/repo.git"
        );
    }

    #[test]
    fn leaves_other_urls_untouched() {
        for url in [
            "https://github.com/org/repo.git",
            "https://github.com/org/repo",
            "ssh://git@github.com/org/repo.git",
            "git@gitlab.com:org/repo.git",
            "/srv/git/repo.git",
        ] {
            assert_eq!(normalize_repo_url(url), url);
        }
    }

    #[test]
    fn is_idempotent() {
        let once = normalize_repo_url("git@github.com:org/repo.git");
        assert_eq!(normalize_repo_url(&once), once);
    }
}
