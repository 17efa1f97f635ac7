use git2::{Oid, Repository, Sort};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::git_helpers;

/// The tag closest to HEAD, as found by [`nearest_tag`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestTag {
    /// The name of the tag (e.g., `"v1.2.3"`, `"release-1.0"`), without the `refs/tags/` prefix.
    pub tag: String,

    /// The full hex id of the commit the tag points to.
    pub commit_id: String,
}

/// Finds the tag on HEAD or on its closest tagged ancestor.
///
/// History is walked from HEAD in topological order, so every commit is visited once
/// and always before its parents. Among commits on independent branches, newer commits
/// are visited first. Merge commits are followed into all their parents. The first
/// visited commit that has a tag wins, which means a tag directly on HEAD always
/// takes precedence over tags on ancestors.
///
/// Returns `Ok(None)` if no tag is reachable from HEAD. That is an expected state for
/// a repository and not an error.
///
/// # Errors
///
/// Returns a [`git2::Error`] if:
/// - HEAD can't be resolved to a commit (e.g., empty repository with no commits)
/// - The tag index can't be built, see [`tag_index`](crate::tag_index)
/// - History can't be read
pub fn nearest_tag(repo: &Repository) -> Result<Option<NearestTag>, git2::Error> {
    let tag_index = git_helpers::tag_index(repo)?;
    nearest_tag_in_index(repo, &tag_index)
}

/// Like [`nearest_tag`], but with a tag index the caller already built with
/// [`tag_index`](crate::tag_index).
pub(crate) fn nearest_tag_in_index(
    repo: &Repository,
    tag_index: &HashMap<Oid, String>,
) -> Result<Option<NearestTag>, git2::Error> {
    let head_commit = repo.head()?.peel_to_commit()?;

    let mut walk = repo.revwalk()?;
    walk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
    walk.push(head_commit.id())?;
    for commit_id in walk {
        let commit_id = commit_id?;
        if let Some(tag) = tag_index.get(&commit_id) {
            return Ok(Some(NearestTag {
                tag: tag.clone(),
                commit_id: commit_id.to_string(),
            }));
        }
    }
    Ok(None)
}
