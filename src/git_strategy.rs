use git2::Repository;
use tracing::Level;

use crate::error::{ExternalVersionError, Result};
use crate::git_helpers::tag_index;
use crate::nearest_tag::nearest_tag_in_index;
use crate::report::{Reporter, TracingReporter};
use crate::strategy::ExternalVersionStrategy;
use crate::{Project, NO_TAG};

/// Uses the nearest git tag reachable from HEAD as the version.
///
/// The repository is discovered by searching upward from the project's base
/// directory. Every call opens the repository afresh, nothing is cached between calls.
/// If no tag is reachable from HEAD, the version is [`NO_TAG`].
#[derive(Clone, Debug, Default)]
pub struct GitStrategy<R = TracingReporter> {
    reporter: R,
}

impl<R: Reporter> GitStrategy<R> {
    /// Creates a strategy that logs through `reporter`.
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    fn resolve(&self, basedir: &std::path::Path) -> std::result::Result<String, git2::Error> {
        let repo = Repository::discover(basedir)?;
        self.reporter.report(
            Level::DEBUG,
            &format!("Using git repository at [{}]", repo.path().display()),
        );

        let tag_index = tag_index(&repo)?;
        self.reporter.report(
            Level::DEBUG,
            &format!("Found tags on {} commits", tag_index.len()),
        );

        match nearest_tag_in_index(&repo, &tag_index)? {
            Some(nearest) => {
                self.reporter.report(
                    Level::INFO,
                    &format!(
                        "Nearest tag is '{}' on commit {}",
                        nearest.tag, nearest.commit_id
                    ),
                );
                Ok(nearest.tag)
            }
            None => {
                self.reporter.report(
                    Level::INFO,
                    &format!("No tag reachable from HEAD, using {}", NO_TAG),
                );
                Ok(NO_TAG.to_string())
            }
        }
    }
}

impl<R: Reporter> ExternalVersionStrategy for GitStrategy<R> {
    fn hint(&self) -> &'static str {
        "git"
    }

    fn get_version(&self, project: &Project) -> Result<String> {
        self.resolve(project.basedir())
            .map_err(|source| ExternalVersionError::RepositoryAccess {
                path: project.basedir().to_path_buf(),
                source,
            })
    }
}
