//! The external-version crate determines the version a build should stamp on its artifacts
//! from a source outside the build files.
//!
//! Two strategies are provided, both implementing [`ExternalVersionStrategy`]:
//!
//! * [`GitStrategy`] (hint `"git"`) uses the nearest git tag reachable from HEAD. It uses the
//!   [git2](https://crates.io/crates/git2) crate, so no `git` executable is needed.
//!   If no tag is reachable, the version is [`NO_TAG`]. That's not an error.
//! * [`SystemPropertyStrategy`] (hint `"sysprop"`) uses the value of the
//!   [`EXTERNAL_VERSION_PROPERTY`] property verbatim and fails if it isn't set.
//!
//! The build tool picks a strategy by its hint and passes in the collaborators the
//! strategy needs: a [`Reporter`] for logging and a [`PropertySource`] for properties.
//!
//! ## Usage
//!
//! ```no_run
//! use external_version::{EnvProperties, Project, StrategyKind, TracingReporter};
//!
//! let kind: StrategyKind = "git".parse()?;
//! let strategy = kind.instantiate(TracingReporter, EnvProperties);
//! let version = strategy.get_version(&Project::new("."))?;
//! println!("Version: {}", version);
//! # Ok::<(), external_version::ExternalVersionError>(())
//! ```
//!
//! ## Tag resolution
//!
//! History is walked from HEAD in topological order, following all parents of merge commits,
//! and the first commit that carries a tag determines the version. A tag on HEAD itself always
//! wins. Annotated tags are dereferenced to the commit they point to and behave exactly like
//! lightweight tags. If several tags point to the same commit, the lexicographically smallest
//! name is used.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// The version reported by [`GitStrategy`] when no tag is reachable from HEAD.
pub const NO_TAG: &str = "NO_TAG";

/// The property [`SystemPropertyStrategy`] reads the version from.
///
/// [`EnvProperties`] also accepts it as the environment variable `EXTERNAL_VERSION`.
pub const EXTERNAL_VERSION_PROPERTY: &str = "external.version";

mod error;
pub use error::{ExternalVersionError, Result};

mod git_helpers;
pub use git_helpers::tag_index;

mod nearest_tag;
pub use nearest_tag::{nearest_tag, NearestTag};

mod project;
pub use project::Project;

mod properties;
pub use properties::{EnvProperties, PropertySource};

mod report;
pub use report::{Reporter, TracingReporter};

mod strategy;
pub use strategy::{ExternalVersionStrategy, StrategyKind};

mod git_strategy;
pub use git_strategy::GitStrategy;

mod sysprop_strategy;
pub use sysprop_strategy::SystemPropertyStrategy;

#[cfg(test)]
mod testing;

// Re-exported because it appears in our public API
pub use git2;
pub use tracing::Level;
