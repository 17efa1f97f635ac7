use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by an [`ExternalVersionStrategy`](crate::ExternalVersionStrategy).
///
/// A repository without any reachable tag is not an error, see [`NO_TAG`](crate::NO_TAG).
#[derive(Error, Debug)]
pub enum ExternalVersionError {
    /// The git repository could not be located, opened or read.
    ///
    /// This covers a missing `.git` directory, an unreadable object store,
    /// an unresolvable HEAD (e.g. an empty repository) and tags that can't be
    /// dereferenced to a commit.
    #[error("Failed to read repository at [{}]", .path.display())]
    RepositoryAccess {
        /// The project directory the lookup started from.
        path: PathBuf,
        /// The underlying git error.
        #[source]
        source: git2::Error,
    },

    /// A required external property was not set.
    #[error("System property '{key}' was not set")]
    MissingConfiguration {
        /// The name of the property that was looked up.
        key: String,
    },

    /// No strategy is registered under the requested hint.
    #[error("Unknown external version strategy '{hint}'")]
    UnknownStrategy {
        /// The hint that was requested.
        hint: String,
    },
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, ExternalVersionError>;
