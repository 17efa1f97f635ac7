use std::path::{Path, PathBuf};

/// The project whose version is being determined, as handed over by the build tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    basedir: PathBuf,
}

impl Project {
    /// Creates a project rooted at `basedir`.
    pub fn new(basedir: impl Into<PathBuf>) -> Self {
        Self {
            basedir: basedir.into(),
        }
    }

    /// The project's base directory. It doesn't need to be the root of the git repository.
    pub fn basedir(&self) -> &Path {
        &self.basedir
    }
}
