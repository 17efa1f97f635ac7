use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{ExternalVersionError, Result};
use crate::git_strategy::GitStrategy;
use crate::properties::PropertySource;
use crate::report::Reporter;
use crate::sysprop_strategy::SystemPropertyStrategy;
use crate::Project;

/// A way of determining the external version of a project.
pub trait ExternalVersionStrategy {
    /// The name the strategy is selected by, e.g. `"git"`.
    fn hint(&self) -> &'static str;

    /// Determines the version of `project`.
    fn get_version(&self, project: &Project) -> Result<String>;
}

impl<T: ExternalVersionStrategy + ?Sized> ExternalVersionStrategy for Box<T> {
    fn hint(&self) -> &'static str {
        (**self).hint()
    }

    fn get_version(&self, project: &Project) -> Result<String> {
        (**self).get_version(project)
    }
}

/// The available strategies, selected by their hint.
///
/// ```
/// use external_version::StrategyKind;
///
/// let kind: StrategyKind = "git".parse().unwrap();
/// assert_eq!(StrategyKind::Git, kind);
/// assert_eq!("sysprop", StrategyKind::SystemProperty.to_string());
/// assert!("svn".parse::<StrategyKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// [`GitStrategy`], hint `"git"`.
    #[serde(rename = "git")]
    Git,
    /// [`SystemPropertyStrategy`], hint `"sysprop"`.
    #[serde(rename = "sysprop")]
    SystemProperty,
}

impl StrategyKind {
    /// All strategies, in no particular order.
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Git, StrategyKind::SystemProperty];

    /// The name this strategy is selected by.
    pub fn hint(self) -> &'static str {
        match self {
            StrategyKind::Git => "git",
            StrategyKind::SystemProperty => "sysprop",
        }
    }

    /// Creates the strategy. Only the collaborators the strategy needs are kept.
    pub fn instantiate<R, S>(self, reporter: R, properties: S) -> Box<dyn ExternalVersionStrategy>
    where
        R: Reporter + 'static,
        S: PropertySource + 'static,
    {
        match self {
            StrategyKind::Git => Box::new(GitStrategy::new(reporter)),
            StrategyKind::SystemProperty => Box::new(SystemPropertyStrategy::new(properties)),
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.hint())
    }
}

impl FromStr for StrategyKind {
    type Err = ExternalVersionError;

    fn from_str(hint: &str) -> Result<Self> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.hint() == hint)
            .ok_or_else(|| ExternalVersionError::UnknownStrategy {
                hint: hint.to_string(),
            })
    }
}
