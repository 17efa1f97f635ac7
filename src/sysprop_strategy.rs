use crate::error::{ExternalVersionError, Result};
use crate::properties::{EnvProperties, PropertySource};
use crate::strategy::ExternalVersionStrategy;
use crate::{Project, EXTERNAL_VERSION_PROPERTY};

/// Uses the value of the [`EXTERNAL_VERSION_PROPERTY`] property as the version, unmodified.
#[derive(Clone, Debug, Default)]
pub struct SystemPropertyStrategy<S = EnvProperties> {
    properties: S,
}

impl<S: PropertySource> SystemPropertyStrategy<S> {
    /// Creates a strategy that reads the version from `properties`.
    pub fn new(properties: S) -> Self {
        Self { properties }
    }
}

impl<S: PropertySource> ExternalVersionStrategy for SystemPropertyStrategy<S> {
    fn hint(&self) -> &'static str {
        "sysprop"
    }

    fn get_version(&self, _project: &Project) -> Result<String> {
        self.properties
            .property(EXTERNAL_VERSION_PROPERTY)
            .ok_or_else(|| ExternalVersionError::MissingConfiguration {
                key: EXTERNAL_VERSION_PROPERTY.to_string(),
            })
    }
}
