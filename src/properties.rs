use std::collections::{BTreeMap, HashMap};

/// A source of named external properties, e.g. the process environment or the
/// property table a host build tool was started with.
pub trait PropertySource {
    /// Returns the value of the property `key`, or `None` if it isn't set.
    fn property(&self, key: &str) -> Option<String>;
}

/// Reads properties from the process environment.
///
/// A property is first looked up under its exact name (e.g. `external.version`).
/// Because POSIX shells can't export variables with dots in their name, the
/// upper-case name with dots replaced by underscores (e.g. `EXTERNAL_VERSION`)
/// is tried next. Values that aren't valid Unicode count as unset.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvProperties;

impl EnvProperties {
    fn env_name(key: &str) -> String {
        key.replace('.', "_").to_uppercase()
    }
}

impl PropertySource for EnvProperties {
    fn property(&self, key: &str) -> Option<String> {
        std::env::var(key)
            .or_else(|_| std::env::var(Self::env_name(key)))
            .ok()
    }
}

impl PropertySource for HashMap<String, String> {
    fn property(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl PropertySource for BTreeMap<String, String> {
    fn property(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<S: PropertySource + ?Sized> PropertySource for &S {
    fn property(&self, key: &str) -> Option<String> {
        (**self).property(key)
    }
}

impl<S: PropertySource + ?Sized> PropertySource for Box<S> {
    fn property(&self, key: &str) -> Option<String> {
        (**self).property(key)
    }
}

impl<S: PropertySource + ?Sized> PropertySource for std::sync::Arc<S> {
    fn property(&self, key: &str) -> Option<String> {
        (**self).property(key)
    }
}
