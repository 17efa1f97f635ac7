use tracing::Level;

/// A logging capability handed to a strategy by its caller.
///
/// Hosts that have their own logger implement this to route messages there.
/// [`TracingReporter`] forwards everything to [`tracing`].
pub trait Reporter {
    /// Reports a single message at the given level.
    fn report(&self, level: Level, message: &str);
}

/// Forwards reported messages to the [`tracing`] macros with target `external_version`.
///
/// This crate never installs a subscriber. Nothing is printed unless the host did.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, level: Level, message: &str) {
        // The tracing macros need the level as a constant
        if level == Level::ERROR {
            tracing::error!(target: "external_version", "{}", message);
        } else if level == Level::WARN {
            tracing::warn!(target: "external_version", "{}", message);
        } else if level == Level::INFO {
            tracing::info!(target: "external_version", "{}", message);
        } else if level == Level::DEBUG {
            tracing::debug!(target: "external_version", "{}", message);
        } else {
            tracing::trace!(target: "external_version", "{}", message);
        }
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, level: Level, message: &str) {
        (**self).report(level, message)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&self, level: Level, message: &str) {
        (**self).report(level, message)
    }
}

impl<R: Reporter + ?Sized> Reporter for std::sync::Arc<R> {
    fn report(&self, level: Level, message: &str) {
        (**self).report(level, message)
    }
}
