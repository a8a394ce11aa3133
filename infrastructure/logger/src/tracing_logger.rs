use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter emitting `tracing` events tagged with the component that owns them.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "wishlist", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "wishlist", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "wishlist", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "wishlist", component = self.component, "{}", message);
    }
}
