use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` backed by `tracing`, tagging each event with the component that emitted it.
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
        info!(target: "pagegen", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "pagegen", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "pagegen", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "pagegen", component = self.component, "{}", message);
    }
}
