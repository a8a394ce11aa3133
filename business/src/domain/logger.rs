/// Logging port injected into every use case.
///
/// Adapters decide where messages go; the domain never reaches for a global logger.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
