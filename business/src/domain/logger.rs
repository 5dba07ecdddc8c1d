/// Logging port for the use cases. Messages are plain text; the adapter
/// decides target and formatting.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
