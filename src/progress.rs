// src/progress.rs
/// Lightweight progress reporting for the dataset load.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once the source text is in memory.
    fn fetched(&mut self, _bytes: usize) {}

    /// Called at the end with the number of records built, successful or not.
    fn finish(&mut self, _records: usize, _warnings: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
