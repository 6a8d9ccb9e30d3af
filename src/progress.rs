// src/progress.rs
/// Lightweight progress reporting used by the pipeline stages.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One item (URL, page or decklist) completed.
    fn item_done(&mut self, _item: &str) {}

    /// One item was skipped.
    fn item_failed(&mut self, _item: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
