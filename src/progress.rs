// src/progress.rs
/// Lightweight progress reporting for a standings run (fetch → fragments → parse).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once before the document is requested.
    fn begin(&mut self, _league: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _ok: bool) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
