//! Background operation tasks.

use std::future::Future;

use tokio::task::JoinHandle;

/// Handle to a spawned portal operation.
///
/// The task is aborted when the handle is dropped, so pending operations
/// never outlive the application state that started them.
#[derive(Debug)]
pub struct OperationTask {
    handle: JoinHandle<()>,
}

impl OperationTask {
    /// Spawns a future as a tracked operation.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// Returns whether the task has run to completion.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Aborts the task.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Drop for OperationTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
