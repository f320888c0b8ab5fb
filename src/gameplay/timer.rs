use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A fire-once delay with a cancellation handle.
///
/// The delay runs as a spawned tokio task, so [`Timer::start`] must be
/// called from inside a runtime. Dropping the timer aborts the task.
#[derive(Debug)]
pub struct Timer {
    task: JoinHandle<()>,
    rx: oneshot::Receiver<()>,
}

impl Timer {
    pub fn start(delay: Duration) -> Self {
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(());
        });
        log::debug!("[timer] armed for {:?}", delay);
        Self { task, rx }
    }
    pub fn cancel(&mut self) {
        log::debug!("[timer] cancelled");
        self.task.abort();
    }
    pub fn is_pending(&self) -> bool {
        !self.task.is_finished()
    }
    /// `true` once the delay elapses, `false` if it was cancelled first.
    pub async fn wait(mut self) -> bool {
        (&mut self.rx).await.is_ok()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
