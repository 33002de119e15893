use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct ShutdownCoordinator {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a handle for sharing
    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shutdown: Arc::clone(&self.shutdown),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight handle for checking shutdown state
#[derive(Clone)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Signal shutdown. Returns false if it was already signalled.
    pub fn signal(&self) -> bool {
        if self.shutdown.swap(true, Ordering::SeqCst) {
            return false;
        }
        tracing::info!("graceful shutdown initiated");
        true
    }
}

/// Signal shutdown on Ctrl-C or SIGTERM.
pub async fn listen_for_signals(handle: ShutdownHandle) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut terminate = match signal(SignalKind::terminate()) {
            Ok(stream) => stream,
            Err(err) => {
                tracing::warn!(error = %err, "failed to install SIGTERM handler");
                wait_for_ctrl_c().await;
                handle.signal();
                return;
            }
        };
        tokio::select! {
            _ = wait_for_ctrl_c() => {}
            _ = terminate.recv() => {}
        }
    }
    #[cfg(not(unix))]
    wait_for_ctrl_c().await;

    handle.signal();
}

async fn wait_for_ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_is_idempotent() {
        let handle = ShutdownCoordinator::new().handle();
        assert!(!handle.is_shutting_down());
        assert!(handle.signal());
        assert!(!handle.signal());
        assert!(handle.is_shutting_down());
    }

    #[test]
    fn handles_share_one_flag() {
        let coordinator = ShutdownCoordinator::new();
        let watcher = coordinator.handle();
        coordinator.handle().signal();
        assert!(watcher.is_shutting_down());
    }

    #[tokio::test]
    async fn listener_task_can_be_cancelled_before_any_signal() {
        let coordinator = ShutdownCoordinator::new();
        let task = tokio::spawn(listen_for_signals(coordinator.handle()));
        tokio::task::yield_now().await;
        task.abort();
        assert!(task.await.is_err());
        assert!(!coordinator.handle().is_shutting_down());
    }
}
