use std::time::Duration;

use arboard::Clipboard;
use async_trait::async_trait;
use lexifind_core::share::{ShareAttempt, ShareMechanism};
use lexifind_types::{ShareMethod, SharePayload};
use tokio::sync::oneshot;

/// Writes `text` and hands back the clipboard that now owns it
pub fn copy_text(text: &str) -> Result<Clipboard, anyhow::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(clipboard)
}

/// Runs `write`, reports how it went, then keeps the returned owner alive for `hold`
fn write_and_hold<H>(
    write: impl FnOnce() -> anyhow::Result<H>,
    hold: Duration,
    written: oneshot::Sender<anyhow::Result<()>>,
) {
    match write() {
        Ok(owner) => {
            let _ = written.send(Ok(()));
            std::thread::sleep(hold);
            drop(owner);
        }
        Err(e) => {
            let _ = written.send(Err(e));
        }
    }
}

/// Copies the app link to the system clipboard
#[derive(Debug, Clone, Copy)]
pub struct ClipboardShare {
    hold: Duration,
}

impl ClipboardShare {
    pub fn new(hold: Duration) -> Self {
        Self { hold }
    }
}

#[async_trait]
impl ShareMechanism for ClipboardShare {
    fn method(&self) -> ShareMethod {
        ShareMethod::Clipboard
    }

    fn is_available(&self, payload: &SharePayload) -> bool {
        !payload.url.is_empty()
    }

    async fn share(&self, payload: &SharePayload) -> ShareAttempt {
        let url = payload.url.clone();
        let hold = self.hold;
        let (written_tx, written_rx) = oneshot::channel();

        // arboard talks to the display server synchronously, and on Linux the
        // text is only served while the Clipboard is alive
        tokio::task::spawn_blocking(move || write_and_hold(|| copy_text(&url), hold, written_tx));

        match written_rx.await {
            Ok(Ok(())) => ShareAttempt::Shared,
            Ok(Err(e)) => {
                tracing::warn!("Clipboard write failed: {}", e);
                ShareAttempt::Failed(format!("clipboard unavailable: {e}"))
            }
            Err(_) => ShareAttempt::Failed("clipboard task ended without reporting".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Instant;

    use super::*;

    struct Owner(Arc<AtomicBool>);

    impl Drop for Owner {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[test]
    fn owner_outlives_the_success_report() {
        let released = Arc::new(AtomicBool::new(false));
        let (tx, rx) = oneshot::channel();

        let flag = released.clone();
        let started = Instant::now();
        let worker = std::thread::spawn(move || {
            write_and_hold(|| Ok(Owner(flag)), Duration::from_millis(300), tx)
        });

        assert!(rx.blocking_recv().unwrap().is_ok());
        assert!(!released.load(Ordering::SeqCst), "clipboard released before the hold expired");

        worker.join().unwrap();
        assert!(released.load(Ordering::SeqCst));
        assert!(started.elapsed() >= Duration::from_millis(300));
    }

    #[test]
    fn write_error_is_reported_without_holding() {
        let (tx, rx) = oneshot::channel();
        let started = Instant::now();

        write_and_hold::<()>(
            || Err(anyhow::anyhow!("no display")),
            Duration::from_secs(30),
            tx,
        );

        let err = rx.blocking_recv().unwrap().unwrap_err();
        assert_eq!(err.to_string(), "no display");
        assert!(started.elapsed() < Duration::from_secs(30));
    }
}
