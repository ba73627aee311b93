//! One-shot cancellation.
//!
//! A [`Canceler`] is held by whoever owns the lifetime of some work (e.g. a
//! UI component), and the work holds a [`Canceled`] that resolves once
//! [`Canceler::cancel`] is called.

use futures_util::future;
use tokio::sync::watch;

#[derive(Debug)]
pub struct Canceler {
    tx: watch::Sender<bool>,
}

impl Canceler {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

#[derive(Clone, Debug)]
pub struct Canceled {
    rx: watch::Receiver<bool>,
}

impl Canceled {
    /// Returns a receiver that is never canceled.
    pub fn never() -> Self {
        let (_canceler, canceled) = new();
        canceled
    }

    pub fn is_canceled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once canceled.
    ///
    /// If the [`Canceler`] is dropped without canceling, this never resolves.
    pub async fn wait(&mut self) {
        if self.rx.wait_for(|canceled| *canceled).await.is_err() {
            future::pending::<()>().await;
        }
    }
}

pub fn new() -> (Canceler, Canceled) {
    let (tx, rx) = watch::channel(false);
    (Canceler { tx }, Canceled { rx })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use super::{
        new,
        Canceled,
    };

    #[tokio::test]
    async fn it_resolves_after_cancel() {
        let (canceler, mut canceled) = new();
        assert!(!canceled.is_canceled());

        canceler.cancel();

        assert!(canceled.is_canceled());
        timeout(Duration::from_secs(1), canceled.wait())
            .await
            .expect("wait did not resolve");
    }

    #[tokio::test]
    async fn it_resolves_for_late_subscribers() {
        let (canceler, canceled) = new();
        canceler.cancel();

        let mut late = canceled.clone();
        timeout(Duration::from_secs(1), late.wait())
            .await
            .expect("wait did not resolve");
    }

    #[tokio::test]
    async fn it_stays_pending_if_the_canceler_is_dropped() {
        let (canceler, mut canceled) = new();
        drop(canceler);

        assert!(timeout(Duration::from_millis(50), canceled.wait())
            .await
            .is_err());
        assert!(!canceled.is_canceled());
    }

    #[tokio::test]
    async fn never_stays_pending() {
        let mut canceled = Canceled::never();
        assert!(timeout(Duration::from_millis(50), canceled.wait())
            .await
            .is_err());
    }
}
