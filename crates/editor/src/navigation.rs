//! Deferred view navigation with cancellation.
//!
//! After a successful submission the editor sends the view to the
//! cluster-routes summary, but only after a short delay so the success
//! notice stays readable. [`Navigator`] publishes the [`Destination`] on a
//! broadcast channel once the delay elapses; triggering the associated
//! [`CancellationToken`] first suppresses it.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

// ---------------------------------------------------------------------------
// Destination
// ---------------------------------------------------------------------------

/// A view destination the embedding application knows how to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The cluster-routes summary for one (cluster, dc) pair.
    ClusterRoutes {
        cluster_name: String,
        dc_name: String,
    },
}

impl Destination {
    /// Router-style path with query string, e.g.
    /// `cluster_routes?clusterName=orders&dcName=dc-east`.
    pub fn query_path(&self) -> String {
        match self {
            Destination::ClusterRoutes {
                cluster_name,
                dc_name,
            } => format!("cluster_routes?clusterName={cluster_name}&dcName={dc_name}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 8;

/// Publishes [`Destination`]s to the view layer, optionally after a delay.
pub struct Navigator {
    sender: broadcast::Sender<Destination>,
}

impl Navigator {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(DEFAULT_CAPACITY);
        Self { sender }
    }

    /// Subscribe to all destinations published by this navigator.
    pub fn subscribe(&self) -> broadcast::Receiver<Destination> {
        self.sender.subscribe()
    }

    /// Publish `destination` after `delay`, unless `cancel` fires first.
    ///
    /// The wait runs on a spawned task; the returned handle is mainly
    /// useful for tests that want to await completion.
    pub fn defer(
        &self,
        destination: Destination,
        delay: Duration,
        cancel: CancellationToken,
    ) -> tokio::task::JoinHandle<()> {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(
                        destination = %destination.query_path(),
                        "Deferred navigation cancelled",
                    );
                }
                _ = tokio::time::sleep(delay) => {
                    tracing::debug!(
                        destination = %destination.query_path(),
                        "Navigating",
                    );
                    // Ignore the SendError; it only means there are zero receivers.
                    let _ = sender.send(destination);
                }
            }
        })
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
