//! The aggregation controller: fork, join, merge, publish.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::aggregate::AggregateState;
use crate::gateway::UserGateway;

/// Runs fetch cycles and owns the published state.
///
/// All failures are recovered into state; [`Controller::fetch_user_data`]
/// never fails outwardly, and a failed cycle leaves the controller ready
/// for the next one. Overlapping invocations are serialized by rejection:
/// a call made while a cycle is in flight is ignored, so exactly one
/// writer is ever active.
pub struct Controller {
    gateway: Arc<dyn UserGateway>,
    state: watch::Sender<AggregateState>,
    in_flight: AtomicBool,
}

impl Controller {
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        let (state, _) = watch::channel(AggregateState::default());
        Self {
            gateway,
            state,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Subscribe to state publications.
    ///
    /// Receivers observe snapshots in publication order with latest-value
    /// semantics: a slow subscriber skips intermediate snapshots but never
    /// sees a torn one.
    pub fn subscribe(&self) -> watch::Receiver<AggregateState> {
        self.state.subscribe()
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> AggregateState {
        self.state.borrow().clone()
    }

    /// Run one fetch cycle for `user_id`.
    ///
    /// Publishes `loading = true`, runs both gateway fetches concurrently,
    /// waits for both, then publishes either the merged pair (user, posts,
    /// error cleared) as a single transition or a classified error message
    /// with the previous data left in place. `loading = false` is always
    /// the final publication of the cycle, even when a fetch panics or the
    /// future is dropped mid-flight.
    pub async fn fetch_user_data(&self, user_id: i64) {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!(user_id, "fetch cycle already in flight, ignoring");
            return;
        }

        self.state.send_modify(|s| s.loading = true);

        // Terminal writes for the cycle: runs on normal completion, on
        // panic unwind, and on cancellation. `loading = false` must land
        // after any data/error write and before the slot is released.
        let _cycle = scopeguard::guard((), |()| {
            self.state.send_modify(|s| s.loading = false);
            self.in_flight.store(false, Ordering::SeqCst);
        });

        debug!(user_id, "fetch cycle started");

        // Fork/join: both futures are polled from the first await, and the
        // join waits for the slower one. A fast failure never
        // short-circuits the other call.
        let (user, posts) = tokio::join!(
            self.gateway.fetch_user(user_id),
            self.gateway.fetch_posts(user_id),
        );

        match (user, posts) {
            (Ok(user), Ok(posts)) => {
                debug!(user_id, post_count = posts.len(), "fetch cycle succeeded");
                self.state.send_modify(|s| {
                    s.user = Some(user);
                    s.posts = posts;
                    s.error = None;
                });
            }
            // The user fetch's error wins when both calls fail.
            (Err(failure), _) | (_, Err(failure)) => {
                warn!(user_id, kind = failure.kind(), "fetch cycle failed: {failure}");
                self.state
                    .send_modify(|s| s.error = Some(failure.user_message()));
            }
        }
    }
}
