//! The externally observable aggregate state.

use crate::model::{Post, UserProfile};

/// Snapshot of everything a consumer needs to render.
///
/// One value of this type is the unit of publication: a successful cycle
/// replaces `user` and `posts` and clears `error` inside a single
/// publication, so a subscriber can never observe data from two different
/// cycles in one snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateState {
    /// The fetched profile; `None` until the first successful cycle.
    pub user: Option<UserProfile>,
    /// The user's posts in arrival order; empty until the first successful
    /// cycle.
    pub posts: Vec<Post>,
    /// Classified message of the most recent failed cycle, if any. Cleared
    /// by the next successful cycle.
    pub error: Option<String>,
    /// True while a fetch cycle is in flight.
    pub loading: bool,
}
