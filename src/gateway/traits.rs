//! Gateway contract the aggregation controller depends on.

use async_trait::async_trait;

use crate::gateway::GatewayError;
use crate::model::{Post, UserProfile};

/// Read-only access to the two remote endpoints.
///
/// Implementations own transport details (verbs, paths, timeouts). Both
/// operations suspend until the remote call completes; scheduling the two
/// concurrently is the caller's job.
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Fetch a single user profile by id.
    async fn fetch_user(&self, id: i64) -> Result<UserProfile, GatewayError>;

    /// Fetch all posts authored by the given user, in server order.
    async fn fetch_posts(&self, user_id: i64) -> Result<Vec<Post>, GatewayError>;
}
