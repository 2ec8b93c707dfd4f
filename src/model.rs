use serde::Deserialize;

/// A user profile as served by `GET /users/{id}`.
///
/// Replaced wholesale on each successful fetch cycle; never partially
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

/// A single post, as served by `GET /posts?userId={id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    /// Authoring user's id, carried as-is from the wire. Nothing validates
    /// it against the fetched profile.
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Post id, unique within one user's collection.
    pub id: i64,
    pub title: String,
    pub body: String,
}
