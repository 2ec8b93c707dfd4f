//! Remote data gateway: the boundary to the user/posts API.
//!
//! The aggregation controller depends only on the [`UserGateway`] trait;
//! [`HttpGateway`] is the production implementation over reqwest.

mod error;
mod http;
mod traits;

pub use error::GatewayError;
pub use http::HttpGateway;
pub use traits::UserGateway;
