//! Client-side aggregation of a user profile and the user's posts.
//!
//! Given a user id, [`aggregate::Controller`] fetches the profile and the
//! posts from two independent remote endpoints concurrently, merges the
//! results into a single observable [`aggregate::AggregateState`], and
//! classifies failures into user-facing messages. Consumers subscribe to
//! state snapshots through a watch channel; the terminal `loading = false`
//! publication is guaranteed for every cycle, whatever its outcome.

pub mod aggregate;
pub mod config;
pub mod gateway;
pub mod model;
pub mod trace;
