//! Election data types.
//!
//! - [`election`] holds the records owned by the store.
//! - [`sort`] names the orderings a listing may ask for.
//! - [`api`] holds the request and response types exchanged over HTTP.

pub mod api;
pub mod election;
pub mod serde_string;
pub mod sort;
