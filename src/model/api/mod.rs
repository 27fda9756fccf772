//! API-compatible types.
//!
//! The types in this module are serialised in an API-friendly way, e.g.:
//!
//! - Timestamps are serialised as decimal strings.
//! - Listing parameters are all optional and fall back to server defaults.

mod election;
mod pagination;

pub use election::{
    CommenceElectionRequest, CommenceElectionResponse, ElectionSummary, ListOpenElectionsResponse,
};
pub use pagination::ListOpenElectionsRequest;
