//! # blogroll-hashnode
//!
//! Blocking GraphQL client for the Hashnode content API.
//!
//! One request per sync run: the publication's latest posts, newest first,
//! decoded into a [`blogroll_core::PostList`]. The client is constructed from
//! a [`blogroll_core::SyncConfig`] and passed into the pipeline — there is no
//! process-wide shared instance.

pub mod client;
pub mod error;
mod response;

pub use client::HashnodeClient;
pub use error::FetchError;
