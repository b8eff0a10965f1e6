//! Client side of the DNS-over-HTTPS JSON endpoint.
//!
//! Normalizes user input to a bare hostname, issues the query and turns the
//! envelope into answers or a [`ClientError`].

pub mod client;
pub mod error;
pub mod normalize;

pub use client::{DohClient, DohClientBuilder};
pub use error::ClientError;
pub use normalize::normalize_name;
