pub mod error;
pub mod query;

pub use error::ErrorResponse;
pub use query::DnsQueryParams;
