//! Ferrous DoH Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod doh_response;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, LogFormat, ResolverSource};
pub use dns_query::DnsQuery;
pub use dns_record::{AnswerRecord, RecordType, ResolvedData, ANSWER_TTL};
pub use doh_response::{DohAnswer, DohResponse, DohStatus};
pub use errors::DomainError;
