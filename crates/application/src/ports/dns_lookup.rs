use async_trait::async_trait;
use ferrous_doh_domain::{DnsQuery, DomainError, ResolvedData};
use std::net::IpAddr;

/// Host resolver capability. Implementations make exactly one upstream call
/// per invocation; retries and caching, if any, belong to the resolver itself.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Forward lookup for A, AAAA, MX, TXT and CNAME queries.
    async fn resolve(&self, query: &DnsQuery) -> Result<Vec<ResolvedData>, DomainError>;

    /// Reverse lookup of an address into host names.
    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, DomainError>;
}
