use crate::ports::DnsLookup;
use ferrous_doh_domain::{AnswerRecord, DnsQuery, DomainError, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Turns a validated query into answer records using the host resolver.
pub struct ResolveQueryUseCase {
    lookup: Arc<dyn DnsLookup>,
}

impl ResolveQueryUseCase {
    pub fn new(lookup: Arc<dyn DnsLookup>) -> Self {
        Self { lookup }
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<Vec<AnswerRecord>, DomainError> {
        let start = Instant::now();

        let result = if query.record_type.is_reverse() {
            self.reverse(query).await
        } else {
            self.forward(query).await
        };

        match &result {
            Ok(records) => debug!(
                domain = %query.domain,
                record_type = %query.record_type,
                answers = records.len(),
                elapsed_us = start.elapsed().as_micros() as u64,
                "Query resolved"
            ),
            Err(e) => debug!(
                domain = %query.domain,
                record_type = %query.record_type,
                error = %e,
                elapsed_us = start.elapsed().as_micros() as u64,
                "Query failed"
            ),
        }

        result
    }

    async fn forward(&self, query: &DnsQuery) -> Result<Vec<AnswerRecord>, DomainError> {
        let resolved = self.lookup.resolve(query).await?;

        Ok(resolved
            .iter()
            .map(|data| {
                AnswerRecord::new(Arc::clone(&query.domain), query.record_type, data.to_string())
            })
            .collect())
    }

    // The name of a PTR query is the address itself, not an in-addr.arpa name.
    async fn reverse(&self, query: &DnsQuery) -> Result<Vec<AnswerRecord>, DomainError> {
        let ip: IpAddr = query
            .domain
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(query.domain.to_string()))?;

        let hostnames = self.lookup.reverse_lookup(ip).await?;

        Ok(hostnames
            .into_iter()
            .map(|host| AnswerRecord::new(Arc::clone(&query.domain), RecordType::PTR, host))
            .collect())
    }
}
