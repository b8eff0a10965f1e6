#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_doh_application::ports::DnsLookup;
use ferrous_doh_domain::{DnsQuery, DomainError, RecordType, ResolvedData};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockDnsLookup {
    forward: Arc<RwLock<HashMap<(String, RecordType), Vec<ResolvedData>>>>,
    reverse: Arc<RwLock<HashMap<IpAddr, Vec<String>>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    forward_calls: Arc<AtomicUsize>,
    reverse_calls: Arc<AtomicUsize>,
}

impl MockDnsLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, domain: &str, record_type: RecordType, data: Vec<ResolvedData>) {
        self.forward
            .write()
            .unwrap()
            .insert((domain.to_string(), record_type), data);
    }

    pub fn set_reverse(&self, ip: &str, hostnames: &[&str]) {
        self.reverse.write().unwrap().insert(
            ip.parse().unwrap(),
            hostnames.iter().map(|h| h.to_string()).collect(),
        );
    }

    pub fn set_error(&self, key: &str, error: DomainError) {
        self.errors.write().unwrap().insert(key.to_string(), error);
    }

    pub fn forward_calls(&self) -> usize {
        self.forward_calls.load(Ordering::SeqCst)
    }

    pub fn reverse_calls(&self) -> usize {
        self.reverse_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsLookup for MockDnsLookup {
    async fn resolve(&self, query: &DnsQuery) -> Result<Vec<ResolvedData>, DomainError> {
        self.forward_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = self.errors.read().unwrap().get(query.domain.as_ref()).cloned() {
            return Err(err);
        }

        self.forward
            .read()
            .unwrap()
            .get(&(query.domain.to_string(), query.record_type))
            .cloned()
            .ok_or_else(|| {
                DomainError::Resolution(format!("queryA ENOTFOUND {}", query.domain))
            })
    }

    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        self.reverse_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = self.errors.read().unwrap().get(&ip.to_string()).cloned() {
            return Err(err);
        }

        self.reverse
            .read()
            .unwrap()
            .get(&ip)
            .cloned()
            .ok_or_else(|| DomainError::Resolution(format!("getHostByAddr ENOTFOUND {}", ip)))
    }
}
