use async_trait::async_trait;
use ferrous_doh_application::ports::DnsLookup;
use ferrous_doh_domain::{DnsQuery, DomainError, RecordType, ResolvedData, ResolverSource};
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::rr::rdata::{MX, TXT};
use hickory_resolver::proto::rr::{Name, RData, RecordType as HickoryRecordType};
use hickory_resolver::{ResolveError, Resolver, TokioResolver};
use std::net::IpAddr;
use tracing::{debug, info};

/// `DnsLookup` backed by a hickory stub resolver.
///
/// Each call issues a single lookup. Timeouts, attempts and any internal
/// caching come from the resolver options of the selected source.
pub struct HickoryDnsLookup {
    resolver: TokioResolver,
}

impl HickoryDnsLookup {
    pub fn new(resolver: TokioResolver) -> Self {
        Self { resolver }
    }

    /// Create resolver from the host configuration (`/etc/resolv.conf` on Unix)
    pub fn system() -> Result<Self, DomainError> {
        let resolver = Resolver::builder_tokio()
            .map_err(|e| {
                DomainError::Resolution(format!("Failed to read system resolver config: {}", e))
            })?
            .build();
        Ok(Self::new(resolver))
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        let resolver =
            Resolver::builder_with_config(config, TokioConnectionProvider::default()).build();
        Self::new(resolver)
    }

    pub fn from_source(source: ResolverSource) -> Result<Self, DomainError> {
        info!(source = source.as_str(), "Creating DNS resolver");

        match source {
            ResolverSource::System => Self::system(),
            ResolverSource::Google => Ok(Self::with_config(ResolverConfig::google())),
            ResolverSource::Cloudflare => Ok(Self::with_config(ResolverConfig::cloudflare())),
            ResolverSource::Quad9 => Ok(Self::with_config(ResolverConfig::quad9())),
        }
    }

    async fn lookup_cname(&self, domain: &str) -> Result<Vec<ResolvedData>, ResolveError> {
        let lookup = self.resolver.lookup(domain, HickoryRecordType::CNAME).await?;

        Ok(lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::CNAME(cname) => Some(ResolvedData::CanonicalName(host_string(&cname.0))),
                _ => None,
            })
            .collect())
    }
}

#[async_trait]
impl DnsLookup for HickoryDnsLookup {
    async fn resolve(&self, query: &DnsQuery) -> Result<Vec<ResolvedData>, DomainError> {
        let domain = query.domain.as_ref();

        debug!(domain = %domain, record_type = %query.record_type, "Resolving");

        let result = match query.record_type {
            RecordType::A => self.resolver.ipv4_lookup(domain).await.map(|lookup| {
                lookup
                    .iter()
                    .map(|a| ResolvedData::Address(IpAddr::V4(a.0)))
                    .collect()
            }),
            RecordType::AAAA => self.resolver.ipv6_lookup(domain).await.map(|lookup| {
                lookup
                    .iter()
                    .map(|aaaa| ResolvedData::Address(IpAddr::V6(aaaa.0)))
                    .collect()
            }),
            RecordType::MX => self
                .resolver
                .mx_lookup(domain)
                .await
                .map(|lookup| lookup.iter().map(mx_data).collect()),
            RecordType::TXT => self
                .resolver
                .txt_lookup(domain)
                .await
                .map(|lookup| lookup.iter().map(txt_data).collect()),
            RecordType::CNAME => self.lookup_cname(domain).await,
            RecordType::PTR => {
                return Err(DomainError::Resolution(
                    "PTR queries go through reverse_lookup".to_string(),
                ))
            }
        };

        result.map_err(|e| resolution_error(domain, e))
    }

    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        debug!(ip = %ip, "Performing PTR lookup");

        let lookup = self
            .resolver
            .reverse_lookup(ip)
            .await
            .map_err(|e| resolution_error(&ip.to_string(), e))?;

        Ok(lookup.iter().map(|ptr| host_string(&ptr.0)).collect())
    }
}

fn resolution_error(subject: &str, error: ResolveError) -> DomainError {
    debug!(subject = %subject, error = %error, "Resolver returned an error");
    DomainError::Resolution(error.to_string())
}

/// Host name in the ASCII form the resolver returned, without the trailing
/// root label. Punycode labels are left encoded.
fn host_string(name: &Name) -> String {
    let name = name.to_ascii();
    match name.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => name,
    }
}

fn mx_data(mx: &MX) -> ResolvedData {
    ResolvedData::MailExchange {
        preference: mx.preference(),
        exchange: host_string(mx.exchange()),
    }
}

// A TXT record may be split into several character-strings; they are joined
// back into one value.
fn txt_data(txt: &TXT) -> ResolvedData {
    let text = txt
        .txt_data()
        .iter()
        .map(|chunk| String::from_utf8_lossy(chunk))
        .collect::<String>();
    ResolvedData::Text(text)
}
