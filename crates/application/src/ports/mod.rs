mod dns_lookup;

pub use dns_lookup::DnsLookup;

// Re-export for convenience
pub use ferrous_doh_domain::{DnsQuery, ResolvedData};
