use super::{DomainError, RecordType};
use std::sync::Arc;

/// A validated lookup request. `domain` is kept exactly as the caller sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Builds a query from raw request parameters.
    ///
    /// The name is checked before the type, so a request missing both
    /// reports the missing name. An absent type means `A`.
    pub fn from_params(name: Option<&str>, record_type: Option<&str>) -> Result<Self, DomainError> {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(DomainError::MissingName),
        };

        let record_type = match record_type {
            None => RecordType::default(),
            Some(raw) => raw
                .parse::<RecordType>()
                .map_err(DomainError::UnsupportedRecordType)?,
        };

        Ok(Self::new(name, record_type))
    }
}
