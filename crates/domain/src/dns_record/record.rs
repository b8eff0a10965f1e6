use super::RecordType;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

/// TTL reported for every answer. The system resolver does not expose real TTLs.
pub const ANSWER_TTL: u32 = 300;

/// One item returned by a forward lookup, before it is flattened into answer data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedData {
    Address(IpAddr),
    MailExchange { preference: u16, exchange: String },
    Text(String),
    CanonicalName(String),
}

impl fmt::Display for ResolvedData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedData::Address(ip) => write!(f, "{}", ip),
            ResolvedData::MailExchange {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            ResolvedData::Text(text) => f.write_str(text),
            ResolvedData::CanonicalName(target) => f.write_str(target),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: Arc<str>,

    pub record_type: RecordType,

    pub ttl: u32,

    pub data: String,
}

impl AnswerRecord {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl: ANSWER_TTL,
            data: data.into(),
        }
    }

    pub fn type_code(&self) -> u16 {
        self.record_type.to_u16()
    }
}
