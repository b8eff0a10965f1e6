use super::AnswerRecord;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Envelope status, mirroring DNS RCODE semantics (not HTTP status).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DohStatus {
    NoError,
    ServFail,
}

impl DohStatus {
    pub fn code(&self) -> u8 {
        match self {
            DohStatus::NoError => 0,
            DohStatus::ServFail => 2,
        }
    }
}

/// One entry of the `Answer` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DohAnswer {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
    #[serde(rename = "TTL")]
    pub ttl: u32,
    pub data: String,
}

impl From<&AnswerRecord> for DohAnswer {
    fn from(record: &AnswerRecord) -> Self {
        Self {
            name: record.name.to_string(),
            record_type: record.type_code(),
            ttl: record.ttl,
            data: record.data.clone(),
        }
    }
}

/// JSON envelope returned by `/dns-query`.
///
/// `Answer` is only written on success and `Comment` only on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DohResponse {
    Success { answer: Vec<DohAnswer> },
    Failure { comment: String },
}

impl DohResponse {
    pub fn from_records(records: &[AnswerRecord]) -> Self {
        DohResponse::Success {
            answer: records.iter().map(DohAnswer::from).collect(),
        }
    }

    pub fn failure(comment: impl Into<String>) -> Self {
        DohResponse::Failure {
            comment: comment.into(),
        }
    }

    pub fn status(&self) -> DohStatus {
        match self {
            DohResponse::Success { .. } => DohStatus::NoError,
            DohResponse::Failure { .. } => DohStatus::ServFail,
        }
    }
}

impl Serialize for DohResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DohResponse", 2)?;
        state.serialize_field("Status", &self.status().code())?;
        match self {
            DohResponse::Success { answer } => state.serialize_field("Answer", answer)?,
            DohResponse::Failure { comment } => state.serialize_field("Comment", comment)?,
        }
        state.end()
    }
}
