#![allow(dead_code)]
use ferrous_doh_domain::{AnswerRecord, RecordType, ANSWER_TTL};
use std::sync::Arc;

pub struct AnswerRecordBuilder {
    name: Arc<str>,
    record_type: RecordType,
    ttl: u32,
    data: String,
}

impl AnswerRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".into(),
            record_type: RecordType::A,
            ttl: ANSWER_TTL,
            data: "93.184.216.34".to_string(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn data(mut self, data: &str) -> Self {
        self.data = data.to_string();
        self
    }

    pub fn build(self) -> AnswerRecord {
        AnswerRecord {
            name: self.name,
            record_type: self.record_type,
            ttl: self.ttl,
            data: self.data,
        }
    }
}

impl Default for AnswerRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
