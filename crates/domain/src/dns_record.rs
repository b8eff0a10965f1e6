mod record;
mod record_type;

pub use record::{AnswerRecord, ResolvedData, ANSWER_TTL};
pub use record_type::RecordType;
