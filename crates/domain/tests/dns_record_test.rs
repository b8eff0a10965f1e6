use ferrous_doh_domain::{AnswerRecord, RecordType, ResolvedData, ANSWER_TTL};
use std::net::IpAddr;
use std::str::FromStr;

mod helpers;
use helpers::AnswerRecordBuilder;

#[test]
fn test_type_code_table() {
    assert_eq!(RecordType::A.to_u16(), 1);
    assert_eq!(RecordType::AAAA.to_u16(), 28);
    assert_eq!(RecordType::MX.to_u16(), 15);
    assert_eq!(RecordType::TXT.to_u16(), 16);
    assert_eq!(RecordType::CNAME.to_u16(), 5);
    assert_eq!(RecordType::PTR.to_u16(), 12);
}

#[test]
fn test_type_code_roundtrip_for_all_types() {
    for record_type in RecordType::ALL {
        assert_eq!(RecordType::from_u16(record_type.to_u16()), Some(record_type));
    }
    assert_eq!(RecordType::from_u16(2), None);
}

#[test]
fn test_record_type_parsing_is_exact() {
    assert_eq!(RecordType::from_str("AAAA"), Ok(RecordType::AAAA));
    assert_eq!(RecordType::from_str("PTR"), Ok(RecordType::PTR));
    assert_eq!(RecordType::from_str("a"), Err("a".to_string()));
    assert_eq!(RecordType::from_str("NS"), Err("NS".to_string()));
    assert_eq!(RecordType::from_str(""), Err(String::new()));
}

#[test]
fn test_default_record_type_is_a() {
    assert_eq!(RecordType::default(), RecordType::A);
}

#[test]
fn test_only_ptr_is_reverse() {
    let reverse: Vec<_> = RecordType::ALL.iter().filter(|t| t.is_reverse()).collect();
    assert_eq!(reverse, vec![&RecordType::PTR]);
}

#[test]
fn test_answer_record_uses_fixed_ttl() {
    let record = AnswerRecord::new("example.com", RecordType::TXT, "v=spf1 -all");

    assert_eq!(record.ttl, ANSWER_TTL);
    assert_eq!(record.ttl, 300);
    assert_eq!(record.type_code(), 16);
    assert_eq!(&*record.name, "example.com");
}

#[test]
fn test_answer_record_builder() {
    let record = AnswerRecordBuilder::new()
        .name("one.one.one.one")
        .record_type(RecordType::AAAA)
        .data("2606:4700:4700::1111")
        .build();

    assert_eq!(record.type_code(), 28);
    assert_eq!(record.data, "2606:4700:4700::1111");
}

#[test]
fn test_resolved_data_formatting() {
    let v4 = ResolvedData::Address(IpAddr::from_str("93.184.216.34").unwrap());
    assert_eq!(v4.to_string(), "93.184.216.34");

    let v6 = ResolvedData::Address(IpAddr::from_str("2001:db8::1").unwrap());
    assert_eq!(v6.to_string(), "2001:db8::1");

    let mx = ResolvedData::MailExchange {
        preference: 10,
        exchange: "mail.example.com".to_string(),
    };
    assert_eq!(mx.to_string(), "10 mail.example.com");

    let txt = ResolvedData::Text("hello world".to_string());
    assert_eq!(txt.to_string(), "hello world");

    let cname = ResolvedData::CanonicalName("target.example.net".to_string());
    assert_eq!(cname.to_string(), "target.example.net");
}
