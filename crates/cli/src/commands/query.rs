use ferrous_doh_client::DohClient;
use ferrous_doh_domain::{DohAnswer, RecordType};

pub async fn run(server: &str, name: &str, record_type: RecordType) -> anyhow::Result<()> {
    let client = DohClient::new(server)?;

    let answers = client.query(name, record_type).await?;

    if answers.is_empty() {
        println!("No records found.");
    }
    for answer in &answers {
        println!("{}", render(answer));
    }
    Ok(())
}

fn render(answer: &DohAnswer) -> String {
    let type_name = RecordType::from_u16(answer.record_type)
        .map(|t| t.as_str().to_string())
        .unwrap_or_else(|| answer.record_type.to_string());

    format!(
        "{}\t{}\t{}\t{}",
        answer.name, type_name, answer.ttl, answer.data
    )
}
