use serde::Deserialize;

/// Raw `/dns-query` parameters. Both are optional here so that a missing
/// value reaches validation instead of failing extraction.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DnsQueryParams {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
}
