use async_trait::async_trait;
use ferrous_doh_api::{cors_layer, create_api_routes, AppState};
use ferrous_doh_application::{ports::DnsLookup, use_cases::ResolveQueryUseCase};
use ferrous_doh_client::{ClientError, DohClient};
use ferrous_doh_domain::{DnsQuery, DomainError, RecordType, ResolvedData};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;

struct FixedLookup;

#[async_trait]
impl DnsLookup for FixedLookup {
    async fn resolve(&self, query: &DnsQuery) -> Result<Vec<ResolvedData>, DomainError> {
        match (&*query.domain, query.record_type) {
            ("example.com", RecordType::A) => {
                Ok(vec![ResolvedData::Address("93.184.216.34".parse().unwrap())])
            }
            ("example.com", RecordType::TXT) => Ok(vec![ResolvedData::Text(
                "v=spf1 include:_spf.example.com -all".to_string(),
            )]),
            _ => Err(DomainError::Resolution(format!(
                "no records for {}",
                query.domain
            ))),
        }
    }

    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        if ip == IpAddr::from([1, 1, 1, 1]) {
            Ok(vec!["one.one.one.one".to_string()])
        } else {
            Err(DomainError::Resolution(format!("no PTR record for {}", ip)))
        }
    }
}

async fn spawn_server() -> SocketAddr {
    let state = AppState {
        resolve_query: Arc::new(ResolveQueryUseCase::new(Arc::new(FixedLookup))),
    };
    let app = create_api_routes(state).layer(cors_layer(&[]));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn client() -> DohClient {
    let addr = spawn_server().await;
    DohClient::new(&format!("http://{addr}")).unwrap()
}

#[tokio::test]
async fn test_url_input_resolves_through_server() {
    let answers = client()
        .await
        .query("https://example.com/index.html", RecordType::A)
        .await
        .unwrap();

    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].name, "example.com");
    assert_eq!(answers[0].record_type, 1);
    assert_eq!(answers[0].ttl, 300);
    assert_eq!(answers[0].data, "93.184.216.34");
}

#[tokio::test]
async fn test_txt_round_trip() {
    let answers = client()
        .await
        .query("example.com", RecordType::TXT)
        .await
        .unwrap();

    assert_eq!(answers[0].record_type, 16);
    assert_eq!(answers[0].data, "v=spf1 include:_spf.example.com -all");
}

#[tokio::test]
async fn test_reverse_lookup_round_trip() {
    let answers = client()
        .await
        .query("1.1.1.1", RecordType::PTR)
        .await
        .unwrap();

    assert_eq!(answers[0].name, "1.1.1.1");
    assert_eq!(answers[0].record_type, 12);
    assert_eq!(answers[0].data, "one.one.one.one");
}

#[tokio::test]
async fn test_resolution_failure_reaches_client_as_dns_error() {
    let err = client()
        .await
        .query("missing.example", RecordType::A)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Dns(m) if m == "no records for missing.example"));
}

#[tokio::test]
async fn test_invalid_ptr_name_reaches_client_as_dns_error() {
    let err = client()
        .await
        .query("example.com", RecordType::PTR)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Dns(m) if m == "Invalid IP address: example.com"));
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = DohClient::new(&format!("http://{addr}"))
        .unwrap()
        .query("example.com", RecordType::A)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Connection));
    assert_eq!(err.to_string(), "Unable to connect to the server.");
}
