use std::time::Duration;

use sparql_client::{ClientOption, SparqlClient, SparqlError};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn ping_succeeds_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = SparqlClient::new(server.uri(), []).unwrap();
    client.ping().await.unwrap();
    assert!(client.health().is_healthy().await);
}

#[tokio::test]
async fn ping_reports_non_200_status() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = SparqlClient::new(server.uri(), []).unwrap();
    let err = client.ping().await.unwrap_err();

    match err {
        SparqlError::UnexpectedStatus { status } => assert_eq!(status, 404),
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn ping_fails_against_non_listening_address() {
    // Discard port, nothing listens there. The connect timeout bounds the
    // failure; this must not hang.
    let client = SparqlClient::new(
        "http://127.0.0.1:9",
        [
            ClientOption::timeout(Duration::from_secs(5)),
            ClientOption::max_idle_conns(10),
        ],
    )
    .unwrap();

    let err = tokio::time::timeout(Duration::from_secs(10), client.ping())
        .await
        .expect("ping must fail within the dial timeout")
        .unwrap_err();

    assert!(matches!(err, SparqlError::Network(_)));
}

#[tokio::test]
async fn ping_respects_caller_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
        .mount(&server)
        .await;

    let client = SparqlClient::new(server.uri(), []).unwrap();
    let result = tokio::time::timeout(Duration::from_millis(50), client.ping()).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn ping_after_close_performs_no_exchange() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut client = SparqlClient::new(server.uri(), []).unwrap();
    client.close().unwrap();

    let err = client.ping().await.unwrap_err();
    assert!(matches!(err, SparqlError::AlreadyClosed));
}

#[tokio::test]
async fn ping_rejects_malformed_endpoint() {
    let client = SparqlClient::new("not a url", []).unwrap();

    let err = client.ping().await.unwrap_err();
    assert!(matches!(err, SparqlError::InvalidEndpoint(_)));
}

#[tokio::test]
async fn concurrent_pings_share_the_pool() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .expect(4)
        .mount(&server)
        .await;

    let client = SparqlClient::new(server.uri(), []).unwrap();
    let (a, b, c, d) = tokio::join!(client.ping(), client.ping(), client.ping(), client.ping());

    a.unwrap();
    b.unwrap();
    c.unwrap();
    d.unwrap();
}
