//! HttpPokeApi against a local mock server

mod common;

use pokeline::{FetchError, HttpPokeApi, PokeApi};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> HttpPokeApi {
    common::init_tracing();
    HttpPokeApi::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn collection_should_send_limit_and_decode_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1302,
            "next": format!("{}/pokemon?offset=2&limit=2", server.uri()),
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": format!("{}/pokemon/1/", server.uri())},
                {"name": "ivysaur", "url": format!("{}/pokemon/2/", server.uri())}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let references = client(&server).fetch_collection(2).await.unwrap();

    let names: Vec<&str> = references.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "ivysaur"]);
    assert_eq!(
        references[1].detail_url,
        format!("{}/pokemon/2/", server.uri())
    );
}

#[tokio::test]
async fn trailing_slash_in_base_url_should_be_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpPokeApi::new(&format!("{}/", server.uri()), Duration::from_secs(5)).unwrap();

    assert_eq!(api.collection_url(), format!("{}/pokemon", server.uri()));
    assert!(api.fetch_collection(20).await.unwrap().is_empty());
}

#[tokio::test]
async fn non_success_status_should_be_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let error = client(&server).fetch_collection(20).await.unwrap_err();

    match error {
        FetchError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/pokemon"));
        }
        other => panic!("Expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_should_be_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let error = client(&server).fetch_collection(20).await.unwrap_err();

    assert!(matches!(error, FetchError::Decode(_)));
}

#[tokio::test]
async fn detail_should_expose_front_sprite() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/25/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 25,
            "name": "pikachu",
            "sprites": {
                "front_default": "https://sprites.test/25.png",
                "back_default": "https://sprites.test/back/25.png"
            }
        })))
        .mount(&server)
        .await;

    let payload = client(&server)
        .fetch_detail(&format!("{}/pokemon/25/", server.uri()))
        .await
        .unwrap();

    assert_eq!(
        payload.image_url.as_deref(),
        Some("https://sprites.test/25.png")
    );
}

#[tokio::test]
async fn null_sprite_should_decode_as_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/10001/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sprites": { "front_default": null }
        })))
        .mount(&server)
        .await;

    let payload = client(&server)
        .fetch_detail(&format!("{}/pokemon/10001/", server.uri()))
        .await
        .unwrap();

    assert_eq!(payload.image_url, None);
}

#[tokio::test]
async fn missing_detail_should_be_a_status_error() {
    let server = MockServer::start().await;

    let error = client(&server)
        .fetch_detail(&format!("{}/pokemon/0/", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(error, FetchError::Status { status: 404, .. }));
}

#[tokio::test]
async fn unreachable_server_should_be_a_transport_error() {
    let api = HttpPokeApi::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();

    let error = api.fetch_collection(1).await.unwrap_err();

    assert!(matches!(error, FetchError::Transport(_)));
}
