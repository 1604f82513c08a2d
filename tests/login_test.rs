use axum::{Router, http::StatusCode, routing::get};
use playgencli::backend::login::fetch_login_url;
use playgencli::error::PreviewError;
use reqwest::Client;

// Serves `app` on an ephemeral port and returns its API base URL
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", addr)
}

#[tokio::test]
async fn test_fetch_login_url_returns_text_body() {
    let app = Router::new().route(
        "/api/login",
        get(|| async { "https://accounts.spotify.com/authorize?client_id=abc&scope=streaming\n" }),
    );
    let api = serve(app).await;

    let url = fetch_login_url(&Client::new(), &api).await.unwrap();

    assert_eq!(
        url,
        "https://accounts.spotify.com/authorize?client_id=abc&scope=streaming"
    );
}

#[tokio::test]
async fn test_fetch_login_url_fails_on_error_status() {
    let app = Router::new().route(
        "/api/login",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let api = serve(app).await;

    let err = fetch_login_url(&Client::new(), &api).await.unwrap_err();

    match err {
        PreviewError::Network(msg) => assert!(msg.contains("500")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_login_url_fails_on_empty_body() {
    let app = Router::new().route("/api/login", get(|| async { "  " }));
    let api = serve(app).await;

    let err = fetch_login_url(&Client::new(), &api).await.unwrap_err();

    assert!(matches!(err, PreviewError::Network(_)));
}

#[tokio::test]
async fn test_fetch_login_url_fails_when_backend_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetch_login_url(&Client::new(), &format!("http://{}/api", addr))
        .await
        .unwrap_err();

    assert!(matches!(err, PreviewError::Network(_)));
}

#[tokio::test]
async fn test_fetch_login_url_unknown_route_is_error() {
    let app = Router::new();
    let api = serve(app).await;

    let err = fetch_login_url(&Client::new(), &api).await.unwrap_err();

    match err {
        PreviewError::Network(msg) => assert!(msg.contains("404")),
        other => panic!("unexpected error: {:?}", other),
    }
}
