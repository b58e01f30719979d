//! HTTP client tests against a mock task API.
//!
//! An in-process axum server stands in for the remote API so the wire
//! contract (delete verb, `/api/tasks/{id}` path shape, status mapping)
//! is exercised over a real socket.

use std::sync::{Arc, Mutex};

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::Router;

use hriselink::api::{ApiError, HttpTaskClient, TaskGateway};

/// Binds the router on an ephemeral port and returns its base URL.
async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });

    format!("http://{addr}")
}

/// Runs the blocking client call off the async runtime.
async fn delete_blocking(base_url: String, id: &'static str) -> Result<(), ApiError> {
    tokio::task::spawn_blocking(move || {
        let client = HttpTaskClient::new(base_url).expect("client");
        client.delete_task(id)
    })
    .await
    .expect("join blocking task")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn delete_hits_expected_path_and_succeeds_on_2xx() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_handler = seen.clone();

    let router = Router::new().route(
        "/api/tasks/{id}",
        delete(move |Path(id): Path<String>| {
            let seen = seen_handler.clone();
            async move {
                seen.lock().unwrap().push(id);
                StatusCode::OK
            }
        }),
    );

    let base_url = spawn_server(router).await;
    let result = delete_blocking(base_url, "EMP001").await;

    assert!(result.is_ok());
    assert_eq!(*seen.lock().unwrap(), vec!["EMP001".to_string()]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn delete_maps_404_to_not_found() {
    let router = Router::new().route(
        "/api/tasks/{id}",
        delete(|Path(_id): Path<String>| async { StatusCode::NOT_FOUND }),
    );

    let base_url = spawn_server(router).await;
    let err = delete_blocking(base_url, "EMP999").await.unwrap_err();

    match err {
        ApiError::NotFound { id } => assert_eq!(id, "EMP999"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn delete_maps_server_error_to_remote() {
    let router = Router::new().route(
        "/api/tasks/{id}",
        delete(|Path(_id): Path<String>| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );

    let base_url = spawn_server(router).await;
    let err = delete_blocking(base_url, "EMP001").await.unwrap_err();

    assert!(matches!(err, ApiError::Remote { status: 500 }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unreachable_host_maps_to_transport() {
    // Nothing listens on this port
    let err = delete_blocking("http://127.0.0.1:1".to_string(), "EMP001")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn health_check_succeeds_against_live_server() {
    let router = Router::new().route("/api/health", get(|| async { StatusCode::OK }));

    let base_url = spawn_server(router).await;
    let result = tokio::task::spawn_blocking(move || {
        let client = HttpTaskClient::new(base_url).expect("client");
        client.health_check()
    })
    .await
    .expect("join blocking task");

    assert!(result.is_ok());
}
