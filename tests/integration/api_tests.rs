//! API integration tests
//!
//! Each test writes its own dumps, serves the router on an ephemeral port
//! and talks to it over HTTP.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use book_inventory_server::{
    api,
    config::DumpsConfig,
    repository::Repository,
    services::Services,
    AppState,
};

struct TestServer {
    base_url: String,
    client: Client,
    _dumps: TempDir,
}

impl TestServer {
    async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Failed to send request")
    }

    async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let response = self.get(path).await;
        let status = response.status();
        (status, response.text().await.expect("Failed to read body"))
    }

    async fn user_count(&self) -> u64 {
        let body: Value = self.get("/health").await.json().await.expect("Failed to parse health");
        body["store"]["users"].as_u64().expect("No user count")
    }
}

fn write_dump(dir: &Path, name: &str, document: Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, document.to_string()).expect("Failed to write dump");
    path
}

fn write_dumps(dir: &Path) -> DumpsConfig {
    DumpsConfig {
        admins: write_dump(dir, "admins.json", json!({ "admins": [{ "admin_id": 100 }] })),
        authors: write_dump(
            dir,
            "authors.json",
            json!({ "authors": [
                { "author_id": 1, "name": "Ursula", "surname": "Le Guin", "patronymic": "", "production_id": 1 },
                { "author_id": 2, "name": "Stanislaw", "surname": "Lem", "patronymic": "", "production_id": 1 }
            ]}),
        ),
        books: write_dump(
            dir,
            "books.json",
            json!({ "books": [
                { "book_id": 10, "name": "X", "author_id": 1, "genre_id": 1, "production_id": 1, "language_id": 1, "description": "" },
                { "book_id": 11, "name": "A", "author_id": 1, "genre_id": 1, "production_id": 1, "language_id": 1, "description": "" },
                { "book_id": 12, "name": "B", "author_id": 2, "genre_id": 1, "production_id": 1, "language_id": 1, "description": "" }
            ]}),
        ),
        genres: write_dump(dir, "genres.json", json!({ "genres": [{ "genre_id": 1, "name": "Fiction" }] })),
        instances: write_dump(
            dir,
            "instances.json",
            json!({ "instances": [
                { "instance_id": 1, "book_id": 10, "status": 1 },
                { "instance_id": 2, "book_id": 11, "status": 0 },
                { "instance_id": 3, "book_id": 12, "status": 0 },
                { "instance_id": 4, "book_id": 12, "status": 2 }
            ]}),
        ),
        languages: write_dump(dir, "languages.json", json!({ "languages": [{ "language_id": 1, "name": "English" }] })),
        productions: write_dump(
            dir,
            "productions.json",
            json!({ "productions": [{ "production_id": 1, "name": "Harper" }] }),
        ),
        readers: write_dump(
            dir,
            "readers.json",
            json!({ "readers": [
                { "reader_id": 5, "instance_id": [2, 3] },
                { "reader_id": 6, "instance_id": [3, 2] },
                { "reader_id": 7, "instance_id": [] },
                { "reader_id": 8, "instance_id": [404] }
            ]}),
        ),
        users: write_dump(
            dir,
            "users.json",
            json!({ "users": [
                { "user_id": 1, "name": "alice", "password": "pw", "login_status": "offline", "register_date": "2024-01-15" },
                { "user_id": 2, "name": "bob", "password": "pw", "login_status": "offline", "register_date": "2024-02-01" }
            ]}),
        ),
    }
}

async fn spawn_server() -> TestServer {
    let dir = tempfile::tempdir().expect("Failed to create dump dir");
    let repository = Repository::load(&write_dumps(dir.path())).expect("Failed to load dumps");
    let app = api::router(AppState::new(Services::new(repository)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestServer {
        base_url: format!("http://{}", addr),
        client: Client::new(),
        _dumps: dir,
    }
}

#[tokio::test]
async fn test_main_page() {
    let server = spawn_server().await;

    let response = server
        .client
        .post(format!("{}/", server.base_url))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "main page");
}

#[tokio::test]
async fn test_health_check() {
    let server = spawn_server().await;

    let response = server.get("/health").await;
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"]["instances"], 4);
}

#[tokio::test]
async fn test_take_and_return_book() {
    let server = spawn_server().await;

    let response = server.get("/take_book?book_id=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let book: Value = response.json().await.expect("Failed to parse book");
    assert_eq!(book["book_id"], 10);
    assert_eq!(book["name"], "X");

    assert_eq!(
        server.get_text("/check_availability?instance_id=1").await,
        (StatusCode::OK, "is available: false".to_string())
    );

    let (status, _) = server.get_text("/take_book?book_id=1").await;
    assert_eq!(status, StatusCode::CONFLICT);

    assert_eq!(
        server.get_text("/return_book?book_id=1").await,
        (StatusCode::OK, "the book has been returned".to_string())
    );
    assert_eq!(
        server.get_text("/return_book?book_id=1").await,
        (StatusCode::CONFLICT, "instance already in library".to_string())
    );
    assert_eq!(
        server.get_text("/check_availability?instance_id=1").await,
        (StatusCode::OK, "is available: true".to_string())
    );
}

#[tokio::test]
async fn test_unknown_instance_is_not_found() {
    let server = spawn_server().await;

    for path in [
        "/return_book?book_id=99",
        "/take_book?book_id=99",
        "/update_instance_status?instance_id=99&instance_status=1",
        "/check_availability?instance_id=99",
    ] {
        let (status, body) = server.get_text(path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", path);
        assert_eq!(body, "instance 99 not found");
    }
}

#[tokio::test]
async fn test_malformed_query_is_bad_request() {
    let server = spawn_server().await;

    let (status, _) = server.get_text("/take_book?book_id=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = server.get_text("/ban_user?user_id=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_instance_status_override() {
    let server = spawn_server().await;

    // Withdrawn copies cannot be taken until an admin puts them back
    let (status, _) = server.get_text("/take_book?book_id=4").await;
    assert_eq!(status, StatusCode::CONFLICT);

    assert_eq!(
        server.get_text("/update_instance_status?instance_id=4&instance_status=1").await,
        (StatusCode::OK, "instance status has been updated".to_string())
    );
    assert_eq!(
        server.get_text("/check_availability?instance_id=4").await,
        (StatusCode::OK, "is available: true".to_string())
    );

    let (status, _) = server
        .get_text("/update_instance_status?instance_id=4&instance_status=7")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_borrow_books_keeps_reader_order() {
    let server = spawn_server().await;

    let books: Value = server
        .get("/check_borrow_books?reader_id=5")
        .await
        .json()
        .await
        .expect("Failed to parse books");
    assert_eq!(books[0]["name"], "A");
    assert_eq!(books[1]["name"], "B");

    let books: Value = server
        .get("/check_borrow_books?reader_id=6")
        .await
        .json()
        .await
        .expect("Failed to parse books");
    assert_eq!(books[0]["name"], "B");
    assert_eq!(books[1]["name"], "A");
}

#[tokio::test]
async fn test_check_borrow_books_edge_cases() {
    let server = spawn_server().await;

    let response = server.get("/check_borrow_books?reader_id=7").await;
    assert_eq!(response.status(), StatusCode::OK);
    let books: Value = response.json().await.expect("Failed to parse books");
    assert_eq!(books, json!([]));

    let (status, _) = server.get_text("/check_borrow_books?reader_id=8").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = server.get_text("/check_borrow_books?reader_id=9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "reader 9 not found");
}

#[tokio::test]
async fn test_ban_requires_admin() {
    let server = spawn_server().await;
    let before = server.user_count().await;

    let (status, _) = server.get_text("/ban_user?user_id=1&admin_id=2").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(server.user_count().await, before);

    assert_eq!(
        server.get_text("/update_login_status?user_id=1&login_status=online").await,
        (StatusCode::OK, "login status has been updated".to_string())
    );
}

#[tokio::test]
async fn test_login_status_defaults_to_empty() {
    let server = spawn_server().await;

    assert_eq!(
        server.get_text("/update_login_status?user_id=1").await,
        (StatusCode::OK, "login status has been updated".to_string())
    );

    let (status, _) = server.get_text("/update_login_status?login_status=online").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ban_removes_user() {
    let server = spawn_server().await;

    assert_eq!(
        server.get_text("/ban_user?user_id=1&admin_id=100").await,
        (StatusCode::OK, "user has been banned".to_string())
    );
    assert_eq!(server.user_count().await, 1);

    let (status, _) = server
        .get_text("/update_login_status?user_id=1&login_status=online")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server.get_text("/ban_user?user_id=1&admin_id=100").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_count_published_books() {
    let server = spawn_server().await;

    let body: Value = server
        .get("/count_published_books?author_id=1")
        .await
        .json()
        .await
        .expect("Failed to parse count");
    assert_eq!(body, json!({ "author_id": 1, "count": 2 }));

    let (status, _) = server.get_text("/count_published_books?author_id=3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
