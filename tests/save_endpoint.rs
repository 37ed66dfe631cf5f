use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use field_builder::{FieldService, FormController, MemoryDraftStore, MockFieldService, SaveOutcome, SaveRequest};

/// Answer exactly one HTTP request with `status_line` and `body`, handing back the raw request.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{}/save", addr), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&chunk[..n]);

        if let Some(end) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&data[..end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if data.len() >= end + 4 + length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&data).into_owned()
}

fn request_body(raw: &str) -> Value {
    let (_, body) = raw.split_once("\r\n\r\n").unwrap();
    serde_json::from_str(body).unwrap()
}

fn region_request() -> SaveRequest {
    SaveRequest {
        label: "Region".to_string(),
        choices: vec!["Asia".to_string(), "Europe".to_string()],
        default_value: "Europe".to_string(),
        display_alpha: false,
    }
}

#[tokio::test]
async fn success_returns_parsed_response() {
    let (url, server) = serve_once("200 OK", r#"{"status":"ok"}"#).await;
    let service = MockFieldService::new(url, None).unwrap();

    let outcome = service.save(&region_request()).await;
    assert_eq!(outcome, SaveOutcome::Saved { response: json!({ "status": "ok" }) });

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /save"));
    assert!(raw.to_lowercase().contains("content-type: application/json"));
    assert_eq!(
        request_body(&raw),
        json!({
            "label": "Region",
            "choices": ["Asia", "Europe"],
            "defaultValue": "Europe",
            "displayAlpha": false
        })
    );
}

#[tokio::test]
async fn non_json_success_body_still_counts_as_saved() {
    let (url, server) = serve_once("201 Created", "created").await;
    let service = MockFieldService::new(url, None).unwrap();

    let outcome = service.save(&region_request()).await;
    assert_eq!(outcome, SaveOutcome::Saved { response: Value::Null });
    server.await.unwrap();
}

#[tokio::test]
async fn error_status_is_rejected() {
    let (url, server) = serve_once("500 Internal Server Error", "{}").await;
    let service = MockFieldService::new(url, None).unwrap();

    let outcome = service.save(&region_request()).await;
    assert_eq!(outcome, SaveOutcome::Rejected { status: 500 });
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_endpoint_is_failed() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = MockFieldService::new(format!("http://{}/save", addr), None).unwrap();
    let outcome = service.save(&region_request()).await;

    assert!(matches!(outcome, SaveOutcome::Failed { .. }));
}

#[tokio::test]
async fn submit_posts_appended_choices() {
    let (url, server) = serve_once("200 OK", "{}").await;
    let service = Arc::new(MockFieldService::new(url, None).unwrap());
    let mut controller = FormController::mount(service, MemoryDraftStore::new()).unwrap();

    controller.set_default_value("Antarctica").unwrap();
    let outcome = controller.submit().await.unwrap();
    assert!(outcome.unwrap().is_saved());

    let body = request_body(&server.await.unwrap());
    assert_eq!(body["label"], "Sales region");
    assert_eq!(body["choices"].as_array().unwrap().len(), 8);
    assert_eq!(body["choices"][7], "Antarctica");
    assert_eq!(body["defaultValue"], "Antarctica");
}
