//! Round-trip tests for the chat session against a stub `/rag` service.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde_json::{Value, json};

use shortfall_chat::{ChatMessage, ChatSession, RagClient, TurnOutcome, TurnRejected};

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn successful_round_trip_appends_two_messages_in_order() {
    let requests = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route(
            "/rag",
            post(
                |State(requests): State<Arc<AtomicUsize>>, Json(body): Json<Value>| async move {
                    requests.fetch_add(1, Ordering::SeqCst);
                    assert_eq!(body["query"], "why is item 3 short?");
                    Json(json!({ "answer": "<p>Seasonal demand spike.</p>" }))
                },
            ),
        )
        .with_state(requests.clone());
    let base_url = spawn(app).await;

    let client = RagClient::new(&base_url);
    let mut session = ChatSession::new();
    let before = session.transcript().len();

    let outcome = session
        .submit(&client, "  why is item 3 short?  ")
        .await
        .unwrap();

    assert_eq!(outcome, TurnOutcome::Answered);
    assert_eq!(requests.load(Ordering::SeqCst), 1);

    let transcript = session.transcript();
    assert_eq!(transcript.len(), before + 2);
    assert_eq!(
        transcript[before],
        ChatMessage::user("why is item 3 short?")
    );
    assert_eq!(
        transcript[before + 1],
        ChatMessage::assistant("<p>Seasonal demand spike.</p>")
    );
}

#[tokio::test]
async fn failed_round_trip_appends_only_the_user_message() {
    let app = Router::new().route("/rag", post(|| async { StatusCode::BAD_GATEWAY }));
    let base_url = spawn(app).await;

    let client = RagClient::new(&base_url);
    let mut session = ChatSession::new();
    let before = session.transcript().len();

    let outcome = session.submit(&client, "anything in stock?").await.unwrap();

    assert_eq!(outcome, TurnOutcome::Unanswered);
    assert!(!session.is_busy());

    let transcript = session.transcript();
    assert_eq!(transcript.len(), before + 1);
    assert_eq!(transcript[before], ChatMessage::user("anything in stock?"));
}

#[tokio::test]
async fn blank_input_issues_no_request() {
    let requests = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route(
            "/rag",
            post(|State(requests): State<Arc<AtomicUsize>>| async move {
                requests.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "answer": "unreachable" }))
            }),
        )
        .with_state(requests.clone());
    let base_url = spawn(app).await;

    let client = RagClient::new(&base_url);
    let mut session = ChatSession::new();

    let outcome = session.submit(&client, "   ").await;

    assert_eq!(outcome, Err(TurnRejected::EmptyInput));
    assert_eq!(requests.load(Ordering::SeqCst), 0);
    assert_eq!(session.transcript().len(), 1);
}

#[tokio::test]
async fn malformed_answer_counts_as_a_failed_turn() {
    let app = Router::new().route("/rag", post(|| async { Json(json!({ "reply": "wrong key" })) }));
    let base_url = spawn(app).await;

    let client = RagClient::new(&base_url);
    let mut session = ChatSession::new();

    let outcome = session.submit(&client, "hello").await.unwrap();

    assert_eq!(outcome, TurnOutcome::Unanswered);
    assert_eq!(session.transcript().len(), 2);
}

#[tokio::test]
async fn unreachable_service_counts_as_a_failed_turn() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RagClient::new(format!("http://{dead_addr}"));
    let mut session = ChatSession::new();

    let outcome = session.submit(&client, "hello").await.unwrap();

    assert_eq!(outcome, TurnOutcome::Unanswered);
    assert_eq!(session.transcript().len(), 2);
}
