//! End-to-end tests of the HTTP surface over the in-memory store

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use trivia_server::seed::sample_store;
use trivia_server::{build_router, AppState, MemoryStore, ServerConfig, TriviaStore};

async fn sample_app() -> Router {
    let store = sample_store().await.expect("seed failed");
    build_router(AppState::new(store), &ServerConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(expected.as_u16()));
    assert_eq!(body["message"], json!(message));
}

fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

// === Categories ===

#[tokio::test]
async fn categories_listed_by_id() {
    let app = sample_app().await;
    let (status, body) = send(&app, Method::GET, "/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["categories"]["1"], json!("Science"));
    assert_eq!(body["categories"]["6"], json!("Sports"));
    assert_eq!(body["categories"].as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn no_categories_is_404() {
    let app = build_router(AppState::new(MemoryStore::new()), &ServerConfig::default());
    let (status, body) = send(&app, Method::GET, "/categories", None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn category_questions() {
    let app = sample_app().await;
    let (status, body) = send(&app, Method::GET, "/categories/1/questions", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_category"], json!(1));
    assert_eq!(body["total_questions"], json!(3));
    for q in body["questions"].as_array().unwrap() {
        assert_eq!(q["category"], json!(1));
    }
}

#[tokio::test]
async fn unknown_or_malformed_category_is_404() {
    let app = sample_app().await;

    let (status, body) = send(&app, Method::GET, "/categories/99/questions", None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");

    let (status, body) = send(&app, Method::GET, "/categories/www/questions", None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = sample_app().await;
    let (status, body) = send(&app, Method::GET, "/categories/10", None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

// === Questions ===

#[tokio::test]
async fn first_page_has_ten_questions() {
    let app = sample_app().await;
    let (status, body) = send(&app, Method::GET, "/questions", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());
    assert_eq!(body["total_questions"], json!(19));
    assert_eq!(body["categories"]["3"], json!("Geography"));
}

#[tokio::test]
async fn later_pages_and_bad_page_numbers() {
    let app = sample_app().await;

    let (_, body) = send(&app, Method::GET, "/questions?page=2", None).await;
    assert_eq!(ids(&body), (11..=19).collect::<Vec<_>>());

    let (_, body) = send(&app, Method::GET, "/questions?page=abc", None).await;
    assert_eq!(ids(&body).len(), 10);

    let (status, body) = send(&app, Method::GET, "/questions?page=300", None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn oversized_page_is_404() {
    let app = sample_app().await;
    let (status, body) = send(
        &app,
        Method::GET,
        "/questions?page=99999999999999999999999",
        None,
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn malformed_query_string_is_json_400() {
    let app = sample_app().await;
    let (status, body) = send(&app, Method::GET, "/questions?page=1&page=2", None).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "bad request");
}

#[tokio::test]
async fn create_then_list() {
    let app = sample_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({
            "question": "test question",
            "answer": "test answer",
            "difficulty": 1,
            "category": 1
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "created": 20}));

    let (_, body) = send(&app, Method::GET, "/questions?page=2", None).await;
    assert_eq!(body["total_questions"], json!(20));
    assert!(ids(&body).contains(&20));
}

#[tokio::test]
async fn create_accepts_string_numbers() {
    let app = sample_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({
            "question": "q",
            "answer": "a",
            "difficulty": "4",
            "category": "2"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn create_missing_difficulty_is_422() {
    let app = sample_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({
            "question": "new_question",
            "answer": "new_answer",
            "category": 1
        })),
    )
    .await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable entity");
}

#[tokio::test]
async fn create_rejected_by_store_is_422() {
    let app = sample_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({
            "question": "q",
            "answer": "a",
            "difficulty": 1,
            "category": 99
        })),
    )
    .await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable entity");

    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({
            "question": "q",
            "answer": "a",
            "difficulty": "hard",
            "category": 1
        })),
    )
    .await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable entity");
}

#[tokio::test]
async fn delete_question() {
    let app = sample_app().await;

    let (status, body) = send(&app, Method::DELETE, "/questions/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "deleted": 5}));

    let (_, body) = send(&app, Method::GET, "/questions", None).await;
    assert!(!ids(&body).contains(&5));
    assert_eq!(body["total_questions"], json!(18));

    let (status, body) = send(&app, Method::DELETE, "/questions/5", None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn delete_malformed_id_is_400() {
    let app = sample_app().await;
    let (status, body) = send(&app, Method::DELETE, "/questions/wwwww", None).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "bad request");
}

// === Search ===

#[tokio::test]
async fn search_is_case_insensitive() {
    let app = sample_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/questions/search",
        Some(json!({"searchTerm": "TITLE"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // "the title of the 1990 fantasy" and "autobiography is entitled"
    assert_eq!(body["total_questions"], json!(2));
    assert_eq!(body["current_category"], Value::Null);
    for q in body["questions"].as_array().unwrap() {
        assert!(q["question"].as_str().unwrap().to_lowercase().contains("title"));
    }
}

#[tokio::test]
async fn search_without_hits_is_ok() {
    let app = sample_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/questions/search",
        Some(json!({"searchTerm": "www"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"], json!([]));
    assert_eq!(body["total_questions"], json!(0));
}

#[tokio::test]
async fn search_without_term_is_404() {
    let app = sample_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/questions/search",
        Some(json!({"searchTearm": ""})),
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");

    let (status, body) = send(
        &app,
        Method::POST,
        "/questions/search",
        Some(json!({"searchTerm": ""})),
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

// === Quizzes ===

#[tokio::test]
async fn quiz_returns_question_from_category() {
    let app = sample_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({
            "previous_questions": [],
            "quiz_category": {"type": "Science", "id": "1"}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["question"]["category"], json!(1));
}

#[tokio::test]
async fn quiz_serves_last_unseen_question() {
    let app = sample_app().await;
    let (_, body) = send(&app, Method::GET, "/categories/2/questions", None).await;
    let art = ids(&body);
    let (last, seen) = art.split_last().unwrap();

    for _ in 0..10 {
        let (status, body) = send(
            &app,
            Method::POST,
            "/quizzes",
            Some(json!({
                "previous_questions": seen,
                "quiz_category": {"type": "Art", "id": 2}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["id"], json!(last));
    }
}

#[tokio::test]
async fn quiz_exhausted_omits_question() {
    let app = sample_app().await;
    let all: Vec<i64> = (1..=19).collect();
    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({
            "previous_questions": all,
            "quiz_category": {"type": "click", "id": 0}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));
}

#[tokio::test]
async fn quiz_drains_all_categories_without_repeats() {
    let app = sample_app().await;
    let mut previous: Vec<i64> = Vec::new();

    loop {
        let (_, body) = send(
            &app,
            Method::POST,
            "/quizzes",
            Some(json!({
                "previous_questions": previous,
                "quiz_category": {"id": 0}
            })),
        )
        .await;
        let Some(id) = body["question"]["id"].as_i64() else {
            break;
        };
        assert!(!previous.contains(&id));
        previous.push(id);
    }

    assert_eq!(previous.len(), 19);
}

#[tokio::test]
async fn quiz_missing_fields_is_400() {
    let app = sample_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({"previous_question": []})),
    )
    .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "bad request");
}

// === Health & CORS ===

#[tokio::test]
async fn health_reports_store() {
    let app = sample_app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["database"], json!(true));
}

#[tokio::test]
async fn any_origin_allowed_by_default() {
    let app = sample_app().await;
    let request = Request::builder()
        .uri("/categories")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn store_is_shared_across_requests() {
    let store = MemoryStore::new();
    let science = store.insert_category("Science").await.unwrap();
    let app = build_router(AppState::new(store), &ServerConfig::default());

    let (status, _) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({"question": "q", "answer": "a", "difficulty": 1, "category": science.id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/questions", None).await;
    assert_eq!(body["total_questions"], json!(1));
}
