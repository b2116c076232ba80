//! End-to-end checks of the backend bridge against an in-process mock backend.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use lovenest_shared::api::{
    MessageWire, NewMessage, PhotoWire, StatsWire, UploadResponse, DEMO_STATS,
};
use lovenest_shared::wall::{format_timestamp, MessageWall};
use tokio::net::TcpListener;

use super::photos::encode_test_png;
use super::requests::ApiClient;
use super::transport::{execute, Backend, BackendCommand, BackendEvent};

#[derive(Clone, Default)]
struct MockState {
    messages: Arc<Mutex<Vec<MessageWire>>>,
    photos: Arc<Mutex<Vec<PhotoWire>>>,
    uploads: Arc<Mutex<Vec<(String, Option<String>, usize)>>>,
}

async fn stats() -> Json<StatsWire> {
    Json(StatsWire {
        days_together: 10,
        messages_sent: 1,
        photos_shared: 0,
        love_level: 50,
    })
}

async fn broken_stats() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn list_messages(State(state): State<MockState>) -> Json<Vec<MessageWire>> {
    Json(state.messages.lock().unwrap().clone())
}

async fn add_message(
    State(state): State<MockState>,
    Json(body): Json<NewMessage>,
) -> Json<MessageWire> {
    let mut messages = state.messages.lock().unwrap();
    let msg = MessageWire {
        id: Some(messages.len() as u64 + 1),
        text: body.text,
        timestamp: "2024-02-14T18:30:00.000001".to_string(),
        kind: Some(body.kind),
    };
    messages.push(msg.clone());
    Json(msg)
}

async fn list_photos(State(state): State<MockState>) -> Json<Vec<PhotoWire>> {
    Json(state.photos.lock().unwrap().clone())
}

async fn photo_png() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/png")], encode_test_png(4, 4))
}

async fn upload(State(state): State<MockState>, mut multipart: Multipart) -> Json<UploadResponse> {
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let len = field.bytes().await.map(|b| b.len()).unwrap_or(0);
        state.uploads.lock().unwrap().push((name, file_name, len));
    }
    Json(UploadResponse {
        success: true,
        url: Some("/static/uploads/new.png".to_string()),
        error: None,
    })
}

async fn refuse_upload() -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(UploadResponse {
            success: false,
            url: None,
            error: Some("No photo provided".to_string()),
        }),
    )
}

async fn refuse_message() -> impl IntoResponse {
    StatusCode::BAD_REQUEST
}

/// Start a mock backend on a random port and return its base URL.
async fn start_mock_backend(state: MockState) -> String {
    let app = Router::new()
        .route("/api/stats", get(stats))
        .route("/api/messages", get(list_messages).post(add_message))
        .route("/api/photos", get(list_photos))
        .route("/api/upload-photo", axum::routing::post(upload))
        .route("/static/uploads/a.png", get(photo_png))
        .with_state(state);
    serve(app).await
}

/// A backend that answers, but refuses everything.
async fn start_refusing_backend() -> String {
    let app = Router::new()
        .route("/api/stats", get(broken_stats))
        .route("/api/messages", axum::routing::post(refuse_message))
        .route("/api/upload-photo", axum::routing::post(refuse_upload));
    serve(app).await
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// URL of a port nobody listens on.
async fn unreachable_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn stats_come_from_backend() {
    let api = ApiClient::new(&start_mock_backend(MockState::default()).await);
    match execute(&api, BackendCommand::FetchStats).await {
        BackendEvent::Stats { stats, demo } => {
            assert!(!demo);
            assert_eq!(
                stats,
                StatsWire {
                    days_together: 10,
                    messages_sent: 1,
                    photos_shared: 0,
                    love_level: 50,
                }
            );
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_stats_fall_back_to_demo_values() {
    let api = ApiClient::new(&unreachable_backend().await);
    match execute(&api, BackendCommand::FetchStats).await {
        BackendEvent::Stats { stats, demo } => {
            assert!(demo);
            assert_eq!(stats, DEMO_STATS);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn failing_stats_endpoint_falls_back_to_demo_values() {
    let api = ApiClient::new(&start_refusing_backend().await);
    assert!(matches!(
        execute(&api, BackendCommand::FetchStats).await,
        BackendEvent::Stats { demo: true, .. }
    ));
}

#[tokio::test]
async fn posted_message_comes_back_as_one_card() {
    let api = ApiClient::new(&start_mock_backend(MockState::default()).await);

    let posted = execute(
        &api,
        BackendCommand::PostMessage(NewMessage::love("forever yours")),
    )
    .await;
    assert!(matches!(posted, BackendEvent::MessagePosted));

    let messages = match execute(&api, BackendCommand::FetchMessages).await {
        BackendEvent::Messages(messages) => messages,
        other => panic!("unexpected event {other:?}"),
    };
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].kind.as_deref(), Some("love"));

    let mut wall = MessageWall::default();
    wall.replace(&messages);
    assert_eq!(wall.cards().len(), 1);
    assert_eq!(wall.cards()[0].text, "forever yours");
    assert_eq!(
        wall.cards()[0].time,
        format_timestamp("2024-02-14T18:30:00.000001")
    );
    assert_eq!(wall.cards()[0].time, "2/14/2024 6:30:00 PM");
}

#[tokio::test]
async fn unreachable_message_post_becomes_demo_card() {
    let api = ApiClient::new(&unreachable_backend().await);
    match execute(&api, BackendCommand::PostMessage(NewMessage::love("hi"))).await {
        BackendEvent::MessageDemo { text } => assert_eq!(text, "hi"),
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn refused_message_post_is_not_a_fallback() {
    let api = ApiClient::new(&start_refusing_backend().await);
    assert!(matches!(
        execute(&api, BackendCommand::PostMessage(NewMessage::love("hi"))).await,
        BackendEvent::MessageRejected { status: 400 }
    ));
}

#[tokio::test]
async fn unreachable_messages_leave_wall_alone() {
    let api = ApiClient::new(&unreachable_backend().await);
    assert!(matches!(
        execute(&api, BackendCommand::FetchMessages).await,
        BackendEvent::MessagesUnavailable
    ));
}

#[tokio::test]
async fn upload_sends_photo_field() {
    let state = MockState::default();
    let api = ApiClient::new(&start_mock_backend(state.clone()).await);

    let event = execute(
        &api,
        BackendCommand::UploadPhoto {
            file_name: "us.png".to_string(),
            bytes: encode_test_png(2, 2),
        },
    )
    .await;
    assert!(matches!(event, BackendEvent::PhotoUploaded));

    let uploads = state.uploads.lock().unwrap().clone();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, "photo");
    assert_eq!(uploads[0].1.as_deref(), Some("us.png"));
    assert!(uploads[0].2 > 0);
}

#[tokio::test]
async fn refused_upload_reports_failure() {
    let api = ApiClient::new(&start_refusing_backend().await);
    let event = execute(
        &api,
        BackendCommand::UploadPhoto {
            file_name: "us.png".to_string(),
            bytes: encode_test_png(2, 2),
        },
    )
    .await;
    assert!(matches!(event, BackendEvent::UploadRejected));
}

#[tokio::test]
async fn unreachable_upload_previews_locally() {
    let api = ApiClient::new(&unreachable_backend().await);
    let event = execute(
        &api,
        BackendCommand::UploadPhoto {
            file_name: "us.png".to_string(),
            bytes: encode_test_png(3, 5),
        },
    )
    .await;
    match event {
        BackendEvent::UploadPreview(photo) => {
            assert!(photo.source.starts_with("preview:"));
            assert!(photo.source.ends_with("us.png"));
            assert_eq!((photo.pixels.width, photo.pixels.height), (3, 5));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_upload_of_non_image_is_unreadable() {
    let api = ApiClient::new(&unreachable_backend().await);
    let event = execute(
        &api,
        BackendCommand::UploadPhoto {
            file_name: "notes.txt".to_string(),
            bytes: b"plain text".to_vec(),
        },
    )
    .await;
    assert!(matches!(event, BackendEvent::UploadUnreadable));
}

#[tokio::test]
async fn photos_are_downloaded_and_broken_ones_skipped() {
    let state = MockState::default();
    state.photos.lock().unwrap().extend([
        PhotoWire {
            url: "/static/uploads/a.png".to_string(),
            filename: Some("a.png".to_string()),
        },
        PhotoWire {
            url: "/static/uploads/missing.png".to_string(),
            filename: Some("missing.png".to_string()),
        },
    ]);
    let api = ApiClient::new(&start_mock_backend(state).await);

    match execute(&api, BackendCommand::FetchPhotos).await {
        BackendEvent::Photos { listed, loaded } => {
            assert_eq!(listed.len(), 2);
            assert_eq!(loaded.len(), 1);
            assert_eq!(loaded[0].source, "/static/uploads/a.png");
            assert_eq!((loaded[0].pixels.width, loaded[0].pixels.height), (4, 4));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_photos_leave_gallery_alone() {
    let api = ApiClient::new(&unreachable_backend().await);
    assert!(matches!(
        execute(&api, BackendCommand::FetchPhotos).await,
        BackendEvent::PhotosUnavailable
    ));
}

#[tokio::test]
async fn backend_thread_delivers_events_to_poll() {
    let backend = Backend::new(start_mock_backend(MockState::default()).await);
    backend.send(BackendCommand::FetchStats);

    let mut events = Vec::new();
    for _ in 0..200 {
        events.extend(backend.poll_events());
        if !events.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], BackendEvent::Stats { demo: false, .. }));
}
