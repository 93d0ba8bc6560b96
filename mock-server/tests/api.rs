use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Recorder, Reply};
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header("x-custom-value", "112233")
        .body(body.to_string())
        .unwrap()
}

// --- reply ---

#[tokio::test]
async fn replies_with_configured_status_and_body() {
    let app = app(Reply::new(StatusCode::OK, "It works!"), Recorder::default());
    let resp = app
        .oneshot(Request::builder().uri("/").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, "It works!");
}

#[tokio::test]
async fn replies_with_error_status() {
    let app = app(Reply::new(StatusCode::BAD_REQUEST, "nope"), Recorder::default());
    let resp = app
        .oneshot(request("DELETE", "/path", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_bytes(resp).await, "nope");
}

#[tokio::test]
async fn default_reply_is_empty_ok() {
    let app = app(Reply::default(), Recorder::default());
    let resp = app.oneshot(request("PUT", "/x", "data")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());
}

// --- recording ---

#[tokio::test]
async fn records_method_uri_headers_and_body() {
    let recorder = Recorder::default();
    let app = app(Reply::default(), recorder.clone());
    app.oneshot(request("POST", "/path?q2=v2&q3=3", "f1=vf1&f2=vf2"))
        .await
        .unwrap();

    let last = recorder.last().await.expect("request was not recorded");
    assert_eq!(last.method, "POST");
    assert_eq!(last.uri, "/path?q2=v2&q3=3");
    assert_eq!(last.header("X-Custom-Value"), Some("112233"));
    assert_eq!(
        last.header("content-type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(last.body_text(), "f1=vf1&f2=vf2");
}

#[tokio::test]
async fn keeps_only_the_last_request() {
    let recorder = Recorder::default();
    let app = app(Reply::default(), recorder.clone());

    app.clone()
        .oneshot(request("POST", "/first", "one"))
        .await
        .unwrap();
    app.oneshot(request("GET", "/second", "")).await.unwrap();

    let last = recorder.last().await.unwrap();
    assert_eq!(last.method, "GET");
    assert_eq!(last.uri, "/second");
    assert!(last.body.is_empty());
}

#[tokio::test]
async fn nothing_recorded_before_first_request() {
    assert!(Recorder::default().last().await.is_none());
}
