use std::sync::Arc;

use diary_atoms::{compose, diary, echo, media};
use diary_shared::AppState;
use lambda_http::http::header::HeaderValue;
use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, Response,
};

/// CORS is applied uniformly to every response, success or failure.
fn with_cors_headers(mut resp: Response<Body>) -> Response<Body> {
    let headers = resp.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    resp
}

fn finalize_response(resp: Result<Response<Body>, Error>) -> Result<Response<Body>, Error> {
    resp.map(with_cors_headers)
}

/// Main Lambda handler - routes requests to the diary endpoints
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let body = event.body();

    tracing::info!("API Lambda invoked - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if method == "OPTIONS" {
        let resp = Response::builder()
            .status(StatusCode::OK)
            .body(Body::Empty)
            .map_err(Box::new)?;
        return Ok(with_cors_headers(resp));
    }

    let resp = match (method, path) {
        (&Method::POST, "/echo") => echo::echo_handler(&event).await,
        (&Method::POST, "/diary/generate") => {
            compose::generate_diary_handler(state.text_generator.as_ref(), body).await
        }
        (&Method::POST, "/diary/upload-url") => {
            media::presign_upload_handler(state.upload_authorizer.as_ref(), body).await
        }
        (&Method::GET, "/diary") => diary::list_diary_handler(state.diary_store.as_ref()).await,
        (&Method::POST, "/diary") => {
            diary::save_diary_handler(state.diary_store.as_ref(), body).await
        }
        (_, "/echo" | "/diary" | "/diary/generate" | "/diary/upload-url") => method_not_allowed(),
        _ => {
            tracing::warn!("No route matched - Method: {} Path: {}", method, path);
            not_found()
        }
    };

    finalize_response(resp)
}

fn method_not_allowed() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "application/json")
        .body(
            serde_json::json!({"error": "Method not allowed"})
                .to_string()
                .into(),
        )
        .map_err(Box::new)?)
}

fn not_found() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .body(serde_json::json!({"error": "Not found"}).to_string().into())
        .map_err(Box::new)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use diary_atoms::compose::TextGenerator;
    use diary_atoms::diary::{DiaryEntry, DiaryStore};
    use diary_atoms::error::HandlerError;
    use diary_atoms::media::UploadAuthorizer;
    use serde_json::Value;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeStore {
        entries: Mutex<Vec<DiaryEntry>>,
    }

    #[async_trait]
    impl DiaryStore for FakeStore {
        async fn put_entry(&self, entry: &DiaryEntry) -> Result<(), HandlerError> {
            self.entries.lock().unwrap().push(entry.clone());
            Ok(())
        }

        async fn scan_entries(&self) -> Result<Vec<DiaryEntry>, HandlerError> {
            Ok(self.entries.lock().unwrap().clone())
        }
    }

    struct FakeGenerator;

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, HandlerError> {
            Ok("生成された日記".to_string())
        }
    }

    struct FakeAuthorizer;

    #[async_trait]
    impl UploadAuthorizer for FakeAuthorizer {
        fn bucket_name(&self) -> &str {
            "test-bucket"
        }

        async fn presign_put(
            &self,
            key: &str,
            _content_type: &str,
            _expires_in: Duration,
        ) -> Result<String, HandlerError> {
            Ok(format!("https://test-bucket.example.com/{key}?signed"))
        }
    }

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            diary_store: Arc::new(FakeStore::default()),
            text_generator: Arc::new(FakeGenerator),
            upload_authorizer: Arc::new(FakeAuthorizer),
        })
    }

    fn request(method: &str, path: &str, body: Body) -> Request {
        lambda_http::http::Request::builder()
            .method(method)
            .uri(path)
            .body(body)
            .unwrap()
    }

    fn body_json(response: &Response<Body>) -> Value {
        let text = match response.body() {
            Body::Text(text) => text.as_str(),
            _ => panic!("expected text body"),
        };
        serde_json::from_str(text).unwrap()
    }

    #[tokio::test]
    async fn preflight_gets_cors_headers() {
        let response = function_handler(request("OPTIONS", "/diary", Body::Empty), test_state())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            response.headers()["Access-Control-Allow-Methods"],
            "GET, POST, OPTIONS"
        );
    }

    #[tokio::test]
    async fn save_then_list_round_trips() {
        let state = test_state();

        let save = function_handler(
            request(
                "POST",
                "/diary",
                Body::from(r#"{"date":"2025-01-15","title":"t","content":"c"}"#),
            ),
            Arc::clone(&state),
        )
        .await
        .unwrap();
        assert_eq!(save.status(), StatusCode::OK);
        let saved_item = body_json(&save)["item"].clone();

        let list = function_handler(request("GET", "/diary", Body::Empty), state)
            .await
            .unwrap();
        assert_eq!(list.status(), StatusCode::OK);

        let json = body_json(&list);
        assert_eq!(json["count"], 1);
        assert_eq!(json["items"][0], saved_item);
    }

    #[tokio::test]
    async fn generate_route_uses_generator() {
        let response = function_handler(
            request(
                "POST",
                "/diary/generate",
                Body::from(r#"{"title":"朝のコーヒー"}"#),
            ),
            test_state(),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(&response);
        assert_eq!(json["title"], "朝のコーヒー");
        assert_eq!(json["content"], "生成された日記");
    }

    #[tokio::test]
    async fn upload_url_route_issues_grant() {
        let response = function_handler(
            request(
                "POST",
                "/diary/upload-url",
                Body::from(r#"{"file_extension":"png"}"#),
            ),
            test_state(),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(&response);
        assert_eq!(json["bucket_name"], "test-bucket");
        assert!(json["file_key"].as_str().unwrap().ends_with(".png"));
    }

    #[tokio::test]
    async fn echo_route_reflects_body() {
        let response = function_handler(
            request("POST", "/echo", Body::from(r#"{"ping":true}"#)),
            test_state(),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(&response)["received"]["ping"], true);
    }

    #[tokio::test]
    async fn unknown_path_is_404_with_cors() {
        let response = function_handler(request("GET", "/nope", Body::Empty), test_state())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(body_json(&response)["error"], "Not found");
    }

    #[tokio::test]
    async fn wrong_method_is_405() {
        let response = function_handler(request("GET", "/echo", Body::Empty), test_state())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(&response)["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn error_responses_carry_cors_headers() {
        let response = function_handler(
            request("POST", "/diary", Body::from(r#"{"date":"2025-01-15"}"#)),
            test_state(),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
    }
}
