pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::careers::handlers;
use crate::pages::handlers::home_handler;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/careers",
            get(handlers::handle_careers_form).post(handlers::handle_submit_application),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::storage::LocalResumeStore;
    use crate::testing::{test_config, FailingStore, InMemoryLedger};

    const BOUNDARY: &str = "careers-test-boundary";

    struct Harness {
        _dir: tempfile::TempDir,
        ledger: Arc<InMemoryLedger>,
        router: Router,
    }

    async fn harness_with_ledger(ledger: InMemoryLedger) -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalResumeStore::new(dir.path()).await.unwrap();
        let ledger = Arc::new(ledger);
        let state = AppState {
            store: Arc::new(store),
            ledger: ledger.clone(),
            config: test_config(dir.path()),
        };
        Harness {
            router: build_router(state),
            ledger,
            _dir: dir,
        }
    }

    async fn harness() -> Harness {
        harness_with_ledger(InMemoryLedger::default()).await
    }

    fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Body {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((filename, content)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
                     Content-Type: application/pdf\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        Body::from(body)
    }

    fn post_careers(body: Body) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/careers")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(body)
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    const JANE: &[(&str, &str)] = &[
        ("name", "Jane Doe"),
        ("phone", "08012345678"),
        ("experience", "3"),
        ("position", "Engineer"),
        ("salary", ""),
        ("expected_salary", ""),
    ];

    #[tokio::test]
    async fn test_get_pages_render() {
        let h = harness().await;
        for uri in ["/", "/careers", "/health"] {
            let response = h
                .router
                .clone()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
        assert!(h.ledger.rows().is_empty());
    }

    #[tokio::test]
    async fn test_post_valid_application_returns_confirmation() {
        let h = harness().await;

        let response = h
            .router
            .clone()
            .oneshot(post_careers(multipart_body(
                JANE,
                Some(("resume.pdf", b"%PDF-1.4 cv".as_slice())),
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let text = body_text(response).await;
        assert!(text.contains("Application submitted successfully!"));
        assert!(text.contains("Jane_Doe.pdf"));

        let rows = h.ledger.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].experience, Some(3));
        assert_eq!(rows[0].salary, None);
        assert!(rows[0].resume_location.ends_with("/Jane_Doe.pdf"));
        let stored = rows[0].resume_location.trim_start_matches("file://");
        assert_eq!(std::fs::read(stored).unwrap(), b"%PDF-1.4 cv");
    }

    #[tokio::test]
    async fn test_post_without_file_is_bad_request() {
        let h = harness().await;

        let response = h
            .router
            .clone()
            .oneshot(post_careers(multipart_body(JANE, None)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "No file part");
        assert!(h.ledger.rows().is_empty());
    }

    #[tokio::test]
    async fn test_post_with_empty_filename_is_bad_request() {
        let h = harness().await;

        let response = h
            .router
            .clone()
            .oneshot(post_careers(multipart_body(JANE, Some(("", b"".as_slice())))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "No selected file");
    }

    #[tokio::test]
    async fn test_post_non_numeric_experience_is_server_error() {
        let h = harness().await;
        let fields = [
            ("name", "Jane Doe"),
            ("phone", "08012345678"),
            ("experience", "three"),
            ("position", "Engineer"),
        ];

        let response = h
            .router
            .clone()
            .oneshot(post_careers(multipart_body(
                &fields,
                Some(("resume.pdf", b"cv".as_slice())),
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(response).await.starts_with("An error occurred:"));
        assert!(h.ledger.rows().is_empty());
    }

    #[tokio::test]
    async fn test_post_when_ledger_fails_is_server_error() {
        let h = harness_with_ledger(InMemoryLedger::failing()).await;

        let response = h
            .router
            .clone()
            .oneshot(post_careers(multipart_body(JANE, Some(("resume.pdf", b"cv".as_slice())))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(h.ledger.attempts(), 1);
    }

    #[tokio::test]
    async fn test_post_with_unavailable_credentials_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Arc::new(InMemoryLedger::default());
        let router = build_router(AppState {
            store: Arc::new(FailingStore::credentials()),
            ledger: ledger.clone(),
            config: test_config(dir.path()),
        });

        let response = router
            .oneshot(post_careers(multipart_body(JANE, Some(("resume.pdf", b"cv".as_slice())))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Credentials not available");
        assert_eq!(ledger.attempts(), 0);
    }

    #[tokio::test]
    async fn test_post_that_is_not_multipart_is_bad_request() {
        let h = harness().await;

        let response = h
            .router
            .clone()
            .oneshot(
                Request::post("/careers")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=Jane"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(h.ledger.rows().is_empty());
    }
}
