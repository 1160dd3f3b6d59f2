use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::v1;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        // Health endpoints (no state needed)
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .nest("/v1", v1::create_v1_router())
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::{ExtractionConfig, SummarizationConfig};
    use crate::domain::{MockOcrEngine, MockPageRasterizer, UNEXTRACTABLE_TEXT};
    use crate::infrastructure::extraction::{docx_with_paragraphs, DocumentExtractor};
    use crate::infrastructure::llm::{MockHttpClient, Summarizer};
    use crate::infrastructure::services::DocumentPipeline;

    const BOUNDARY: &str = "doc-summarizer-test-boundary";
    const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
    const HUGGINGFACE_URL: &str =
        "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

    enum Part<'a> {
        File(&'a str, &'a [u8]),
        Text(&'a str, &'a str),
    }

    fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
        let mut body = Vec::new();

        for part in parts {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            match part {
                Part::File(filename, bytes) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n\
                             Content-Type: application/octet-stream\r\n\r\n",
                            filename
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(bytes);
                }
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                            .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
            }
            body.extend_from_slice(b"\r\n");
        }

        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn upload_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap()
    }

    fn router(client: Arc<MockHttpClient>) -> Router {
        let rasterizer = MockPageRasterizer::failing("no renderer in tests");
        let mut ocr = MockOcrEngine::new();
        ocr.expect_recognize().never();
        ocr.expect_engine_name().return_const("mock");

        let pipeline = DocumentPipeline::new(
            DocumentExtractor::new(
                Arc::new(rasterizer),
                Arc::new(ocr),
                &ExtractionConfig::default(),
            ),
            Summarizer::with_client(client, &SummarizationConfig::default()),
        );

        create_router_with_state(AppState::new(pipeline), 1024 * 1024)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = router(Arc::new(MockHttpClient::new()));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_list_providers() {
        let app = router(Arc::new(MockHttpClient::new()));

        let response = app
            .oneshot(Request::builder().uri("/v1/providers").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_extract_docx() {
        let app = router(Arc::new(MockHttpClient::new()));
        let docx = docx_with_paragraphs(&["Hello", "", "World"]);

        let response = app
            .oneshot(upload_request("/v1/extract", &[Part::File("carta.docx", &docx)]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["filename"], "carta.docx");
        assert_eq!(body["format"], "docx");
        assert_eq!(body["status"], "docx");
        assert_eq!(body["text"], "Hello\n\nWorld");
    }

    #[tokio::test]
    async fn test_extract_unsupported_is_not_an_error() {
        let app = router(Arc::new(MockHttpClient::new()));

        let response = app
            .oneshot(upload_request("/v1/extract", &[Part::File("notas.txt", b"oi")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "unsupported");
        assert_eq!(body["text"], UNEXTRACTABLE_TEXT);
    }

    #[tokio::test]
    async fn test_missing_file_field() {
        let app = router(Arc::new(MockHttpClient::new()));

        let response = app
            .oneshot(upload_request("/v1/extract", &[Part::Text("provider", "openai")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["message"], "Nenhum arquivo enviado");
        assert_eq!(body["error"]["code"], "missing_file");
    }

    #[tokio::test]
    async fn test_empty_filename() {
        let app = router(Arc::new(MockHttpClient::new()));

        let response = app
            .oneshot(upload_request("/v1/extract", &[Part::File("", b"")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"]["message"],
            "Nenhum arquivo selecionado"
        );
    }

    #[tokio::test]
    async fn test_summarize_openai() {
        let client = Arc::new(MockHttpClient::new().with_json(
            OPENAI_URL,
            json!({"choices": [{"message": {"content": "Summary text"}}]}),
        ));
        let app = router(client.clone());
        let docx = docx_with_paragraphs(&["Relatório anual"]);

        let response = app
            .oneshot(upload_request(
                "/v1/summarize",
                &[
                    Part::File("relatorio.docx", &docx),
                    Part::Text("provider", "openai"),
                    Part::Text("api_key", "sk-test"),
                ],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["summary"], "Summary text");
        assert_eq!(body["filename"], "relatorio.docx");
        assert_eq!(body["status"], "docx");
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_summarize_without_key_is_not_configured() {
        let client = Arc::new(MockHttpClient::new());
        let app = router(client.clone());
        let docx = docx_with_paragraphs(&["Texto"]);

        let response = app
            .oneshot(upload_request(
                "/v1/summarize",
                &[Part::File("a.docx", &docx), Part::Text("provider", "cohere")],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"]["code"],
            "provider_not_configured"
        );
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_summarize_cold_start() {
        let client = Arc::new(MockHttpClient::new().with_response(
            HUGGINGFACE_URL,
            503,
            r#"{"error":"Model is currently loading"}"#,
        ));
        let app = router(client);
        let docx = docx_with_paragraphs(&["Texto"]);

        let response = app
            .oneshot(upload_request(
                "/v1/summarize",
                &[
                    Part::File("a.docx", &docx),
                    Part::Text("provider", "huggingface"),
                    Part::Text("api_key", "hf_test"),
                ],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response).await["error"]["code"], "provider_cold_start");
    }

    #[tokio::test]
    async fn test_summarize_upstream_error() {
        let client =
            Arc::new(MockHttpClient::new().with_response(OPENAI_URL, 401, "invalid api key"));
        let app = router(client);
        let docx = docx_with_paragraphs(&["Texto"]);

        let response = app
            .oneshot(upload_request(
                "/v1/summarize",
                &[
                    Part::File("a.docx", &docx),
                    Part::Text("provider", "openai"),
                    Part::Text("api_key", "sk-bad"),
                ],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "provider_http_error");
        assert!(body["error"]["message"].as_str().unwrap().contains("401"));
    }

    #[tokio::test]
    async fn test_upload_over_limit_rejected() {
        let app = router(Arc::new(MockHttpClient::new()));
        let large = vec![b'a'; 2 * 1024 * 1024];

        let response = app
            .oneshot(upload_request("/v1/extract", &[Part::File("big.pdf", &large)]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
