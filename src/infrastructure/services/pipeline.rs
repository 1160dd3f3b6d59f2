//! Extraction followed by summarization for one uploaded document

use tracing::Instrument;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::domain::{DocumentFormat, ExtractedText, ProviderConfig, SourceDocument, SummaryResult};
use crate::infrastructure::extraction::DocumentExtractor;
use crate::infrastructure::llm::Summarizer;

/// Result of processing one document
#[derive(Debug)]
pub struct PipelineOutput {
    pub run_id: Uuid,
    pub filename: String,
    pub format: DocumentFormat,
    pub extracted: ExtractedText,
    pub summary: SummaryResult,
}

/// Chains [`DocumentExtractor`] and [`Summarizer`]
#[derive(Clone)]
pub struct DocumentPipeline {
    extractor: DocumentExtractor,
    summarizer: Summarizer,
}

impl DocumentPipeline {
    pub fn new(extractor: DocumentExtractor, summarizer: Summarizer) -> Self {
        Self {
            extractor,
            summarizer,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            DocumentExtractor::from_config(&config.extraction),
            Summarizer::from_config(&config.summarization),
        )
    }

    /// Extract text off the async runtime
    pub async fn extract(&self, bytes: Vec<u8>, filename: &str) -> (DocumentFormat, ExtractedText) {
        let document = SourceDocument::new(bytes, filename);
        let format = document.format();

        (format, self.extractor.extract_async(document).await)
    }

    /// Extract then summarize; extraction never fails, so the summary carries
    /// the only error
    pub async fn process(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        config: Option<&ProviderConfig>,
    ) -> PipelineOutput {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("process_document", %run_id, filename = %filename);

        async move {
            let (format, extracted) = self.extract(bytes, filename).await;

            if extracted.status.is_degraded() {
                tracing::warn!(status = ?extracted.status, "Summarizing placeholder text");
            }

            let summary = self
                .summarizer
                .summarize(extracted.as_str(), filename, config)
                .await;

            match &summary {
                Ok(text) => tracing::info!(chars = text.len(), "Document summarized"),
                Err(e) => tracing::warn!(code = e.code(), error = %e, "Summarization failed"),
            }

            PipelineOutput {
                run_id,
                filename: filename.to_string(),
                format,
                extracted,
                summary,
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::{ExtractionConfig, SummarizationConfig};
    use crate::domain::{
        ExtractionStatus, MockOcrEngine, MockPageRasterizer, ProviderKind, SummaryError,
        UNEXTRACTABLE_TEXT,
    };
    use crate::infrastructure::extraction::docx_with_paragraphs;
    use crate::infrastructure::llm::MockHttpClient;
    use serde_json::json;

    const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";

    fn pipeline(client: Arc<MockHttpClient>) -> DocumentPipeline {
        let rasterizer = MockPageRasterizer::failing("no renderer in tests");
        let mut ocr = MockOcrEngine::new();
        ocr.expect_recognize().never();
        ocr.expect_engine_name().return_const("mock");

        DocumentPipeline::new(
            DocumentExtractor::new(
                Arc::new(rasterizer),
                Arc::new(ocr),
                &ExtractionConfig::default(),
            ),
            Summarizer::with_client(client, &SummarizationConfig::default()),
        )
    }

    #[tokio::test]
    async fn test_process_summarizes_extracted_text() {
        let client = Arc::new(MockHttpClient::new().with_json(
            OPENAI_URL,
            json!({"choices": [{"message": {"content": "Summary text"}}]}),
        ));
        let pipeline = pipeline(client.clone());
        let config = ProviderConfig::new(ProviderKind::OpenAi, "sk-test");

        let output = pipeline
            .process(
                docx_with_paragraphs(&["Ata da reunião"]),
                "ata.docx",
                Some(&config),
            )
            .await;

        assert_eq!(output.format, DocumentFormat::Docx);
        assert_eq!(output.extracted.content, "Ata da reunião");
        assert_eq!(output.summary, Ok("Summary text".to_string()));

        let request = client.last_request().unwrap();
        let prompt = request.body["messages"][0]["content"].as_str().unwrap();
        assert!(prompt.contains("Ata da reunião"));
    }

    #[tokio::test]
    async fn test_process_without_provider() {
        let client = Arc::new(MockHttpClient::new());
        let pipeline = pipeline(client.clone());

        let output = pipeline
            .process(docx_with_paragraphs(&["Texto"]), "a.docx", None)
            .await;

        assert_eq!(output.extracted.status, ExtractionStatus::Docx);
        assert!(matches!(output.summary, Err(SummaryError::NotConfigured { .. })));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_document_still_summarized() {
        let client = Arc::new(MockHttpClient::new().with_json(
            OPENAI_URL,
            json!({"choices": [{"message": {"content": "Nada a resumir"}}]}),
        ));
        let pipeline = pipeline(client.clone());
        let config = ProviderConfig::new(ProviderKind::OpenAi, "sk-test");

        let output = pipeline
            .process(b"hello".to_vec(), "notes.txt", Some(&config))
            .await;

        assert_eq!(output.format, DocumentFormat::Unsupported);
        assert_eq!(output.extracted.content, UNEXTRACTABLE_TEXT);
        assert!(output.summary.is_ok());
        assert_eq!(client.call_count(), 1);
    }
}
