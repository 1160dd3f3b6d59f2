//! Provider-agnostic summary prompt

use unicode_segmentation::UnicodeSegmentation;

const DEFAULT_LANGUAGE: &str = "português";
const DEFAULT_MAX_WORDS: usize = 300;
const DEFAULT_MAX_INPUT_CHARS: usize = 12_000;

/// Builds the single instruction string sent to every provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    pub language: String,
    pub max_words: usize,
    /// Longest document text, in grapheme clusters, embedded in the prompt
    pub max_input_chars: usize,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            max_words: DEFAULT_MAX_WORDS,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl PromptTemplate {
    pub fn new(language: impl Into<String>, max_words: usize, max_input_chars: usize) -> Self {
        Self {
            language: language.into(),
            max_words,
            max_input_chars,
        }
    }

    pub fn render(&self, document_name: &str, text: &str) -> String {
        let content = self.fit_input(text);

        format!(
            "Faça um resumo dessas informações, extraídas do documento: {name}.\n\
             Instruções:\n\
             - Escreva o resumo em {language}.\n\
             - Organize o resumo em tópicos, cada um com um título curto.\n\
             - Use no máximo {max_words} palavras.\n\
             \n\
             Conteúdo do documento:\n\
             {content}",
            name = document_name,
            language = self.language,
            max_words = self.max_words,
            content = content,
        )
    }

    fn fit_input<'a>(&self, text: &'a str) -> &'a str {
        match text.grapheme_indices(true).nth(self.max_input_chars) {
            Some((offset, _)) => {
                tracing::debug!(
                    limit = self.max_input_chars,
                    original_bytes = text.len(),
                    "Truncating document text for prompt"
                );
                &text[..offset]
            }
            None => text,
        }
    }
}
