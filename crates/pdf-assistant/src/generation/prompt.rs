//! Prompt templates for answer generation

/// Separator placed between retrieved chunks
pub const CHUNK_SEPARATOR: &str = "\n\n";

/// Prompt builder for document questions
pub struct PromptBuilder;

impl PromptBuilder {
    /// Join retrieved chunks in retrieval order, separated by a blank line
    pub fn build_context(chunks: &[String]) -> String {
        chunks.join(CHUNK_SEPARATOR)
    }

    /// Build the grounded question-answering prompt
    pub fn build_answer_prompt(question: &str, chunks: &[String]) -> String {
        format!(
            r#"Context:
{context}

Question: {question}

Instructions:
- Answer using only the information in the context above
- Do not use outside knowledge or make assumptions beyond the context
- If the answer is not contained in the context, say explicitly that the document does not contain it"#,
            context = Self::build_context(chunks),
            question = question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_context_and_question() {
        let chunks = vec!["The cat sat.".to_string(), "The dog ran.".to_string()];
        let prompt = PromptBuilder::build_answer_prompt("What did the cat do?", &chunks);

        assert!(prompt.contains("The cat sat.\n\nThe dog ran."));
        assert!(prompt.contains("Question: What did the cat do?"));
        assert!(prompt.contains("not contained in the context"));
    }

    #[test]
    fn test_context_keeps_retrieval_order() {
        let chunks = vec!["second".to_string(), "first".to_string()];
        assert_eq!(PromptBuilder::build_context(&chunks), "second\n\nfirst");
    }

    #[test]
    fn test_question_kept_verbatim() {
        let question = "  Why?  {braces} \"quotes\"";
        let prompt = PromptBuilder::build_answer_prompt(question, &[]);
        assert!(prompt.contains(question));
    }
}
