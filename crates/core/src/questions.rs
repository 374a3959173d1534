use crate::error::InferenceError;
use crate::models::GenerationParams;
use crate::traits::QuestionGenerator;

pub const QUESTION_PROMPT_PREFIX: &str = "generate questions: ";

pub async fn generate_quiz<G: QuestionGenerator + ?Sized>(
    generator: &G,
    summary: &str,
    params: GenerationParams,
) -> Result<Vec<String>, InferenceError> {
    let prompt = format!("{QUESTION_PROMPT_PREFIX}{summary}");
    let reply = generator.generate(&prompt, params).await?;

    Ok(reply.split('\n').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::{generate_quiz, QUESTION_PROMPT_PREFIX};
    use crate::error::InferenceError;
    use crate::models::GenerationParams;
    use crate::traits::QuestionGenerator;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedGenerator {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedGenerator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QuestionGenerator for CannedGenerator {
        async fn generate(
            &self,
            prompt: &str,
            _params: GenerationParams,
        ) -> Result<String, InferenceError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn summary_is_prefixed_into_a_single_prompt() {
        let generator = CannedGenerator::new("Soru 1?");

        generate_quiz(&generator, "Kısa bir özet.", GenerationParams::default())
            .await
            .expect("generation should succeed");

        assert_eq!(
            generator.seen(),
            vec![format!("{QUESTION_PROMPT_PREFIX}Kısa bir özet.")]
        );
    }

    #[tokio::test]
    async fn reply_lines_become_questions_verbatim() {
        let generator = CannedGenerator::new("Soru 1?\nSoru 2?\n\nSoru 3?");

        let questions = generate_quiz(&generator, "özet", GenerationParams::default())
            .await
            .expect("generation should succeed");

        assert_eq!(questions, vec!["Soru 1?", "Soru 2?", "", "Soru 3?"]);
        assert_eq!(questions.join("\n"), "Soru 1?\nSoru 2?\n\nSoru 3?");
    }

    #[tokio::test]
    async fn empty_reply_yields_one_empty_question() {
        let generator = CannedGenerator::new("");

        let questions = generate_quiz(&generator, "", GenerationParams::default())
            .await
            .expect("generation should succeed");

        assert_eq!(questions, vec![String::new()]);
        assert_eq!(generator.seen(), vec![QUESTION_PROMPT_PREFIX.to_string()]);
    }
}
