use crate::error::InferenceError;
use crate::models::{GenerationParams, SummaryParams};
use crate::traits::{QuestionGenerator, Summarizer};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_SUMMARY_MODEL: &str = "csebuetnlp/mT5_multilingual_XLSum";
pub const DEFAULT_QUESTION_MODEL: &str = "iarfmoose/t5-base-question-generator";

#[derive(Debug, Clone)]
pub struct HostedModelConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub summary_model: String,
    pub question_model: String,
}

impl Default for HostedModelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INFERENCE_URL.to_string(),
            api_key: None,
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            question_model: DEFAULT_QUESTION_MODEL.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct HostedModelClient {
    base: Url,
    api_key: Option<String>,
    summary_model: String,
    question_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct InferenceParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_length: Option<u32>,
    do_sample: bool,
}

impl HostedModelClient {
    pub fn new(config: HostedModelConfig) -> Result<Self, InferenceError> {
        // Url::join treats a base without a trailing slash as a file segment.
        let mut base_url = config.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            base: Url::parse(&base_url)?,
            api_key: config.api_key,
            summary_model: config.summary_model,
            question_model: config.question_model,
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    async fn infer(
        &self,
        model: &str,
        inputs: &str,
        parameters: InferenceParameters,
        reply_field: &str,
    ) -> Result<String, InferenceError> {
        let url = self.base.join(&format!("models/{model}"))?;

        let mut request = self
            .client
            .post(url)
            .json(&InferenceRequest { inputs, parameters });

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            return Err(InferenceError::Backend {
                service: model.to_string(),
                status: status.as_u16(),
                details,
            });
        }

        let payload: Value = response.json().await?;
        decode_reply(model, &payload, reply_field)
    }
}

#[async_trait]
impl Summarizer for HostedModelClient {
    async fn summarize(&self, text: &str, params: SummaryParams) -> Result<String, InferenceError> {
        let parameters = InferenceParameters {
            max_length: Some(params.max_length),
            min_length: Some(params.min_length),
            do_sample: params.sample,
        };

        self.infer(&self.summary_model, text, parameters, "summary_text")
            .await
    }
}

#[async_trait]
impl QuestionGenerator for HostedModelClient {
    async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, InferenceError> {
        let parameters = InferenceParameters {
            max_length: Some(params.max_length),
            min_length: None,
            do_sample: params.sample,
        };

        self.infer(&self.question_model, prompt, parameters, "generated_text")
            .await
    }
}

fn decode_reply(
    service: &str,
    payload: &Value,
    reply_field: &str,
) -> Result<String, InferenceError> {
    if let Some(text) = payload
        .pointer(&format!("/0/{reply_field}"))
        .and_then(Value::as_str)
    {
        return Ok(text.to_string());
    }

    let details = payload
        .pointer("/error")
        .and_then(Value::as_str)
        .map(|message| message.to_string())
        .unwrap_or_else(|| format!("expected [{{\"{reply_field}\": ...}}]"));

    Err(InferenceError::MalformedResponse {
        service: service.to_string(),
        details,
    })
}
