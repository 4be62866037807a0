use crate::config::ProviderConfig;
use crate::error::GeneratorError;
use crate::providers::RecipeGenerator;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Map, Value};

pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider from configuration
    ///
    /// A missing key is not an error here: the service still starts and every
    /// call fails at the API boundary instead.
    pub fn new(config: &ProviderConfig) -> Self {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .unwrap_or_default();

        GoogleProvider {
            client: Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    fn request_body(&self, prompt: &str) -> Value {
        let mut body = json!({
            "contents": [{
                "parts": [{
                    "text": prompt
                }]
            }]
        });

        let mut generation_config = Map::new();
        if let Some(temperature) = self.temperature {
            generation_config.insert("temperature".to_string(), json!(temperature));
        }
        if let Some(max_tokens) = self.max_tokens {
            generation_config.insert("maxOutputTokens".to_string(), json!(max_tokens));
        }
        if !generation_config.is_empty() {
            body["generationConfig"] = Value::Object(generation_config);
        }

        body
    }
}

#[async_trait]
impl RecipeGenerator for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| e.without_url())?;

        let response_body: Value = response.json().await.map_err(|e| e.without_url())?;
        debug!("Google Gemini response: {:?}", response_body);

        // Check for API error response
        if let Some(error) = response_body.get("error") {
            return Err(GeneratorError::Api {
                code: error["code"].as_i64().unwrap_or(0),
                message: error["message"]
                    .as_str()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        // A reply may be split across several parts
        let texts: Vec<&str> = response_body["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(|part| part["text"].as_str()).collect())
            .unwrap_or_default();

        if texts.is_empty() {
            return Err(GeneratorError::MalformedResponse(
                "no text in Google Gemini response".to_string(),
            ));
        }

        Ok(texts.concat())
    }
}
