//! Gemini adapter for the suggestion port
//!
//! One `generateContent` call per analysis. The request declares a JSON
//! response schema so the provider constrains its output server-side; the
//! suggest layer still validates the text that comes back.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::ports::SuggestPort;
use crate::suggest::{self, SuggestError};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// HTTP client for the Gemini generateContent endpoint
pub struct GeminiClient {
    api_key: String,
    model: String,
    endpoint: String,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Override the API base URL (alternate deployments, test servers)
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Declared output schema: an array of clip objects with times, title,
/// description, and bilingual captions
fn response_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "startTime": {
                    "type": "NUMBER",
                    "description": "The start time of the clip in seconds."
                },
                "endTime": {
                    "type": "NUMBER",
                    "description": "The end time of the clip in seconds."
                },
                "title": {
                    "type": "STRING",
                    "description": "A catchy, viral-style title for the short clip (max 10 words)."
                },
                "description": {
                    "type": "STRING",
                    "description": "A brief, engaging description of the clip (max 20 words)."
                },
                "captions": {
                    "type": "OBJECT",
                    "properties": {
                        "en": {
                            "type": "STRING",
                            "description": "A viral caption for social media in English, including relevant hashtags."
                        },
                        "hi": {
                            "type": "STRING",
                            "description": "A viral caption for social media in Hindi, including relevant hashtags."
                        }
                    },
                    "required": ["en", "hi"]
                }
            },
            "required": ["startTime", "endTime", "title", "description", "captions"]
        }
    })
}

#[async_trait]
impl SuggestPort for GeminiClient {
    async fn request_suggestions(&self, duration_seconds: f64) -> Result<String, SuggestError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: suggest::build_prompt(duration_seconds),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );
        debug!(model = %self.model, "sending suggestion request");

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| SuggestError::Service(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SuggestError::Service(format!(
                "suggestion endpoint returned {}: {}",
                status, body
            )));
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|e| SuggestError::Service(e.to_string()))?;

        payload
            .candidates
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| c.content)
            .filter_map(|c| c.parts)
            .flatten()
            .find_map(|p| p.text)
            .ok_or(SuggestError::EmptyResponse)
    }
}
