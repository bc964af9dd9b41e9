use async_trait::async_trait;
use barberie_domain::{CollaboratorError, TextCollaborator};
use gloo::net::http::Request;
use serde::{Deserialize, Serialize};
use shared::{AssistantConfig, HistoryPart, HistoryTurn};

/// REST client for the Gemini `generateContent` endpoint
#[derive(Clone)]
pub struct GeminiClient {
    config: AssistantConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: SystemInstruction,
    contents: Vec<HistoryTurn>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<HistoryPart>,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts joined; `None` when there is none
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl GeminiClient {
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_request(&self, history: &[HistoryTurn], message: &str) -> GenerateContentRequest {
        let mut contents = history.to_vec();
        contents.push(HistoryTurn {
            role: "user".to_string(),
            parts: vec![HistoryPart {
                text: message.to_string(),
            }],
        });
        GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![HistoryPart {
                    text: self.config.system_instruction.clone(),
                }],
            },
            contents,
        }
    }
}

#[async_trait(?Send)]
impl TextCollaborator for GeminiClient {
    async fn generate(
        &self,
        history: &[HistoryTurn],
        message: &str,
    ) -> Result<Option<String>, CollaboratorError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CollaboratorError::MissingApiKey)?;
        let body = self.build_request(history, message);

        let response = Request::post(&self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .map_err(|e| CollaboratorError::Request(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| CollaboratorError::Request(format!("Network error: {}", e)))?;

        if !response.ok() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CollaboratorError::Status { status, body });
        }

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| CollaboratorError::Parse(e.to_string()))?;
        Ok(parsed.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_appends_new_message_after_history() {
        let client = GeminiClient::new(AssistantConfig::default());
        let history = vec![HistoryTurn {
            role: "model".to_string(),
            parts: vec![HistoryPart {
                text: "¡Hola!".to_string(),
            }],
        }];

        let body = serde_json::to_value(client.build_request(&history, "Precios?")).unwrap();

        assert_eq!(body["contents"][0]["role"], "model");
        assert_eq!(body["contents"][1]["role"], "user");
        assert_eq!(body["contents"][1]["parts"][0]["text"], "Precios?");
        assert!(body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("Barbería Canina"));
    }

    #[test]
    fn test_endpoint_uses_model_name() {
        let client = GeminiClient::new(AssistantConfig::default());
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "¡Guau! " }, { "text": "🐾" }] }
            }]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("¡Guau! 🐾"));
    }

    #[test]
    fn test_response_without_text_is_none() {
        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] })).unwrap();
        assert_eq!(blocked.text(), None);

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), None);
    }
}
