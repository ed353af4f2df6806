//! Priority advisory backed by the Gemini `generateContent` API.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::Instrument;

use crate::config::AdvisorConfig;
use crate::sanitize;
use crate::secrets::resolve_api_key;

use super::error::AdvisorError;
use super::priority::{AdvisoryRequest, Priority, PriorityAdvisor, PriorityAssessment};

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// The structured JSON the model is asked to return.
#[derive(Debug, Deserialize)]
struct ModelVerdict {
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    reasoning: Option<String>,
}

/// Remote advisor. One request per assessment, no retries.
pub struct GeminiAdvisor {
    client: Client,
    endpoint: String,
    model: String,
    api_key: SecretString,
}

impl GeminiAdvisor {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: SecretString,
    ) -> Result<Self, AdvisorError> {
        let client = Client::builder().build().map_err(AdvisorError::Client)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key,
        })
    }

    /// Builds an advisor from config, resolving the API key.
    ///
    /// Fails with [`AdvisorError::NotConfigured`] when the advisor is
    /// disabled or no key can be found.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, AdvisorError> {
        if !config.enabled {
            return Err(AdvisorError::NotConfigured(
                "advisor is disabled in config".to_string(),
            ));
        }

        let api_key = resolve_api_key(config)
            .map_err(|e| AdvisorError::NotConfigured(e.to_string()))?
            .ok_or_else(|| AdvisorError::NotConfigured("no API key configured".to_string()))?;

        Self::new(config.endpoint.trim(), config.model.trim(), api_key)
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl PriorityAdvisor for GeminiAdvisor {
    async fn assess(&self, request: &AdvisoryRequest) -> Result<PriorityAssessment, AdvisorError> {
        request.require_text()?;

        let span = tracing::info_span!("priority_advice", model = %self.model);
        async {
            let prompt = build_prompt(request);
            debug!("Advisory prompt:\n{}", prompt);

            let response = self
                .client
                .post(self.generate_url())
                .header("x-goog-api-key", self.api_key.expose_secret())
                .json(&request_body(&prompt))
                .send()
                .await
                .map_err(AdvisorError::Request)?;

            let status = response.status();
            let body = response.text().await.map_err(AdvisorError::Request)?;
            if !status.is_success() {
                return Err(AdvisorError::Status {
                    status: status.as_u16(),
                    body: sanitize::truncate_for_log(&body),
                });
            }

            parse_generate_response(&body)
        }
        .instrument(span)
        .await
    }
}

fn build_prompt(request: &AdvisoryRequest) -> String {
    format!(
        "Analisis tingkat urgensi perbaikan rumah sakit untuk data berikut:\n\
         Item: {}\n\
         Ruangan: {}\n\
         Komplain: {}\n\
         \n\
         Tentukan prioritas antara: Rendah, Sedang, Tinggi, Kritis.\n\
         Berikan alasan singkat dalam bahasa Indonesia.",
        request.item_name, request.room_name, request.complaint
    )
}

fn request_body(prompt: &str) -> serde_json::Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "priority": {
                        "type": "STRING",
                        "description": "Priority level: Rendah, Sedang, Tinggi, or Kritis"
                    },
                    "reasoning": {
                        "type": "STRING",
                        "description": "Brief reason for the priority assignment"
                    }
                },
                "required": ["priority", "reasoning"]
            }
        }
    })
}

/// Extracts the assessment from a raw `generateContent` response body.
pub fn parse_generate_response(body: &str) -> Result<PriorityAssessment, AdvisorError> {
    let response: GenerateResponse = serde_json::from_str(body)?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(AdvisorError::EmptyResponse);
    }

    let verdict: ModelVerdict = serde_json::from_str(text)?;
    let priority = verdict
        .priority
        .ok_or(AdvisorError::MissingField("priority"))?;
    let reasoning = verdict
        .reasoning
        .ok_or(AdvisorError::MissingField("reasoning"))?;

    Ok(PriorityAssessment::new(
        Priority::from_model_label(&priority),
        reasoning,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(text: &str) -> String {
        json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] }).to_string()
    }

    #[test]
    fn test_parse_valid_response() {
        let body = wrap(r#" {"priority": "Tinggi", "reasoning": "Mengganggu pelayanan pasien."} "#);
        let assessment = parse_generate_response(&body).unwrap();
        assert_eq!(assessment.priority, Priority::High);
        assert_eq!(assessment.reasoning, "Mengganggu pelayanan pasien.");
    }

    #[test]
    fn test_parse_joins_text_parts() {
        let body = json!({
            "candidates": [{ "content": { "parts": [
                { "text": "{\"priority\": \"Kri" },
                { "text": "tis\", \"reasoning\": \"Oksigen\"}" }
            ] } }]
        })
        .to_string();
        let assessment = parse_generate_response(&body).unwrap();
        assert_eq!(assessment.priority, Priority::Critical);
    }

    #[test]
    fn test_parse_unknown_priority_is_medium() {
        let body = wrap(r#"{"priority": "Urgent", "reasoning": "x"}"#);
        assert_eq!(
            parse_generate_response(&body).unwrap().priority,
            Priority::Medium
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_generate_response(r#"{"candidates": []}"#),
            Err(AdvisorError::EmptyResponse)
        ));
        assert!(matches!(
            parse_generate_response(&wrap("   ")),
            Err(AdvisorError::EmptyResponse)
        ));
        assert!(matches!(
            parse_generate_response(&wrap("not json")),
            Err(AdvisorError::Decode(_))
        ));
        assert!(matches!(
            parse_generate_response(&wrap(r#"{"priority": "Rendah"}"#)),
            Err(AdvisorError::MissingField("reasoning"))
        ));
        assert!(matches!(
            parse_generate_response(&wrap(r#"{"reasoning": "x"}"#)),
            Err(AdvisorError::MissingField("priority"))
        ));
        assert!(matches!(
            parse_generate_response("<html>"),
            Err(AdvisorError::Decode(_))
        ));
    }

    #[test]
    fn test_prompt_contains_request_fields() {
        let prompt = build_prompt(&AdvisoryRequest::new("AC bocor", "AC Split", "Ruang Bersalin"));
        assert!(prompt.contains("Item: AC Split"));
        assert!(prompt.contains("Ruangan: Ruang Bersalin"));
        assert!(prompt.contains("Komplain: AC bocor"));
    }

    #[test]
    fn test_request_body_requires_both_fields() {
        let body = request_body("p");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "p");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["priority", "reasoning"])
        );
    }

    #[test]
    fn test_generate_url() {
        let advisor = GeminiAdvisor::new(
            "https://generativelanguage.googleapis.com/",
            "gemini-test",
            SecretString::from("k".to_string()),
        )
        .unwrap();
        assert_eq!(
            advisor.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_from_config_requires_enabled_and_key() {
        let disabled = AdvisorConfig {
            enabled: false,
            ..AdvisorConfig::default()
        };
        assert!(matches!(
            GeminiAdvisor::from_config(&disabled),
            Err(AdvisorError::NotConfigured(_))
        ));

        let keyless = AdvisorConfig {
            api_key: None,
            api_key_file: None,
            api_key_env_var: Some("MEDFIX_DEFINITELY_UNSET_KEY".to_string()),
            ..AdvisorConfig::default()
        };
        assert!(matches!(
            GeminiAdvisor::from_config(&keyless),
            Err(AdvisorError::NotConfigured(_))
        ));

        let keyed = AdvisorConfig {
            api_key: Some("direct".to_string()),
            ..AdvisorConfig::default()
        };
        assert!(GeminiAdvisor::from_config(&keyed).is_ok());
    }

    #[tokio::test]
    async fn test_blank_complaint_never_hits_network() {
        let advisor = GeminiAdvisor::new(
            "http://127.0.0.1:9",
            "gemini-test",
            SecretString::from("k".to_string()),
        )
        .unwrap();
        let request = AdvisoryRequest::new("", "Bed", "ICU");
        assert!(matches!(
            advisor.assess(&request).await,
            Err(AdvisorError::MissingText)
        ));
        assert_eq!(advisor.advise(&request).await, PriorityAssessment::fallback());
    }
}
