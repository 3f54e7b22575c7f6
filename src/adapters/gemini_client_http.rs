//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::domain::{API_KEY_ENV, AppError, GeminiConfig, GenerationError, TransportErrorKind};
use crate::ports::{GenerationRequest, GenerationService};

const X_GOOG_API_KEY: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";
const DEFAULT_STATUS_MESSAGE: &str = "Gemini API request failed";

/// HTTP transport for the Gemini API.
///
/// Performs a single request per call; there is no retry or caching layer.
#[derive(Clone)]
pub struct HttpGeminiService {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiService")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiService {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiConfig) -> Result<Self, AppError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, endpoint: endpoint_for(config)?, client })
    }

    /// Create from the API key environment variable.
    pub fn from_env(config: &GeminiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::EnvironmentVariableMissing(API_KEY_ENV.into()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &ApiRequest<'_>) -> Result<Option<String>, GenerationError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, JSON_MIME_TYPE)
            .json(request)
            .send()
            .map_err(transport_error)?;

        let status = response.status();
        let body_text = response.text().map_err(transport_error)?;

        if !status.is_success() {
            let message = extract_error_message(&body_text).unwrap_or_else(|| {
                if !body_text.trim().is_empty() {
                    body_text.clone()
                } else if status.as_u16() == 429 {
                    "Rate limited".to_string()
                } else if status.is_server_error() {
                    "Server error".to_string()
                } else {
                    DEFAULT_STATUS_MESSAGE.to_string()
                }
            });
            tracing::debug!(
                status = status.as_u16(),
                %message,
                "Gemini API returned an error status"
            );
            return Err(GenerationError::Transport {
                kind: TransportErrorKind::Status(status.as_u16()),
                message,
            });
        }

        if body_text.trim().is_empty() {
            return Ok(None);
        }

        let api_response: ApiResponse = serde_json::from_str(&body_text).map_err(|e| {
            GenerationError::MalformedResponse(format!("Failed to parse response envelope: {}", e))
        })?;

        Ok(api_response.into_payload())
    }
}

impl GenerationService for HttpGeminiService {
    fn complete(&self, request: &GenerationRequest) -> Result<Option<String>, GenerationError> {
        let api_request = ApiRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: &request.instruction }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: &request.system_instruction }],
            },
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: &request.schema,
            },
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            prompt_chars = request.instruction.len(),
            "sending generateContent request"
        );
        self.send_request(&api_request)
    }
}

fn endpoint_for(config: &GeminiConfig) -> Result<Url, AppError> {
    let base = config.api_url.as_str().trim_end_matches('/');
    let raw = format!("{}/models/{}:generateContent", base, config.model.trim());
    Url::parse(&raw)
        .map_err(|e| AppError::InvalidConfig(format!("Invalid API endpoint '{}': {}", raw, e)))
}

fn transport_error(error: reqwest::Error) -> GenerationError {
    let kind = if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else if let Some(status) = error.status() {
        TransportErrorKind::Status(status.as_u16())
    } else {
        TransportErrorKind::Other
    };
    GenerationError::Transport { kind, message: error.to_string() }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl ApiResponse {
    /// Concatenated text parts of the first candidate.
    fn into_payload(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|part| part.text).collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CampaignInput, prompt};
    use mockito::Matcher;
    use serde_json::json;

    const MODEL_PATH: &str = "/models/gemini-test:generateContent";

    fn config_for(server: &mockito::Server) -> GeminiConfig {
        GeminiConfig {
            api_url: Url::parse(&server.url()).unwrap(),
            model: "gemini-test".to_string(),
            timeout_secs: 5,
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::from(prompt::build(&CampaignInput::new("EcoClean Spray")))
    }

    fn candidate_body(parts: &[&str]) -> String {
        let parts: Vec<Value> = parts.iter().map(|text| json!({ "text": text })).collect();
        json!({ "candidates": [{ "content": { "role": "model", "parts": parts } }] }).to_string()
    }

    #[test]
    fn endpoint_joins_model_path() {
        let config = GeminiConfig::default();
        let url = endpoint_for(&config).unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let service =
            HttpGeminiService::new("secret-key".into(), &GeminiConfig::default()).unwrap();
        let debug = format!("{:?}", service);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn complete_sends_schema_and_returns_text_payload() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", MODEL_PATH)
            .match_header(X_GOOG_API_KEY, "fake-key")
            .match_body(Matcher::PartialJson(json!({
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": { "type": "ARRAY" }
                },
                "systemInstruction": { "parts": [{ "text": prompt::SYSTEM_INSTRUCTION }] }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(candidate_body(&["[{\"headline\":", "\"x\"}]"]))
            .expect(1)
            .create();

        let service = HttpGeminiService::new("fake-key".into(), &config_for(&server)).unwrap();
        let payload = service.complete(&request()).unwrap();

        assert_eq!(payload.as_deref(), Some("[{\"headline\":\"x\"}]"));
        mock.assert();
    }

    #[test]
    fn missing_candidates_yield_no_payload() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", MODEL_PATH)
            .with_status(200)
            .with_body(r#"{"candidates": []}"#)
            .create();

        let service = HttpGeminiService::new("fake-key".into(), &config_for(&server)).unwrap();
        assert_eq!(service.complete(&request()).unwrap(), None);
    }

    #[test]
    fn empty_body_yields_no_payload() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", MODEL_PATH).with_status(200).with_body("").create();

        let service = HttpGeminiService::new("fake-key".into(), &config_for(&server)).unwrap();
        assert_eq!(service.complete(&request()).unwrap(), None);
    }

    #[test]
    fn non_success_status_is_a_transport_error() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", MODEL_PATH).with_status(500).expect(1).create();

        let service = HttpGeminiService::new("fake-key".into(), &config_for(&server)).unwrap();
        let err = service.complete(&request()).unwrap_err();

        assert_eq!(
            err,
            GenerationError::Transport {
                kind: TransportErrorKind::Status(500),
                message: "Server error".into()
            }
        );
        mock.assert();
    }

    #[test]
    fn rate_limit_is_not_retried() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", MODEL_PATH).with_status(429).expect(1).create();

        let service = HttpGeminiService::new("fake-key".into(), &config_for(&server)).unwrap();
        let err = service.complete(&request()).unwrap_err();

        assert!(matches!(
            err,
            GenerationError::Transport { kind: TransportErrorKind::Status(429), .. }
        ));
        mock.assert();
    }

    #[test]
    fn parses_nested_error_message() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", MODEL_PATH)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"code":400,"message":"API key not valid"}}"#)
            .create();

        let service = HttpGeminiService::new("fake-key".into(), &config_for(&server)).unwrap();
        match service.complete(&request()).unwrap_err() {
            GenerationError::Transport { kind, message } => {
                assert_eq!(kind, TransportErrorKind::Status(400));
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error variant: {}", other),
        }
    }

    #[test]
    fn unparseable_envelope_is_malformed() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", MODEL_PATH)
            .with_status(200)
            .with_body("<html>oops</html>")
            .create();

        let service = HttpGeminiService::new("fake-key".into(), &config_for(&server)).unwrap();
        let err = service.complete(&request()).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[test]
    fn refused_connection_is_classified() {
        let config = GeminiConfig {
            api_url: Url::parse("http://127.0.0.1:1").unwrap(),
            model: "gemini-test".into(),
            timeout_secs: 2,
        };
        let service = HttpGeminiService::new("fake-key".into(), &config).unwrap();
        let err = service.complete(&request()).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Transport { kind: TransportErrorKind::Connect, .. }
        ));
    }
}
