//! Generative-AI text client for the FAQ chat and health insights.
//!
//! Each feature sends a single free-text prompt under a fixed system
//! instruction; no conversation state crosses the wire. Multi-turn
//! context exists only in the local [`ChatHistory`].

use crate::error::{ChatError, ChatResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Model used for all text generation.
pub const CHAT_MODEL: &str = "gemini-2.5-flash-preview-04-17";

/// System instruction for the FAQ assistant.
pub const FAQ_SYSTEM_INSTRUCTION: &str = "You are an information assistant for a community \
     blood-donation group. Keep answers brief, informative, and friendly. Offer general \
     information and guidance rather than complex medical advice.";

/// System instruction for health-insight prompts.
pub const HEALTH_SYSTEM_INSTRUCTION: &str = "You are a friendly health information assistant. \
     Your answers should be informative, empathetic, and brief. Do not give medical advice; \
     provide general health information only.";

/// Configuration for the text-generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// API key; generation fails fast without one.
    pub api_key: String,
    /// Base URL of the generative-language API.
    pub api_base_url: String,
    /// Model name.
    pub model: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: CHAT_MODEL.to_string(),
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    system_instruction: ContentBlock<'a>,
    contents: Vec<ContentBlock<'a>>,
}

#[derive(Serialize)]
struct ContentBlock<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Client for the generative-AI text endpoint.
pub struct ChatClient {
    config: ChatConfig,
    client: Client,
}

impl ChatClient {
    /// Creates a new chat client.
    #[must_use]
    pub fn new(config: ChatConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create HTTP client");
        Self { config, client }
    }

    /// Whether an API key is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    /// Answers a free-text question under the FAQ framing.
    pub async fn ask_faq(&self, question: &str) -> ChatResult<String> {
        self.generate(FAQ_SYSTEM_INSTRUCTION, question).await
    }

    /// General, non-medical guidance for a BMI category.
    pub async fn bmi_insight(&self, category: &str) -> ChatResult<String> {
        let prompt = format!(
            "My BMI category is \"{category}\". Give general information about this category \
             and some general, non-medical lifestyle guidance (such as balanced meals and \
             exercise). State clearly that this is not a substitute for a doctor's advice, \
             and keep the language simple."
        );
        self.generate(HEALTH_SYSTEM_INSTRUCTION, &prompt).await
    }

    /// Encouraging explanation of why donation-eligibility rules failed.
    pub async fn eligibility_insight(&self, reasons: &[String]) -> ChatResult<String> {
        let reasons_text = reasons.join(", ");
        let prompt = format!(
            "A person is provisionally ineligible to donate blood for the following \
             reason(s): \"{reasons_text}\". Explain in simple terms why these rules exist \
             (for the safety of both donor and recipient), and where applicable encourage \
             them about becoming eligible in the future. State clearly that this is not \
             medical advice and a doctor should always be consulted before donating."
        );
        self.generate(HEALTH_SYSTEM_INSTRUCTION, &prompt).await
    }

    /// Sends one prompt under a system instruction and returns the
    /// generated text verbatim.
    pub async fn generate(&self, system_instruction: &str, prompt: &str) -> ChatResult<String> {
        if !self.is_configured() {
            return Err(ChatError::MissingApiKey);
        }

        let request = GenerateRequest {
            system_instruction: ContentBlock {
                parts: vec![TextPart {
                    text: system_instruction,
                }],
            },
            contents: vec![ContentBlock {
                parts: vec![TextPart { text: prompt }],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base_url, self.config.model
        );
        debug!(model = %self.config.model, "generating text");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Api(format!("HTTP {status}: {body}")));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Api(format!("failed to parse response: {e}")))?;

        let text: String = generated
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ChatError::EmptyResponse);
        }
        Ok(text)
    }
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatSender {
    User,
    Assistant,
}

/// One message in the local chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: ChatSender,
    pub text: String,
}

impl ChatMessage {
    /// A message authored by the user.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: ChatSender::User,
            text: text.into(),
        }
    }

    /// A message authored by the assistant.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: ChatSender::Assistant,
            text: text.into(),
        }
    }
}

/// The local, client-side-only chat transcript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    /// An empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript opened with an assistant greeting.
    #[must_use]
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting)],
        }
    }

    /// Appends a message.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// The transcript in order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
