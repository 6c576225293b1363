use bon::Builder;
use serde::{Deserialize, Serialize, Serializer};
use strum_macros::Display;

/// Model used when none is given to [`ChatRequest::builder`].
pub const DEFAULT_MODEL_ID: &str = "cohere.command-r-16k";

/// Which model instance serves a request, tagged on the wire by `servingType`.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "servingType",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum ServingMode {
    /// Shared, pay-per-call capacity for a pretrained model.
    OnDemand { model_id: String },
    /// A dedicated AI cluster endpoint.
    Dedicated { endpoint_id: String },
}

impl ServingMode {
    #[must_use]
    pub fn on_demand<S: Into<String>>(model_id: S) -> Self {
        Self::OnDemand {
            model_id: model_id.into(),
        }
    }

    #[must_use]
    pub fn dedicated<S: Into<String>>(endpoint_id: S) -> Self {
        Self::Dedicated {
            endpoint_id: endpoint_id.into(),
        }
    }
}

impl Default for ServingMode {
    fn default() -> Self {
        Self::on_demand(DEFAULT_MODEL_ID)
    }
}

/// Request schema family understood by the chat action.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ApiFormat {
    #[default]
    Cohere,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Role {
    User,
    Chatbot,
    System,
}

/// A prior turn of the conversation.
#[non_exhaustive]
#[derive(Clone, Debug, Serialize, Deserialize, Builder, PartialEq, Eq)]
#[builder(on(String, into))]
pub struct ChatMessage {
    pub role: Role,
    pub message: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user<S: Into<String>>(message: S) -> Self {
        Self {
            role: Role::User,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn chatbot<S: Into<String>>(message: S) -> Self {
        Self {
            role: Role::Chatbot,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn system<S: Into<String>>(message: S) -> Self {
        Self {
            role: Role::System,
            message: message.into(),
        }
    }
}

/// A grounding document the model may cite in its answer.
#[non_exhaustive]
#[derive(Clone, Debug, Serialize, Deserialize, Builder, PartialEq, Eq)]
#[builder(on(String, into))]
pub struct Document {
    pub title: String,
    pub snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A single chat turn sent to the `chat` action.
///
/// Sampling parameters default to the values the service is usually called
/// with; only the compartment and the message are required.
///
/// # Example
///
/// ```
/// use oci_genai_client::chat::types::{ChatMessage, ChatRequest};
///
/// let request = ChatRequest::builder()
///     .compartment_id("ocid1.tenancy.oc1..aaaa")
///     .message("Tell me something about the company's relational database.")
///     .chat_history(vec![ChatMessage::user("Tell me something about Oracle.")])
///     .build();
///
/// assert_eq!(request.max_tokens, 600);
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Builder, PartialEq)]
#[builder(on(String, into))]
pub struct ChatRequest {
    /// Compartment billed for the call, commonly the tenancy OCID.
    pub compartment_id: String,
    pub message: String,
    /// On-demand [`DEFAULT_MODEL_ID`] unless set.
    #[builder(default)]
    pub serving_mode: ServingMode,
    #[builder(default)]
    pub api_format: ApiFormat,
    #[builder(default = 600)]
    pub max_tokens: u32,
    #[builder(default = 0.75)]
    pub temperature: f64,
    #[builder(default = 0.7)]
    pub top_p: f64,
    #[builder(default = 1)]
    pub top_k: u32,
    #[builder(default = 1.0)]
    pub frequency_penalty: f64,
    #[builder(default = 0.0)]
    pub presence_penalty: f64,
    /// Replaces the model's default preamble when set.
    pub preamble_override: Option<String>,
    #[builder(default)]
    pub documents: Vec<Document>,
    #[builder(default)]
    pub chat_history: Vec<ChatMessage>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatDetails<'a> {
    compartment_id: &'a str,
    serving_mode: &'a ServingMode,
    chat_request: CohereChatRequest<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CohereChatRequest<'a> {
    message: &'a str,
    max_tokens: u32,
    is_stream: bool,
    api_format: ApiFormat,
    frequency_penalty: f64,
    presence_penalty: f64,
    temperature: f64,
    top_p: f64,
    top_k: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    preamble_override: Option<&'a str>,
    documents: &'a [Document],
    chat_history: &'a [ChatMessage],
}

impl<'a> From<&'a ChatRequest> for ChatDetails<'a> {
    fn from(request: &'a ChatRequest) -> Self {
        Self {
            compartment_id: &request.compartment_id,
            serving_mode: &request.serving_mode,
            chat_request: CohereChatRequest {
                message: &request.message,
                max_tokens: request.max_tokens,
                // Responses are always read in full.
                is_stream: false,
                api_format: request.api_format,
                frequency_penalty: request.frequency_penalty,
                presence_penalty: request.presence_penalty,
                temperature: request.temperature,
                top_p: request.top_p,
                top_k: request.top_k,
                preamble_override: request.preamble_override.as_deref(),
                documents: &request.documents,
                chat_history: &request.chat_history,
            },
        }
    }
}

impl Serialize for ChatRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ChatDetails::from(self).serialize(serializer)
    }
}
