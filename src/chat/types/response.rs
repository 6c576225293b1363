use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body returned by the `chat` action.
///
/// The body is kept as decoded; nothing about its structure is validated.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ChatResponse {
    pub body: Map<String, Value>,
}

impl ChatResponse {
    /// Generated text at `chatResponse.text`, if the body has one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.body.get("chatResponse")?.get("text")?.as_str()
    }

    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.body
    }
}

impl From<Map<String, Value>> for ChatResponse {
    fn from(body: Map<String, Value>) -> Self {
        Self { body }
    }
}
