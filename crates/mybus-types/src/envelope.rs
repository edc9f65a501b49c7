//! Alexa request/response envelope types.
//!
//! The envelope schema is owned by the voice platform; these structs model
//! only the fields this skill reads or writes. Unknown fields are ignored on
//! input and optional elements are omitted from output, so the types stay
//! compatible with platform-side schema growth.

use serde::{Deserialize, Serialize};

/// Request types the platform can send.
pub const REQUEST_TYPE_LAUNCH: &str = "LaunchRequest";
pub const REQUEST_TYPE_INTENT: &str = "IntentRequest";
pub const REQUEST_TYPE_SESSION_ENDED: &str = "SessionEndedRequest";
pub const REQUEST_TYPE_CAN_FULFILL: &str = "CanFulfillIntentRequest";

/// Intent names recognized by the skill's interaction model.
pub const INTENT_GET_NEXT_BUS: &str = "GetNextBusIntent";
pub const INTENT_MY_BUS_IS: &str = "MyBusIsIntent";
pub const INTENT_HELP: &str = "AMAZON.HelpIntent";
pub const INTENT_CANCEL: &str = "AMAZON.CancelIntent";
pub const INTENT_STOP: &str = "AMAZON.StopIntent";
pub const INTENT_FALLBACK: &str = "AMAZON.FallbackIntent";

/// Inbound request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    /// Session metadata. Opaque pass-through state; never mutated here.
    #[serde(default)]
    pub session: Option<Session>,
    pub request: Request,
}

/// Conversational session context managed by the platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// The inner request.
///
/// `request_type` is kept as a plain string rather than a tagged enum so an
/// unknown type still deserializes; routing answers it with the apology
/// response instead of failing envelope extraction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub intent: Option<Intent>,
    /// Only present on `SessionEndedRequest`.
    #[serde(default)]
    pub reason: Option<String>,
}

/// A recognized user utterance category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
}

/// Outbound response envelope. `version` is always `"1.0"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: serde_json::Map<String, serde_json::Value>,
    pub response: SpeechletResponse,
}

/// The `response` element of the envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_fulfill_intent: Option<CanFulfillIntent>,
    pub should_end_session: bool,
}

/// Plain-text speech element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            speech_type: "PlainText".to_string(),
            text: text.into(),
        }
    }
}

/// Simple card shown in the companion app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "type")]
    pub card_type: String,
    pub title: String,
    pub content: String,
}

impl Card {
    pub fn simple(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            card_type: "Simple".to_string(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Re-prompt wrapper; spoken when the user stays silent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// Answer to a `CanFulfillIntentRequest` pre-flight check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanFulfillIntent {
    pub can_fulfill: String,
}

impl CanFulfillIntent {
    pub fn yes() -> Self {
        Self {
            can_fulfill: "YES".to_string(),
        }
    }
}

impl ResponseEnvelope {
    /// Wraps a speechlet response in the versioned envelope with empty
    /// session attributes.
    pub fn wrap(response: SpeechletResponse) -> Self {
        Self {
            version: "1.0".to_string(),
            session_attributes: serde_json::Map::new(),
            response,
        }
    }
}
