//! Intent routing and dispatch for the My Bus skill.
//!
//! Maps each inbound voice-platform request to exactly one handler. The
//! "next bus" handler runs the fetch→format pipeline against the MBTA
//! client; everything else answers with fixed speech. The router is
//! stateless across invocations and treats session metadata as opaque
//! pass-through.

pub mod error;
pub mod speech;

pub use error::SkillError;

use mybus_mbta::PredictionsClient;
use mybus_types::envelope::{
    CanFulfillIntent, Card, OutputSpeech, Reprompt, Request, RequestEnvelope, ResponseEnvelope,
    SpeechletResponse, INTENT_CANCEL, INTENT_FALLBACK, INTENT_GET_NEXT_BUS, INTENT_HELP,
    INTENT_MY_BUS_IS, INTENT_STOP, REQUEST_TYPE_CAN_FULFILL, REQUEST_TYPE_INTENT,
    REQUEST_TYPE_LAUNCH, REQUEST_TYPE_SESSION_ENDED,
};
use mybus_types::SpeechResponse;
use tracing::{error, info};

const WELCOME_SPEECH: &str = "Welcome to My Bus, ask for next bus";
const WELCOME_REPROMPT: &str = "Say next bus.";
const HELP_SPEECH: &str = "You can say: when is the next bus?";
const GOODBYE_SPEECH: &str = "Goodbye.";
const FALLBACK_SPEECH: &str = "My Bus can't help you with that";
const ERROR_SPEECH: &str = "Sorry, an error occurred.";

/// The request shapes the router recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    /// Pre-flight "can this skill fulfill the intent" check.
    CanFulfill,
    /// Skill opened with no intent.
    Launch,
    /// One of the two next-bus intents; the name feeds the card title.
    NextBus { intent_name: String },
    /// Usage hint request.
    Help,
    /// Cancel or stop.
    Exit,
    /// Utterance the platform could not match to an intent.
    Fallback,
    /// Session closed by the platform; acknowledged without speech.
    SessionEnded,
}

impl RequestKind {
    /// Classifies an inbound request. Exactly one kind matches; any other
    /// request type or intent name is a routing fault.
    pub fn classify(request: &Request) -> Result<Self, SkillError> {
        match request.request_type.as_str() {
            REQUEST_TYPE_CAN_FULFILL => Ok(Self::CanFulfill),
            REQUEST_TYPE_LAUNCH => Ok(Self::Launch),
            REQUEST_TYPE_SESSION_ENDED => Ok(Self::SessionEnded),
            REQUEST_TYPE_INTENT => {
                let name = request
                    .intent
                    .as_ref()
                    .map(|intent| intent.name.as_str())
                    .unwrap_or_default();
                match name {
                    INTENT_GET_NEXT_BUS | INTENT_MY_BUS_IS => Ok(Self::NextBus {
                        intent_name: name.to_string(),
                    }),
                    INTENT_HELP => Ok(Self::Help),
                    INTENT_CANCEL | INTENT_STOP => Ok(Self::Exit),
                    INTENT_FALLBACK => Ok(Self::Fallback),
                    other => Err(SkillError::UnrecognizedIntent(other.to_string())),
                }
            }
            other => Err(SkillError::UnrecognizedRequest(other.to_string())),
        }
    }
}

/// The skill: one MBTA client, no other state.
#[derive(Debug, Clone)]
pub struct Skill {
    client: PredictionsClient,
}

impl Skill {
    pub fn new(client: PredictionsClient) -> Self {
        Self { client }
    }

    /// Handles one request envelope.
    ///
    /// Total: any error during classification or dispatch is logged and
    /// answered with the fixed apology response, never surfaced to the
    /// platform as a failed invocation.
    pub async fn handle(&self, envelope: RequestEnvelope) -> ResponseEnvelope {
        let response = match self.dispatch(&envelope).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, request_type = %envelope.request.request_type, "request dispatch failed");
                apology_response()
            }
        };

        ResponseEnvelope::wrap(response)
    }

    async fn dispatch(&self, envelope: &RequestEnvelope) -> Result<SpeechletResponse, SkillError> {
        match RequestKind::classify(&envelope.request)? {
            RequestKind::CanFulfill => Ok(SpeechletResponse {
                can_fulfill_intent: Some(CanFulfillIntent::yes()),
                ..Default::default()
            }),
            RequestKind::Launch => Ok(speechlet(&SpeechResponse {
                spoken_text: WELCOME_SPEECH.to_string(),
                reprompt_text: Some(WELCOME_REPROMPT.to_string()),
                card_title: Some("Welcome".to_string()),
                end_session: false,
            })),
            RequestKind::NextBus { intent_name } => self.next_bus(&intent_name).await,
            RequestKind::Help => Ok(speechlet(&SpeechResponse {
                spoken_text: HELP_SPEECH.to_string(),
                reprompt_text: None,
                card_title: None,
                end_session: false,
            })),
            RequestKind::Exit => Ok(speechlet(&SpeechResponse {
                spoken_text: GOODBYE_SPEECH.to_string(),
                reprompt_text: None,
                card_title: None,
                end_session: true,
            })),
            RequestKind::Fallback => Ok(speechlet(&SpeechResponse {
                spoken_text: FALLBACK_SPEECH.to_string(),
                reprompt_text: Some(FALLBACK_SPEECH.to_string()),
                card_title: None,
                end_session: false,
            })),
            RequestKind::SessionEnded => {
                info!(
                    reason = envelope.request.reason.as_deref().unwrap_or("unspecified"),
                    "session ended"
                );
                Ok(SpeechletResponse {
                    should_end_session: true,
                    ..Default::default()
                })
            }
        }
    }

    /// Runs the fetch→format pipeline for the next-bus intents.
    async fn next_bus(&self, intent_name: &str) -> Result<SpeechletResponse, SkillError> {
        let predictions = self.client.next_arrivals().await?;
        let spoken_text = speech::next_bus_speech(&predictions);
        info!(count = predictions.len(), speech = %spoken_text, "next bus response");

        Ok(speechlet(&SpeechResponse {
            spoken_text,
            reprompt_text: None,
            card_title: Some(intent_name.to_string()),
            end_session: true,
        }))
    }
}

/// Builds the envelope's `response` element from a speech response.
fn speechlet(speech: &SpeechResponse) -> SpeechletResponse {
    SpeechletResponse {
        output_speech: Some(OutputSpeech::plain_text(speech.spoken_text.clone())),
        card: speech.card_title.as_ref().map(|title| {
            Card::simple(
                format!("My Bus - {title}"),
                format!("My Bus - {}", speech.spoken_text),
            )
        }),
        reprompt: speech.reprompt_text.as_ref().map(|text| Reprompt {
            output_speech: OutputSpeech::plain_text(text.clone()),
        }),
        can_fulfill_intent: None,
        should_end_session: speech.end_session,
    }
}

/// The fixed apology spoken when anything goes wrong. The session stays
/// open with the apology as the re-prompt, matching platform defaults.
fn apology_response() -> SpeechletResponse {
    speechlet(&SpeechResponse {
        spoken_text: ERROR_SPEECH.to_string(),
        reprompt_text: Some(ERROR_SPEECH.to_string()),
        card_title: None,
        end_session: false,
    })
}
