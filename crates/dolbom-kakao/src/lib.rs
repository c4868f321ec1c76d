// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Kakao skill v2.0 response envelopes.
//!
//! The chat platform accepts two response shapes from a skill server: a
//! template response carrying renderable outputs (`SkillResponse`), and a
//! callback-pending ack that tells the platform to wait for a later POST to
//! its callback URL (`CallbackWaitResponse`). Both carry the fixed protocol
//! version `"2.0"`.
//!
//! Key names on the wire are camelCase; the structs rename accordingly so
//! serialized payloads match what the platform parses.

use serde::{Deserialize, Serialize};

/// Protocol version stamped on every envelope.
const SKILL_VERSION: &str = "2.0";

/// Header title shown above follow-up question cards.
const FOLLOW_UP_HEADER: &str = "💬 이런 것이 궁금해요";

/// Cap on follow-up items in a card. The consultation prompt asks the model
/// for exactly two, so the cap only matters when the model oversupplies.
const MAX_FOLLOW_UPS: usize = 2;

/// A renderable skill response: one or more outputs under a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResponse {
    pub version: String,
    pub template: Template,
}

impl SkillResponse {
    /// Build a response with a single text bubble.
    pub fn simple_text(text: impl Into<String>) -> Self {
        Self {
            version: SKILL_VERSION.to_string(),
            template: Template {
                outputs: vec![Output::SimpleText {
                    simple_text: SimpleText { text: text.into() },
                }],
            },
        }
    }

    /// Build an answer response: the answer text, followed by a list card of
    /// up to [`MAX_FOLLOW_UPS`] tappable follow-up questions. The card is
    /// omitted when there are no suggestions, matching what the platform
    /// renders without complaint.
    pub fn answer(text: impl Into<String>, suggestions: &[String]) -> Self {
        let mut outputs = vec![Output::SimpleText {
            simple_text: SimpleText { text: text.into() },
        }];

        if !suggestions.is_empty() {
            outputs.push(Output::ListCard {
                list_card: ListCard {
                    header: ListCardHeader {
                        title: FOLLOW_UP_HEADER.to_string(),
                    },
                    items: suggestions
                        .iter()
                        .take(MAX_FOLLOW_UPS)
                        .map(|q| ListItem {
                            title: q.clone(),
                            action: "message".to_string(),
                            message_text: q.clone(),
                        })
                        .collect(),
                },
            });
        }

        Self {
            version: SKILL_VERSION.to_string(),
            template: Template { outputs },
        }
    }
}

/// Template wrapper around the output list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub outputs: Vec<Output>,
}

/// A single renderable output block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Output {
    SimpleText {
        #[serde(rename = "simpleText")]
        simple_text: SimpleText,
    },
    ListCard {
        #[serde(rename = "listCard")]
        list_card: ListCard,
    },
}

/// A plain text bubble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleText {
    pub text: String,
}

/// A card listing tappable items under a header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListCard {
    pub header: ListCardHeader,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListCardHeader {
    pub title: String,
}

/// A tappable list entry. Tapping sends `message_text` back as the user's
/// next utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub title: String,
    pub action: String,
    #[serde(rename = "messageText")]
    pub message_text: String,
}

/// Ack telling the platform to hold the session open for a callback.
///
/// `data.text` is shown to the user while they wait for the real answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackWaitResponse {
    pub version: String,
    #[serde(rename = "useCallback")]
    pub use_callback: bool,
    pub data: CallbackData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackData {
    pub text: String,
}

impl CallbackWaitResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            version: SKILL_VERSION.to_string(),
            use_callback: true,
            data: CallbackData { text: text.into() },
        }
    }
}
