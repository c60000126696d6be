use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// Which assistant a chat message is addressed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    #[default]
    Psychologist,
    Medical,
    Recipe,
}

impl ChatKind {
    pub const ALL: [ChatKind; 3] = [ChatKind::Psychologist, ChatKind::Medical, ChatKind::Recipe];

    pub fn as_str(self) -> &'static str {
        match self {
            ChatKind::Psychologist => "psychologist",
            ChatKind::Medical => "medical",
            ChatKind::Recipe => "recipe",
        }
    }

    /// Parse a wire tag; unknown tags have no assistant.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "psychologist" => Some(ChatKind::Psychologist),
            "medical" => Some(ChatKind::Medical),
            "recipe" => Some(ChatKind::Recipe),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChatKind::Psychologist => "Psicóloga",
            ChatKind::Medical => "Orientação médica",
            ChatKind::Recipe => "Receitas",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ChatKind::Psychologist => ChatKind::Medical,
            ChatKind::Medical => ChatKind::Recipe,
            ChatKind::Recipe => ChatKind::Psychologist,
        }
    }
}

/// Self-reported mood sent along with psychologist chats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    Happy,
    Sad,
    #[default]
    Neutral,
}

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Neutral => "neutral",
        }
    }

    /// Parse a wire tag, falling back to `Neutral` for anything unknown.
    pub fn parse_or_neutral(tag: Option<&str>) -> Self {
        match tag {
            Some("happy") => Mood::Happy,
            Some("sad") => Mood::Sad,
            _ => Mood::Neutral,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Mood::Happy => Mood::Neutral,
            Mood::Neutral => Mood::Sad,
            Mood::Sad => Mood::Happy,
        }
    }
}

/// A message in the assistant chat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: RecordId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    /// Assistant tag, echoed verbatim from the request
    #[serde(rename = "type")]
    pub kind: String,
}

impl ChatMessage {
    /// Message typed by the user.
    pub fn from_user(text: impl Into<String>, kind: ChatKind, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis(),
            text: text.into(),
            sender: Sender::User,
            timestamp: now,
            kind: kind.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_fallback() {
        assert_eq!(Mood::parse_or_neutral(Some("sad")), Mood::Sad);
        assert_eq!(Mood::parse_or_neutral(Some("furious")), Mood::Neutral);
        assert_eq!(Mood::parse_or_neutral(None), Mood::Neutral);
    }

    #[test]
    fn test_chat_kind_round_trip_tags() {
        for kind in ChatKind::ALL {
            assert_eq!(ChatKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ChatKind::parse("astrologer"), None);
    }

    #[test]
    fn test_message_wire_names() {
        let msg = ChatMessage::from_user("oi", ChatKind::Medical, Utc::now());
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["sender"], "user");
        assert_eq!(value["type"], "medical");
    }
}
