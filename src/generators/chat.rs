//! Assistant chat replies.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pick;
use crate::models::{ChatKind, ChatMessage, Mood, Sender};

pub const HAPPY_REPLIES: [&str; 3] = [
    "Que maravilha saber que você está se sentindo bem! É importante celebrar esses momentos positivos durante a gestação. Como posso ajudar a manter esse bem-estar?",
    "Fico muito feliz em saber que você está bem! Essa energia positiva faz muito bem para você e seu bebê. Que tal aproveitarmos para planejar algumas atividades que mantenham esse ânimo?",
    "É ótimo ver você radiante! Durante a gravidez, esses momentos de alegria são preciosos. Vamos conversar sobre como manter essa positividade?",
];

pub const SAD_REPLIES: [&str; 3] = [
    "Entendo como você está se sentindo, e quero que saiba que é completamente normal ter dias mais difíceis durante a gestação. Suas emoções são válidas e importantes. Vamos conversar sobre o que está te deixando triste?",
    "Sinto muito que você esteja passando por um momento difícil. A gestação traz muitas mudanças emocionais, e é normal se sentir assim às vezes. Estou aqui para te apoiar. Quer me contar mais sobre o que está acontecendo?",
    "Obrigada por compartilhar seus sentimentos comigo. É corajoso reconhecer quando não estamos bem. Durante a gravidez, é comum ter altos e baixos emocionais. Como posso te ajudar hoje?",
];

pub const NEUTRAL_REPLIES: [&str; 3] = [
    "Entendo que você está se sentindo normal hoje. Às vezes, ter um dia tranquilo também é importante durante a gestação. Como tem sido sua rotina ultimamente?",
    "Dias normais também são valiosos! Durante a gravidez, é bom ter momentos de estabilidade emocional. Há algo específico que gostaria de conversar hoje?",
    "Que bom que você está se sentindo equilibrada hoje. Como posso te apoiar para manter esse bem-estar durante sua gestação?",
];

pub const MEDICAL_REPLY: &str = "Com base nos sintomas que você descreveu, recomendo que você procure seu médico para uma avaliação mais detalhada. Enquanto isso, mantenha-se hidratada e descanse. ⚠️ Lembre-se: esta é apenas uma orientação inicial, sempre consulte um profissional de saúde.";

pub const RECIPE_REPLY: &str = "Ótima escolha de ingredientes! Vou criar uma receita nutritiva e econômica para você. Que tal um refogado colorido com esses ingredientes? Rico em vitaminas essenciais para você e seu bebê!";

/// Body of `POST /api/ai-chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    /// Assistant tag; unknown tags get an empty reply
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, kind: ChatKind, mood: Mood) -> Self {
        Self {
            message: message.into(),
            kind: kind.as_str().to_string(),
            mood: Some(mood.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub message: ChatMessage,
}

pub fn replies_for(mood: Mood) -> &'static [&'static str; 3] {
    match mood {
        Mood::Happy => &HAPPY_REPLIES,
        Mood::Sad => &SAD_REPLIES,
        Mood::Neutral => &NEUTRAL_REPLIES,
    }
}

/// Build the assistant reply for a chat request.
pub fn generate_chat_reply<R: Rng + ?Sized>(
    rng: &mut R,
    request: &ChatRequest,
    now: DateTime<Utc>,
) -> ChatMessage {
    let text = match ChatKind::parse(&request.kind) {
        Some(ChatKind::Psychologist) => {
            let mood = Mood::parse_or_neutral(request.mood.as_deref());
            pick(rng, replies_for(mood)).copied().unwrap_or_default()
        }
        Some(ChatKind::Medical) => MEDICAL_REPLY,
        Some(ChatKind::Recipe) => RECIPE_REPLY,
        None => "",
    };

    ChatMessage {
        id: now.timestamp_millis() + 1,
        text: text.to_string(),
        sender: Sender::Ai,
        timestamp: now,
        kind: request.kind.clone(),
    }
}
