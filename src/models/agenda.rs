use serde::{Deserialize, Serialize};

/// Category of an agenda entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AgendaEventKind {
    Appointment,
    Exam,
    Exercise,
    Personal,
}

/// An upcoming appointment or exam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaEvent {
    pub title: String,
    pub when: String,
    pub kind: AgendaEventKind,
}
