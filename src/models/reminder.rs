use super::RecordId;

/// What a reminder is about; drives its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    Water,
    Medicine,
    Appointment,
    SelfCare,
}

impl ReminderKind {
    pub fn icon(self) -> &'static str {
        match self {
            ReminderKind::Water => "💧",
            ReminderKind::Medicine => "💊",
            ReminderKind::Appointment => "📅",
            ReminderKind::SelfCare => "✨",
        }
    }
}

/// A recurring reminder the user can switch on and off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: RecordId,
    pub title: String,
    pub time: String,
    pub kind: ReminderKind,
    pub active: bool,
}
