//! Session state held by the controller.

use crate::catalog::{self, Catalog};
use crate::models::{
    ChatKind, ChatMessage, Exercise, Mood, NutritionItem, ProgressPhoto, Recipe, RecordId,
    Reminder, Workout,
};

use super::types::{Capability, PendingKind, Screen};

/// Counter value captured when deferred work is scheduled.
pub type Ticket = u64;

/// Daily calorie goal shown on the dashboard.
pub const DAILY_CALORIE_TARGET: u32 = 1850;

/// Daily water goal, in glasses.
pub const DAILY_WATER_TARGET: u8 = 8;

/// Permission flags, one per capability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Permissions {
    pub camera: bool,
    pub storage: bool,
    pub notifications: bool,
    pub location: bool,
    /// Capabilities whose prompt is still open
    pub requesting: Vec<Capability>,
}

impl Permissions {
    pub fn is_granted(&self, capability: Capability) -> bool {
        match capability {
            Capability::Camera => self.camera,
            Capability::Storage => self.storage,
            Capability::Notifications => self.notifications,
            Capability::Location => self.location,
        }
    }

    pub fn is_requesting(&self, capability: Capability) -> bool {
        self.requesting.contains(&capability)
    }

    pub fn grant(&mut self, capability: Capability) {
        self.requesting.retain(|c| *c != capability);
        match capability {
            Capability::Camera => self.camera = true,
            Capability::Storage => self.storage = true,
            Capability::Notifications => self.notifications = true,
            Capability::Location => self.location = true,
        }
    }

    /// The continue button is enabled only when this holds.
    pub fn all_granted(&self) -> bool {
        self.camera && self.storage && self.notifications && self.location
    }
}

/// Deferred operation the analysis screen is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingOperation {
    pub ticket: Ticket,
    pub kind: PendingKind,
    /// Screen the operation was started from
    pub origin: Screen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Popup message; stays until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicState {
    pub playing: bool,
    /// Index into the flattened track list
    pub track: usize,
}

/// Everything the session mutates.
///
/// `Default` is an empty record; [`SessionState::new`] is the seeded start.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub logged_in: bool,
    pub screen: Screen,
    pub pregnancy_week: u8,
    pub selected_workout: Option<RecordId>,
    pub selected_exercise: Option<RecordId>,
    pub selected_nutrition: Option<RecordId>,
    pub selected_article: Option<usize>,
    /// Set semantics: each id at most once
    pub completed_workouts: Vec<RecordId>,
    pub calorie_target: u32,
    pub calories_consumed: u32,
    pub water_glasses: u8,
    pub permissions: Permissions,
    /// Newest first
    pub ai_workouts: Vec<Workout>,
    /// Newest first
    pub ai_recipes: Vec<Recipe>,
    /// Newest first
    pub progress_photos: Vec<ProgressPhoto>,
    pub chat: Vec<ChatMessage>,
    pub chat_kind: ChatKind,
    pub mood: Mood,
    pub music: MusicState,
    pub reminders: Vec<Reminder>,
    pub notice: Option<Notice>,
    pub pending: Option<PendingOperation>,
    /// Chat replies still expected
    pub awaiting_replies: Vec<Ticket>,
    pub next_ticket: Ticket,
}

impl SessionState {
    /// Fresh session with the seed data.
    pub fn new() -> Self {
        Self {
            logged_in: false,
            screen: Screen::Login,
            pregnancy_week: 24,
            calorie_target: DAILY_CALORIE_TARGET,
            calories_consumed: 1240,
            water_glasses: 6,
            progress_photos: catalog::sample_progress_photos(),
            reminders: catalog::reminders(),
            next_ticket: 1,
            ..Self::default()
        }
    }

    /// Screen actually drawn: the login view whenever signed out.
    pub fn rendered_screen(&self) -> Screen {
        if self.logged_in {
            self.screen
        } else {
            Screen::Login
        }
    }

    pub fn shows_bottom_nav(&self) -> bool {
        self.logged_in && self.screen.shows_bottom_nav()
    }

    pub fn issue_ticket(&mut self) -> Ticket {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        ticket
    }

    /// Whether `ticket` is the operation the analysis screen waits on.
    pub fn is_pending(&self, ticket: Ticket) -> bool {
        self.pending.is_some_and(|p| p.ticket == ticket)
    }

    pub fn is_completed(&self, workout_id: RecordId) -> bool {
        self.completed_workouts.contains(&workout_id)
    }

    /// Generated workouts first, then the catalog.
    pub fn find_workout<'a>(&'a self, catalog: &'a Catalog, id: RecordId) -> Option<&'a Workout> {
        self.ai_workouts
            .iter()
            .find(|w| w.id == id)
            .or_else(|| catalog.workout(id))
    }

    /// Exercises of the selected workout first, then the library.
    pub fn find_exercise<'a>(&'a self, catalog: &'a Catalog, id: RecordId) -> Option<&'a Exercise> {
        self.selected_workout(catalog)
            .and_then(|w| w.exercise(id))
            .or_else(|| catalog.exercise(id))
    }

    /// Generated recipes first, then the catalog.
    pub fn find_nutrition<'a>(
        &'a self,
        catalog: &'a Catalog,
        id: RecordId,
    ) -> Option<&'a NutritionItem> {
        self.ai_recipes
            .iter()
            .map(|r| &r.item)
            .find(|n| n.id == id)
            .or_else(|| catalog.nutrition_item(id))
    }

    pub fn find_recipe(&self, id: RecordId) -> Option<&Recipe> {
        self.ai_recipes.iter().find(|r| r.item.id == id)
    }

    pub fn selected_workout<'a>(&'a self, catalog: &'a Catalog) -> Option<&'a Workout> {
        self.selected_workout
            .and_then(|id| self.find_workout(catalog, id))
    }

    pub fn selected_exercise<'a>(&'a self, catalog: &'a Catalog) -> Option<&'a Exercise> {
        self.selected_exercise
            .and_then(|id| self.find_exercise(catalog, id))
    }

    pub fn selected_nutrition<'a>(&'a self, catalog: &'a Catalog) -> Option<&'a NutritionItem> {
        self.selected_nutrition
            .and_then(|id| self.find_nutrition(catalog, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_values() {
        let state = SessionState::new();
        assert!(!state.logged_in);
        assert_eq!(state.screen, Screen::Login);
        assert_eq!(state.pregnancy_week, 24);
        assert_eq!(state.calorie_target, 1850);
        assert_eq!(state.calories_consumed, 1240);
        assert_eq!(state.water_glasses, 6);
        assert!(!state.permissions.all_granted());
        assert_eq!(state.progress_photos.len(), 4);
        assert!(state.pending.is_none());
    }

    #[test]
    fn test_rendered_screen_requires_login() {
        let mut state = SessionState::new();
        state.screen = Screen::Workout;
        assert_eq!(state.rendered_screen(), Screen::Login);
        assert!(!state.shows_bottom_nav());
        state.logged_in = true;
        assert_eq!(state.rendered_screen(), Screen::Workout);
        assert!(state.shows_bottom_nav());
    }

    #[test]
    fn test_permissions_all_granted() {
        let mut permissions = Permissions::default();
        for capability in Capability::ALL {
            assert!(!permissions.all_granted());
            permissions.requesting.push(capability);
            permissions.grant(capability);
            assert!(permissions.is_granted(capability));
            assert!(!permissions.is_requesting(capability));
        }
        assert!(permissions.all_granted());
    }

    #[test]
    fn test_tickets_increase() {
        let mut state = SessionState::new();
        let a = state.issue_ticket();
        let b = state.issue_ticket();
        assert!(b > a);
    }

    #[test]
    fn test_lookup_prefers_generated_records() {
        let catalog = Catalog::seed();
        let state = SessionState::new();
        assert_eq!(state.find_workout(&catalog, 1).unwrap().title, "Yoga Pré-natal");
        assert!(state.find_workout(&catalog, 999).is_none());
        assert_eq!(
            state.find_nutrition(&catalog, 2).unwrap().title,
            "Salmão Grelhado com Quinoa"
        );
    }
}
