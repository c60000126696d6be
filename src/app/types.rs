//! Type definitions for the navigation state machine.
//!
//! - [`Screen`] - which view is current
//! - [`Capability`] - device permissions asked for on first login
//! - [`AnalysisKind`] - simulated on-device analyses
//! - [`PendingKind`] - deferred work the analysis screen is waiting on

/// Represents which screen is currently active.
///
/// The set is closed; [`Screen::from_tag`] maps anything outside it to
/// [`Screen::Dashboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Login,
    Dashboard,
    Workout,
    Nutrition,
    Content,
    Profile,
    Agenda,
    WorkoutDetail,
    NutritionDetail,
    ContentDetail,
    PregnancyTracker,
    AiAnalysis,
    MusicPlayer,
    Reminders,
    PhotoNutrition,
    BarcodeScanner,
    AiWorkoutGenerator,
    ExerciseGuide,
    ProgressPhotos,
    PhotoTimeline,
    Permissions,
    Workout3d,
    AiTrainer,
    MuscleGuide,
}

/// Destinations offered by the bottom navigation bar, in display order.
pub const NAV_BAR: [Screen; 5] = [
    Screen::Dashboard,
    Screen::Workout,
    Screen::Nutrition,
    Screen::Agenda,
    Screen::Profile,
];

/// Destinations offered by the dashboard menu, in display order.
pub const DASHBOARD_MENU: [Screen; 12] = [
    Screen::PregnancyTracker,
    Screen::AiWorkoutGenerator,
    Screen::Workout,
    Screen::ExerciseGuide,
    Screen::ProgressPhotos,
    Screen::Nutrition,
    Screen::Reminders,
    Screen::MusicPlayer,
    Screen::Agenda,
    Screen::Content,
    Screen::AiTrainer,
    Screen::Profile,
];

impl Screen {
    pub const ALL: [Screen; 24] = [
        Screen::Login,
        Screen::Dashboard,
        Screen::Workout,
        Screen::Nutrition,
        Screen::Content,
        Screen::Profile,
        Screen::Agenda,
        Screen::WorkoutDetail,
        Screen::NutritionDetail,
        Screen::ContentDetail,
        Screen::PregnancyTracker,
        Screen::AiAnalysis,
        Screen::MusicPlayer,
        Screen::Reminders,
        Screen::PhotoNutrition,
        Screen::BarcodeScanner,
        Screen::AiWorkoutGenerator,
        Screen::ExerciseGuide,
        Screen::ProgressPhotos,
        Screen::PhotoTimeline,
        Screen::Permissions,
        Screen::Workout3d,
        Screen::AiTrainer,
        Screen::MuscleGuide,
    ];

    /// Kebab-case tag of the screen.
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Dashboard => "dashboard",
            Screen::Workout => "workout",
            Screen::Nutrition => "nutrition",
            Screen::Content => "content",
            Screen::Profile => "profile",
            Screen::Agenda => "agenda",
            Screen::WorkoutDetail => "workout-detail",
            Screen::NutritionDetail => "nutrition-detail",
            Screen::ContentDetail => "content-detail",
            Screen::PregnancyTracker => "pregnancy-tracker",
            Screen::AiAnalysis => "ai-analysis",
            Screen::MusicPlayer => "music-player",
            Screen::Reminders => "reminders",
            Screen::PhotoNutrition => "photo-nutrition",
            Screen::BarcodeScanner => "barcode-scanner",
            Screen::AiWorkoutGenerator => "ai-workout-generator",
            Screen::ExerciseGuide => "exercise-guide",
            Screen::ProgressPhotos => "progress-photos",
            Screen::PhotoTimeline => "photo-timeline",
            Screen::Permissions => "permissions",
            Screen::Workout3d => "workout-3d",
            Screen::AiTrainer => "ai-trainer",
            Screen::MuscleGuide => "muscle-guide",
        }
    }

    pub fn try_from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|screen| screen.as_str() == tag)
    }

    /// Parse a tag, falling back to the dashboard for unknown tags.
    pub fn from_tag(tag: &str) -> Self {
        Self::try_from_tag(tag).unwrap_or(Screen::Dashboard)
    }

    /// Whether the bottom navigation bar is drawn under this screen.
    pub fn shows_bottom_nav(self) -> bool {
        !matches!(
            self,
            Screen::Permissions
                | Screen::WorkoutDetail
                | Screen::NutritionDetail
                | Screen::ContentDetail
                | Screen::PhotoNutrition
                | Screen::BarcodeScanner
                | Screen::AiAnalysis
                | Screen::MusicPlayer
                | Screen::PregnancyTracker
                | Screen::AiWorkoutGenerator
                | Screen::ExerciseGuide
                | Screen::Workout3d
                | Screen::ProgressPhotos
                | Screen::PhotoTimeline
        )
    }

    /// Explicit parent for the back action.
    ///
    /// `None` means back does nothing. The analysis screen is handled by
    /// the transition itself, since its parent depends on what started it.
    pub fn back_target(self) -> Option<Screen> {
        match self {
            Screen::Login | Screen::Permissions | Screen::Dashboard | Screen::AiAnalysis => None,
            Screen::WorkoutDetail => Some(Screen::Workout),
            Screen::NutritionDetail | Screen::PhotoNutrition | Screen::BarcodeScanner => {
                Some(Screen::Nutrition)
            }
            Screen::ContentDetail => Some(Screen::Content),
            Screen::Workout3d | Screen::MuscleGuide => Some(Screen::ExerciseGuide),
            Screen::PhotoTimeline => Some(Screen::ProgressPhotos),
            Screen::Workout
            | Screen::Nutrition
            | Screen::Content
            | Screen::Profile
            | Screen::Agenda
            | Screen::PregnancyTracker
            | Screen::MusicPlayer
            | Screen::Reminders
            | Screen::AiWorkoutGenerator
            | Screen::ExerciseGuide
            | Screen::ProgressPhotos
            | Screen::AiTrainer => Some(Screen::Dashboard),
        }
    }

    /// Heading shown at the top of the screen.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Login => "Mamãe Fit",
            Screen::Dashboard => "Início",
            Screen::Workout => "Treinos",
            Screen::Nutrition => "Nutrição",
            Screen::Content => "Conteúdo",
            Screen::Profile => "Perfil",
            Screen::Agenda => "Agenda",
            Screen::WorkoutDetail => "Detalhes do Treino",
            Screen::NutritionDetail => "Receita",
            Screen::ContentDetail => "Artigo",
            Screen::PregnancyTracker => "Acompanhamento da Gestação",
            Screen::AiAnalysis => "Análise com IA",
            Screen::MusicPlayer => "Músicas",
            Screen::Reminders => "Lembretes",
            Screen::PhotoNutrition => "Foto do Prato",
            Screen::BarcodeScanner => "Scanner de Código",
            Screen::AiWorkoutGenerator => "Treino com IA",
            Screen::ExerciseGuide => "Guia de Exercícios",
            Screen::ProgressPhotos => "Fotos de Progresso",
            Screen::PhotoTimeline => "Linha do Tempo",
            Screen::Permissions => "Permissões",
            Screen::Workout3d => "Exercício em 3D",
            Screen::AiTrainer => "Assistente IA",
            Screen::MuscleGuide => "Guia Muscular",
        }
    }

    /// Short label for menus and the nav bar.
    pub fn menu_label(self) -> &'static str {
        match self {
            Screen::Dashboard => "🏠 Início",
            Screen::Workout => "💪 Treinos",
            Screen::Nutrition => "🥗 Nutrição",
            Screen::Agenda => "📅 Agenda",
            Screen::Profile => "👤 Perfil",
            Screen::PregnancyTracker => "🤰 Minha gestação",
            Screen::AiWorkoutGenerator => "🤖 Treino com IA",
            Screen::ExerciseGuide => "📖 Guia de exercícios",
            Screen::ProgressPhotos => "📸 Fotos de progresso",
            Screen::Reminders => "⏰ Lembretes",
            Screen::MusicPlayer => "🎵 Músicas",
            Screen::Content => "📚 Conteúdo",
            Screen::AiTrainer => "💬 Assistente IA",
            other => other.title(),
        }
    }
}

/// Device capability requested on the permissions screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Camera,
    Storage,
    Notifications,
    Location,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::Camera,
        Capability::Storage,
        Capability::Notifications,
        Capability::Location,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Capability::Camera => "📷 Câmera",
            Capability::Storage => "💾 Armazenamento",
            Capability::Notifications => "🔔 Notificações",
            Capability::Location => "📍 Localização",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Capability::Camera => "Para fotos de progresso e análise de refeições",
            Capability::Storage => "Para salvar suas fotos e exames",
            Capability::Notifications => "Para lembretes de treino e hidratação",
            Capability::Location => "Para encontrar locais de caminhada próximos",
        }
    }
}

/// Simulated analysis performed on the analysis screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    /// Meal photo; lands on nutrition with the detected plate
    Photo,
    /// Exam upload; lands on the agenda with the result
    Exam,
    /// Personalized workout built on-device
    Workout,
}

impl AnalysisKind {
    /// Status line shown while the analysis runs.
    pub fn progress_label(self) -> &'static str {
        match self {
            AnalysisKind::Photo => "Analisando sua refeição...",
            AnalysisKind::Exam => "Analisando seus exames...",
            AnalysisKind::Workout => "Criando seu treino personalizado...",
        }
    }
}

/// What the analysis screen is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingKind {
    /// Fixed-delay local analysis
    Analysis(AnalysisKind),
    /// Workout endpoint call
    RemoteWorkout,
    /// Recipe endpoint call
    RemoteRecipe,
}

impl PendingKind {
    pub fn progress_label(self) -> &'static str {
        match self {
            PendingKind::Analysis(kind) => kind.progress_label(),
            PendingKind::RemoteWorkout => "Gerando treino com a IA...",
            PendingKind::RemoteRecipe => "Criando sua receita com a IA...",
        }
    }
}
