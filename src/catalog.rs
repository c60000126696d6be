//! Fixed seed data loaded at start.
//!
//! Everything here is static content: the exercise library, the curated
//! workouts and meals, articles, playlists and the sample progress photos.
//! Session state only ever holds ids pointing back into these lists (or into
//! the generated lists it owns).

use crate::models::{
    AgendaEvent, AgendaEventKind, Article, Difficulty, Exercise, FitnessLevel, ImageHandle,
    Macros, NutritionItem, Playlist, PregnancyInfo, ProgressPhoto, RecordId, Reminder,
    ReminderKind, UserProfile, Workout, WorkoutType,
};

/// In-memory catalog of static content.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub profile: UserProfile,
    pub exercises: Vec<Exercise>,
    pub workouts: Vec<Workout>,
    pub nutrition: Vec<NutritionItem>,
    pub articles: Vec<Article>,
    pub playlists: Vec<Playlist>,
    pub agenda: Vec<AgendaEvent>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

impl Catalog {
    /// Build the catalog with the bundled sample content.
    pub fn seed() -> Self {
        let exercises = exercises();
        let workouts = workouts(&exercises);
        Self {
            profile: user_profile(),
            exercises,
            workouts,
            nutrition: nutrition(),
            articles: articles(),
            playlists: playlists(),
            agenda: agenda(),
        }
    }

    pub fn workout(&self, id: RecordId) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn exercise(&self, id: RecordId) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn nutrition_item(&self, id: RecordId) -> Option<&NutritionItem> {
        self.nutrition.iter().find(|n| n.id == id)
    }

    /// All distinct muscle groups trained by the exercise library.
    pub fn muscle_groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for exercise in &self.exercises {
            for group in &exercise.muscle_groups {
                if !groups.contains(&group.as_str()) {
                    groups.push(group);
                }
            }
        }
        groups
    }

    /// Tracker content for a given week.
    pub fn pregnancy_info(&self, week: u8) -> PregnancyInfo {
        let (baby_size, baby_weight) = match week {
            0..=12 => ("Tamanho de um limão", "~15g"),
            13..=20 => ("Tamanho de uma banana", "~300g"),
            21..=28 => ("Tamanho de uma berinjela", "~600g"),
            29..=34 => ("Tamanho de um abacaxi", "~2kg"),
            _ => ("Tamanho de uma melancia", "~3kg"),
        };
        PregnancyInfo {
            week,
            baby_size: baby_size.to_string(),
            baby_weight: baby_weight.to_string(),
            symptoms: strings(&[
                "Enjoos matinais diminuindo",
                "Aumento do apetite",
                "Movimentos do bebê mais perceptíveis",
            ]),
            tips: strings(&[
                "Mantenha uma dieta balanceada",
                "Pratique exercícios leves",
                "Durma de lado esquerdo",
            ]),
            development: "O bebê está desenvolvendo os sentidos e pode ouvir sons externos. \
                          Os pulmões estão se preparando para respirar."
                .to_string(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

pub fn user_profile() -> UserProfile {
    UserProfile {
        name: "Maria Silva".to_string(),
        age: 28,
        height: 165,
        pre_pregnancy_weight: 62.0,
        current_weight: 68.5,
        due_date: "2024-08-15".to_string(),
        fitness_level: FitnessLevel::Intermediate,
        medical_conditions: vec![],
        preferences: strings(&["yoga", "caminhada", "pilates"]),
    }
}

pub fn exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: 1,
            name: "Agachamento Gestante".to_string(),
            duration: "3 séries".to_string(),
            reps: Some("12-15 repetições".to_string()),
            description: "Fortalece glúteos e pernas, preparando para o parto".to_string(),
            muscle_groups: strings(&["Glúteos", "Quadríceps", "Core"]),
            safety_tips: strings(&[
                "Mantenha os pés afastados na largura dos ombros",
                "Não desça muito baixo",
                "Pare se sentir desconforto",
            ]),
            modifications: strings(&[
                "Use uma cadeira para apoio",
                "Reduza a amplitude do movimento",
                "Faça contra a parede",
            ]),
            animation_3d: Some("squat-pregnant".to_string()),
            total_time: None,
            is_active: None,
            target_muscles: None,
            intensity: None,
        },
        Exercise {
            id: 2,
            name: "Prancha Modificada".to_string(),
            duration: "3 séries".to_string(),
            reps: Some("20-30 segundos".to_string()),
            description: "Fortalece o core de forma segura durante a gestação".to_string(),
            muscle_groups: strings(&["Core", "Ombros", "Braços"]),
            safety_tips: strings(&[
                "Mantenha a coluna neutra",
                "Respire normalmente",
                "Pare se sentir pressão abdominal",
            ]),
            modifications: strings(&[
                "Apoie os joelhos no chão",
                "Use uma parede para apoio",
                "Reduza o tempo de sustentação",
            ]),
            animation_3d: Some("plank-modified".to_string()),
            total_time: None,
            is_active: None,
            target_muscles: None,
            intensity: None,
        },
        Exercise {
            id: 3,
            name: "Elevação de Braços".to_string(),
            duration: "3 séries".to_string(),
            reps: Some("10-12 repetições".to_string()),
            description: "Fortalece ombros e melhora a postura".to_string(),
            muscle_groups: strings(&["Deltoides", "Trapézio", "Romboides"]),
            safety_tips: strings(&[
                "Use pesos leves (1-2kg)",
                "Movimento controlado",
                "Mantenha o core ativado",
            ]),
            modifications: strings(&["Faça sem peso", "Alterne os braços", "Faça sentada"]),
            animation_3d: Some("arm-raises".to_string()),
            total_time: None,
            is_active: None,
            target_muscles: None,
            intensity: None,
        },
    ]
}

pub fn workouts(exercises: &[Exercise]) -> Vec<Workout> {
    let first = |n: usize| exercises.iter().take(n).cloned().collect::<Vec<_>>();
    vec![
        Workout {
            id: 1,
            title: "Yoga Pré-natal".to_string(),
            trimester: "1º Trimestre".to_string(),
            duration: "15 min".to_string(),
            description: "Exercícios de alongamento e respiração para relaxar o corpo e mente."
                .to_string(),
            video_url: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=400&h=300&fit=crop"
                .to_string(),
            workout_type: WorkoutType::Home,
            difficulty: Difficulty::Easy,
            exercises: first(2),
            ai_generated: false,
            personalized_for: None,
        },
        Workout {
            id: 2,
            title: "Caminhada Ativa".to_string(),
            trimester: "2º Trimestre".to_string(),
            duration: "20 min".to_string(),
            description: "Exercício cardiovascular leve para manter o condicionamento físico."
                .to_string(),
            video_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=300&fit=crop"
                .to_string(),
            workout_type: WorkoutType::Outdoor,
            difficulty: Difficulty::Easy,
            exercises: vec![],
            ai_generated: false,
            personalized_for: None,
        },
        Workout {
            id: 3,
            title: "Pilates Gestante".to_string(),
            trimester: "3º Trimestre".to_string(),
            duration: "25 min".to_string(),
            description: "Fortalecimento do core e preparação para o parto.".to_string(),
            video_url: "https://images.unsplash.com/photo-1506629905607-d9c297d3f5f9?w=400&h=300&fit=crop"
                .to_string(),
            workout_type: WorkoutType::Home,
            difficulty: Difficulty::Moderate,
            exercises: exercises.to_vec(),
            ai_generated: false,
            personalized_for: None,
        },
        Workout {
            id: 4,
            title: "Treino Pós-parto".to_string(),
            trimester: "Pós-parto".to_string(),
            duration: "30 min".to_string(),
            description: "Exercícios para recuperação e fortalecimento pós-parto.".to_string(),
            video_url: "https://images.unsplash.com/photo-1518611012118-696072aa579a?w=400&h=300&fit=crop"
                .to_string(),
            workout_type: WorkoutType::Home,
            difficulty: Difficulty::Moderate,
            exercises: exercises.to_vec(),
            ai_generated: false,
            personalized_for: None,
        },
        Workout {
            id: 5,
            title: "Treino com Bebê".to_string(),
            trimester: "Pós-parto".to_string(),
            duration: "20 min".to_string(),
            description: "Exercícios que você pode fazer junto com seu bebê.".to_string(),
            video_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=300&fit=crop"
                .to_string(),
            workout_type: WorkoutType::Home,
            difficulty: Difficulty::Easy,
            exercises: first(1),
            ai_generated: false,
            personalized_for: None,
        },
    ]
}

pub fn nutrition() -> Vec<NutritionItem> {
    vec![
        NutritionItem {
            id: 1,
            meal: "Café da Manhã".to_string(),
            title: "Bowl de Frutas com Granola".to_string(),
            ingredients: strings(&[
                "1 banana",
                "1/2 xícara de morangos",
                "2 colheres de granola",
                "1 colher de mel",
                "Iogurte natural",
            ]),
            instructions: "Corte as frutas, adicione o iogurte, granola e finalize com mel. \
                           Rico em fibras e vitaminas."
                .to_string(),
            calories: 320,
            macros: Macros {
                protein: 12,
                carbs: 45,
                fat: 8,
            },
        },
        NutritionItem {
            id: 2,
            meal: "Almoço".to_string(),
            title: "Salmão Grelhado com Quinoa".to_string(),
            ingredients: strings(&[
                "150g de salmão",
                "1/2 xícara de quinoa",
                "Brócolis",
                "Azeite",
                "Limão",
            ]),
            instructions: "Grelhe o salmão, cozinhe a quinoa e refogue o brócolis. \
                           Tempere com azeite e limão."
                .to_string(),
            calories: 480,
            macros: Macros {
                protein: 35,
                carbs: 30,
                fat: 22,
            },
        },
        NutritionItem {
            id: 3,
            meal: "Lanche".to_string(),
            title: "Smoothie Verde".to_string(),
            ingredients: strings(&[
                "1 maçã",
                "Folhas de espinafre",
                "1/2 abacate",
                "Água de coco",
                "Gengibre",
            ]),
            instructions: "Bata todos os ingredientes no liquidificador até ficar cremoso. \
                           Rico em ácido fólico."
                .to_string(),
            calories: 180,
            macros: Macros {
                protein: 4,
                carbs: 25,
                fat: 8,
            },
        },
    ]
}

/// Reminders the session starts with; their active flags are session state.
pub fn reminders() -> Vec<Reminder> {
    vec![
        Reminder {
            id: 1,
            title: "Beber água".to_string(),
            time: "A cada 2 horas".to_string(),
            kind: ReminderKind::Water,
            active: true,
        },
        Reminder {
            id: 2,
            title: "Vitamina pré-natal".to_string(),
            time: "08:00".to_string(),
            kind: ReminderKind::Medicine,
            active: true,
        },
        Reminder {
            id: 3,
            title: "Consulta médica".to_string(),
            time: "14:00 - Amanhã".to_string(),
            kind: ReminderKind::Appointment,
            active: true,
        },
        Reminder {
            id: 4,
            title: "Momento autocuidado".to_string(),
            time: "19:00".to_string(),
            kind: ReminderKind::SelfCare,
            active: false,
        },
    ]
}

/// Photos the progress timeline starts with.
pub fn sample_progress_photos() -> Vec<ProgressPhoto> {
    let photo = |id, date: &str, week, url: &str, notes: &str, weight| ProgressPhoto {
        id,
        date: date.to_string(),
        week,
        image: ImageHandle::new(url),
        notes: Some(notes.to_string()),
        weight: Some(weight),
    };
    vec![
        photo(
            1,
            "2024-01-15",
            12,
            "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=300&h=400&fit=crop",
            "Primeira foto do progresso!",
            63.2,
        ),
        photo(
            2,
            "2024-02-15",
            16,
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=300&h=400&fit=crop",
            "Barriguinha começando a aparecer",
            64.8,
        ),
        photo(
            3,
            "2024-03-15",
            20,
            "https://images.unsplash.com/photo-1506629905607-d9c297d3f5f9?w=300&h=400&fit=crop",
            "Metade da gestação!",
            66.5,
        ),
        photo(
            4,
            "2024-04-15",
            24,
            "https://images.unsplash.com/photo-1518611012118-696072aa579a?w=300&h=400&fit=crop",
            "Sentindo os movimentos do bebê",
            68.5,
        ),
    ]
}

pub fn articles() -> Vec<Article> {
    vec![
        Article {
            title: "Cuidados no 1º Trimestre".to_string(),
            category: "Saúde".to_string(),
            read_minutes: 5,
            summary: "Dicas essenciais para os primeiros meses de gestação".to_string(),
            body: "O primeiro trimestre é crucial para o desenvolvimento do bebê. É importante \
                   manter uma alimentação balanceada, tomar ácido fólico e evitar exercícios \
                   muito intensos. Consulte sempre seu médico antes de iniciar qualquer \
                   atividade física. Durante este período, é normal sentir enjoos matinais e \
                   fadiga. Mantenha-se hidratada e descanse sempre que possível."
                .to_string(),
        },
        Article {
            title: "Exercícios Seguros na Gravidez".to_string(),
            category: "Fitness".to_string(),
            read_minutes: 7,
            summary: "Como manter-se ativa de forma segura durante a gestação".to_string(),
            body: "Caminhadas, yoga pré-natal e pilates adaptado são ótimas opções. Evite \
                   exercícios de impacto e posições deitada de costas após o primeiro \
                   trimestre. Hidrate-se e pare ao sentir qualquer desconforto."
                .to_string(),
        },
        Article {
            title: "Preparação para o Parto".to_string(),
            category: "Parto".to_string(),
            read_minutes: 10,
            summary: "Tudo que você precisa saber para se preparar".to_string(),
            body: "Monte sua mala com antecedência, converse com sua equipe sobre o plano de \
                   parto e pratique exercícios de respiração. O fortalecimento do assoalho \
                   pélvico ajuda tanto no parto quanto na recuperação."
                .to_string(),
        },
    ]
}

pub fn playlists() -> Vec<Playlist> {
    vec![
        Playlist {
            title: "🧘 Relaxamento e Yoga".to_string(),
            track_count: 15,
            duration: "1h 2min".to_string(),
            tracks: strings(&[
                "Música Relaxante para Gestantes",
                "Respiração Profunda",
                "Meditação do Amanhecer",
            ]),
        },
        Playlist {
            title: "🚶 Caminhada Energizante".to_string(),
            track_count: 20,
            duration: "1h 15min".to_string(),
            tracks: strings(&["Passos Leves", "Ritmo do Parque"]),
        },
        Playlist {
            title: "👶 Sons para o Bebê".to_string(),
            track_count: 12,
            duration: "45min".to_string(),
            tracks: strings(&["Canção de Ninar", "Batidas do Coração"]),
        },
    ]
}

pub fn agenda() -> Vec<AgendaEvent> {
    vec![
        AgendaEvent {
            title: "Dr. Ana Silva - Obstetra".to_string(),
            when: "Amanhã, 14:00".to_string(),
            kind: AgendaEventKind::Appointment,
        },
        AgendaEvent {
            title: "Ultrassom Morfológico".to_string(),
            when: "Sexta-feira, 10:30".to_string(),
            kind: AgendaEventKind::Exam,
        },
    ]
}

/// All tracks across playlists, in playback order.
pub fn track_list(playlists: &[Playlist]) -> Vec<&str> {
    playlists
        .iter()
        .flat_map(|p| p.tracks.iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique_per_list() {
        let catalog = Catalog::seed();
        let mut ids: Vec<_> = catalog.workouts.iter().map(|w| w.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), catalog.workouts.len());
        assert_eq!(catalog.exercises.len(), 3);
        assert_eq!(catalog.nutrition.len(), 3);
    }

    #[test]
    fn test_lookup_helpers() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.workout(3).unwrap().title, "Pilates Gestante");
        assert_eq!(catalog.workout(3).unwrap().exercises.len(), 3);
        assert_eq!(catalog.exercise(2).unwrap().name, "Prancha Modificada");
        assert!(catalog.nutrition_item(99).is_none());
    }

    #[test]
    fn test_muscle_groups_are_distinct() {
        let catalog = Catalog::seed();
        let groups = catalog.muscle_groups();
        assert!(groups.contains(&"Core"));
        assert_eq!(groups.iter().filter(|g| **g == "Core").count(), 1);
    }

    #[test]
    fn test_sample_photos_are_in_week_order() {
        let photos = sample_progress_photos();
        assert_eq!(photos.len(), 4);
        assert!(photos.windows(2).all(|w| w[0].week < w[1].week));
    }

    #[test]
    fn test_track_list_starts_with_default_song() {
        let catalog = Catalog::seed();
        let tracks = track_list(&catalog.playlists);
        assert_eq!(tracks[0], "Música Relaxante para Gestantes");
        assert_eq!(tracks.len(), 7);
    }
}
