//! Music player and progress photos.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;
use crate::catalog::track_list;
use crate::ui::helpers::field_line;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

use super::ScreenView;

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn music_player_view(app: &App) -> ScreenView {
    let tracks = track_list(&app.catalog.playlists);
    let current = tracks.get(app.state.music.track).copied().unwrap_or("-");
    let status = if app.state.music.playing {
        "▶ Tocando"
    } else {
        "⏸ Pausado"
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", status), Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                current.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        heading("Playlists"),
    ];
    for playlist in &app.catalog.playlists {
        lines.push(Line::from(vec![
            Span::raw(format!("🎵 {} ", playlist.title)),
            Span::styled(
                format!("{} faixas · {}", playlist.track_count, playlist.duration),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
    }
    ScreenView::new(lines, "Controles")
}

pub fn progress_photos_view(app: &App) -> ScreenView {
    let photos = &app.state.progress_photos;
    let mut lines = vec![
        heading("Fotos de progresso"),
        field_line("Fotos salvas", photos.len().to_string()),
    ];
    if let Some(latest) = photos.first() {
        lines.push(field_line(
            "Última",
            format!("{} · semana {}", latest.date, latest.week),
        ));
    }
    ScreenView::new(lines, "Fotos")
}

pub fn photo_timeline_view(app: &App) -> ScreenView {
    let mut lines = vec![heading("Linha do tempo"), Line::default()];
    if app.state.progress_photos.is_empty() {
        lines.push(Line::from("Nenhuma foto ainda."));
    }
    for photo in &app.state.progress_photos {
        let mut spans = vec![Span::styled(
            format!("Semana {:>2} ", photo.week),
            Style::default().fg(COLOR_ACCENT),
        )];
        spans.push(Span::raw(photo.date.clone()));
        if let Some(weight) = photo.weight {
            spans.push(Span::raw(format!(" · {:.1} kg", weight)));
        }
        lines.push(Line::from(spans));
        if let Some(notes) = &photo.notes {
            lines.push(Line::from(Span::styled(
                format!("   {}", notes),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }
    ScreenView::new(lines, "")
}
