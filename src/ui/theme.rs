//! Color theme constants for the Mamãe Fit UI.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Borders of panels and dialogs
pub const COLOR_BORDER: Color = Color::Rgb(120, 90, 110);

/// Brand rose for headings and the highlighted row
pub const COLOR_ACCENT: Color = Color::Rgb(236, 72, 153);

/// Secondary purple used for AI features
pub const COLOR_AI: Color = Color::Rgb(168, 85, 247);

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Progress bar fill
pub const COLOR_PROGRESS: Color = Color::Rgb(244, 114, 182);

// ============================================================================
// Status Colors
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_INFO: Color = Color::Cyan;

/// Background for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(25, 12, 28);
