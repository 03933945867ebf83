//! Theme constants for the checkers GUI

use egui::Color32;

// Board squares
pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(232, 214, 178);
pub const DARK_SQUARE: Color32 = Color32::from_rgb(120, 36, 32);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(60, 40, 20);

// Pieces
pub const RED_PIECE: Color32 = Color32::from_rgb(200, 40, 40);
pub const RED_PIECE_RIM: Color32 = Color32::from_rgb(120, 20, 20);
pub const WHITE_PIECE: Color32 = Color32::from_rgb(245, 245, 240);
pub const WHITE_PIECE_RIM: Color32 = Color32::from_rgb(170, 170, 165);
pub const KING_CROWN: Color32 = Color32::from_rgb(230, 190, 60);

// Markers
pub const SELECTED_RING: Color32 = Color32::from_rgb(80, 200, 120);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn target_plain() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 200, 120, 120)
}

pub fn target_capture() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 90, 60, 150)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const SCORE_POSITIVE: Color32 = Color32::from_rgb(80, 200, 120);
pub const SCORE_NEGATIVE: Color32 = Color32::from_rgb(255, 70, 70);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const TARGET_RADIUS_RATIO: f32 = 0.15;
pub const LAST_MOVE_STROKE: f32 = 3.0;
