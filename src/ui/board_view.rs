//! Board rendering for the checkers GUI

use crate::{Board, Piece, Pos, Side, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area (squares only, margin excluded)
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

/// What the board needs to highlight this frame
pub struct Highlights<'a> {
    pub selected: Option<Pos>,
    /// Destinations of the selected piece, flagged when they capture
    pub targets: &'a [(Pos, bool)],
    pub last_move: Option<(Pos, Pos)>,
}

impl BoardView {
    /// Render the board and return the clicked square if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        highlights: &Highlights<'_>,
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());

        self.board_rect = response.rect.shrink(BOARD_MARGIN);

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BORDER);
        self.draw_squares(&painter);
        self.draw_coordinates(&painter);

        if let Some((from, to)) = highlights.last_move {
            self.draw_last_move(&painter, from, to);
        }

        self.draw_pieces(&painter, board, highlights.selected);

        for &(pos, captures) in highlights.targets {
            self.draw_target(&painter, pos, captures);
        }

        if game_over || !response.clicked() {
            return None;
        }

        response
            .interact_pointer_pos()
            .and_then(|pointer| self.screen_to_board(pointer))
    }

    /// Draw the 8x8 checkered squares
    fn draw_squares(&self, painter: &Painter) {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(row, col);
                let color = if pos.is_dark() { DARK_SQUARE } else { LIGHT_SQUARE };
                painter.rect_filled(self.square_rect(pos), CornerRadius::ZERO, color);
            }
        }
    }

    /// Draw row/column indices along the margin
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        let half = BOARD_MARGIN * 0.5;

        for i in 0..BOARD_SIZE {
            let offset = (i as f32 + 0.5) * self.cell_size;

            let top = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y - half);
            painter.text(top, egui::Align2::CENTER_CENTER, i, font.clone(), TEXT_SECONDARY);

            let left = Pos2::new(self.board_rect.min.x - half, self.board_rect.min.y + offset);
            painter.text(left, egui::Align2::CENTER_CENTER, i, font.clone(), TEXT_SECONDARY);
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board, selected: Option<Pos>) {
        for side in [Side::Red, Side::White] {
            for piece in board.pieces(side) {
                self.draw_piece(painter, &piece, selected == Some(piece.pos()));
            }
        }
    }

    /// Draw a single piece with rim, optional crown and selection ring
    fn draw_piece(&self, painter: &Painter, piece: &Piece, selected: bool) {
        let center = self.board_to_screen(piece.pos());
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        let (fill, rim) = match piece.side {
            Side::Red => (RED_PIECE, RED_PIECE_RIM),
            Side::White => (WHITE_PIECE, WHITE_PIECE_RIM),
        };

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius * 0.8, Stroke::new(radius * 0.08, rim));

        if piece.king {
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                "K",
                egui::FontId::proportional(radius),
                KING_CROWN,
            );
        }

        if selected {
            painter.circle_stroke(center, radius + 3.0, Stroke::new(3.0, SELECTED_RING));
        }
    }

    fn draw_target(&self, painter: &Painter, pos: Pos, captures: bool) {
        let center = self.board_to_screen(pos);
        let color = if captures { target_capture() } else { target_plain() };
        painter.circle_filled(center, self.cell_size * TARGET_RADIUS_RATIO, color);
    }

    fn draw_last_move(&self, painter: &Painter, from: Pos, to: Pos) {
        let stroke = Stroke::new(LAST_MOVE_STROKE, LAST_MOVE_MARKER);
        painter.rect_stroke(
            self.square_rect(from).shrink(2.0),
            CornerRadius::ZERO,
            stroke,
            egui::StrokeKind::Inside,
        );
        painter.rect_stroke(
            self.square_rect(to).shrink(2.0),
            CornerRadius::ZERO,
            stroke,
            egui::StrokeKind::Inside,
        );
    }

    fn square_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    /// Convert board position to the screen center of its square
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.square_rect(pos).center()
    }
}
