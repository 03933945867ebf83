//! Main application for the checkers GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::warn;

use crate::config::{CapturePolicy, GameConfig};
use crate::{Outcome, Pos, Side};
use super::board_view::{BoardView, Highlights};
use super::game_state::GameState;
use super::theme::*;

/// Main checkers application
pub struct CheckersApp {
    state: GameState,
    board_view: BoardView,
    show_eval: bool,
}

impl CheckersApp {
    /// Create the app for the given session settings
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_eval: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_eval, "Evaluation Panel (E)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let policy = match self.state.config.capture_policy {
                        CapturePolicy::Free => "Free play",
                        CapturePolicy::Forced => "Forced capture",
                    };
                    ui.label(format!("Hotseat - {}", policy));
                });
            });
        });
    }

    /// Render the side panel with game info and evaluation
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_pieces_card(ui);
                ui.add_space(10.0);

                if self.show_eval {
                    self.render_eval_card(ui);
                    ui.add_space(10.0);
                }

                self.render_actions_card(ui);

                if self.state.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●").size(20.0).color(RED_PIECE));
            ui.label(RichText::new("●").size(20.0).color(WHITE_PIECE));
            ui.add_space(4.0);
            ui.label(RichText::new("CHECKERS").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let side = self.state.current_turn;
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, side_color(side));

                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(side.name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    let status = if self.state.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.selected.is_some() {
                        ("Choose a destination", SELECTED_RING)
                    } else {
                        ("Select a piece", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Pieces and kings per side
    fn render_pieces_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PIECES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let board = &self.state.board;
            for side in [Side::Red, Side::White] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").size(18.0).color(side_color(side)));
                    ui.label(RichText::new(side.name()).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let counts =
                            format!("{} left, {} kings", board.left(side), board.kings(side));
                        ui.label(RichText::new(counts).size(12.0).color(TEXT_SECONDARY));
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    /// Material and heuristic scores (White's perspective)
    fn render_eval_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("EVALUATION (WHITE +)").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let material = self.state.material();
            let heuristic = self.state.heuristic();

            ui.horizontal(|ui| {
                ui.label(RichText::new("Material").size(12.0).color(TEXT_SECONDARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{:+}", material))
                            .size(16.0)
                            .strong()
                            .color(score_color(material as f64)),
                    );
                });
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Heuristic").size(12.0).color(TEXT_SECONDARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{:+.2}", heuristic))
                            .size(16.0)
                            .strong()
                            .color(score_color(heuristic)),
                    );
                });
            });

            ui.add_space(4.0);
            let weights = self.state.config.weights.0;
            ui.label(
                RichText::new(format!(
                    "weights {} {} {} {} {}",
                    weights[0], weights[1], weights[2], weights[3], weights[4]
                ))
                .size(10.0)
                .color(TEXT_MUTED),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("↩ Undo").clicked() {
                    self.state.undo();
                }
                if ui.button("New Game").clicked() {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Ply {}", self.state.board.turns()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_game_over_card(&self, ui: &mut egui::Ui) {
        let text = match self.state.outcome {
            Outcome::Won(side) => format!("{} WINS!", side.name().to_uppercase()),
            Outcome::Draw => "DRAW".to_string(),
            Outcome::InProgress => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(text).size(18.0).strong().color(TEXT_PRIMARY));
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let targets: Vec<(Pos, bool)> = self
                .state
                .selected
                .as_ref()
                .map(|(_, moves)| {
                    moves
                        .iter()
                        .map(|(pos, captured)| (*pos, !captured.is_empty()))
                        .collect()
                })
                .unwrap_or_default();

            let highlights = Highlights {
                selected: self.state.selected.as_ref().map(|(piece, _)| piece.pos()),
                targets: &targets,
                last_move: self.state.last_move,
            };

            let clicked = self
                .board_view
                .show(ui, &self.state.board, &highlights, self.state.is_over());

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.select(pos) {
                    warn!(?pos, %msg, "rejected input");
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // E - Toggle evaluation panel
            if i.key_pressed(egui::Key::E) {
                self.show_eval = !self.show_eval;
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }

            // Escape - drop the selected piece
            if i.key_pressed(egui::Key::Escape) {
                self.state.selected = None;
            }
        });
    }
}

fn side_color(side: Side) -> egui::Color32 {
    match side {
        Side::Red => RED_PIECE,
        Side::White => WHITE_PIECE,
    }
}

fn score_color(score: f64) -> egui::Color32 {
    if score > 0.0 {
        SCORE_POSITIVE
    } else if score < 0.0 {
        SCORE_NEGATIVE
    } else {
        TEXT_PRIMARY
    }
}

impl eframe::App for CheckersApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
