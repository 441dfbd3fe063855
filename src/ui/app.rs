//! Main application struct and eframe integration
//!
//! This module contains the FlowcaseApp that implements eframe::App.

use crate::config::AppConfig;
use crate::ui::icons::IconSet;
use crate::ui::numeric;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};
use tracing::info;

/// Main Flowcase application
pub struct FlowcaseApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
    /// Icon glyphs handed to row widgets
    icons: IconSet,
}

impl FlowcaseApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let theme = if config.dark_theme {
            Theme::dark()
        } else {
            Theme::light()
        };
        theme.apply(&cc.egui_ctx);

        Self {
            state: AppState::with_config(&config),
            theme,
            icons: IconSet::default(),
        }
    }

    /// Show the top header bar
    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Flowcase")
                            .size(20.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );

                    ui.label(
                        RichText::new("Case Motion Editor")
                            .size(14.0)
                            .color(self.theme.text_muted),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mut dismissed = false;
                        if let Some(error) = &self.state.last_error {
                            if ui.button("✖").on_hover_text("Dismiss").clicked() {
                                dismissed = true;
                            }
                            ui.label(RichText::new(error).size(12.0).color(self.theme.error));
                        } else {
                            ui.label(
                                RichText::new(format!("{} movements", self.state.document.len()))
                                    .size(12.0)
                                    .color(self.theme.text_muted),
                            );
                        }
                        if dismissed {
                            self.state.last_error = None;
                        }
                    });
                });
            });
    }

    /// Show the movement list on the side
    fn show_movement_panel(&mut self, ctx: &egui::Context) {
        SidePanel::left("movements")
            .resizable(true)
            .default_width(280.0)
            .min_width(220.0)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("Movements")
                        .size(16.0)
                        .strong()
                        .color(self.theme.text_primary),
                );
                ui.add_space(self.theme.spacing_sm);

                ui.horizontal(|ui| {
                    let entry = egui::TextEdit::singleline(&mut self.state.new_movement_name)
                        .hint_text("Movement name")
                        .desired_width(ui.available_width() - 60.0);
                    ui.add(entry);
                    if ui.button("Add").clicked() {
                        self.state.add_movement();
                    }
                });

                ui.separator();

                let movements = self.state.document.get_all();
                let selected = self.state.selected;
                let mut clicked = None;

                for (index, (movement, row)) in movements
                    .iter()
                    .zip(self.state.movement_rows.iter_mut())
                    .enumerate()
                {
                    ui.horizontal(|ui| {
                        let name = if movement.enabled {
                            RichText::new(&movement.name).color(self.theme.text_primary)
                        } else {
                            RichText::new(&movement.name)
                                .color(self.theme.text_muted)
                                .strikethrough()
                        };
                        if ui.selectable_label(selected == Some(index), name).clicked() {
                            clicked = Some(index);
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                row.show(ui, &self.icons);
                            },
                        );
                    });
                }

                if let Some(index) = clicked {
                    self.state.select_movement(index);
                }
            });
    }

    /// Show the timeline of the selected movement
    fn show_timeline_panel(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                let Some(movement) = self
                    .state
                    .selected
                    .and_then(|index| self.state.document.get(index))
                else {
                    self.show_empty_state(ui);
                    return;
                };

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&movement.name)
                            .size(16.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!(
                                "total {} s",
                                numeric::format_value(movement.total_duration())
                            ))
                            .size(12.0)
                            .color(self.theme.text_muted),
                        );
                    });
                });

                ui.horizontal(|ui| {
                    if ui.button("Add rectilinear").clicked() {
                        self.state.add_rectilinear_segment();
                    }
                    if ui.button("Add wait").clicked() {
                        self.state.add_wait_segment();
                    }
                });

                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        match self.state.timeline.as_mut() {
                            Some(timeline) if !timeline.is_empty() => {
                                timeline.show(ui, &self.theme, &self.icons);
                            }
                            _ => {
                                ui.add_space(self.theme.spacing);
                                ui.label(
                                    RichText::new("No segments yet. Add one above.")
                                        .color(self.theme.text_muted),
                                );
                            }
                        }
                    });
            });
    }

    fn show_empty_state(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);
            ui.label(
                RichText::new("No movement selected")
                    .size(18.0)
                    .color(self.theme.text_primary),
            );
            ui.add_space(self.theme.spacing_sm);
            ui.label(
                RichText::new("Create or select a movement to edit its timeline.")
                    .size(13.0)
                    .color(self.theme.text_muted),
            );
        });
    }
}

impl eframe::App for FlowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply last frame's row notifications before rendering
        self.state.poll_events();
        self.state.rebuild_rows_if_dirty();

        self.show_header(ctx);
        self.show_movement_panel(ctx);
        self.show_timeline_panel(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Flowcase shutting down");
    }
}
