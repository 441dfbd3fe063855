//! Wait motion row
//!
//! One timeline entry for a pause segment: a single duration field with the
//! same sanitize-then-parse policy as the rectilinear row, scoped to one
//! field. Delete runs the same sanitized path, so the reported value matches
//! what an edit of the same text would have produced.

use crate::motion::{MovementId, WaitMotion};
use crate::ui::components::rectilinear_row::numeric_field;
use crate::ui::icons::{Icon, IconSet};
use crate::ui::numeric::{self, NumericFormat};
use crate::ui::theme::Theme;
use egui::{self, RichText, WidgetInfo, WidgetType};
use tracing::debug;

pub struct WaitRow {
    index: usize,
    parent: MovementId,
    duration_text: String,
    format: NumericFormat,
    changed_handlers: Vec<Box<dyn FnMut(usize, WaitMotion)>>,
    deleted_handlers: Vec<Box<dyn FnMut(usize, WaitMotion)>>,
}

impl WaitRow {
    pub fn new(index: usize, motion: &WaitMotion) -> Self {
        Self {
            index,
            parent: motion.parent,
            duration_text: numeric::format_value(motion.duration),
            format: NumericFormat::default(),
            changed_handlers: Vec::new(),
            deleted_handlers: Vec::new(),
        }
    }

    pub fn with_format(mut self, format: NumericFormat) -> Self {
        self.format = format;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn on_changed(&mut self, handler: impl FnMut(usize, WaitMotion) + 'static) {
        self.changed_handlers.push(Box::new(handler));
    }

    pub fn on_deleted(&mut self, handler: impl FnMut(usize, WaitMotion) + 'static) {
        self.deleted_handlers.push(Box::new(handler));
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme, icons: &IconSet) {
        let mut edited = false;
        let mut delete_clicked = false;

        ui.horizontal(|ui| {
            ui.label(RichText::new("Wait").strong().color(theme.text_primary));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let delete = ui.button(icons.glyph(Icon::Trash));
                let label = format!("Delete segment {}", self.index);
                delete.widget_info(move || WidgetInfo::labeled(WidgetType::Button, true, &label));
                if delete.clicked() {
                    delete_clicked = true;
                }
                delete.on_hover_text("Delete segment");

                edited |= numeric_field(
                    ui,
                    theme,
                    &self.format,
                    &mut self.duration_text,
                    format!("Duration (segment {})", self.index),
                );

                ui.add_enabled(false, egui::Button::new(icons.glyph(Icon::Clock)));
            });
        });

        if edited {
            self.apply_change();
        }
        if delete_clicked {
            self.apply_delete();
        }
    }

    pub(crate) fn apply_change(&mut self) {
        numeric::sanitize(&mut self.duration_text);
        match self.current_motion() {
            Some(motion) => {
                for handler in &mut self.changed_handlers {
                    handler(self.index, motion);
                }
            }
            None => debug!(
                index = self.index,
                "invalid number in a wait motion field, edit not applied"
            ),
        }
    }

    pub(crate) fn apply_delete(&mut self) {
        numeric::sanitize(&mut self.duration_text);
        match self.current_motion() {
            Some(motion) => {
                for handler in &mut self.deleted_handlers {
                    handler(self.index, motion);
                }
            }
            None => debug!(
                index = self.index,
                "invalid number in a wait motion field, delete not reported"
            ),
        }
    }

    fn current_motion(&self) -> Option<WaitMotion> {
        Some(WaitMotion {
            duration: self.format.parse(&self.duration_text)?,
            parent: self.parent,
        })
    }
}
