//! Rectilinear motion row
//!
//! One timeline entry for a straight-line segment: velocity X/Y/Z and
//! duration fields, a decorative clock, and a delete button. Field text is
//! sanitized before every parse, and a freshly built segment value is
//! reported through the registered handlers. Text that still fails to parse
//! after sanitization is logged and the edit is dropped silently.

use crate::motion::{MovementId, RectilinearMotion};
use crate::ui::icons::{Icon, IconSet};
use crate::ui::numeric::{self, NumericFormat};
use crate::ui::theme::Theme;
use egui::{self, RichText, WidgetInfo, WidgetType};
use tracing::debug;

const FIELD_WIDTH: f32 = 56.0;

pub struct RectilinearRow {
    index: usize,
    parent: MovementId,
    x_text: String,
    y_text: String,
    z_text: String,
    duration_text: String,
    format: NumericFormat,
    changed_handlers: Vec<Box<dyn FnMut(usize, RectilinearMotion)>>,
    deleted_handlers: Vec<Box<dyn FnMut(usize, RectilinearMotion)>>,
}

impl RectilinearRow {
    /// Build a row pre-filled from the segment value. The emitted values
    /// always carry the segment's parent movement reference.
    pub fn new(index: usize, motion: &RectilinearMotion) -> Self {
        Self {
            index,
            parent: motion.parent,
            x_text: numeric::format_value(motion.velocity[0]),
            y_text: numeric::format_value(motion.velocity[1]),
            z_text: numeric::format_value(motion.velocity[2]),
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

    /// Register a handler for edits that produced a valid segment value.
    pub fn on_changed(&mut self, handler: impl FnMut(usize, RectilinearMotion) + 'static) {
        self.changed_handlers.push(Box::new(handler));
    }

    /// Register a handler for delete clicks.
    pub fn on_deleted(&mut self, handler: impl FnMut(usize, RectilinearMotion) + 'static) {
        self.deleted_handlers.push(Box::new(handler));
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme, icons: &IconSet) {
        let mut edited = false;
        let mut delete_clicked = false;

        ui.horizontal(|ui| {
            ui.label(RichText::new("Rect").strong().color(theme.text_primary));
            ui.label(RichText::new("Vel:").color(theme.text_secondary));

            edited |= numeric_field(
                ui,
                theme,
                &self.format,
                &mut self.x_text,
                format!("Velocity X (segment {})", self.index),
            );
            ui.label(RichText::new("X").color(theme.text_muted));

            edited |= numeric_field(
                ui,
                theme,
                &self.format,
                &mut self.y_text,
                format!("Velocity Y (segment {})", self.index),
            );
            ui.label(RichText::new("Y").color(theme.text_muted));

            edited |= numeric_field(
                ui,
                theme,
                &self.format,
                &mut self.z_text,
                format!("Velocity Z (segment {})", self.index),
            );
            ui.label(RichText::new("Z").color(theme.text_muted));

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

                // Decorative time marker, never interactive.
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
        self.sanitize_fields();
        match self.current_motion() {
            Some(motion) => {
                for handler in &mut self.changed_handlers {
                    handler(self.index, motion);
                }
            }
            None => debug!(
                index = self.index,
                "invalid number in a rectilinear motion field, edit not applied"
            ),
        }
    }

    pub(crate) fn apply_delete(&mut self) {
        self.sanitize_fields();
        match self.current_motion() {
            Some(motion) => {
                for handler in &mut self.deleted_handlers {
                    handler(self.index, motion);
                }
            }
            None => debug!(
                index = self.index,
                "invalid number in a rectilinear motion field, delete not reported"
            ),
        }
    }

    fn sanitize_fields(&mut self) {
        numeric::sanitize(&mut self.x_text);
        numeric::sanitize(&mut self.y_text);
        numeric::sanitize(&mut self.z_text);
        numeric::sanitize(&mut self.duration_text);
    }

    /// Rebuild the segment value from the current field text.
    fn current_motion(&self) -> Option<RectilinearMotion> {
        Some(RectilinearMotion {
            velocity: [
                self.format.parse(&self.x_text)?,
                self.format.parse(&self.y_text)?,
                self.format.parse(&self.z_text)?,
            ],
            duration: self.format.parse(&self.duration_text)?,
            parent: self.parent,
        })
    }
}

/// A single bounded numeric field. Returns whether the text changed this
/// frame. Text that does not currently parse is drawn in the invalid color.
pub(crate) fn numeric_field(
    ui: &mut egui::Ui,
    theme: &Theme,
    format: &NumericFormat,
    text: &mut String,
    label: String,
) -> bool {
    let valid = format.parse(text).is_some();
    let mut edit = egui::TextEdit::singleline(text)
        .desired_width(FIELD_WIDTH)
        .font(egui::TextStyle::Monospace)
        .margin(egui::Margin::symmetric(6.0, 4.0));
    if !valid {
        edit = edit.text_color(theme.field_invalid);
    }
    let response = ui.add(edit);
    response.widget_info(move || WidgetInfo::labeled(WidgetType::TextEdit, true, &label));
    response.changed()
}
