//! Use/delete actions for one movement list entry
//!
//! A checkbox reporting whether the movement participates in the case, and
//! a delete button. Both report through registered handlers, tagged with the
//! row's list index.

use crate::ui::icons::{Icon, IconSet};
use egui::{self, WidgetInfo, WidgetType};

pub struct MovementActions {
    index: usize,
    checked: bool,
    use_handlers: Vec<Box<dyn FnMut(usize, bool)>>,
    delete_handlers: Vec<Box<dyn FnMut(usize)>>,
}

impl MovementActions {
    pub fn new(index: usize, checked: bool) -> Self {
        Self {
            index,
            checked,
            use_handlers: Vec::new(),
            delete_handlers: Vec::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Register a handler for checkbox toggles. Handlers receive the row
    /// index and the new checked state.
    pub fn on_use(&mut self, handler: impl FnMut(usize, bool) + 'static) {
        self.use_handlers.push(Box::new(handler));
    }

    /// Register a handler for delete clicks.
    pub fn on_delete(&mut self, handler: impl FnMut(usize) + 'static) {
        self.delete_handlers.push(Box::new(handler));
    }

    pub fn show(&mut self, ui: &mut egui::Ui, icons: &IconSet) {
        let mut toggled = false;
        let mut delete_clicked = false;

        ui.horizontal(|ui| {
            let checkbox = ui.checkbox(&mut self.checked, "Use");
            let label = format!("Use movement {}", self.index);
            checkbox.widget_info(move || {
                WidgetInfo::labeled(WidgetType::Checkbox, true, &label)
            });
            if checkbox.changed() {
                toggled = true;
            }

            let delete = ui.button(icons.glyph(Icon::Trash));
            let label = format!("Delete movement {}", self.index);
            delete.widget_info(move || WidgetInfo::labeled(WidgetType::Button, true, &label));
            if delete.clicked() {
                delete_clicked = true;
            }
            delete.on_hover_text("Delete movement");
        });

        if toggled {
            let checked = self.checked;
            for handler in &mut self.use_handlers {
                handler(self.index, checked);
            }
        }

        if delete_clicked {
            for handler in &mut self.delete_handlers {
                handler(self.index);
            }
        }
    }
}
