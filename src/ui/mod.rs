//! GUI implementation with egui/eframe
//!
//! This module provides the desktop user interface for Flowcase using the
//! eframe framework.

mod app;
pub mod components;
mod events;
mod icons;
pub mod numeric;
mod state;
mod theme;

use crate::config::AppConfig;

pub use app::FlowcaseApp;
pub use events::{TimelineChannels, TimelineEvent};
pub use icons::{Icon, IconSet};
pub use state::AppState;
pub use theme::Theme;

/// Run the Flowcase application
pub fn run(config: AppConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 420.0])
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Flowcase",
        options,
        Box::new(move |cc| Ok(Box::new(FlowcaseApp::new(cc, config)))),
    )
}
