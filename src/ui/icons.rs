//! Icon resolution for timeline rows
//!
//! Rows receive an `IconSet` instead of reaching for a fixed asset path, so
//! the hosting application decides what its icons look like.

/// Semantic icons used by timeline rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Trash,
    Clock,
}

/// Maps semantic icons to the glyphs rendered on buttons.
#[derive(Debug, Clone)]
pub struct IconSet {
    trash: String,
    clock: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            trash: "🗑".to_string(),
            clock: "🕓".to_string(),
        }
    }
}

impl IconSet {
    pub fn glyph(&self, icon: Icon) -> &str {
        match icon {
            Icon::Trash => &self.trash,
            Icon::Clock => &self.clock,
        }
    }

    /// Override a single glyph, keeping the rest of the set.
    pub fn with_glyph(mut self, icon: Icon, glyph: impl Into<String>) -> Self {
        match icon {
            Icon::Trash => self.trash = glyph.into(),
            Icon::Clock => self.clock = glyph.into(),
        }
        self
    }
}
