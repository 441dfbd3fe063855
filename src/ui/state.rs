//! Application state management
//!
//! The central state for the Flowcase UI: the movement document, the
//! retained row widgets, and the event channel the rows report through.
//! Events are drained once per frame and applied to the document.

use crate::config::AppConfig;
use crate::motion::{MotionSegment, MovementDocument, RectilinearMotion, WaitMotion};
use crate::ui::components::{MovementActions, Timeline};
use crate::ui::events::{TimelineChannels, TimelineEvent};
use crate::ui::numeric::NumericFormat;
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};

pub struct AppState {
    /// The movement document the timeline edits.
    pub document: MovementDocument,

    /// Index of the movement shown in the timeline panel.
    pub selected: Option<usize>,

    /// One use/delete row per movement list entry.
    pub movement_rows: Vec<MovementActions>,

    /// Rows for the selected movement's segments.
    pub timeline: Option<Timeline>,

    /// Text buffer for the new-movement entry.
    pub new_movement_name: String,

    /// Last document error, shown in the header.
    pub last_error: Option<String>,

    numeric: NumericFormat,
    event_tx: Sender<TimelineEvent>,
    event_rx: Receiver<TimelineEvent>,
    rows_dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        let channels = TimelineChannels::new(config.event_capacity);
        Self {
            document: MovementDocument::new(),
            selected: None,
            movement_rows: Vec::new(),
            timeline: None,
            new_movement_name: String::new(),
            last_error: None,
            numeric: config.numeric,
            event_tx: channels.event_tx,
            event_rx: channels.event_rx,
            rows_dirty: false,
        }
    }

    /// Add a movement named from the entry buffer, or with a generated
    /// name when the buffer is blank, and select it.
    pub fn add_movement(&mut self) {
        let name = self.new_movement_name.trim();
        let name = if name.is_empty() {
            format!("Movement {}", self.document.len() + 1)
        } else {
            name.to_string()
        };
        debug!(%name, "adding movement");
        self.document.add(crate::motion::Movement::new(name));
        self.new_movement_name.clear();
        self.selected = Some(self.document.len() - 1);
        self.rows_dirty = true;
    }

    pub fn select_movement(&mut self, index: usize) {
        if self.selected != Some(index) {
            self.selected = Some(index);
            self.rows_dirty = true;
        }
    }

    pub fn add_rectilinear_segment(&mut self) {
        self.add_segment(|parent| {
            MotionSegment::Rectilinear(RectilinearMotion {
                velocity: [0.0, 0.0, 0.0],
                duration: 1.0,
                parent,
            })
        });
    }

    pub fn add_wait_segment(&mut self) {
        self.add_segment(|parent| {
            MotionSegment::Wait(WaitMotion {
                duration: 1.0,
                parent,
            })
        });
    }

    fn add_segment(&mut self, build: impl FnOnce(crate::motion::MovementId) -> MotionSegment) {
        let Some(index) = self.selected else { return };
        let Some(movement) = self.document.get(index) else {
            return;
        };
        if let Err(err) = self.document.push_segment(movement.id, build(movement.id)) {
            warn!(%err, "failed to add a segment");
            self.last_error = Some(err.to_string());
            return;
        }
        self.rows_dirty = true;
    }

    /// Drain pending row notifications and apply them to the document.
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            if let Err(err) = self.apply_event(&event) {
                warn!(%err, "failed to apply a timeline event");
                self.last_error = Some(err.to_string());
            }
        }
    }

    fn apply_event(&mut self, event: &TimelineEvent) -> crate::Result<()> {
        match event {
            TimelineEvent::SegmentChanged { index, segment } => {
                self.document
                    .replace_segment(segment.parent(), *index, *segment)
            }
            TimelineEvent::SegmentDeleted { index, segment } => {
                self.document.remove_segment(segment.parent(), *index)?;
                self.rows_dirty = true;
                Ok(())
            }
            TimelineEvent::MovementUsed { index, enabled } => {
                self.document.set_enabled(*index, *enabled)
            }
            TimelineEvent::MovementDeleted { index } => {
                self.document.remove_movement(*index)?;
                if let Some(selected) = self.selected {
                    if selected == *index {
                        self.selected = None;
                    } else if selected > *index {
                        self.selected = Some(selected - 1);
                    }
                }
                self.rows_dirty = true;
                Ok(())
            }
        }
    }

    pub fn rebuild_rows_if_dirty(&mut self) {
        if self.rows_dirty {
            self.rebuild_rows();
        }
    }

    /// Rebuild the retained rows from the document. Called after structural
    /// changes; plain value edits keep the existing rows, whose field text
    /// is the source of truth while the user types.
    pub fn rebuild_rows(&mut self) {
        self.rows_dirty = false;
        let movements = self.document.get_all();

        self.movement_rows = movements
            .iter()
            .enumerate()
            .map(|(index, movement)| {
                let mut row = MovementActions::new(index, movement.enabled);
                let tx = self.event_tx.clone();
                row.on_use(move |index, enabled| {
                    let _ = tx.send(TimelineEvent::MovementUsed { index, enabled });
                });
                let tx = self.event_tx.clone();
                row.on_delete(move |index| {
                    let _ = tx.send(TimelineEvent::MovementDeleted { index });
                });
                row
            })
            .collect();

        self.timeline = self
            .selected
            .and_then(|index| movements.get(index))
            .map(|movement| Timeline::for_movement(movement, &self.event_tx, self.numeric));
    }
}
