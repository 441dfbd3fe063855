//! Timeline list container
//!
//! Builds one row per segment of a movement, keeps the index-to-row
//! mapping, and relays row notifications as [`TimelineEvent`]s so the
//! movement document can be updated by whoever owns the receiving end.

use crate::motion::{MotionSegment, Movement};
use crate::ui::components::{RectilinearRow, WaitRow};
use crate::ui::events::TimelineEvent;
use crate::ui::icons::IconSet;
use crate::ui::numeric::NumericFormat;
use crate::ui::theme::Theme;
use crossbeam_channel::Sender;

pub enum TimelineRow {
    Rectilinear(RectilinearRow),
    Wait(WaitRow),
}

impl TimelineRow {
    pub fn index(&self) -> usize {
        match self {
            TimelineRow::Rectilinear(row) => row.index(),
            TimelineRow::Wait(row) => row.index(),
        }
    }

    fn show(&mut self, ui: &mut egui::Ui, theme: &Theme, icons: &IconSet) {
        match self {
            TimelineRow::Rectilinear(row) => row.show(ui, theme, icons),
            TimelineRow::Wait(row) => row.show(ui, theme, icons),
        }
    }
}

pub struct Timeline {
    rows: Vec<TimelineRow>,
}

impl Timeline {
    /// Build rows for every segment of the movement, wired to forward
    /// change and delete notifications on `events`.
    pub fn for_movement(
        movement: &Movement,
        events: &Sender<TimelineEvent>,
        format: NumericFormat,
    ) -> Self {
        let rows = movement
            .segments
            .iter()
            .enumerate()
            .map(|(index, segment)| match segment {
                MotionSegment::Rectilinear(motion) => {
                    let mut row = RectilinearRow::new(index, motion).with_format(format);
                    let tx = events.clone();
                    row.on_changed(move |index, motion| {
                        let _ = tx.send(TimelineEvent::SegmentChanged {
                            index,
                            segment: MotionSegment::Rectilinear(motion),
                        });
                    });
                    let tx = events.clone();
                    row.on_deleted(move |index, motion| {
                        let _ = tx.send(TimelineEvent::SegmentDeleted {
                            index,
                            segment: MotionSegment::Rectilinear(motion),
                        });
                    });
                    TimelineRow::Rectilinear(row)
                }
                MotionSegment::Wait(motion) => {
                    let mut row = WaitRow::new(index, motion).with_format(format);
                    let tx = events.clone();
                    row.on_changed(move |index, motion| {
                        let _ = tx.send(TimelineEvent::SegmentChanged {
                            index,
                            segment: MotionSegment::Wait(motion),
                        });
                    });
                    let tx = events.clone();
                    row.on_deleted(move |index, motion| {
                        let _ = tx.send(TimelineEvent::SegmentDeleted {
                            index,
                            segment: MotionSegment::Wait(motion),
                        });
                    });
                    TimelineRow::Wait(row)
                }
            })
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme, icons: &IconSet) {
        for row in &mut self.rows {
            row.show(ui, theme, icons);
            ui.add_space(theme.spacing_sm);
        }
    }
}
