use crate::motion::MotionSegment;
use crossbeam_channel::{bounded, Receiver, Sender};

/// Notifications produced by timeline rows. The index tags the position of
/// the originating row in its list; segment payloads carry the parent
/// movement reference the row was constructed with.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineEvent {
    SegmentChanged { index: usize, segment: MotionSegment },
    SegmentDeleted { index: usize, segment: MotionSegment },
    MovementUsed { index: usize, enabled: bool },
    MovementDeleted { index: usize },
}

pub struct TimelineChannels {
    pub event_tx: Sender<TimelineEvent>,
    pub event_rx: Receiver<TimelineEvent>,
}

impl TimelineChannels {
    pub fn new(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(capacity);
        Self { event_tx, event_rx }
    }
}

impl Default for TimelineChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
