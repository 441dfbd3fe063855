mod document;
mod types;

pub use document::MovementDocument;
pub use types::{MotionSegment, Movement, MovementId, RectilinearMotion, WaitMotion};
