use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of the movement a segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovementId(Uuid);

impl MovementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MovementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A straight-line movement step: constant velocity held for a duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectilinearMotion {
    pub velocity: [f64; 3],
    pub duration: f64,
    pub parent: MovementId,
}

/// A pause step: the object holds its position for a duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaitMotion {
    pub duration: f64,
    pub parent: MovementId,
}

/// One step of a movement. The set of segment kinds is closed, so a
/// consumer matching on it handles every variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MotionSegment {
    Rectilinear(RectilinearMotion),
    Wait(WaitMotion),
}

impl MotionSegment {
    pub fn parent(&self) -> MovementId {
        match self {
            MotionSegment::Rectilinear(motion) => motion.parent,
            MotionSegment::Wait(motion) => motion.parent,
        }
    }

    pub fn duration(&self) -> f64 {
        match self {
            MotionSegment::Rectilinear(motion) => motion.duration,
            MotionSegment::Wait(motion) => motion.duration,
        }
    }
}

/// A named, ordered sequence of motion segments applied to a simulated
/// object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: MovementId,
    pub name: String,
    pub enabled: bool,
    pub segments: Vec<MotionSegment>,
}

impl Movement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MovementId::new(),
            name: name.into(),
            enabled: true,
            segments: Vec::new(),
        }
    }

    pub fn with_segment(mut self, segment: MotionSegment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn total_duration(&self) -> f64 {
        self.segments.iter().map(MotionSegment::duration).sum()
    }
}
