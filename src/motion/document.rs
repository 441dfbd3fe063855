use super::types::{MotionSegment, Movement, MovementId};
use crate::{FlowcaseError, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// The in-memory movement list the timeline widgets edit. Mutations are
/// addressed by list index (movements) or parent id plus segment index
/// (segments), matching the notifications the rows emit.
#[derive(Debug, Clone)]
pub struct MovementDocument {
    movements: Arc<RwLock<Vec<Movement>>>,
}

impl MovementDocument {
    pub fn new() -> Self {
        Self {
            movements: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn add(&self, movement: Movement) {
        self.movements.write().push(movement);
    }

    pub fn get(&self, index: usize) -> Option<Movement> {
        self.movements.read().get(index).cloned()
    }

    pub fn get_all(&self) -> Vec<Movement> {
        self.movements.read().clone()
    }

    pub fn len(&self) -> usize {
        self.movements.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.read().is_empty()
    }

    pub fn clear(&self) {
        self.movements.write().clear();
    }

    pub fn set_enabled(&self, index: usize, enabled: bool) -> Result<()> {
        let mut movements = self.movements.write();
        let movement = movements.get_mut(index).ok_or_else(|| {
            FlowcaseError::DocumentError(format!("no movement at index {index}"))
        })?;
        movement.enabled = enabled;
        Ok(())
    }

    pub fn remove_movement(&self, index: usize) -> Result<Movement> {
        let mut movements = self.movements.write();
        if index >= movements.len() {
            return Err(FlowcaseError::DocumentError(format!(
                "no movement at index {index}"
            )));
        }
        Ok(movements.remove(index))
    }

    pub fn push_segment(&self, parent: MovementId, segment: MotionSegment) -> Result<()> {
        let mut movements = self.movements.write();
        let movement = Self::find_mut(&mut movements, parent)?;
        movement.segments.push(segment);
        Ok(())
    }

    pub fn replace_segment(
        &self,
        parent: MovementId,
        index: usize,
        segment: MotionSegment,
    ) -> Result<()> {
        let mut movements = self.movements.write();
        let movement = Self::find_mut(&mut movements, parent)?;
        let slot = movement.segments.get_mut(index).ok_or_else(|| {
            FlowcaseError::DocumentError(format!(
                "segment index {index} out of range for movement '{}'",
                movement.name
            ))
        })?;
        *slot = segment;
        Ok(())
    }

    pub fn remove_segment(&self, parent: MovementId, index: usize) -> Result<MotionSegment> {
        let mut movements = self.movements.write();
        let movement = Self::find_mut(&mut movements, parent)?;
        if index >= movement.segments.len() {
            return Err(FlowcaseError::DocumentError(format!(
                "segment index {index} out of range for movement '{}'",
                movement.name
            )));
        }
        Ok(movement.segments.remove(index))
    }

    fn find_mut(movements: &mut Vec<Movement>, parent: MovementId) -> Result<&mut Movement> {
        movements
            .iter_mut()
            .find(|m| m.id == parent)
            .ok_or_else(|| FlowcaseError::DocumentError(format!("no movement with id {parent}")))
    }
}

impl Default for MovementDocument {
    fn default() -> Self {
        Self::new()
    }
}
